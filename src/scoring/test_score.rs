//! Scoring of test results.

use serde::Serialize;
use tracing::debug;

use crate::config::TestConfiguration;
use crate::scoring::ScoreCard;

const DEFAULT_NAME: &str = "Test results";

/// The impact of test results on the grade.
///
/// The caller supplies the total, failed, and skipped counts; the passed
/// count is derived as `total - failed - skipped` without clamping, so
/// inconsistent inputs produce a negative passed count rather than an
/// error. The impact weights each count with the matching configuration
/// weight and sums the products with wrapping arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScore {
    #[serde(flatten)]
    card: ScoreCard,
    passed_size: i32,
    failed_size: i32,
    skipped_size: i32,
}

impl TestScore {
    /// Stable ID of the test results category.
    pub const ID: &'static str = "tests";

    /// Creates a score named "Test results" from the supplied counts.
    pub fn new(
        configuration: &TestConfiguration,
        total_count: i32,
        fail_count: i32,
        skip_count: i32,
    ) -> Self {
        Self::named(DEFAULT_NAME, configuration, total_count, fail_count, skip_count)
    }

    /// Creates a score with an explicit display name.
    pub fn named(
        display_name: impl Into<String>,
        configuration: &TestConfiguration,
        total_size: i32,
        failed_size: i32,
        skipped_size: i32,
    ) -> Self {
        let passed_size = total_size.wrapping_sub(failed_size).wrapping_sub(skipped_size);
        let impact = configuration
            .passed_impact()
            .wrapping_mul(passed_size)
            .wrapping_add(configuration.failure_impact().wrapping_mul(failed_size))
            .wrapping_add(configuration.skipped_impact().wrapping_mul(skipped_size));

        let score = Self {
            card: ScoreCard::new(Self::ID, display_name, impact),
            passed_size,
            failed_size,
            skipped_size,
        };
        debug!(
            "{}: {} passed, {} failed, {} skipped -> impact {}",
            score.display_name(),
            passed_size,
            failed_size,
            skipped_size,
            impact
        );
        score
    }

    /// Identity and impact shared by all categories.
    pub fn card(&self) -> &ScoreCard {
        &self.card
    }

    pub fn id(&self) -> &str {
        self.card.id()
    }

    pub fn display_name(&self) -> &str {
        self.card.display_name()
    }

    /// The signed point delta this category contributes to the grade.
    pub fn total_impact(&self) -> i32 {
        self.card.total_impact()
    }

    /// Number of passed tests, derived from the supplied counts.
    pub fn passed_size(&self) -> i32 {
        self.passed_size
    }

    /// Number of failed tests.
    pub fn failed_size(&self) -> i32 {
        self.failed_size
    }

    /// Number of skipped tests.
    pub fn skipped_size(&self) -> i32 {
        self.skipped_size
    }

    /// Total number of tests, recomputed from the stored counts.
    pub fn total_size(&self) -> i32 {
        self.passed_size
            .wrapping_add(self.failed_size)
            .wrapping_add(self.skipped_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn configuration() -> TestConfiguration {
        TestConfiguration::new("tests", "", "**/TEST-*.xml", "")
            .with_passed_impact(1)
            .with_failure_impact(-5)
            .with_skipped_impact(0)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_passed_size_is_derived_from_total() {
        let score = TestScore::new(&configuration(), 10, 2, 1);

        assert_eq!(score.passed_size(), 7);
        assert_eq!(score.failed_size(), 2);
        assert_eq!(score.skipped_size(), 1);
        assert_eq!(score.total_size(), 10);
    }

    #[test]
    fn test_impact_is_weighted_sum_of_counts() {
        let score = TestScore::new(&configuration(), 10, 2, 1);

        assert_eq!(score.total_impact(), -3);
    }

    #[test]
    fn test_zero_counts_produce_zero_impact() {
        let score = TestScore::new(&configuration(), 0, 0, 0);

        assert_eq!(score.passed_size(), 0);
        assert_eq!(score.total_size(), 0);
        assert_eq!(score.total_impact(), 0);
    }

    #[test]
    fn test_all_passed_counts_only_passed_weight() {
        let score = TestScore::new(&configuration(), 10, 0, 0);

        assert_eq!(score.passed_size(), 10);
        assert_eq!(score.total_impact(), 10);
    }

    #[test]
    fn test_inconsistent_counts_go_negative() {
        let score = TestScore::new(&configuration(), 1, 2, 0);

        assert_eq!(score.passed_size(), -1);
        assert_eq!(score.failed_size(), 2);
        assert_eq!(score.total_size(), 1);
    }

    #[test]
    fn test_default_display_name_and_id() {
        let score = TestScore::new(&configuration(), 0, 0, 0);

        assert_eq!(score.id(), TestScore::ID);
        assert_eq!(score.id(), "tests");
        assert_eq!(score.display_name(), "Test results");
    }

    #[test]
    fn test_named_overrides_display_name() {
        let score = TestScore::named("Module tests", &configuration(), 5, 0, 0);

        assert_eq!(score.display_name(), "Module tests");
        assert_eq!(score.id(), "tests");
    }

    #[test]
    fn test_impact_wraps_on_overflow() {
        let configuration = TestConfiguration::new("tests", "", "", "").with_passed_impact(i32::MAX);
        let score = TestScore::new(&configuration, 2, 0, 0);

        assert_eq!(score.total_impact(), i32::MAX.wrapping_mul(2));
    }

    #[test]
    fn test_equality_covers_name_counts_and_impact() {
        let first = TestScore::new(&configuration(), 10, 2, 1);
        let second = TestScore::new(&configuration(), 10, 2, 1);

        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
        assert_ne!(first, TestScore::named("Other", &configuration(), 10, 2, 1));
        assert_ne!(first, TestScore::new(&configuration(), 9, 2, 1));

        let reweighted = configuration().with_passed_impact(2);
        assert_ne!(first, TestScore::new(&reweighted, 10, 2, 1));
    }

    #[test]
    fn test_serializes_counts_and_card_fields() {
        let score = TestScore::new(&configuration(), 10, 2, 1);

        let json = serde_json::to_value(&score).expect("serialize score");
        assert_eq!(json["id"], "tests");
        assert_eq!(json["displayName"], "Test results");
        assert_eq!(json["totalImpact"], -3);
        assert_eq!(json["passedSize"], 7);
        assert_eq!(json["failedSize"], 2);
        assert_eq!(json["skippedSize"], 1);
    }
}
