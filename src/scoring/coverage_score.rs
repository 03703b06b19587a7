//! Scoring of code coverage percentages.

use serde::Serialize;
use tracing::debug;

use crate::config::CoverageConfiguration;
use crate::scoring::ScoreCard;

const DEFAULT_NAME: &str = "Code coverage results";

/// The impact of code coverage on the grade.
///
/// Only the covered percentage is stored; the missed percentage is
/// recomputed as `100 - covered` whenever it is read. Percentages above
/// 100 or below 0 are taken at face value, so the derived missed share
/// can go negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageScore {
    #[serde(flatten)]
    card: ScoreCard,
    covered_percentage: i32,
}

impl CoverageScore {
    /// Stable ID of the code coverage category.
    pub const ID: &'static str = "coverage";

    /// Creates a score named "Code coverage results" from the covered
    /// percentage.
    pub fn new(configuration: &CoverageConfiguration, covered_percentage: i32) -> Self {
        Self::named(DEFAULT_NAME, configuration, covered_percentage)
    }

    /// Creates a score with an explicit display name.
    pub fn named(
        display_name: impl Into<String>,
        configuration: &CoverageConfiguration,
        covered_percentage: i32,
    ) -> Self {
        let missed_percentage = 100i32.wrapping_sub(covered_percentage);
        let impact = configuration
            .covered_percentage_impact()
            .wrapping_mul(covered_percentage)
            .wrapping_add(
                configuration
                    .missed_percentage_impact()
                    .wrapping_mul(missed_percentage),
            );

        let score = Self {
            card: ScoreCard::new(Self::ID, display_name, impact),
            covered_percentage,
        };
        debug!(
            "{}: {}% covered, {}% missed -> impact {}",
            score.display_name(),
            covered_percentage,
            missed_percentage,
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

    /// Covered share of the code, in whole percentage points.
    pub fn covered_percentage(&self) -> i32 {
        self.covered_percentage
    }

    /// Missed share of the code, recomputed from the covered share.
    pub fn missed_percentage(&self) -> i32 {
        100i32.wrapping_sub(self.covered_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> CoverageConfiguration {
        CoverageConfiguration::new("jacoco", "JaCoCo", "**/jacoco.xml", "")
            .with_covered_percentage_impact(1)
            .with_missed_percentage_impact(-2)
    }

    #[test]
    fn test_impact_weights_covered_and_missed() {
        let score = CoverageScore::new(&configuration(), 80);

        assert_eq!(score.covered_percentage(), 80);
        assert_eq!(score.missed_percentage(), 20);
        assert_eq!(score.total_impact(), 40);
    }

    #[test]
    fn test_full_coverage_has_no_missed_share() {
        let score = CoverageScore::new(&configuration(), 100);

        assert_eq!(score.missed_percentage(), 0);
        assert_eq!(score.total_impact(), 100);
    }

    #[test]
    fn test_zero_coverage_is_all_missed() {
        let score = CoverageScore::new(&configuration(), 0);

        assert_eq!(score.missed_percentage(), 100);
        assert_eq!(score.total_impact(), -200);
    }

    #[test]
    fn test_percentage_above_hundred_goes_negative() {
        let score = CoverageScore::new(&configuration(), 120);

        assert_eq!(score.missed_percentage(), -20);
        assert_eq!(score.total_impact(), 160);
    }

    #[test]
    fn test_default_display_name_and_id() {
        let score = CoverageScore::new(&configuration(), 50);

        assert_eq!(score.id(), CoverageScore::ID);
        assert_eq!(score.id(), "coverage");
        assert_eq!(score.display_name(), "Code coverage results");
    }

    #[test]
    fn test_named_overrides_display_name() {
        let score = CoverageScore::named("Line coverage", &configuration(), 50);

        assert_eq!(score.display_name(), "Line coverage");
    }

    #[test]
    fn test_serializes_covered_percentage_only() {
        let score = CoverageScore::new(&configuration(), 80);

        let json = serde_json::to_value(&score).expect("serialize score");
        assert_eq!(json["id"], "coverage");
        assert_eq!(json["coveredPercentage"], 80);
        assert_eq!(json["totalImpact"], 40);
        assert!(json.get("missedPercentage").is_none());
    }
}
