//! Scoring of static-analysis warnings, bucketed by severity.

use serde::Serialize;
use tracing::debug;

use crate::config::AnalysisConfiguration;
use crate::scoring::ScoreCard;

const DEFAULT_NAME: &str = "Static analysis results";

/// The impact of static-analysis warnings on the grade.
///
/// All four severity counts are stored as supplied; the impact weights
/// each severity with its configuration weight and sums the products
/// with wrapping arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisScore {
    #[serde(flatten)]
    card: ScoreCard,
    errors_size: i32,
    high_size: i32,
    normal_size: i32,
    low_size: i32,
}

impl AnalysisScore {
    /// Stable ID of the static analysis category.
    pub const ID: &'static str = "analysis";

    /// Creates a score named "Static analysis results" from the supplied
    /// severity counts.
    pub fn new(
        configuration: &AnalysisConfiguration,
        error_count: i32,
        high_count: i32,
        normal_count: i32,
        low_count: i32,
    ) -> Self {
        Self::named(DEFAULT_NAME, configuration, error_count, high_count, normal_count, low_count)
    }

    /// Creates a score with an explicit display name.
    pub fn named(
        display_name: impl Into<String>,
        configuration: &AnalysisConfiguration,
        errors_size: i32,
        high_size: i32,
        normal_size: i32,
        low_size: i32,
    ) -> Self {
        let impact = configuration
            .error_impact()
            .wrapping_mul(errors_size)
            .wrapping_add(configuration.high_impact().wrapping_mul(high_size))
            .wrapping_add(configuration.normal_impact().wrapping_mul(normal_size))
            .wrapping_add(configuration.low_impact().wrapping_mul(low_size));

        let score = Self {
            card: ScoreCard::new(Self::ID, display_name, impact),
            errors_size,
            high_size,
            normal_size,
            low_size,
        };
        debug!(
            "{}: {} errors, {} high, {} normal, {} low -> impact {}",
            score.display_name(),
            errors_size,
            high_size,
            normal_size,
            low_size,
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

    /// Number of error-severity warnings.
    pub fn errors_size(&self) -> i32 {
        self.errors_size
    }

    /// Number of high-severity warnings.
    pub fn high_size(&self) -> i32 {
        self.high_size
    }

    /// Number of normal-severity warnings.
    pub fn normal_size(&self) -> i32 {
        self.normal_size
    }

    /// Number of low-severity warnings.
    pub fn low_size(&self) -> i32 {
        self.low_size
    }

    /// Total number of warnings, recomputed from the stored counts.
    pub fn total_size(&self) -> i32 {
        self.errors_size
            .wrapping_add(self.high_size)
            .wrapping_add(self.normal_size)
            .wrapping_add(self.low_size)
    }
}
