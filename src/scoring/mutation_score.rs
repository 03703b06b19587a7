//! Scoring of mutation testing results.

use serde::Serialize;
use tracing::debug;

use crate::config::MutationConfiguration;
use crate::scoring::ScoreCard;

const DEFAULT_NAME: &str = "Mutation coverage results";

/// The impact of mutation testing on the grade.
///
/// The caller supplies the total and undetected counts; the detected
/// count is derived as `total - undetected` without clamping, mirroring
/// how passed tests are derived. The impact weights both counts with
/// the configuration weights and sums the products with wrapping
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationScore {
    #[serde(flatten)]
    card: ScoreCard,
    detected_size: i32,
    undetected_size: i32,
}

impl MutationScore {
    /// Stable ID of the mutation coverage category.
    pub const ID: &'static str = "mutations";

    /// Creates a score named "Mutation coverage results" from the
    /// supplied counts.
    pub fn new(
        configuration: &MutationConfiguration,
        total_count: i32,
        undetected_count: i32,
    ) -> Self {
        Self::named(DEFAULT_NAME, configuration, total_count, undetected_count)
    }

    /// Creates a score with an explicit display name.
    pub fn named(
        display_name: impl Into<String>,
        configuration: &MutationConfiguration,
        total_size: i32,
        undetected_size: i32,
    ) -> Self {
        let detected_size = total_size.wrapping_sub(undetected_size);
        let impact = configuration
            .detected_impact()
            .wrapping_mul(detected_size)
            .wrapping_add(
                configuration
                    .undetected_impact()
                    .wrapping_mul(undetected_size),
            );

        let score = Self {
            card: ScoreCard::new(Self::ID, display_name, impact),
            detected_size,
            undetected_size,
        };
        debug!(
            "{}: {} detected, {} undetected -> impact {}",
            score.display_name(),
            detected_size,
            undetected_size,
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

    /// Number of detected mutations, derived from the supplied counts.
    pub fn detected_size(&self) -> i32 {
        self.detected_size
    }

    /// Number of undetected mutations.
    pub fn undetected_size(&self) -> i32 {
        self.undetected_size
    }

    /// Total number of mutations, recomputed from the stored counts.
    pub fn total_size(&self) -> i32 {
        self.detected_size.wrapping_add(self.undetected_size)
    }
}
