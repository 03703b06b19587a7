//! Score entities for graded categories.
//!
//! A score is an immutable record of one category's results: a stable ID,
//! a display name, the raw counts, and the single signed impact the
//! category contributes to the overall grade. The impact is the weighted
//! sum of the counts,
//!
//! ```text
//! impact = sum over outcomes of weight(outcome) * count(outcome)
//! ```
//!
//! computed once in the constructor with wrapping 32-bit arithmetic.
//! Derived counts (passed tests, detected mutations) are calculated from
//! the supplied ones in the same step and are never validated: callers
//! passing inconsistent counts get negative derived values back instead
//! of an error.
//!
//! Combining impacts across categories is left to the consumer:
//!
//! ```
//! use gradebook::{Score, TestConfiguration, TestScore};
//!
//! let configuration = TestConfiguration::new("tests", "", "", "").with_passed_impact(2);
//! let scores = vec![Score::Tests(TestScore::new(&configuration, 3, 0, 0))];
//!
//! let total: i32 = scores.iter().map(Score::total_impact).sum();
//! assert_eq!(total, 6);
//! ```

mod analysis_score;
mod coverage_score;
mod mutation_score;
mod test_score;

pub use analysis_score::AnalysisScore;
pub use coverage_score::CoverageScore;
pub use mutation_score::MutationScore;
pub use test_score::TestScore;

use serde::Serialize;

/// Identity and computed point delta shared by every score category.
///
/// The impact is fixed when the owning score is constructed; no mutator
/// exists, so a stored impact cannot drift away from the counts it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    id: String,
    display_name: String,
    total_impact: i32,
}

impl ScoreCard {
    pub(crate) fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        total_impact: i32,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            total_impact,
        }
    }

    /// Stable key matching the configuration this score was built from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label for presentation.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The signed point delta this category contributes to the grade.
    pub fn total_impact(&self) -> i32 {
        self.total_impact
    }
}

/// One graded category and its computed impact.
///
/// The set of categories is closed. Each variant owns its raw counts and
/// the embedded [`ScoreCard`] produced by its constructor; serialized
/// scores carry a `category` tag naming the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Score {
    Tests(TestScore),
    Analysis(AnalysisScore),
    Coverage(CoverageScore),
    Mutations(MutationScore),
}

impl Score {
    /// Stable key matching the originating configuration.
    pub fn id(&self) -> &str {
        self.card().id()
    }

    /// Human-readable label for presentation.
    pub fn display_name(&self) -> &str {
        self.card().display_name()
    }

    /// The signed point delta this category contributes to the grade.
    pub fn total_impact(&self) -> i32 {
        self.card().total_impact()
    }

    /// Identity and impact shared by all categories.
    pub fn card(&self) -> &ScoreCard {
        match self {
            Score::Tests(score) => score.card(),
            Score::Analysis(score) => score.card(),
            Score::Coverage(score) => score.card(),
            Score::Mutations(score) => score.card(),
        }
    }
}
