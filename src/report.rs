//! Rendering of score collections for CI summaries and diagnostics.
//!
//! Scores are rendered one category at a time; combining impacts into an
//! overall grade stays with the consumer.

use crate::scoring::Score;

/// Renders scores as a GitHub-flavored Markdown summary.
pub fn render_markdown(scores: &[Score]) -> String {
    let mut lines = Vec::new();
    lines.push("# Autograding results".to_string());
    for score in scores {
        lines.push(String::new());
        lines.push(format!("## {}", score.display_name()));
        lines.push(String::new());
        lines.push(format!("- Impact: {}", score.total_impact()));
        lines.push(format!("- {}", summarize(score)));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Renders scores as a pretty-printed JSON array.
pub fn render_json(scores: &[Score]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scores)
}

fn summarize(score: &Score) -> String {
    match score {
        Score::Tests(tests) => format!(
            "{} tests: {} passed, {} failed, {} skipped",
            tests.total_size(),
            tests.passed_size(),
            tests.failed_size(),
            tests.skipped_size()
        ),
        Score::Analysis(analysis) => format!(
            "{} warnings: {} errors, {} high, {} normal, {} low",
            analysis.total_size(),
            analysis.errors_size(),
            analysis.high_size(),
            analysis.normal_size(),
            analysis.low_size()
        ),
        Score::Coverage(coverage) => format!(
            "{}% covered, {}% missed",
            coverage.covered_percentage(),
            coverage.missed_percentage()
        ),
        Score::Mutations(mutations) => format!(
            "{} mutations: {} detected, {} undetected",
            mutations.total_size(),
            mutations.detected_size(),
            mutations.undetected_size()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoverageConfiguration, TestConfiguration};
    use crate::scoring::{CoverageScore, TestScore};

    fn sample_scores() -> Vec<Score> {
        let tests = TestConfiguration::new("tests", "JUnit", "", "")
            .with_passed_impact(1)
            .with_failure_impact(-5);
        let coverage = CoverageConfiguration::new("jacoco", "JaCoCo", "", "")
            .with_covered_percentage_impact(1)
            .with_missed_percentage_impact(-2);

        vec![
            Score::Tests(TestScore::new(&tests, 10, 2, 1)),
            Score::Coverage(CoverageScore::new(&coverage, 80)),
        ]
    }

    #[test]
    fn test_markdown_lists_every_score() {
        let markdown = render_markdown(&sample_scores());

        assert!(markdown.starts_with("# Autograding results"));
        assert!(markdown.contains("## Test results"));
        assert!(markdown.contains("- Impact: -3"));
        assert!(markdown.contains("10 tests: 7 passed, 2 failed, 1 skipped"));
        assert!(markdown.contains("## Code coverage results"));
        assert!(markdown.contains("- Impact: 40"));
        assert!(markdown.contains("80% covered, 20% missed"));
        assert!(markdown.ends_with('\n'));
    }

    #[test]
    fn test_markdown_of_no_scores_is_header_only() {
        let markdown = render_markdown(&[]);

        assert_eq!(markdown, "# Autograding results\n");
    }

    #[test]
    fn test_json_is_a_tagged_array() {
        let json = render_json(&sample_scores()).expect("render scores");

        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse rendered JSON");
        let scores = parsed.as_array().expect("array of scores");
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0]["category"], "tests");
        assert_eq!(scores[0]["totalImpact"], -3);
        assert_eq!(scores[1]["category"], "coverage");
        assert_eq!(scores[1]["coveredPercentage"], 80);
    }

    #[test]
    fn test_json_of_no_scores_is_empty_array() {
        let json = render_json(&[]).expect("render empty slice");

        assert_eq!(json, "[]");
    }
}
