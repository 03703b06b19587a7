//! Gradebook - weighted scoring model for autograding CI quality signals
//!
//! Converts raw quality counts collected by a CI pipeline (test results,
//! static-analysis warnings, code coverage, mutation testing) into signed
//! point deltas for automated grading of software engineering projects.
//!
//! Report parsing, file discovery, and grade aggregation live in the
//! embedding application. This crate only turns already-extracted counts
//! plus a weight configuration into immutable [`Score`] values.
//!
//! # Example
//!
//! ```
//! use gradebook::{TestConfiguration, TestScore};
//!
//! let configuration = TestConfiguration::new("tests", "JUnit", "**/TEST-*.xml", "src/test/java")
//!     .with_passed_impact(1)
//!     .with_failure_impact(-5);
//!
//! let score = TestScore::new(&configuration, 10, 2, 1);
//! assert_eq!(score.passed_size(), 7);
//! assert_eq!(score.total_impact(), -3);
//! ```

pub mod config;
pub mod report;
pub mod scoring;

pub use config::{
    AnalysisConfiguration, ConfigurationError, ConfigurationResult, CoverageConfiguration,
    MutationConfiguration, TestConfiguration, ToolConfiguration,
};
pub use scoring::{AnalysisScore, CoverageScore, MutationScore, Score, ScoreCard, TestScore};
