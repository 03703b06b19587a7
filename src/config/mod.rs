//! Configuration value objects for graded categories.
//!
//! A [`ToolConfiguration`] tells the surrounding pipeline which reports a
//! tool produces and how to label the score built from them. The weighted
//! specializations ([`TestConfiguration`], [`AnalysisConfiguration`],
//! [`CoverageConfiguration`], [`MutationConfiguration`]) add the per-unit
//! point weights the scoring layer applies to raw counts.
//!
//! All types are plain immutable values. Construct them in code with the
//! chainable `with_*` setters, or deserialize them from JSON or TOML
//! documents supplied by the caller. Absent fields never surface from an
//! accessor: text defaults to the empty string and weights to zero.


use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while parsing a configuration document.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for configuration parse results.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

fn parse_json<T: DeserializeOwned>(kind: &str, json: &str) -> ConfigurationResult<T> {
    let configuration = serde_json::from_str(json)?;
    debug!("Parsed {} configuration from JSON", kind);
    Ok(configuration)
}

fn parse_toml<T: DeserializeOwned>(kind: &str, toml: &str) -> ConfigurationResult<T> {
    let configuration = toml::from_str(toml)?;
    debug!("Parsed {} configuration from TOML", kind);
    Ok(configuration)
}

/// Writes a value as single-line JSON, the diagnostic form used by the
/// `Display` impls in this module.
fn write_json<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}

/// Identifier, report pattern, and presentation hints for one reporting
/// tool.
///
/// The `id` correlates the configuration with the score produced from it.
/// Every text field defaults to the empty string, so partially specified
/// documents parse without errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolConfiguration {
    id: String,
    name: String,
    icon: String,
    pattern: String,
    source_path: String,
    metric: String,
}

impl ToolConfiguration {
    /// Creates a configuration from the four commonly supplied fields.
    /// The metric and icon stay empty unless set afterwards.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: String::new(),
            pattern: pattern.into(),
            source_path: source_path.into(),
            metric: String::new(),
        }
    }

    /// Sets the metric to extract from this tool's reports.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = metric.into();
        self
    }

    /// Sets the icon shown next to this tool's results.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Unique identifier of the tool.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name of the tool.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name if one is set, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Glob pattern that selects this tool's report files.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Base directory for resolving file references in reports.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Metric to extract from this tool's reports.
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Icon shown next to this tool's results.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> ConfigurationResult<Self> {
        parse_json("tool", json)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml(toml: &str) -> ConfigurationResult<Self> {
        parse_toml("tool", toml)
    }
}

impl fmt::Display for ToolConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

/// Weights for grading test results.
///
/// Each executed test contributes its outcome's weight to the impact:
/// `passedImpact` per passed test, `failureImpact` per failed test, and
/// `skippedImpact` per skipped test. Weights may be negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestConfiguration {
    #[serde(flatten)]
    tool: ToolConfiguration,
    passed_impact: i32,
    failure_impact: i32,
    skipped_impact: i32,
}

impl TestConfiguration {
    /// Creates a configuration with all weights at zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            tool: ToolConfiguration::new(id, name, pattern, source_path),
            passed_impact: 0,
            failure_impact: 0,
            skipped_impact: 0,
        }
    }

    /// Sets the metric to extract from this tool's reports.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.tool = self.tool.with_metric(metric);
        self
    }

    /// Sets the icon shown next to this tool's results.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.tool = self.tool.with_icon(icon);
        self
    }

    /// Sets the points granted per passed test.
    pub fn with_passed_impact(mut self, impact: i32) -> Self {
        self.passed_impact = impact;
        self
    }

    /// Sets the points granted per failed test, typically negative.
    pub fn with_failure_impact(mut self, impact: i32) -> Self {
        self.failure_impact = impact;
        self
    }

    /// Sets the points granted per skipped test.
    pub fn with_skipped_impact(mut self, impact: i32) -> Self {
        self.skipped_impact = impact;
        self
    }

    /// The embedded tool settings.
    pub fn tool(&self) -> &ToolConfiguration {
        &self.tool
    }

    pub fn id(&self) -> &str {
        self.tool.id()
    }

    pub fn name(&self) -> &str {
        self.tool.name()
    }

    pub fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    pub fn pattern(&self) -> &str {
        self.tool.pattern()
    }

    pub fn source_path(&self) -> &str {
        self.tool.source_path()
    }

    pub fn metric(&self) -> &str {
        self.tool.metric()
    }

    pub fn icon(&self) -> &str {
        self.tool.icon()
    }

    /// Points granted per passed test.
    pub fn passed_impact(&self) -> i32 {
        self.passed_impact
    }

    /// Points granted per failed test.
    pub fn failure_impact(&self) -> i32 {
        self.failure_impact
    }

    /// Points granted per skipped test.
    pub fn skipped_impact(&self) -> i32 {
        self.skipped_impact
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> ConfigurationResult<Self> {
        parse_json("test", json)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml(toml: &str) -> ConfigurationResult<Self> {
        parse_toml("test", toml)
    }
}

impl fmt::Display for TestConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

/// Weights for grading static-analysis warnings, one per severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfiguration {
    #[serde(flatten)]
    tool: ToolConfiguration,
    error_impact: i32,
    high_impact: i32,
    normal_impact: i32,
    low_impact: i32,
}

impl AnalysisConfiguration {
    /// Creates a configuration with all weights at zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            tool: ToolConfiguration::new(id, name, pattern, source_path),
            error_impact: 0,
            high_impact: 0,
            normal_impact: 0,
            low_impact: 0,
        }
    }

    /// Sets the metric to extract from this tool's reports.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.tool = self.tool.with_metric(metric);
        self
    }

    /// Sets the icon shown next to this tool's results.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.tool = self.tool.with_icon(icon);
        self
    }

    /// Sets the points granted per error-severity warning.
    pub fn with_error_impact(mut self, impact: i32) -> Self {
        self.error_impact = impact;
        self
    }

    /// Sets the points granted per high-severity warning.
    pub fn with_high_impact(mut self, impact: i32) -> Self {
        self.high_impact = impact;
        self
    }

    /// Sets the points granted per normal-severity warning.
    pub fn with_normal_impact(mut self, impact: i32) -> Self {
        self.normal_impact = impact;
        self
    }

    /// Sets the points granted per low-severity warning.
    pub fn with_low_impact(mut self, impact: i32) -> Self {
        self.low_impact = impact;
        self
    }

    /// The embedded tool settings.
    pub fn tool(&self) -> &ToolConfiguration {
        &self.tool
    }

    pub fn id(&self) -> &str {
        self.tool.id()
    }

    pub fn name(&self) -> &str {
        self.tool.name()
    }

    pub fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    pub fn pattern(&self) -> &str {
        self.tool.pattern()
    }

    pub fn source_path(&self) -> &str {
        self.tool.source_path()
    }

    pub fn metric(&self) -> &str {
        self.tool.metric()
    }

    pub fn icon(&self) -> &str {
        self.tool.icon()
    }

    /// Points granted per error-severity warning.
    pub fn error_impact(&self) -> i32 {
        self.error_impact
    }

    /// Points granted per high-severity warning.
    pub fn high_impact(&self) -> i32 {
        self.high_impact
    }

    /// Points granted per normal-severity warning.
    pub fn normal_impact(&self) -> i32 {
        self.normal_impact
    }

    /// Points granted per low-severity warning.
    pub fn low_impact(&self) -> i32 {
        self.low_impact
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> ConfigurationResult<Self> {
        parse_json("analysis", json)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml(toml: &str) -> ConfigurationResult<Self> {
        parse_toml("analysis", toml)
    }
}

impl fmt::Display for AnalysisConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

/// Weights for grading code coverage, applied to whole percentage points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverageConfiguration {
    #[serde(flatten)]
    tool: ToolConfiguration,
    covered_percentage_impact: i32,
    missed_percentage_impact: i32,
}

impl CoverageConfiguration {
    /// Creates a configuration with all weights at zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            tool: ToolConfiguration::new(id, name, pattern, source_path),
            covered_percentage_impact: 0,
            missed_percentage_impact: 0,
        }
    }

    /// Sets the metric to extract from this tool's reports.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.tool = self.tool.with_metric(metric);
        self
    }

    /// Sets the icon shown next to this tool's results.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.tool = self.tool.with_icon(icon);
        self
    }

    /// Sets the points granted per covered percentage point.
    pub fn with_covered_percentage_impact(mut self, impact: i32) -> Self {
        self.covered_percentage_impact = impact;
        self
    }

    /// Sets the points granted per missed percentage point.
    pub fn with_missed_percentage_impact(mut self, impact: i32) -> Self {
        self.missed_percentage_impact = impact;
        self
    }

    /// The embedded tool settings.
    pub fn tool(&self) -> &ToolConfiguration {
        &self.tool
    }

    pub fn id(&self) -> &str {
        self.tool.id()
    }

    pub fn name(&self) -> &str {
        self.tool.name()
    }

    pub fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    pub fn pattern(&self) -> &str {
        self.tool.pattern()
    }

    pub fn source_path(&self) -> &str {
        self.tool.source_path()
    }

    pub fn metric(&self) -> &str {
        self.tool.metric()
    }

    pub fn icon(&self) -> &str {
        self.tool.icon()
    }

    /// Points granted per covered percentage point.
    pub fn covered_percentage_impact(&self) -> i32 {
        self.covered_percentage_impact
    }

    /// Points granted per missed percentage point.
    pub fn missed_percentage_impact(&self) -> i32 {
        self.missed_percentage_impact
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> ConfigurationResult<Self> {
        parse_json("coverage", json)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml(toml: &str) -> ConfigurationResult<Self> {
        parse_toml("coverage", toml)
    }
}

impl fmt::Display for CoverageConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

/// Weights for grading mutation testing results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MutationConfiguration {
    #[serde(flatten)]
    tool: ToolConfiguration,
    detected_impact: i32,
    undetected_impact: i32,
}

impl MutationConfiguration {
    /// Creates a configuration with all weights at zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        source_path: impl Into<String>,
    ) -> Self {
        Self {
            tool: ToolConfiguration::new(id, name, pattern, source_path),
            detected_impact: 0,
            undetected_impact: 0,
        }
    }

    /// Sets the metric to extract from this tool's reports.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.tool = self.tool.with_metric(metric);
        self
    }

    /// Sets the icon shown next to this tool's results.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.tool = self.tool.with_icon(icon);
        self
    }

    /// Sets the points granted per detected mutation.
    pub fn with_detected_impact(mut self, impact: i32) -> Self {
        self.detected_impact = impact;
        self
    }

    /// Sets the points granted per undetected mutation, typically negative.
    pub fn with_undetected_impact(mut self, impact: i32) -> Self {
        self.undetected_impact = impact;
        self
    }

    /// The embedded tool settings.
    pub fn tool(&self) -> &ToolConfiguration {
        &self.tool
    }

    pub fn id(&self) -> &str {
        self.tool.id()
    }

    pub fn name(&self) -> &str {
        self.tool.name()
    }

    pub fn display_name(&self) -> &str {
        self.tool.display_name()
    }

    pub fn pattern(&self) -> &str {
        self.tool.pattern()
    }

    pub fn source_path(&self) -> &str {
        self.tool.source_path()
    }

    pub fn metric(&self) -> &str {
        self.tool.metric()
    }

    pub fn icon(&self) -> &str {
        self.tool.icon()
    }

    /// Points granted per detected mutation.
    pub fn detected_impact(&self) -> i32 {
        self.detected_impact
    }

    /// Points granted per undetected mutation.
    pub fn undetected_impact(&self) -> i32 {
        self.undetected_impact
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> ConfigurationResult<Self> {
        parse_json("mutation", json)
    }

    /// Parses a configuration from a TOML document.
    pub fn from_toml(toml: &str) -> ConfigurationResult<Self> {
        parse_toml("mutation", toml)
    }
}

impl fmt::Display for MutationConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}
