//! Configuration system with YAML schema and validation.
//!
//! A run can be described in a YAML file:
//!
//! ```yaml
//! project:
//!   name: Sprint 14
//! burndown:
//!   start_date: 2026-01-05
//!   duration_days: 10
//!   total_work: 100
//!   model: realistic
//!   variability: 20
//!   scope_changes: "3:+10, 6:+5"
//! reproducibility:
//!   seed: 42
//! output:
//!   format: table
//! ```
//!
//! Loading applies three layers of checks: serde shape (unknown fields are
//! rejected), `validator` constraints, and the same duration / total-work
//! rejections the CLI applies to flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::engine::simulator::validate_inputs;
use crate::engine::{parse_start_date, BurnModelKind, SimulationParams};
use crate::error::BurndownResult;
use crate::report::{OutputFormat, DEFAULT_CHART_HEIGHT};

/// Top-level burndown configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BurndownConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Project metadata.
    #[validate(nested)]
    #[serde(default)]
    pub project: ProjectMeta,

    /// Simulation inputs.
    #[serde(default)]
    pub burndown: BurndownSection,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Output settings.
    #[validate(nested)]
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl Default for BurndownConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            project: ProjectMeta::default(),
            burndown: BurndownSection::default(),
            reproducibility: ReproducibilityConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl BurndownConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> BurndownResult<Self> {
        let config = Self::read(path)?;
        config.check()?;
        Ok(config)
    }

    /// Read a YAML file without running [`BurndownConfig::check`].
    ///
    /// Used when further values are layered on top before validation.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or its YAML is malformed.
    pub fn read<P: AsRef<Path>>(path: P) -> BurndownResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> BurndownResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Run schema and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns a validation error or an input rejection.
    pub fn check(&self) -> BurndownResult<()> {
        self.validate()?;
        validate_inputs(self.burndown.duration_days, self.burndown.total_work)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> BurndownConfigBuilder {
        BurndownConfigBuilder::default()
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> BurndownResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build simulation parameters from this configuration.
    ///
    /// The start date is parsed leniently; an unparseable date means no date.
    /// Durations beyond `u32` saturate and are clamped by the simulator.
    #[must_use]
    pub fn to_params(&self) -> SimulationParams {
        let section = &self.burndown;
        SimulationParams {
            start_date: section.start_date.as_deref().and_then(parse_start_date),
            duration_days: section.duration_days as u32,
            total_work: section.total_work,
            model: section.model.into(),
            variability: section.variability,
            scope_changes_text: section.scope_changes.clone(),
            seed: self.reproducibility.seed,
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct BurndownConfigBuilder {
    project_name: Option<String>,
    start_date: Option<String>,
    duration_days: Option<f64>,
    total_work: Option<f64>,
    model: Option<BurnModelKind>,
    variability: Option<f64>,
    scope_changes: Option<String>,
    seed: Option<u64>,
    format: Option<OutputFormat>,
    output_path: Option<PathBuf>,
}

impl BurndownConfigBuilder {
    /// Set the project name.
    #[must_use]
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Set the start date (`YYYY-MM-DD`).
    #[must_use]
    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Set the duration in days.
    #[must_use]
    pub const fn duration_days(mut self, days: f64) -> Self {
        self.duration_days = Some(days);
        self
    }

    /// Set the total work.
    #[must_use]
    pub const fn total_work(mut self, total: f64) -> Self {
        self.total_work = Some(total);
        self
    }

    /// Set the burn model.
    #[must_use]
    pub const fn model(mut self, model: BurnModelKind) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the variability percentage.
    #[must_use]
    pub const fn variability(mut self, variability: f64) -> Self {
        self.variability = Some(variability);
        self
    }

    /// Set the scope-change list.
    #[must_use]
    pub fn scope_changes(mut self, text: impl Into<String>) -> Self {
        self.scope_changes = Some(text.into());
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the output file.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Build the configuration without validating it.
    #[must_use]
    pub fn build(self) -> BurndownConfig {
        let mut config = BurndownConfig::default();
        if let Some(name) = self.project_name {
            config.project.name = name;
        }
        let section = &mut config.burndown;

        if self.start_date.is_some() {
            section.start_date = self.start_date;
        }
        if let Some(days) = self.duration_days {
            section.duration_days = days;
        }
        if let Some(total) = self.total_work {
            section.total_work = total;
        }
        if let Some(model) = self.model {
            section.model = model;
        }
        if let Some(variability) = self.variability {
            section.variability = variability;
        }
        if let Some(text) = self.scope_changes {
            section.scope_changes = text;
        }
        if self.seed.is_some() {
            config.reproducibility.seed = self.seed;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.output_path.is_some() {
            config.output.path = self.output_path;
        }

        config
    }
}

/// Project metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ProjectMeta {
    /// Project name, printed above table and chart output.
    #[validate(length(max = 200))]
    #[serde(default)]
    pub name: String,
}

/// Simulation inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BurndownSection {
    /// First calendar day (`YYYY-MM-DD`), used for labels only.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Number of days; at least 2, clamped to 120.
    #[serde(default = "default_duration_days")]
    pub duration_days: f64,
    /// Total work at the start; must be positive.
    #[serde(default = "default_total_work")]
    pub total_work: f64,
    /// Burn model.
    #[serde(default)]
    pub model: BurnModelKind,
    /// Variability percentage for the realistic model; clamped to [0, 60].
    #[serde(default = "default_variability")]
    pub variability: f64,
    /// Scope changes as `day:amount` tokens separated by commas.
    #[serde(default = "default_scope_changes")]
    pub scope_changes: String,
}

const fn default_duration_days() -> f64 {
    10.0
}

const fn default_total_work() -> f64 {
    100.0
}

const fn default_variability() -> f64 {
    20.0
}

fn default_scope_changes() -> String {
    "3:+10, 6:+5".to_string()
}

impl Default for BurndownSection {
    fn default() -> Self {
        Self {
            start_date: None,
            duration_days: default_duration_days(),
            total_work: default_total_work(),
            model: BurnModelKind::default(),
            variability: default_variability(),
            scope_changes: default_scope_changes(),
        }
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReproducibilityConfig {
    /// Master seed; omitted means a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file; stdout when omitted.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Chart height in rows.
    #[validate(range(min = 2, max = 100))]
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

const fn default_chart_height() -> usize {
    DEFAULT_CHART_HEIGHT
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            path: None,
            chart_height: default_chart_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BurnModel;
    use crate::error::BurndownError;

    #[test]
    fn test_config_defaults() {
        let config = BurndownConfig::default();

        assert_eq!(config.schema_version, "1.0");
        assert!((config.burndown.duration_days - 10.0).abs() < f64::EPSILON);
        assert!((config.burndown.total_work - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.burndown.model, BurnModelKind::Realistic);
        assert_eq!(config.burndown.scope_changes, "3:+10, 6:+5");
        assert_eq!(config.reproducibility.seed, None);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BurndownConfig::builder()
            .seed(12345)
            .duration_days(14.0)
            .total_work(80.0)
            .model(BurnModelKind::Linear)
            .scope_changes("")
            .format(OutputFormat::Csv)
            .build();

        assert_eq!(config.reproducibility.seed, Some(12345));
        assert!((config.burndown.duration_days - 14.0).abs() < f64::EPSILON);
        assert_eq!(config.burndown.model, BurnModelKind::Linear);
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r#"
project:
  name: Sprint 14
burndown:
  start_date: 2026-01-05
  duration_days: 12
  total_work: 64
  model: linear
  scope_changes: "2:+4"
reproducibility:
  seed: 42
output:
  format: csv
"#;
        let config = BurndownConfig::from_yaml(yaml);
        assert!(config.is_ok());

        let config = config.ok();
        assert_eq!(config.as_ref().map(|c| c.reproducibility.seed), Some(Some(42)));
        assert_eq!(
            config.as_ref().map(|c| c.burndown.model),
            Some(BurnModelKind::Linear)
        );
        assert_eq!(
            config.as_ref().map(|c| c.output.format),
            Some(OutputFormat::Csv)
        );
    }

    #[test]
    fn test_config_empty_yaml_uses_defaults() {
        let config = BurndownConfig::from_yaml("{}");
        assert!(config.is_ok());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let yaml = r"
burndown:
  duration: 10
";
        assert!(matches!(
            BurndownConfig::from_yaml(yaml),
            Err(BurndownError::YamlParse(_))
        ));
    }

    #[test]
    fn test_config_rejects_unknown_nested_fields() {
        for yaml in [
            "output:\n  fromat: csv\n",
            "project:\n  nmae: Sprint\n",
            "reproducibility:\n  sead: 4\n",
        ] {
            assert!(
                matches!(BurndownConfig::from_yaml(yaml), Err(BurndownError::YamlParse(_))),
                "accepted {yaml:?}"
            );
        }
    }

    #[test]
    fn test_read_skips_checks() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("short.yaml");
            assert!(std::fs::write(&path, "burndown:\n  duration_days: 1\n").is_ok());

            let read = BurndownConfig::read(&path);
            assert!(read.is_ok());
            assert!(matches!(
                BurndownConfig::load(&path),
                Err(BurndownError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn test_config_rejects_short_duration() {
        let yaml = r"
burndown:
  duration_days: 1
";
        assert!(matches!(
            BurndownConfig::from_yaml(yaml),
            Err(BurndownError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_config_rejects_non_positive_total() {
        let yaml = r"
burndown:
  total_work: 0
";
        assert!(matches!(
            BurndownConfig::from_yaml(yaml),
            Err(BurndownError::InvalidTotalWork { .. })
        ));
    }

    #[test]
    fn test_config_rejects_bad_chart_height() {
        let yaml = r"
output:
  chart_height: 1
";
        assert!(matches!(
            BurndownConfig::from_yaml(yaml),
            Err(BurndownError::Validation(_))
        ));
    }

    #[test]
    fn test_config_rejects_unknown_model() {
        let yaml = r"
burndown:
  model: exponential
";
        assert!(BurndownConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_to_params() {
        let config = BurndownConfig::builder()
            .start_date("2026-03-02")
            .duration_days(500.0)
            .model(BurnModelKind::Custom)
            .seed(9)
            .build();
        let params = config.to_params();

        assert_eq!(params.start_date, chrono::NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(params.clamped_days(), 120);
        assert!(matches!(params.model, BurnModel::Custom(_)));
        assert_eq!(params.seed, Some(9));
    }

    #[test]
    fn test_to_params_ignores_bad_date() {
        let config = BurndownConfig::builder().start_date("03/02/2026").build();
        assert_eq!(config.to_params().start_date, None);
    }

    #[test]
    fn test_yaml_round_trip_keeps_inputs() {
        let config = BurndownConfig::builder()
            .seed(5)
            .scope_changes("4:-2")
            .output_path("out.csv")
            .build();
        let yaml = config.to_yaml().unwrap_or_default();
        let parsed = BurndownConfig::from_yaml(&yaml);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.burndown.scope_changes, "4:-2");
            assert_eq!(parsed.reproducibility.seed, Some(5));
            assert_eq!(parsed.output.path, Some(PathBuf::from("out.csv")));
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("burndown.yaml");
            let written = std::fs::write(&path, "burndown:\n  total_work: 40\n");
            assert!(written.is_ok());
            let config = BurndownConfig::load(&path);
            assert!(config.is_ok());
        }
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            BurndownConfig::load("/nonexistent/burndown.yaml"),
            Err(BurndownError::Io(_))
        ));
    }
}
