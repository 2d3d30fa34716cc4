//! Prioritiser configuration for the protein-interaction network scorer.
//!
//! Users tune the high-quality phenotype cutoff, the walker-score offset and
//! the result rendering via TOML, YAML or JSON. Every field has a default so
//! an empty file is a valid configuration.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PhenolinkError;

/// Complete prioritiser configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrioritiserConfig {
    /// Network scoring parameters
    #[serde(default)]
    pub network: NetworkScoringConfig,

    /// Output options
    #[serde(default)]
    pub output: OutputConfig,
}

// ── Network Scoring ───────────────────────────────────────────────────────────

/// How the resolver picks the winning high-quality neighbour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitSelection {
    /// Last column reaching the row maximum wins. An all-zero row still
    /// reports the last scanned high-quality gene.
    #[default]
    LastMaximum,
    /// Only strict improvements over zero count; the earliest maximum wins
    /// and high-quality genes missing from the matrix are skipped.
    StrictImprovement,
}

/// Parameters for the phenotype-weighted interaction network scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkScoringConfig {
    /// Genes need a phenotype score strictly above this to seed the network
    #[serde(default = "default_high_quality_cutoff")]
    pub high_quality_cutoff: f64,

    /// Offset added to the weighted interaction score of the best neighbour
    #[serde(default = "default_walker_score_offset")]
    pub walker_score_offset: f64,

    #[serde(default)]
    pub hit_selection: HitSelection,
}

fn default_high_quality_cutoff() -> f64 { 0.6 }
fn default_walker_score_offset() -> f64 { 0.5 }

impl Default for NetworkScoringConfig {
    fn default() -> Self {
        Self {
            high_quality_cutoff: default_high_quality_cutoff(),
            walker_score_offset: default_walker_score_offset(),
            hit_selection: HitSelection::default(),
        }
    }
}

impl NetworkScoringConfig {
    /// Config with the given cutoff and defaults for everything else.
    pub fn with_cutoff(high_quality_cutoff: f64) -> Self {
        Self {
            high_quality_cutoff,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !self.high_quality_cutoff.is_finite() {
            return Err(PhenolinkError::Config(format!(
                "high_quality_cutoff must be finite, got {}",
                self.high_quality_cutoff
            )));
        }
        if !self.walker_score_offset.is_finite() {
            return Err(PhenolinkError::Config(format!(
                "walker_score_offset must be finite, got {}",
                self.walker_score_offset
            )));
        }
        Ok(())
    }
}

// ── Output Configuration ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (tsv, json, yaml)
    #[serde(default = "default_format")]
    pub format: String,

    /// Number of top results to render
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_format() -> String { "tsv".to_string() }
fn default_top_n() -> usize { 50 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            top_n: default_top_n(),
        }
    }
}

impl OutputConfig {
    pub fn output_format(&self) -> crate::Result<OutputFormat> {
        self.format.parse()
    }
}

/// Supported result formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = PhenolinkError;

    /// Case-insensitive, surrounding whitespace ignored; `yml` is accepted for YAML.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(PhenolinkError::Config(format!(
                "unknown output format '{}', expected one of tsv, json, yaml",
                s
            ))),
        }
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl PrioritiserConfig {
    /// Load configuration from phenolink.toml.
    /// Checks PHENOLINK_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("PHENOLINK_CONFIG")
            .unwrap_or_else(|_| "phenolink.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Set PHENOLINK_CONFIG or create phenolink.toml.",
                path
            );
        }

        Self::from_toml(&path)
    }

    /// Load from TOML file
    pub fn from_toml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from YAML file
    pub fn from_yaml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to TOML file
    pub fn to_toml(&self, path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.network.validate()?;
        self.output.output_format()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = PrioritiserConfig::default();
        assert_eq!(config.network.high_quality_cutoff, 0.6);
        assert_eq!(config.network.walker_score_offset, 0.5);
        assert_eq!(config.network.hit_selection, HitSelection::LastMaximum);
        assert_eq!(config.output.format, "tsv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: PrioritiserConfig = toml::from_str("").unwrap();
        assert_eq!(config, PrioritiserConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r#"
            [network]
            high_quality_cutoff = 0.75
            hit_selection = "strict_improvement"

            [output]
            format = "json"
        "#;
        let config: PrioritiserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.network.high_quality_cutoff, 0.75);
        assert_eq!(config.network.walker_score_offset, 0.5);
        assert_eq!(config.network.hit_selection, HitSelection::StrictImprovement);
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.top_n, 50);
    }

    #[test]
    fn test_example_config_parses() {
        let config: PrioritiserConfig =
            toml::from_str(include_str!("../../../phenolink.example.toml")).unwrap();
        assert_eq!(config, PrioritiserConfig::default());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut config = PrioritiserConfig::default();
        config.output.format = "html".to_string();
        assert!(matches!(config.validate(), Err(PhenolinkError::Config(_))));
    }

    #[test]
    fn test_format_aliases_accepted() {
        let config: PrioritiserConfig = toml::from_str("[output]\nformat = \"yml\"").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.output_format().unwrap(), OutputFormat::Yaml);

        let config: PrioritiserConfig = toml::from_str("[output]\nformat = \" TSV \"").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.output_format().unwrap(), OutputFormat::Tsv);
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!(" Tsv\n".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!(matches!("html".parse::<OutputFormat>(), Err(PhenolinkError::Config(_))));
    }

    #[test]
    fn test_non_finite_cutoff_rejected() {
        let config = NetworkScoringConfig::with_cutoff(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PrioritiserConfig {
            network: NetworkScoringConfig::with_cutoff(0.4),
            output: OutputConfig::default(),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PrioritiserConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("phenolink-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "network": { "high_quality_cutoff": 0.3 } }"#).unwrap();
        let config = PrioritiserConfig::from_json(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.network.high_quality_cutoff, 0.3);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_yml_format_loads_from_toml_file() {
        let path = std::env::temp_dir().join(format!("phenolink-config-yml-{}.toml", std::process::id()));
        std::fs::write(&path, "[output]\nformat = \"yml\"\ntop_n = 5\n").unwrap();
        let config = PrioritiserConfig::from_toml(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.output.output_format().unwrap(), OutputFormat::Yaml);
        assert_eq!(config.output.top_n, 5);
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = PrioritiserConfig {
            network: NetworkScoringConfig {
                hit_selection: HitSelection::StrictImprovement,
                ..NetworkScoringConfig::with_cutoff(0.7)
            },
            output: OutputConfig { format: "json".to_string(), top_n: 10 },
        };
        let path = std::env::temp_dir().join(format!("phenolink-config-save-{}.toml", std::process::id()));
        config.to_toml(path.to_str().unwrap()).unwrap();
        let loaded = PrioritiserConfig::from_toml(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.unwrap(), config);
    }
}
