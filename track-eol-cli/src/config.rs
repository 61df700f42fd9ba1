//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use track_eol::EolConfig;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Releases file mapping track names to their metadata
    pub tracks: Option<PathBuf>,
    #[serde(default)]
    pub eol: EolConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
    /// Exit with a failure status when any track outlives its base
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use track_eol::EolTarget;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            tracks = "oci/mock-rock/_releases.json"

            [eol]
            distro_info = "fixtures/ubuntu.csv"
            eol_target = "eol-esm"
            reference_time = "2025-01-01T00:00:00Z"

            [output]
            format = "json"
            strict = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.tracks, Some(PathBuf::from("oci/mock-rock/_releases.json")));
        assert_eq!(config.eol.distro_info, PathBuf::from("fixtures/ubuntu.csv"));
        assert_eq!(config.eol.eol_target, EolTarget::EolEsm);
        assert_eq!(
            config.eol.reference_time,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.strict);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.tracks.is_none());
        assert_eq!(config.eol, EolConfig::default());
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(!config.output.strict);
    }
}
