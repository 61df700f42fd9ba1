//! EOL check configuration
//!
//! The handful of knobs the outer caller needs: where the distro-info feed
//! lives, which support tier to compare against and an optional fixed
//! reference time.

use crate::types::{EolTarget, Timestamp, UBUNTU_DISTRO_INFO};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EolConfig {
    /// Path of the distro-info CSV feed
    #[serde(default = "default_distro_info")]
    pub distro_info: PathBuf,

    /// Base image support tier to compare track EOLs against
    #[serde(default)]
    pub eol_target: EolTarget,

    /// Fixed "now" for EOL evaluation (default: system clock)
    #[serde(default)]
    pub reference_time: Option<Timestamp>,
}

fn default_distro_info() -> PathBuf {
    PathBuf::from(UBUNTU_DISTRO_INFO)
}

impl Default for EolConfig {
    fn default() -> Self {
        Self {
            distro_info: default_distro_info(),
            eol_target: EolTarget::default(),
            reference_time: None,
        }
    }
}

impl EolConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: read the feed from another path
    pub fn with_distro_info(mut self, path: impl Into<PathBuf>) -> Self {
        self.distro_info = path.into();
        self
    }

    /// Builder method: compare against another support tier
    pub fn with_eol_target(mut self, target: EolTarget) -> Self {
        self.eol_target = target;
        self
    }

    /// Builder method: evaluate as of a fixed instant
    pub fn with_reference_time(mut self, now: Timestamp) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Instant track EOLs are compared against
    pub fn now(&self) -> Timestamp {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = EolConfig::new();
        assert_eq!(config.distro_info, PathBuf::from("/usr/share/distro-info/ubuntu.csv"));
        assert_eq!(config.eol_target, EolTarget::Eol);
        assert!(config.reference_time.is_none());
    }

    #[test]
    fn test_builder() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let config = EolConfig::new()
            .with_distro_info("fixtures/ubuntu.csv")
            .with_eol_target(EolTarget::EolEsm)
            .with_reference_time(now);

        assert_eq!(config.distro_info, PathBuf::from("fixtures/ubuntu.csv"));
        assert_eq!(config.eol_target, EolTarget::EolEsm);
        assert_eq!(config.now(), now);
    }
}
