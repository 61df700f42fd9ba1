//! Core types for the track EOL library
//!
//! Track records, EOL targets, cross-validation outcomes and the error type.
//! Records are validated into these types once at the boundary so the
//! evaluator and cross-validator never look up loosely-typed keys.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Timestamp type used throughout the library (always UTC)
pub type Timestamp = DateTime<Utc>;

/// Result type for EOL operations
pub type Result<T> = std::result::Result<T, EolError>;

/// Format of a track's `end-of-life` value, e.g. `2025-04-30T00:00:00Z`
pub const TRACK_EOL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format of the EOL columns in the distro-info feed, e.g. `2027-04-01`
pub const DISTRO_EOL_FORMAT: &str = "%Y-%m-%d";

/// Well-known location of the Ubuntu distro-info feed
pub const UBUNTU_DISTRO_INFO: &str = "/usr/share/distro-info/ubuntu.csv";

/// Distribution prefix used for canonical base references
pub const BASE_DISTRO: &str = "ubuntu";

lazy_static! {
    /// Ubuntu version identifier, e.g. `22.04`
    pub static ref VERSION_ID_PATTERN: Regex = Regex::new(r"^\d{1,2}\.\d{1,2}$").unwrap();
}

/// Errors raised by EOL evaluation and lookup
#[derive(Debug, thiserror::Error)]
pub enum EolError {
    #[error("Failed to parse '{value}' with format '{format}': {source}")]
    Parse {
        value: String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Base image {base} not found in {feed}")]
    BaseNotFound { base: String, feed: String },

    #[error("Base image {base} does not have {target}")]
    EolTargetMissing { base: String, target: EolTarget },

    #[error("Unknown EOL target '{0}' (expected eol, eol-server or eol-esm)")]
    InvalidEolTarget(String),

    #[error("Failed to read distro info {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Metadata of a single release track, as found in a releases file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Absolute EOL timestamp in [`TRACK_EOL_FORMAT`]
    #[serde(rename = "end-of-life", default, skip_serializing_if = "Option::is_none")]
    pub end_of_life: Option<String>,
    /// Explicit base image reference (e.g. `ubuntu:22.04`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl TrackRecord {
    /// Create a record with the given EOL timestamp string
    pub fn new(end_of_life: impl Into<String>) -> Self {
        Self {
            end_of_life: Some(end_of_life.into()),
            base: None,
        }
    }

    /// Builder method: pin the base image instead of inferring it from the track name
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

/// Which support tier's EOL to consult for a base image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EolTarget {
    /// Standard lifecycle
    #[default]
    Eol,
    /// Server lifecycle
    EolServer,
    /// Extended security maintenance
    EolEsm,
}

impl EolTarget {
    /// Column name of this target in the distro-info feed
    pub fn column(&self) -> &'static str {
        match self {
            EolTarget::Eol => "eol",
            EolTarget::EolServer => "eol-server",
            EolTarget::EolEsm => "eol-esm",
        }
    }
}

impl fmt::Display for EolTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for EolTarget {
    type Err = EolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eol" => Ok(EolTarget::Eol),
            "eol-server" => Ok(EolTarget::EolServer),
            "eol-esm" => Ok(EolTarget::EolEsm),
            other => Err(EolError::InvalidEolTarget(other.to_string())),
        }
    }
}

/// A track whose EOL outlives the EOL of its base image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Track name, e.g. `1.0-22.04`
    pub track: String,
    /// Canonical base reference, e.g. `ubuntu:22.04`
    pub base: String,
    /// Track EOL truncated to [`DISTRO_EOL_FORMAT`]
    pub track_eol: String,
    /// Base EOL in [`DISTRO_EOL_FORMAT`]
    pub base_eol: String,
}

/// Outcome of checking one track against its base image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossCheck {
    /// Track EOL is later than the base EOL
    Exceeds(Violation),
    /// Track EOL is on or before the base EOL
    WithinBase,
    /// No base could be inferred (aliased track); nothing was compared
    Skipped,
}

impl CrossCheck {
    /// Collapse into "violation or nothing", treating a skip as no violation
    pub fn into_violation(self) -> Option<Violation> {
        match self {
            CrossCheck::Exceeds(violation) => Some(violation),
            CrossCheck::WithinBase | CrossCheck::Skipped => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CrossCheck::Skipped)
    }
}
