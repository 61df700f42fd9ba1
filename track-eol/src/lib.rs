//! Track EOL Library
//!
//! Decides whether release tracks (e.g. `1.0-22.04`) have reached their end of
//! life, and checks that no track is declared to outlive the Ubuntu base
//! image it is built on.
//!
//! # Architecture
//!
//! - Track EOL evaluation against an injected reference instant
//! - Base image EOL lookup in the distro-info CSV feed
//! - Cross-validation of track EOL against base EOL
//! - Markdown warning report for the violations found
//!
//! The library does NOT:
//! - Read track metadata files
//! - Decide what to do with expired tracks or violations
//! - Cache the feed behind the caller's back
//!
//! Diagnostics go through a [`DiagnosticsSink`] passed in by the caller; the
//! command-line application (track-eol-cli) wires it to the `log` crate.
//!
//! # Example Usage
//!
//! ```no_run
//! use track_eol::{
//!     generate_base_eol_exceed_warning, is_track_eol, track_eol_exceeds_base_eol,
//!     DistroInfoFile, EolConfig, LogSink, TrackRecord,
//! };
//!
//! let config = EolConfig::new();
//! let distro = DistroInfoFile::new(&config.distro_info).load().unwrap();
//! let record = TrackRecord::new("2030-01-01T00:00:00Z");
//!
//! let mut violations = Vec::new();
//! if !is_track_eol(&record, Some("1.0-22.04"), config.now(), &LogSink).unwrap() {
//!     let check = track_eol_exceeds_base_eol(
//!         &distro,
//!         "1.0-22.04",
//!         record.end_of_life.as_deref().unwrap(),
//!         None,
//!         config.eol_target,
//!         &LogSink,
//!     )
//!     .unwrap();
//!     violations.extend(check.into_violation());
//! }
//!
//! let (title, body) = generate_base_eol_exceed_warning(&violations);
//! println!("{}\n{}", title, body);
//! ```

// Public modules
pub mod config;
pub mod diagnostics;
pub mod distro;
pub mod report;
pub mod timestamp;
pub mod track;
pub mod types;
pub mod validate;

// Re-export main types for convenience
pub use config::EolConfig;
pub use diagnostics::{Diagnostic, DiagnosticLevel, DiagnosticsSink, LogSink, MemorySink};
pub use distro::{get_base_eol, BaseEolSource, DistroInfo, DistroInfoFile, DistroRow};
pub use report::{generate_base_eol_exceed_warning, BASE_EOL_WARNING_TITLE};
pub use timestamp::{format_distro_date, parse_distro_eol, parse_track_eol};
pub use track::is_track_eol;
pub use validate::track_eol_exceeds_base_eol;
pub use types::{
    CrossCheck, EolError, EolTarget, Result, Timestamp, TrackRecord, Violation, BASE_DISTRO,
    DISTRO_EOL_FORMAT, TRACK_EOL_FORMAT, UBUNTU_DISTRO_INFO, VERSION_ID_PATTERN,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
