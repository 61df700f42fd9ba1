//! Distro-info feed lookup
//!
//! Reads the Ubuntu distro-info CSV (header line, then one comma-separated
//! line per release) and resolves the EOL date of a base image.
//!
//! Rows are selected by a raw prefix match on the line text, so `"22"`
//! matches both `22.04` and `22.10` and the first one listed wins. Rows are
//! zipped against the header by position; short rows simply lack their
//! trailing columns.

use crate::timestamp::parse_distro_eol;
use crate::types::{EolError, EolTarget, Result, Timestamp};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Anything that can resolve the EOL of a base image version
pub trait BaseEolSource {
    /// EOL of the first release whose feed line starts with `base`
    fn base_eol(&self, base: &str, target: EolTarget) -> Result<Timestamp>;
}

/// One release line of the feed, keyed by header column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroRow {
    fields: Vec<(String, String)>,
}

impl DistroRow {
    /// Value of a column, if the row is long enough to carry it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names present in this row, in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// A parsed distro-info feed
///
/// Loading one of these and reusing it for a batch of lookups avoids
/// re-reading the feed for every track.
#[derive(Debug, Clone)]
pub struct DistroInfo {
    /// Where the feed came from (used in error messages)
    source: String,
    headers: Vec<String>,
    lines: Vec<String>,
}

impl DistroInfo {
    /// Read and parse a feed file
    pub fn from_path(path: &Path) -> Result<Self> {
        log::debug!("Reading distro info: {:?}", path);

        let file = File::open(path).map_err(|source| EolError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(BufReader::new(file), &path.display().to_string()).map_err(|e| match e {
            EolError::Io { source, .. } => EolError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse a feed from any buffered reader
    ///
    /// `source` names the feed in `BaseNotFound` errors.
    pub fn parse<R: BufRead>(reader: R, source: &str) -> Result<Self> {
        let mut lines = reader.lines();

        let headers = match lines.next() {
            Some(header) => header
                .map_err(|e| io_error(source, e))?
                .trim()
                .split(',')
                .map(str::to_string)
                .collect(),
            None => {
                log::warn!("Distro info {} is empty", source);
                Vec::new()
            }
        };

        let lines = lines
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|e| io_error(source, e))?;

        log::debug!(
            "Parsed distro info {}: {} columns, {} releases",
            source,
            headers.len(),
            lines.len()
        );

        Ok(Self {
            source: source.to_string(),
            headers,
            lines,
        })
    }

    /// Header column names
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// First release whose raw line starts with `base`
    pub fn find_release(&self, base: &str) -> Option<DistroRow> {
        self.lines
            .iter()
            .find(|line| line.starts_with(base))
            .map(|line| DistroRow {
                fields: self
                    .headers
                    .iter()
                    .cloned()
                    .zip(line.trim().split(',').map(str::to_string))
                    .collect(),
            })
    }
}

impl BaseEolSource for DistroInfo {
    /// EOL of the first release whose line starts with `base`
    ///
    /// Fails with `BaseNotFound` when no line matches. A release that lacks
    /// the `target` column, or carries it as an empty cell, fails with
    /// `EolTargetMissing`; an empty cell is reported as missing rather than
    /// as an unparseable date. Any other malformed date is a `Parse` error.
    fn base_eol(&self, base: &str, target: EolTarget) -> Result<Timestamp> {
        let release = self
            .find_release(base)
            .ok_or_else(|| EolError::BaseNotFound {
                base: base.to_string(),
                feed: self.source.clone(),
            })?;

        let eol = release
            .get(target.column())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| EolError::EolTargetMissing {
                base: base.to_string(),
                target,
            })?;

        parse_distro_eol(eol)
    }
}

/// Feed file that is re-read on every lookup
#[derive(Debug, Clone)]
pub struct DistroInfoFile {
    path: PathBuf,
}

impl DistroInfoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the feed file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole feed once, for a batch of lookups
    pub fn load(&self) -> Result<DistroInfo> {
        DistroInfo::from_path(&self.path)
    }
}

impl BaseEolSource for DistroInfoFile {
    fn base_eol(&self, base: &str, target: EolTarget) -> Result<Timestamp> {
        self.load()?.base_eol(base, target)
    }
}

/// Look up the EOL of a base image version, reading the feed at `feed`
///
/// # Arguments
/// * `feed` - Path to the distro-info CSV, usually [`crate::UBUNTU_DISTRO_INFO`]
/// * `base` - Version identifier prefix, e.g. `"22.04"`
/// * `target` - Support tier column to read
///
/// # Example
/// ```no_run
/// use track_eol::{get_base_eol, EolTarget, UBUNTU_DISTRO_INFO};
/// use std::path::Path;
///
/// let eol = get_base_eol(Path::new(UBUNTU_DISTRO_INFO), "22.04", EolTarget::Eol).unwrap();
/// println!("22.04 EOL: {}", eol);
/// ```
pub fn get_base_eol(feed: &Path, base: &str, target: EolTarget) -> Result<Timestamp> {
    DistroInfoFile::new(feed).base_eol(base, target)
}

fn io_error(source: &str, e: std::io::Error) -> EolError {
    EolError::Io {
        path: PathBuf::from(source),
        source: e,
    }
}
