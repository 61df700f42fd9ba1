//! Releases file loading

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use track_eol::TrackRecord;

/// Track name -> track metadata, ordered by name
pub type Releases = BTreeMap<String, TrackRecord>;

/// Load a releases JSON file (`{"1.0-22.04": {"end-of-life": "..."}, ...}`)
pub fn load_releases(path: &Path) -> Result<Releases> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read releases file: {:?}", path))?;

    parse_releases(&content).with_context(|| format!("Failed to parse releases file: {:?}", path))
}

pub fn parse_releases(content: &str) -> Result<Releases> {
    let releases: Releases = serde_json::from_str(content)?;
    log::debug!("Loaded {} tracks", releases.len());
    Ok(releases)
}
