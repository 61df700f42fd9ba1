//! Release validation run
//!
//! Drops expired tracks, then checks every remaining track against its base
//! image. The distro-info feed is loaded once per run.

use crate::tracks::Releases;
use anyhow::{Context, Result};
use serde::Serialize;
use track_eol::{
    is_track_eol, track_eol_exceeds_base_eol, BaseEolSource, CrossCheck, DiagnosticsSink,
    DistroInfoFile, EolConfig, EolTarget, Timestamp, TrackRecord, Violation,
};

/// Outcome of validating a releases file
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub reference_time: Timestamp,
    /// Tracks past their EOL (or without one)
    pub expired: Vec<String>,
    /// Tracks whose base could not be inferred
    pub skipped: Vec<String>,
    pub violations: Vec<Violation>,
}

/// Validate every track of `releases`
pub fn check_releases(
    releases: &Releases,
    config: &EolConfig,
    sink: &dyn DiagnosticsSink,
) -> Result<RunSummary> {
    let now = config.now();
    log::info!("Evaluating {} tracks as of {}", releases.len(), now);

    let (active, expired) = prune_expired(releases, now, sink)?;

    let (skipped, violations) = if active.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        let feed = DistroInfoFile::new(&config.distro_info);
        let distro = feed
            .load()
            .with_context(|| format!("Failed to load distro info {:?}", feed.path()))?;
        cross_check(&active, &distro, config.eol_target, sink)?
    };

    Ok(RunSummary {
        reference_time: now,
        expired,
        skipped,
        violations,
    })
}

/// Split tracks into still-supported ones and the names of expired ones
pub fn prune_expired<'a>(
    releases: &'a Releases,
    now: Timestamp,
    sink: &dyn DiagnosticsSink,
) -> Result<(Vec<(&'a str, &'a TrackRecord)>, Vec<String>)> {
    let mut active = Vec::new();
    let mut expired = Vec::new();

    for (name, record) in releases {
        let is_eol = is_track_eol(record, Some(name.as_str()), now, sink)
            .with_context(|| format!("Invalid end-of-life for track {}", name))?;
        if is_eol {
            expired.push(name.clone());
        } else {
            active.push((name.as_str(), record));
        }
    }

    Ok((active, expired))
}

/// Cross-check tracks against their base image, returning skipped track names and violations
pub fn cross_check(
    tracks: &[(&str, &TrackRecord)],
    source: &dyn BaseEolSource,
    target: EolTarget,
    sink: &dyn DiagnosticsSink,
) -> Result<(Vec<String>, Vec<Violation>)> {
    let mut skipped = Vec::new();
    let mut violations = Vec::new();

    for &(name, record) in tracks {
        let Some(track_eol) = record.end_of_life.as_deref() else {
            continue;
        };

        let check = track_eol_exceeds_base_eol(
            source,
            name,
            track_eol,
            record.base.as_deref(),
            target,
            sink,
        )
        .with_context(|| format!("Failed to check track {} against its base", name))?;

        match check {
            CrossCheck::Exceeds(violation) => violations.push(violation),
            CrossCheck::Skipped => skipped.push(name.to_string()),
            CrossCheck::WithinBase => log::debug!("Track {} is within its base EOL", name),
        }
    }

    Ok((skipped, violations))
}
