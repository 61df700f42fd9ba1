//! Track vs. base image EOL cross-validation

use crate::diagnostics::DiagnosticsSink;
use crate::distro::BaseEolSource;
use crate::timestamp::{format_distro_date, parse_track_eol};
use crate::types::{CrossCheck, EolTarget, Result, Violation, BASE_DISTRO, VERSION_ID_PATTERN};

/// Check whether a track's EOL goes past the EOL of its base image
///
/// # Arguments
/// * `source` - Where base EOLs are looked up
/// * `track` - Track name, e.g. `"1.0-22.04"`
/// * `track_eol` - Track EOL in [`crate::TRACK_EOL_FORMAT`]
/// * `base` - Base reference such as `"ubuntu:22.04"`; inferred from the
///   text after the last `-` of `track` when `None`
/// * `target` - Support tier of the base to compare against
/// * `sink` - Receives skip and violation warnings
///
/// # Returns
/// `CrossCheck::Skipped` when no base is given and none can be inferred,
/// otherwise the comparison result. Lookup and parse errors propagate.
pub fn track_eol_exceeds_base_eol(
    source: &dyn BaseEolSource,
    track: &str,
    track_eol: &str,
    base: Option<&str>,
    target: EolTarget,
    sink: &dyn DiagnosticsSink,
) -> Result<CrossCheck> {
    let base_version_id = match base.filter(|b| !b.is_empty()) {
        Some(base) => last_segment(base, ':'),
        None => {
            let inferred = last_segment(track, '-');
            if !VERSION_ID_PATTERN.is_match(inferred) {
                sink.warn(&format!(
                    "Track-base-EOL validation skipped for aliased track {}",
                    track
                ));
                return Ok(CrossCheck::Skipped);
            }
            inferred
        }
    };

    let base_eol = source.base_eol(base_version_id, target)?;
    let eol_date = parse_track_eol(track_eol)?;

    if eol_date <= base_eol {
        return Ok(CrossCheck::WithinBase);
    }

    sink.warn(&format!(
        "Track {} has an EOL date {} that exceeds the base image EOL date {}",
        track, eol_date, base_eol
    ));

    Ok(CrossCheck::Exceeds(Violation {
        track: track.to_string(),
        base: format!("{}:{}", BASE_DISTRO, base_version_id),
        track_eol: format_distro_date(&eol_date),
        base_eol: format_distro_date(&base_eol),
    }))
}

fn last_segment(value: &str, separator: char) -> &str {
    value.rsplit(separator).next().unwrap_or(value)
}
