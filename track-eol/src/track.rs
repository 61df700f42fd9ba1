//! Track EOL evaluation

use crate::diagnostics::DiagnosticsSink;
use crate::timestamp::parse_track_eol;
use crate::types::{Result, Timestamp, TrackRecord};

/// Decide whether a track has reached its end of life at `now`
///
/// A record without `end-of-life` is treated as expired. A malformed
/// `end-of-life` value is returned as a parse error.
///
/// # Arguments
/// * `record` - Track metadata
/// * `track_name` - Name used in diagnostics only
/// * `now` - Reference instant to compare against
/// * `sink` - Receives the missing-EOL error and the expiry warning
pub fn is_track_eol(
    record: &TrackRecord,
    track_name: Option<&str>,
    now: Timestamp,
    sink: &dyn DiagnosticsSink,
) -> Result<bool> {
    let Some(eol_str) = record.end_of_life.as_deref() else {
        sink.error(&format!(
            "No EOL provided for {}! Assuming EOL is now",
            track_name.unwrap_or("UNNAMED TRACK")
        ));
        return Ok(true);
    };

    let eol_date = parse_track_eol(eol_str)?;
    let is_eol = eol_date < now;

    if is_eol {
        sink.warn(&format!(
            "Removing EOL track \"{}\", EOL: {}",
            track_name.unwrap_or("UNKNOWN TRACK"),
            eol_date
        ));
    }

    Ok(is_eol)
}
