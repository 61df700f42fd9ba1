//! Warning report for tracks that outlive their base image

use crate::types::Violation;

/// Title of the base EOL warning
pub const BASE_EOL_WARNING_TITLE: &str = "Found tracks with EOL date exceeding base image's EOL date";

/// Build the title and markdown body listing every violation
///
/// Rows keep the order of `violations`. With no violations the body still
/// carries the table header and the closing advice line.
pub fn generate_base_eol_exceed_warning(violations: &[Violation]) -> (String, String) {
    let table_records = violations
        .iter()
        .map(|v| format!("| {} | {} | {} | {} |", v.track, v.base, v.track_eol, v.base_eol))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "Following tracks have an EOL date that exceeds the base image's EOL date:\n\
         | Track | Base | Track EOL Date | Base EOL Date |\n\
         |-------|------|----------------|---------------|\n\
         {}\n\
         Please check the EOL date of the base image and the track.\n",
        table_records
    );

    (BASE_EOL_WARNING_TITLE.to_string(), body)
}
