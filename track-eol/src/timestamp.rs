//! EOL timestamp parsing
//!
//! Track EOLs carry a time of day, distro-info EOLs are plain dates taken as
//! UTC midnight.

use crate::types::{EolError, Result, Timestamp, DISTRO_EOL_FORMAT, TRACK_EOL_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse a track `end-of-life` value such as `2025-04-30T00:00:00Z`
pub fn parse_track_eol(value: &str) -> Result<Timestamp> {
    let naive = NaiveDateTime::parse_from_str(value, TRACK_EOL_FORMAT).map_err(|source| {
        EolError::Parse {
            value: value.to_string(),
            format: TRACK_EOL_FORMAT,
            source,
        }
    })?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Parse a distro-info date such as `2027-04-01` as midnight UTC
pub fn parse_distro_eol(value: &str) -> Result<Timestamp> {
    let date = NaiveDate::parse_from_str(value, DISTRO_EOL_FORMAT).map_err(|source| {
        EolError::Parse {
            value: value.to_string(),
            format: DISTRO_EOL_FORMAT,
            source,
        }
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Render a timestamp as a distro-info date, dropping the time of day
pub fn format_distro_date(timestamp: &Timestamp) -> String {
    timestamp.format(DISTRO_EOL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_track_eol() {
        let ts = parse_track_eol("2024-04-30T12:34:56Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 4, 30, 12, 34, 56).unwrap());
    }

    #[test]
    fn test_parse_distro_eol_is_midnight() {
        let ts = parse_distro_eol("2027-04-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2027, 4, 1, 0, 0, 0).unwrap());
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_rejects_wrong_formats() {
        // Offsets other than the literal Z are not accepted
        assert!(matches!(
            parse_track_eol("2024-04-30T00:00:00+02:00"),
            Err(EolError::Parse { format: TRACK_EOL_FORMAT, .. })
        ));
        assert!(parse_track_eol("2024-04-30").is_err());
        assert!(parse_distro_eol("2024-04-30T00:00:00Z").is_err());
        assert!(parse_distro_eol("").is_err());
    }

    #[test]
    fn test_format_drops_time_of_day() {
        let ts = parse_track_eol("2030-01-01T23:59:59Z").unwrap();
        assert_eq!(format_distro_date(&ts), "2030-01-01");
        assert_eq!(parse_distro_eol(&format_distro_date(&ts)).unwrap().date_naive(), ts.date_naive());
    }
}
