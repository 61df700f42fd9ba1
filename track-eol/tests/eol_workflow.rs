// End-to-end check of a releases mapping against a distro-info feed file
use std::io::Write;

use chrono::{TimeZone, Utc};
use tempfile::NamedTempFile;
use track_eol::{
    generate_base_eol_exceed_warning, get_base_eol, is_track_eol, track_eol_exceeds_base_eol,
    CrossCheck, DiagnosticLevel, DistroInfoFile, EolConfig, EolTarget, MemorySink, TrackRecord,
};

const UBUNTU_CSV: &str = "\
version,codename,series,created,release,eol,eol-server,eol-esm
20.04 LTS,Focal Fossa,focal,2019-10-17,2020-04-23,2025-05-29,2025-05-29,2030-04-23
22.04 LTS,Jammy Jellyfish,jammy,2021-10-14,2022-04-21,2027-04-01,2027-04-01,2032-04-09
22.10,Kinetic Kudu,kinetic,2022-04-21,2022-10-20,2023-07-20
24.04 LTS,Noble Numbat,noble,2023-10-19,2024-04-25,2029-05-31,2029-05-31,2034-04-25
";

fn write_feed() -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(UBUNTU_CSV.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn releases_are_pruned_and_cross_checked() {
    let feed = write_feed();
    let config = EolConfig::new()
        .with_distro_info(feed.path())
        .with_reference_time(Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap());
    let distro = DistroInfoFile::new(&config.distro_info).load().unwrap();
    let sink = MemorySink::new();

    let releases = vec![
        ("1.0-20.04", TrackRecord::new("2025-05-01T00:00:00Z")),
        ("1.0-22.04", TrackRecord::new("2030-01-01T00:00:00Z")),
        ("1.1-22.04", TrackRecord::new("2026-12-31T00:00:00Z")),
        ("2.0-24.04", TrackRecord::new("2029-05-31T00:00:00Z")),
        ("latest", TrackRecord::new("2031-01-01T00:00:00Z")),
        ("pinned", TrackRecord::new("2031-01-01T00:00:00Z").with_base("ubuntu:24.04")),
        ("unset", TrackRecord::default()),
    ];

    let mut expired = Vec::new();
    let mut skipped = Vec::new();
    let mut violations = Vec::new();

    for (name, record) in &releases {
        if is_track_eol(record, Some(*name), config.now(), &sink).unwrap() {
            expired.push(*name);
            continue;
        }

        let track_eol = record.end_of_life.as_deref().unwrap();
        match track_eol_exceeds_base_eol(
            &distro,
            name,
            track_eol,
            record.base.as_deref(),
            config.eol_target,
            &sink,
        )
        .unwrap()
        {
            CrossCheck::Exceeds(violation) => violations.push(violation),
            CrossCheck::Skipped => skipped.push(*name),
            CrossCheck::WithinBase => {}
        }
    }

    assert_eq!(expired, vec!["1.0-20.04", "unset"]);
    assert_eq!(skipped, vec!["latest"]);
    assert_eq!(
        violations.iter().map(|v| v.track.as_str()).collect::<Vec<_>>(),
        vec!["1.0-22.04", "pinned"]
    );
    assert_eq!(sink.messages(DiagnosticLevel::Error).len(), 1);

    let (_, body) = generate_base_eol_exceed_warning(&violations);
    assert!(body.contains("| 1.0-22.04 | ubuntu:22.04 | 2030-01-01 | 2027-04-01 |"));
    assert!(body.contains("| pinned | ubuntu:24.04 | 2031-01-01 | 2029-05-31 |"));
}

#[test]
fn base_eol_lookup_by_prefix_from_file() {
    let feed = write_feed();

    let jammy = get_base_eol(feed.path(), "22", EolTarget::Eol).unwrap();
    assert_eq!(jammy, Utc.with_ymd_and_hms(2027, 4, 1, 0, 0, 0).unwrap());

    let kinetic = get_base_eol(feed.path(), "22.10", EolTarget::Eol).unwrap();
    assert_eq!(kinetic, Utc.with_ymd_and_hms(2023, 7, 20, 0, 0, 0).unwrap());

    assert!(get_base_eol(feed.path(), "22.10", EolTarget::EolEsm).is_err());
    assert!(get_base_eol(feed.path(), "26.04", EolTarget::Eol).is_err());
}

#[test]
fn file_source_matches_loaded_feed() {
    let feed = write_feed();
    let file = DistroInfoFile::new(feed.path());
    let loaded = file.load().unwrap();
    let sink = MemorySink::new();

    let from_file = track_eol_exceeds_base_eol(
        &file,
        "1.0-22.04",
        "2030-01-01T00:00:00Z",
        None,
        EolTarget::Eol,
        &sink,
    )
    .unwrap();
    let from_loaded = track_eol_exceeds_base_eol(
        &loaded,
        "1.0-22.04",
        "2030-01-01T00:00:00Z",
        None,
        EolTarget::Eol,
        &sink,
    )
    .unwrap();

    assert_eq!(from_file, from_loaded);
}
