//! Track EOL CLI Application
//!
//! Command-line front end for the track-eol library. It reads a releases
//! file and:
//! - Lists tracks that are past their end of life
//! - Checks the remaining tracks against their Ubuntu base image EOL
//! - Prints a markdown or JSON report of the tracks outliving their base

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use track_eol::{parse_track_eol, EolTarget, LogSink, Timestamp};

mod check;
mod config;
mod report;
mod tracks;

use config::{AppConfig, OutputFormat};

/// Track EOL - Check release tracks against their base image EOL
#[derive(Parser, Debug)]
#[command(name = "track-eol-cli")]
#[command(about = "Check release track EOL dates against Ubuntu base image EOL", long_about = None)]
#[command(version)]
struct Args {
    /// Releases JSON file (track name -> {"end-of-life": ...})
    #[arg(short, long, value_name = "FILE")]
    tracks: Option<PathBuf>,

    /// Path to the distro-info CSV feed
    #[arg(long, value_name = "FILE")]
    distro_info: Option<PathBuf>,

    /// Base image support tier to compare against (eol, eol-server, eol-esm)
    #[arg(long, value_name = "TARGET")]
    eol_target: Option<EolTarget>,

    /// Evaluate as of this instant instead of now (YYYY-MM-DDTHH:MM:SSZ)
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_reference_time)]
    now: Option<Timestamp>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exit with status 1 when a track outlives its base image
    #[arg(long)]
    strict: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Track EOL CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using track-eol library v{}", track_eol::VERSION);

    let config = resolve_config(&args)?;

    let tracks_path = config
        .tracks
        .as_deref()
        .context("No releases file given (use --tracks or set `tracks` in the config file)")?;
    let releases = tracks::load_releases(tracks_path)?;

    let summary = check::check_releases(&releases, &config.eol, &LogSink)?;

    let rendered = report::render(&summary, config.output.format)?;
    report::write_report(&rendered, config.output.path.as_deref())?;

    if config.output.strict && !summary.violations.is_empty() {
        log::error!(
            "{} track(s) outlive their base image",
            summary.violations.len()
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(tracks) = &args.tracks {
        config.tracks = Some(tracks.clone());
    }
    if let Some(distro_info) = &args.distro_info {
        config.eol.distro_info = distro_info.clone();
    }
    if let Some(target) = args.eol_target {
        config.eol.eol_target = target;
    }
    if let Some(now) = args.now {
        config.eol.reference_time = Some(now);
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(output) = &args.output {
        config.output.path = Some(output.clone());
    }
    config.output.strict |= args.strict;

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn parse_reference_time(value: &str) -> std::result::Result<Timestamp, String> {
    parse_track_eol(value).map_err(|e| e.to_string())
}

/// Level for `-v`/`-q`; `-q` wins over any number of `-v`
fn log_level(verbose: u8, quiet: bool) -> log::LevelFilter {
    use log::LevelFilter;

    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Initialize logging; `RUST_LOG` can still refine individual targets
fn init_logging(verbose: u8, quiet: bool) {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .init();
}
