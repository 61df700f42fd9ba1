//! Report rendering
//!
//! Turns a [`RunSummary`] into markdown or JSON and writes it to a file or
//! stdout.

use crate::check::RunSummary;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use track_eol::generate_base_eol_exceed_warning;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a RunSummary,
    warning: Option<Warning>,
}

#[derive(Serialize)]
struct Warning {
    title: String,
    body: String,
}

/// Render the summary in the requested format
pub fn render(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(summary)),
        OutputFormat::Json => render_json(summary),
    }
}

fn render_markdown(summary: &RunSummary) -> String {
    let mut out = format!("EOL check as of {}\n\n", summary.reference_time);

    if summary.expired.is_empty() {
        out.push_str("No expired tracks.\n");
    } else {
        out.push_str(&format!("Expired tracks ({}):\n", summary.expired.len()));
        for track in &summary.expired {
            out.push_str(&format!("- {}\n", track));
        }
    }

    if !summary.skipped.is_empty() {
        out.push_str(&format!(
            "\nBase check skipped for aliased tracks: {}\n",
            summary.skipped.join(", ")
        ));
    }

    if summary.violations.is_empty() {
        out.push_str("\nNo track EOL exceeds its base image EOL.\n");
    } else {
        let (title, body) = generate_base_eol_exceed_warning(&summary.violations);
        out.push_str(&format!("\n## {}\n\n{}", title, body));
    }

    out
}

fn render_json(summary: &RunSummary) -> Result<String> {
    let warning = (!summary.violations.is_empty()).then(|| {
        let (title, body) = generate_base_eol_exceed_warning(&summary.violations);
        Warning { title, body }
    });

    serde_json::to_string_pretty(&JsonReport { summary, warning })
        .context("Failed to serialize report")
}

/// Write a rendered report to `path`, or stdout when `None`
pub fn write_report(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
