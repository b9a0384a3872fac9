//! Output rendering for a finished run.
//!
//! Human output is a final status line on top of the workflow log; the
//! optional JSON report carries per-file results, the failing list, counts
//! and the remediation command.

use crate::error::{Error, Result};
use crate::models::RunReport;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::Write;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Print the closing status line for a run.
pub fn print_status(out: &mut impl Write, report: &RunReport) -> std::io::Result<()> {
    let c = report.counts();
    let line = format!(
        "— Summary — files={} formatted={} failed={}",
        c.total, c.formatted, c.failed
    );
    if !use_colors() {
        return writeln!(out, "{}", line);
    }
    if report.is_success() {
        writeln!(out, "{}", line.green().bold())
    } else {
        writeln!(out, "{}", line.red().bold())
    }
}

/// Compose the JSON report (pure) for writing or testing.
pub fn compose_report_json(report: &RunReport, remediation: Option<&str>) -> JsonVal {
    json!({
        "results": report.results,
        "failed": report.failed,
        "summary": report.counts(),
        "remediation": remediation,
    })
}

/// Write the JSON report to `path`, replacing any previous file.
pub fn write_report(path: &Path, value: &JsonVal) -> Result<()> {
    let mut s = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Config(format!("failed to encode report: {}", e)))?;
    s.push('\n');
    std::fs::write(path, s)?;
    Ok(())
}
