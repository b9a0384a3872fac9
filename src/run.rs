//! Run orchestration.
//!
//! Validate platform → discover files → check each file inside one log
//! group → build summary → write summary (and optional JSON report).
//! Every stage hands its result to the next; the only state is the
//! `RunReport` being filled by the check loop.

use crate::check;
use crate::config::Effective;
use crate::discovery::{self, Strategy};
use crate::error::{Error, Result};
use crate::models::{CheckResult, RunReport};
use crate::output;
use crate::process;
use crate::summary::{self, SummaryDocument};
use crate::workflow;
use std::io::Write;

/// The only host OS the check runs on.
pub const SUPPORTED_PLATFORM: &str = "linux";

const GROUP_TITLE: &str = "Check all files";
const NOT_FORMATTED: &str = "File not formatted correctly";

pub fn host_platform() -> &'static str {
    std::env::consts::OS
}

pub fn validate_platform(os: &str) -> Result<()> {
    if os != SUPPORTED_PLATFORM {
        return Err(Error::UnsupportedPlatform { os: os.to_string() });
    }
    Ok(())
}

/// What a completed run produced, before the aggregate outcome is decided.
#[derive(Debug)]
pub struct Outcome {
    pub report: RunReport,
    pub summary: SummaryDocument,
}

/// Check `files` one at a time, in order, logging inside a single group.
pub fn check_all(files: &[String], eff: &Effective, out: &mut impl Write) -> Result<RunReport> {
    workflow::start_group(out, GROUP_TITLE)?;
    let mut report = RunReport::default();
    for file in files {
        writeln!(out, "Checking file: '{}'", file)?;
        let formatted =
            check::check_file(&eff.formatter, file, &eff.format_file, &eff.repo_root, out)?;
        if formatted {
            writeln!(out, "File is formatted correctly")?;
        } else {
            writeln!(out, "File has formatting errors")?;
        }
        writeln!(out)?;
        if !formatted {
            workflow::file_error(out, file, NOT_FORMATTED, NOT_FORMATTED)?;
        }
        report.push(CheckResult {
            file: file.clone(),
            formatted,
        });
    }
    workflow::end_group(out)?;
    Ok(report)
}

/// Run every stage and persist the summary. Per-file failures are part of
/// the returned report, not an error.
pub fn run_check(eff: &Effective, os: &str, out: &mut impl Write) -> Result<Outcome> {
    validate_platform(os)?;

    let strategy = Strategy::from_only_git_files(eff.only_git_files);
    let files = discovery::discover_files(strategy, &eff.repo_root)?;
    process::resolve(&eff.formatter)?;

    let report = check_all(&files, eff, out)?;
    let summary = summary::build_summary(&report.failed, &eff.formatter, &eff.format_file);

    match &eff.summary {
        Some(path) => summary.write(path)?,
        None => {
            writeln!(out)?;
            write!(out, "{}", summary.as_str())?;
        }
    }

    if let Some(path) = &eff.report {
        let remediation = (!report.is_success()).then(|| {
            summary::remediation_command(&eff.formatter, &eff.format_file, &report.failed)
        });
        output::write_report(path, &output::compose_report_json(&report, remediation.as_deref()))?;
    }

    output::print_status(out, &report)?;
    let counts = report.counts();
    tracing::info!(
        total = counts.total,
        failed = counts.failed,
        "format check finished"
    );
    Ok(Outcome { report, summary })
}

/// Full run. Fails with `Error::NotFormatted` once the summary is written
/// if any file needs formatting.
pub fn execute(eff: &Effective, os: &str, out: &mut impl Write) -> Result<RunReport> {
    let outcome = run_check(eff, os, out)?;
    if !outcome.report.is_success() {
        return Err(Error::NotFormatted);
    }
    Ok(outcome.report)
}

/// Top-level `check` conversion: platform first, then `resolve`, then the
/// run. Every failure becomes one `::error::` line on `out`. Returns the
/// process exit code.
pub fn run_action(
    os: &str,
    resolve: impl FnOnce() -> Result<Effective>,
    out: &mut impl Write,
) -> i32 {
    let result = validate_platform(os)
        .and_then(|()| resolve())
        .and_then(|eff| {
            if !eff.config_found {
                tracing::debug!("no meson-fmt-check config file found; using defaults");
            }
            execute(&eff, os, out)
        });
    match result {
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            if workflow::set_failed(out, &e.to_string()).is_err() {
                eprintln!("{} {}", output::error_prefix(), e);
            }
            let _ = out.flush();
            1
        }
    }
}
