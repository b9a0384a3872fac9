//! meson-fmt-check core library.
//!
//! Checks that every Meson build file in a repository is formatted with
//! `meson format`, the way a CI step would: discover the files, run the
//! formatter in check-only mode on each, and report the failures with a
//! remediation command.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file, action inputs, and effective settings.
//! - `process`: External command execution (strict and lenient modes).
//! - `discovery`: Meson file discovery via git or a filesystem walk.
//! - `check`: Per-file formatter check.
//! - `run`: Orchestration of a full check run.
//! - `summary`: Job summary document and remediation command.
//! - `workflow`: GitHub Actions workflow commands.
//! - `models`: Check results and run report.
//! - `output`: Status line and JSON report.
pub mod check;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod output;
pub mod process;
pub mod run;
pub mod summary;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use error::{Error, Result};
