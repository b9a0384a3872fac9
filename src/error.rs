//! Error type shared by every stage of a check run.
//!
//! Per-file formatting failures are not errors; they are collected into the
//! run report. Everything here aborts the run and ends up as the single
//! failure reason reported by the binary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The host OS is not the one the check supports.
    #[error("Action atm only supported on linux: but are on: {os}")]
    UnsupportedPlatform { os: String },

    /// A required executable could not be located on `PATH`.
    #[error("Unable to locate executable file: {executable}")]
    ToolNotFound {
        executable: String,
        #[source]
        source: which::Error,
    },

    /// Strict-mode command exited with a non-zero status.
    #[error("{executable} exited with exit code {code}")]
    ToolFailed { executable: String, code: i32 },

    /// Strict-mode command wrote to its error stream.
    #[error("{executable} wrote to stderr: {stderr}")]
    StdErr { executable: String, stderr: String },

    #[error("failed to run {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write summary to {}: {source}", .path.display())]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input value or unreadable config file.
    #[error("{0}")]
    Config(String),

    /// Raised after the summary is written when any file failed the check.
    #[error("Some files are not formatted correctly")]
    NotFormatted,
}

pub type Result<T> = std::result::Result<T, Error>;
