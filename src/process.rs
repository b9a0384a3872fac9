//! External process execution.
//!
//! Two modes mirror how the run uses its collaborators:
//! - `capture_strict` / `run_strict`: stdout is captured and returned (raw, or
//!   as lines); any stderr output or a non-zero exit aborts with an error.
//!   Used for discovery.
//! - `run_lenient`: the command line is echoed to the log, output streams are
//!   inherited and the exit code is handed back to the caller. Used for the
//!   per-file formatter check.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Locate `executable` on `PATH` (or validate it when given as a path).
pub fn resolve(executable: &str) -> Result<PathBuf> {
    which::which(executable).map_err(|source| Error::ToolNotFound {
        executable: executable.to_string(),
        source,
    })
}

/// Run a command, failing on stderr output or non-zero exit. Returns stdout
/// split into lines.
pub fn run_strict(executable: &str, args: &[String], cwd: &Path) -> Result<Vec<String>> {
    let stdout = capture_strict(executable, args, cwd)?;
    Ok(split_lines(&stdout))
}

/// Like `run_strict`, but hands back stdout untouched.
pub fn capture_strict(executable: &str, args: &[String], cwd: &Path) -> Result<String> {
    let path = resolve(executable)?;
    tracing::debug!(command = %path.display(), ?args, "spawning");
    let out = Command::new(&path)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| Error::Spawn {
            executable: executable.to_string(),
            source,
        })?;

    if !out.stderr.is_empty() {
        return Err(Error::StdErr {
            executable: executable.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim_end().to_string(),
        });
    }
    let code = exit_code(&out.status);
    if code != 0 {
        return Err(Error::ToolFailed {
            executable: executable.to_string(),
            code,
        });
    }
    let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
    tracing::debug!(executable, bytes = stdout.len(), "command finished");
    Ok(stdout)
}

/// Run a command and return its exit code without judging it. The command
/// line goes to `log`, which is flushed before the child inherits stdout.
pub fn run_lenient(
    executable: &str,
    args: &[String],
    cwd: &Path,
    log: &mut impl Write,
) -> Result<i32> {
    let path = resolve(executable)?;
    echo_command(log, &path, args)?;
    let status = Command::new(&path)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .status()
        .map_err(|source| Error::Spawn {
            executable: executable.to_string(),
            source,
        })?;
    let code = exit_code(&status);
    tracing::debug!(executable, code, "command finished");
    Ok(code)
}

/// Split captured output on newlines. Empty output yields no lines and a
/// trailing newline does not produce a trailing empty entry.
pub fn split_lines(output: &str) -> Vec<String> {
    output.lines().map(str::to_string).collect()
}

// Killed by a signal: no code to report.
fn exit_code(status: &std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

// `[command]` prefix as the Actions toolkit prints it.
fn echo_command(log: &mut impl Write, path: &Path, args: &[String]) -> Result<()> {
    tracing::debug!(command = %path.display(), ?args, "spawning");
    if args.is_empty() {
        writeln!(log, "[command]{}", path.display())?;
    } else {
        writeln!(log, "[command]{} {}", path.display(), args.join(" "))?;
    }
    log.flush()?;
    Ok(())
}
