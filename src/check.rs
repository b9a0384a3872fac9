//! Per-file formatter check.

use crate::error::Result;
use crate::process;
use std::io::Write;
use std::path::Path;

/// Arguments for `meson format --check-only`, with `-c <format_file>` only
/// when a formatter config was supplied.
pub fn check_args(file: &str, format_file: &str) -> Vec<String> {
    let mut args = vec!["format".to_string(), "--check-only".to_string()];
    if !format_file.is_empty() {
        args.push("-c".to_string());
        args.push(format_file.to_string());
    }
    args.push(file.to_string());
    args
}

/// Check one file. `Ok(true)` when the formatter exits with zero; any other
/// exit code means the file needs formatting. Errors only when the
/// formatter cannot be run at all. The formatter command line is echoed to
/// `log`.
pub fn check_file(
    formatter: &str,
    file: &str,
    format_file: &str,
    cwd: &Path,
    log: &mut impl Write,
) -> Result<bool> {
    let code = process::run_lenient(formatter, &check_args(file, format_file), cwd, log)?;
    Ok(code == 0)
}
