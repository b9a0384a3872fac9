//! GitHub Actions workflow commands (`::group::`, `::error::`, ...).
//!
//! Commands are plain lines on stdout that the runner interprets. Values are
//! escaped the same way the Actions toolkit does so file names containing
//! `,` `:` or newlines cannot break the command syntax.

use std::io::{self, Write};

/// Escape a command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Render `::command key=value,...::message`.
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);
    let props: Vec<String> = properties
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, escape_property(v)))
        .collect();
    if !props.is_empty() {
        line.push(' ');
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

pub fn start_group(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "{}", format_command("group", &[], name))
}

pub fn end_group(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", format_command("endgroup", &[], ""))
}

/// Error annotation attached to `file`.
pub fn file_error(out: &mut impl Write, file: &str, title: &str, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format_command("error", &[("file", file), ("title", title)], message)
    )
}

/// Record the run's failure reason. The caller owns the exit status.
pub fn set_failed(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format_command("error", &[], message))
}
