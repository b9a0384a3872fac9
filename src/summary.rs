//! Job summary document.
//!
//! `SummaryDocument` accumulates HTML/Markdown fragments in the shape GitHub
//! renders on the run page and is written once at the end of a run.
//! `build_summary` is pure: it turns the failing-file list into the final
//! document, including a copy-pasteable remediation command.

use crate::error::{Error, Result};
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SummaryDocument {
    buffer: String,
}

impl SummaryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_raw(&mut self, text: &str, eol: bool) -> &mut Self {
        self.buffer.push_str(text);
        if eol {
            self.buffer.push('\n');
        }
        self
    }

    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Self {
        let level = level.clamp(1, 6);
        self.add_raw(&format!("<h{level}>{}</h{level}>", html_escape(text)), true)
    }

    pub fn add_break(&mut self) -> &mut Self {
        self.add_raw("<br>", true)
    }

    pub fn add_separator(&mut self) -> &mut Self {
        self.add_raw("<hr>", true)
    }

    /// Collapsible section; `content` is inserted as-is.
    pub fn add_details(&mut self, label: &str, content: &str) -> &mut Self {
        self.add_raw(
            &format!(
                "<details><summary>{}</summary>{}</details>",
                html_escape(label),
                content
            ),
            true,
        )
    }

    pub fn add_code_block(&mut self, code: &str, lang: &str) -> &mut Self {
        self.add_raw(
            &format!(
                "<pre lang=\"{}\"><code>{}</code></pre>",
                html_escape(lang),
                html_escape(code)
            ),
            true,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write the document to `path`, replacing any previous content.
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.buffer).map_err(|source| Error::SummaryWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Unordered (`<ul>`) or ordered (`<ol>`) HTML list of escaped items.
pub fn html_list(items: &[String], ordered: bool) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let body: String = items
        .iter()
        .map(|it| format!("<li>{}</li>", html_escape(it)))
        .collect();
    format!("<{tag}>{body}</{tag}>")
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Double-quote `s` for a POSIX shell, escaping the characters that stay
/// special inside double quotes.
pub fn shell_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn quote_program(program: &str) -> String {
    let plain = !program.is_empty()
        && program
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '+' | '-'));
    if plain {
        program.to_string()
    } else {
        shell_quote(program)
    }
}

/// `meson format [-c "<cfg>"] -i "<file>"...` for exactly the given files.
/// The formatter stays bare when it is a plain word or path.
pub fn remediation_command(formatter: &str, format_file: &str, files: &[String]) -> String {
    let mut parts = vec![quote_program(formatter), "format".to_string()];
    if !format_file.is_empty() {
        parts.push("-c".to_string());
        parts.push(shell_quote(format_file));
    }
    parts.push("-i".to_string());
    parts.extend(files.iter().map(|f| shell_quote(f)));
    parts.join(" ")
}

/// Build the end-of-run document from the failing files.
pub fn build_summary(failed: &[String], formatter: &str, format_file: &str) -> SummaryDocument {
    let mut doc = SummaryDocument::new();
    doc.add_heading("Result", 1);
    if failed.is_empty() {
        doc.add_raw(":white_check_mark: All files are correctly formatted", true);
        return doc;
    }
    doc.add_raw(":x: Some files are not formatted correctly", true)
        .add_break()
        .add_details("Affected Files", &html_list(failed, false))
        .add_separator()
        .add_raw("To format the files run the following command", true)
        .add_break()
        .add_code_block(&remediation_command(formatter, format_file, failed), "bash");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn files(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_success_summary_has_no_file_section() {
        let doc = build_summary(&[], "meson", "");
        assert_eq!(
            doc.as_str(),
            "<h1>Result</h1>\n:white_check_mark: All files are correctly formatted\n"
        );
        assert!(!doc.as_str().contains("<details>"));
    }

    #[test]
    fn test_failure_summary_lists_files_and_command() {
        let doc = build_summary(&files(&["./a/meson.build"]), "meson", "");
        let s = doc.as_str();
        assert!(s.starts_with("<h1>Result</h1>\n:x: Some files are not formatted correctly\n<br>\n"));
        assert!(s.contains(
            "<details><summary>Affected Files</summary><ul><li>./a/meson.build</li></ul></details>\n<hr>\n"
        ));
        assert!(s.contains(
            "<pre lang=\"bash\"><code>meson format -i &quot;./a/meson.build&quot;</code></pre>\n"
        ));
    }

    #[test]
    fn test_list_items_are_html_escaped() {
        assert_eq!(
            html_list(&files(&["<b>&.build"]), false),
            "<ul><li>&lt;b&gt;&amp;.build</li></ul>"
        );
        assert_eq!(html_list(&files(&["x"]), true), "<ol><li>x</li></ol>");
    }

    #[test]
    fn test_remediation_command_without_format_file() {
        let cmd = remediation_command("meson", "", &files(&["./meson.build", "./sub/meson.build"]));
        assert_eq!(cmd, r#"meson format -i "./meson.build" "./sub/meson.build""#);
        assert!(!cmd.contains("-c"));
    }

    #[test]
    fn test_remediation_command_with_format_file() {
        let cmd = remediation_command("meson", "my cfg/meson.format", &files(&["./meson.build"]));
        assert_eq!(cmd, r#"meson format -c "my cfg/meson.format" -i "./meson.build""#);
    }

    #[test]
    fn test_remediation_command_quotes_formatter_path_with_space() {
        let cmd = remediation_command("/opt/my tools/meson", "", &files(&["./meson.build"]));
        assert_eq!(cmd, r#""/opt/my tools/meson" format -i "./meson.build""#);
        let cmd = remediation_command("/usr/local/bin/meson", "", &files(&["./meson.build"]));
        assert!(cmd.starts_with("/usr/local/bin/meson format "));
    }

    #[test]
    fn test_shell_quote_escapes_specials() {
        assert_eq!(shell_quote(r#"a"b$c`d\e"#), r#""a\"b\$c\`d\\e""#);
        assert_eq!(shell_quote("plain"), "\"plain\"");
    }

    #[test]
    fn test_write_overwrites_previous_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.md");
        std::fs::write(&path, "stale content from a previous run\n").unwrap();
        let doc = build_summary(&[], "meson", "");
        doc.write(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.as_str());
    }

    #[test]
    fn test_write_to_missing_dir_errors() {
        let dir = tempdir().unwrap();
        let err = build_summary(&[], "meson", "")
            .write(&dir.path().join("nope/summary.md"))
            .unwrap_err();
        assert!(matches!(err, Error::SummaryWrite { .. }));
    }
}
