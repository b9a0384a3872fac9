//! Configuration discovery and effective settings resolution.
//!
//! Settings come from three places and are merged into an `Effective`
//! config:
//! - CLI flags;
//! - action inputs, read from `INPUT_<NAME>` environment variables the way
//!   the Actions toolkit exposes `with:` values;
//! - `meson-fmt-check.toml|yaml|yml` in the repository root (or closest
//!   ancestor).
//!
//! Defaults:
//! - `format-file`: empty (formatter defaults)
//! - `only-git-files`: false (filesystem scan)
//! - `formatter`: `meson`
//! - `summary`: `$GITHUB_STEP_SUMMARY`, else printed to stdout
//! - `report`: none (no JSON report file)
//!
//! Overrides precedence: CLI > action inputs > config file > defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = [
    "meson-fmt-check.toml",
    "meson-fmt-check.yaml",
    "meson-fmt-check.yml",
];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Root configuration loaded from `meson-fmt-check.toml|yaml`.
pub struct CheckConfig {
    pub format_file: Option<String>,
    pub only_git_files: Option<bool>,
    pub formatter: Option<String>,
    pub summary: Option<String>,
    pub report: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Values passed through the action's `with:` block plus the runner's
/// summary file location.
pub struct ActionInputs {
    pub format_file: Option<String>,
    pub only_git_files: Option<bool>,
    pub step_summary: Option<String>,
}

#[derive(Debug, Default, Clone)]
/// CLI-level overrides; `None` means "not given on the command line".
pub struct Overrides {
    pub repo_root: Option<String>,
    pub format_file: Option<String>,
    pub only_git_files: Option<bool>,
    pub formatter: Option<String>,
    pub summary: Option<String>,
    pub report: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration, read once at start.
pub struct Effective {
    pub repo_root: PathBuf,
    pub format_file: String,
    pub only_git_files: bool,
    pub formatter: String,
    pub summary: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub config_found: bool,
}

impl ActionInputs {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read inputs through `lookup` (env var name -> value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| {
            lookup(&input_var(name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let only_git_files = match get("only-git-files") {
            Some(v) => Some(parse_bool_input("only-git-files", &v)?),
            None => None,
        };
        Ok(Self {
            format_file: get("format-file"),
            only_git_files,
            step_summary: lookup("GITHUB_STEP_SUMMARY").filter(|v| !v.trim().is_empty()),
        })
    }
}

/// Environment variable carrying the action input `name`.
pub fn input_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Boolean inputs follow the YAML 1.2 core schema spellings only.
pub fn parse_bool_input(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(Error::Config(format!(
            "Input does not meet YAML 1.2 \"Core Schema\" specification: {}\n\
             Support boolean input list: `true | True | TRUE | false | False | FALSE`",
            name
        ))),
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// `start` is made absolute first so a relative path still climbs through
/// real ancestors. Stops when a config file or a `.git` directory is found;
/// otherwise returns the absolute `start`.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = if start.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start
    };
    let abs = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let mut cur = abs.as_path();
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return abs,
        }
    }
}

/// Load `CheckConfig` from the first config file present in `root`.
pub fn load_config(root: &Path) -> Result<Option<CheckConfig>> {
    let toml_path = root.join(CONFIG_FILES[0]);
    if toml_path.exists() {
        let s = read_config(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|e| invalid_config(&toml_path, e))?;
        return Ok(Some(cfg));
    }
    for yml in &CONFIG_FILES[1..] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_config(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|e| invalid_config(&p, e))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| invalid_config(path, e))
}

fn invalid_config(path: &Path, e: impl std::fmt::Display) -> Error {
    Error::Config(format!("invalid config {}: {}", path.display(), e))
}

/// Resolve `Effective` by merging CLI flags, action inputs, the discovered
/// config file, and defaults.
pub fn resolve_effective(cli: &Overrides, inputs: &ActionInputs) -> Result<Effective> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let format_file = cli
        .format_file
        .clone()
        .or_else(|| inputs.format_file.clone())
        .or(cfg.format_file)
        .unwrap_or_default();

    let only_git_files = cli
        .only_git_files
        .or(inputs.only_git_files)
        .or(cfg.only_git_files)
        .unwrap_or(false);

    let formatter = cli
        .formatter
        .clone()
        .or(cfg.formatter)
        .unwrap_or_else(|| "meson".to_string());

    if formatter.trim().is_empty() {
        return Err(Error::Config("formatter must not be empty".to_string()));
    }

    // Paths from the config file are relative to the repository root.
    let from_file = |p: String| repo_root.join(p);
    let summary = cli
        .summary
        .clone()
        .or_else(|| inputs.step_summary.clone())
        .map(PathBuf::from)
        .or_else(|| cfg.summary.map(from_file));

    let report = cli
        .report
        .clone()
        .map(PathBuf::from)
        .or_else(|| cfg.report.map(from_file));

    Ok(Effective {
        repo_root,
        format_file,
        only_git_files,
        formatter,
        summary,
        report,
        config_found,
    })
}
