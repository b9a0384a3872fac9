//! Meson file discovery.
//!
//! Two strategies produce the same flat list of paths:
//! - `Git`: tracked files whose names match the recognized set, listed by
//!   `git ls-files` regardless of local ignore rules.
//! - `Filesystem`: a recursive walk of the repository keeping entries named
//!   like one of the recognized files.

use crate::error::{Error, Result};
use crate::process;
use std::path::Path;
use walkdir::WalkDir;

/// File names subject to the format check.
pub const MESON_FILES: [&str; 3] = ["meson.build", "meson.options", "meson_options.txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Git,
    Filesystem,
}

impl Strategy {
    pub fn from_only_git_files(only_git_files: bool) -> Self {
        if only_git_files {
            Strategy::Git
        } else {
            Strategy::Filesystem
        }
    }
}

/// Enumerate candidate files below `root` using `strategy`.
pub fn discover_files(strategy: Strategy, root: &Path) -> Result<Vec<String>> {
    let files = match strategy {
        Strategy::Git => split_nul(&process::capture_strict("git", &git_args(), root)?),
        Strategy::Filesystem => walk_files(root)?,
    };
    tracing::debug!(?strategy, count = files.len(), "discovered meson files");
    Ok(files)
}

/// Arguments for `git ls-files`: every recognized name becomes an exclude
/// pattern and `--ignored` inverts the listing to exactly those files. `-z`
/// keeps paths verbatim instead of C-quoting unusual names.
pub fn git_args() -> Vec<String> {
    let mut args = vec!["ls-files".to_string()];
    for name in MESON_FILES {
        args.push("--exclude".to_string());
        args.push(name.to_string());
    }
    args.push("--ignored".to_string());
    args.push("-c".to_string());
    args.push("-z".to_string());
    args
}

fn split_nul(output: &str) -> Vec<String> {
    output
        .split('\0')
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn walk_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() || !is_meson_file(entry.file_name()) {
            continue;
        }
        let rel = pathdiff::diff_paths(entry.path(), root)
            .unwrap_or_else(|| entry.path().to_path_buf());
        files.push(format!("./{}", rel.to_string_lossy()));
    }
    Ok(files)
}

fn is_meson_file(name: &std::ffi::OsStr) -> bool {
    MESON_FILES.iter().any(|m| name == *m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filesystem_scan_keeps_only_meson_names() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("meson.build"), "project('x')\n").unwrap();
        fs::write(root.join("meson.options"), "").unwrap();
        fs::write(root.join("unrelated.txt"), "").unwrap();

        let files = discover_files(Strategy::Filesystem, root).unwrap();
        assert_eq!(files, vec!["./meson.build", "./meson.options"]);
    }

    #[test]
    fn test_filesystem_scan_recurses_into_subdirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/lib")).unwrap();
        fs::write(root.join("meson.build"), "").unwrap();
        fs::write(root.join("meson_options.txt"), "").unwrap();
        fs::write(root.join("src/meson.build"), "").unwrap();
        fs::write(root.join("src/lib/meson.build"), "").unwrap();
        fs::write(root.join("src/lib/meson.build.bak"), "").unwrap();

        let files = discover_files(Strategy::Filesystem, root).unwrap();
        assert_eq!(
            files,
            vec![
                "./meson.build",
                "./meson_options.txt",
                "./src/lib/meson.build",
                "./src/meson.build",
            ]
        );
    }

    #[test]
    fn test_filesystem_scan_skips_directories_named_like_meson_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("meson.build")).unwrap();
        let files = discover_files(Strategy::Filesystem, dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_git_args_shape() {
        assert_eq!(
            git_args(),
            vec![
                "ls-files",
                "--exclude",
                "meson.build",
                "--exclude",
                "meson.options",
                "--exclude",
                "meson_options.txt",
                "--ignored",
                "-c",
                "-z",
            ]
        );
    }

    #[test]
    fn test_git_strategy_lists_tracked_meson_files() {
        if which::which("git").is_err() {
            return;
        }
        let dir = tempdir().unwrap();
        let root = dir.path();
        let git = |args: &[&str]| {
            let ok = std::process::Command::new("git")
                .args(args)
                .current_dir(root)
                .output()
                .unwrap()
                .status
                .success();
            assert!(ok, "git {:?} failed", args);
        };
        git(&["init", "-q"]);
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("meson.build"), "").unwrap();
        fs::write(root.join("sub/meson.build"), "").unwrap();
        fs::write(root.join("README.md"), "").unwrap();
        fs::write(root.join("untracked.build"), "").unwrap();
        fs::write(root.join(".gitignore"), "meson.build\n").unwrap();
        git(&["add", "-f", "meson.build", "sub/meson.build", "README.md"]);

        let files = discover_files(Strategy::Git, root).unwrap();
        assert_eq!(files, vec!["meson.build", "sub/meson.build"]);
    }

    #[test]
    fn test_git_strategy_keeps_non_ascii_and_spaced_paths_verbatim() {
        if which::which("git").is_err() {
            return;
        }
        let dir = tempdir().unwrap();
        let root = dir.path();
        let git = |args: &[&str]| {
            let ok = std::process::Command::new("git")
                .args(args)
                .current_dir(root)
                .output()
                .unwrap()
                .status
                .success();
            assert!(ok, "git {:?} failed", args);
        };
        git(&["init", "-q"]);
        fs::create_dir_all(root.join("café")).unwrap();
        fs::create_dir_all(root.join("with space")).unwrap();
        fs::write(root.join("café/meson.build"), "").unwrap();
        fs::write(root.join("with space/meson.build"), "").unwrap();
        git(&["add", "."]);

        let files = discover_files(Strategy::Git, root).unwrap();
        assert_eq!(files, vec!["café/meson.build", "with space/meson.build"]);
    }

    #[test]
    fn test_split_nul_drops_trailing_terminator() {
        assert!(split_nul("").is_empty());
        assert_eq!(split_nul("a\0b c\0"), vec!["a", "b c"]);
    }
}
