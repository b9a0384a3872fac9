//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "meson-fmt-check",
    version,
    about = "Check Meson build files with `meson format`",
    long_about = "meson-fmt-check — find meson.build, meson.options and meson_options.txt files, run `meson format --check-only` on each, and write a job summary with the command that fixes them.\n\nConfiguration precedence: CLI > action inputs (INPUT_*) > meson-fmt-check.toml > defaults.",
    after_help = "Examples:\n  meson-fmt-check check\n  meson-fmt-check check --only-git-files --format-file meson.format\n  meson-fmt-check list --only-git-files",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current version.")]
    Version,
    /// Run the format check
    #[command(
        about = "Check formatting",
        long_about = "Discover Meson files, check each with the formatter in check-only mode, and write the summary. Exits non-zero when any file is not formatted.",
        after_help = "Examples:\n  meson-fmt-check check --summary summary.md\n  meson-fmt-check check --formatter /opt/meson/meson.py --report report.json"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Formatter config passed as `-c` (default: formatter defaults)")]
        format_file: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "List files with git instead of scanning the filesystem")]
        only_git_files: bool,
        #[arg(long, help = "Formatter executable (default: meson)")]
        formatter: Option<String>,
        #[arg(long, help = "Summary file (default: $GITHUB_STEP_SUMMARY, else stdout)")]
        summary: Option<String>,
        #[arg(long, help = "Also write a JSON report to this path")]
        report: Option<String>,
        #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Debug logging on stderr")]
        verbose: bool,
    },
    /// Print the files a check would cover
    #[command(
        about = "List candidate files",
        long_about = "Run discovery only and print one path per line."
    )]
    List {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "List files with git instead of scanning the filesystem")]
        only_git_files: bool,
    },
}
