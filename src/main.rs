//! meson-fmt-check binary entry point.
//! Delegates to the library and maps the outcome to an exit status. `check`
//! reports every failure as a workflow error and exits 1; `list` exits 2 on
//! invalid configuration.

use clap::Parser;
use meson_fmt_check::cli::{Cli, Commands};
use meson_fmt_check::config::{self, ActionInputs, Overrides};
use meson_fmt_check::discovery::{self, Strategy};
use meson_fmt_check::output::{error_prefix, note_prefix};
use meson_fmt_check::run;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("meson_fmt_check=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn resolve_or_exit(cli: &Overrides) -> config::Effective {
    let resolved = ActionInputs::from_env().and_then(|inputs| config::resolve_effective(cli, &inputs));
    match resolved {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            format_file,
            only_git_files,
            formatter,
            summary,
            report,
            verbose,
        } => {
            init_tracing(verbose);
            let overrides = Overrides {
                repo_root,
                format_file,
                only_git_files: if only_git_files { Some(true) } else { None },
                formatter,
                summary,
                report,
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let code = run::run_action(
                run::host_platform(),
                || ActionInputs::from_env().and_then(|inputs| config::resolve_effective(&overrides, &inputs)),
                &mut out,
            );
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::List {
            repo_root,
            only_git_files,
        } => {
            init_tracing(false);
            let eff = resolve_or_exit(&Overrides {
                repo_root,
                only_git_files: if only_git_files { Some(true) } else { None },
                ..Default::default()
            });
            let strategy = Strategy::from_only_git_files(eff.only_git_files);
            match discovery::discover_files(strategy, &eff.repo_root) {
                Ok(files) => {
                    if files.is_empty() {
                        eprintln!("{} no Meson files found", note_prefix());
                    }
                    for f in files {
                        println!("{}", f);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", error_prefix(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}
