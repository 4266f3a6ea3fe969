//! Command-line interface for git-get
//!
//! `git-get [-version] REPO` clones REPO under `GITPATH/<host>/<path>`.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{self, GITPATH_ENV};
use crate::domain::Config;

mod clone;

const AFTER_HELP: &str = "\
Environment variables:
  GITPATH  base of local tree of Git clones; defaults to $HOME/src";

/// Clone a Git repository, preserving remote structure under GITPATH
#[derive(Parser, Debug)]
#[command(name = "git-get")]
#[command(author, version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Repository to clone
    #[arg(value_name = "REPO")]
    repo: String,

    /// Base of the local tree of Git clones (overrides GITPATH)
    #[arg(long, value_name = "DIR")]
    gitpath: Option<PathBuf>,

    /// Print the destination path and exit without cloning
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Build the invocation's [`Config`], consulting `GITPATH` when no flag was given.
    pub fn into_config(self, env_gitpath: Option<OsString>) -> Result<Config> {
        let gitpath = self.gitpath.or_else(|| env_gitpath.map(PathBuf::from));
        let root = config::resolve_root(gitpath)?;
        Ok(Config { dry_run: self.dry_run, ..Config::new(self.repo, root) })
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = cli.into_config(std::env::var_os(GITPATH_ENV))?;
    clone::run(&config)
}

/// Accept the single-dash `-version` spelling as `--version`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut options_done = false;
    args.into_iter()
        .map(|arg| {
            if arg == "--" {
                options_done = true;
            }
            if !options_done && arg == "-version" {
                OsString::from("--version")
            } else {
                arg
            }
        })
        .collect()
}
