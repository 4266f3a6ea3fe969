//! Core domain types

use std::path::PathBuf;

/// Everything one invocation needs, resolved up front from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote reference exactly as the user gave it
    pub remote: String,

    /// Root of the local clone tree
    pub root: PathBuf,

    /// Print the destination instead of cloning
    pub dry_run: bool,

    /// git executable to run
    pub git: PathBuf,
}

impl Config {
    pub fn new(remote: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self { remote: remote.into(), root: root.into(), dry_run: false, git: PathBuf::from("git") }
    }
}
