//! git-get: clone Git repositories into a tree that mirrors their remotes
//!
//! `git@example.com:org/repo.git` lands in `$GITPATH/example.com/org/repo.git`.
//! The mapping from remote reference to local path lives in [`remote`];
//! the git subprocesses in [`git`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod git;
pub mod remote;
pub mod utils;
