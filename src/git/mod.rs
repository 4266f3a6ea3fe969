//! Thin wrapper over the `git` command-line client.
//!
//! Only two operations are used: resolving a reference to its canonical URL
//! and cloning. Network access, credentials and everything else stay with git.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::string::FromUtf8Error;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("git ls-remote --get-url {reference} failed ({status})")]
    Resolve { reference: String, status: ExitStatus },

    #[error("git ls-remote --get-url {reference} printed no URL")]
    EmptyUrl { reference: String },

    #[error("git printed a URL that is not valid UTF-8")]
    NonUtf8(#[from] FromUtf8Error),

    #[error("git clone ended without an exit code ({status})")]
    Terminated { status: ExitStatus },
}

/// Handle on a git executable.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
}

impl Git {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Resolve `reference` with `git ls-remote --get-url`.
    ///
    /// git's stderr goes straight to ours so its diagnostics stay visible.
    pub fn get_url(&self, reference: &str) -> Result<String, GitError> {
        debug!(reference, "resolving remote");
        let output = self
            .command()
            .args(["ls-remote", "--get-url", reference])
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| self.spawn_error(source))?;

        if !output.status.success() {
            return Err(GitError::Resolve {
                reference: reference.to_string(),
                status: output.status,
            });
        }

        let url = String::from_utf8(output.stdout)?.trim().to_string();
        if url.is_empty() {
            return Err(GitError::EmptyUrl { reference: reference.to_string() });
        }
        Ok(url)
    }

    /// Run `git clone reference dest` with inherited stdio and return its exit code.
    ///
    /// A non-zero code is a normal outcome (the destination may already
    /// exist); only a missing exit code is an error.
    pub fn clone_into(&self, reference: &str, dest: &Path) -> Result<i32, GitError> {
        debug!(reference, dest = %dest.display(), "running git clone");
        let status = self
            .command()
            .arg("clone")
            .arg(reference)
            .arg(dest)
            .status()
            .map_err(|source| self.spawn_error(source))?;

        status.code().ok_or(GitError::Terminated { status })
    }

    fn command(&self) -> Command {
        Command::new(&self.program)
    }

    fn spawn_error(&self, source: io::Error) -> GitError {
        GitError::Spawn { program: self.program.display().to_string(), source }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{Git, GitError};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn script(dir: &TempDir, body: &str) -> Git {
        let path = dir.path().join("git");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
        Git::new(path)
    }

    #[test]
    fn get_url_trims_output() {
        let dir = TempDir::new().expect("temp dir");
        let git = script(&dir, "printf '  https://example.com/org/repo\\n\\n'");
        assert_eq!(git.get_url("repo").expect("url"), "https://example.com/org/repo");
    }

    #[test]
    fn get_url_passes_reference_through() {
        let dir = TempDir::new().expect("temp dir");
        let git = script(&dir, "echo \"$1 $2 $3\"");
        assert_eq!(git.get_url("origin").expect("url"), "ls-remote --get-url origin");
    }

    #[test]
    fn get_url_reports_failure() {
        let dir = TempDir::new().expect("temp dir");
        let git = script(&dir, "exit 128");
        let err = git.get_url("nowhere").expect_err("should fail");
        assert!(matches!(err, GitError::Resolve { .. }));
    }

    #[test]
    fn get_url_rejects_empty_output() {
        let dir = TempDir::new().expect("temp dir");
        let git = script(&dir, "exit 0");
        assert!(matches!(git.get_url("repo"), Err(GitError::EmptyUrl { .. })));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let git = Git::new("/nonexistent/bin/git");
        assert!(matches!(git.get_url("repo"), Err(GitError::Spawn { .. })));
        assert!(matches!(
            git.clone_into("repo", Path::new("/tmp/unused")),
            Err(GitError::Spawn { .. })
        ));
    }

    #[test]
    fn clone_returns_exit_code() {
        let dir = TempDir::new().expect("temp dir");
        let git = script(&dir, "exit 3");
        assert_eq!(git.clone_into("repo", Path::new("/tmp/unused")).expect("status"), 3);
    }

    #[test]
    fn clone_killed_by_signal_has_no_code() {
        let dir = TempDir::new().expect("temp dir");
        let git = script(&dir, "kill -9 $$");
        let err = git.clone_into("repo", Path::new("/tmp/unused")).expect_err("signal");
        assert!(matches!(err, GitError::Terminated { .. }));
    }
}
