//! git-get: `go get` for any Git remote
//!
//! Clones a repository into `GITPATH/<host>/<path>`, mirroring the remote's
//! layout on disk.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    git_get::cli::run()
}
