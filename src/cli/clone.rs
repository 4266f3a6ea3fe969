//! Resolve, map and clone

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::domain::Config;
use crate::git::Git;
use crate::remote::RemoteForm;

pub fn run(config: &Config) -> Result<ExitCode> {
    let git = Git::new(&config.git);

    let resolved = git
        .get_url(&config.remote)
        .with_context(|| format!("Failed to resolve remote '{}'", config.remote))?;

    let form = RemoteForm::classify(&resolved);
    debug!(remote = %config.remote, %resolved, ?form, "classified remote");

    let local = config.root.join(form.import_path());

    if config.dry_run {
        println!("{}", local.display());
        return Ok(ExitCode::SUCCESS);
    }

    info!("cloning {} into {}", config.remote, local.display());
    let code = git
        .clone_into(&config.remote, &local)
        .with_context(|| format!("Failed to clone '{}'", config.remote))?;
    if code != 0 {
        debug!(code, "git clone exited with failure");
    }

    Ok(exit_code(code))
}

/// Exit status for the wrapper.
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(low_byte(code))
}

/// Like the OS, keep only the low byte of a status.
fn low_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}
