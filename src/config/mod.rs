//! Root directory resolution

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the root of the local clone tree.
pub const GITPATH_ENV: &str = "GITPATH";

/// Directory under the home directory used when `GITPATH` is unset.
pub const DEFAULT_SUBDIR: &str = "src";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine the home directory; set GITPATH or HOME")]
    NoHome,
}

/// Pick the clone root: `gitpath` verbatim when set and non-empty,
/// `<home>/src` otherwise.
pub fn resolve_root(gitpath: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    root_from(gitpath, home_dir)
}

/// [`resolve_root`] with the home directory lookup supplied; it only runs
/// when `gitpath` is unset.
pub fn root_from<F>(gitpath: Option<PathBuf>, home: F) -> Result<PathBuf, ConfigError>
where
    F: FnOnce() -> Result<PathBuf, ConfigError>,
{
    match gitpath.filter(|p| !p.as_os_str().is_empty()) {
        Some(root) => Ok(root),
        None => Ok(home()?.join(DEFAULT_SUBDIR)),
    }
}

/// The current user's home directory from the user database, or `HOME`.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    home_from(user_database_home(), std::env::var_os("HOME"))
}

/// Prefer the user database entry, then a non-empty `HOME`.
pub fn home_from(db: Option<PathBuf>, home: Option<OsString>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = db.filter(|dir| !dir.as_os_str().is_empty()) {
        return Ok(dir);
    }
    home.filter(|home| !home.is_empty()).map(PathBuf::from).ok_or(ConfigError::NoHome)
}

#[cfg(unix)]
fn user_database_home() -> Option<PathBuf> {
    use nix::unistd::{getuid, User};

    match User::from_uid(getuid()) {
        Ok(Some(user)) if !user.dir.as_os_str().is_empty() => Some(user.dir),
        Ok(_) => {
            tracing::debug!("current user has no home directory entry, falling back to HOME");
            None
        }
        Err(err) => {
            tracing::debug!(%err, "user database lookup failed, falling back to HOME");
            None
        }
    }
}

#[cfg(not(unix))]
fn user_database_home() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::{home_from, root_from, ConfigError, DEFAULT_SUBDIR};
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn no_home() -> Result<PathBuf, ConfigError> {
        Err(ConfigError::NoHome)
    }

    #[test]
    fn gitpath_is_used_verbatim() {
        let root = root_from(Some(PathBuf::from("/work/../git trees")), no_home).expect("root");
        assert_eq!(root, PathBuf::from("/work/../git trees"));
    }

    #[test]
    fn unset_gitpath_defaults_under_home() {
        let root = root_from(None, || Ok(PathBuf::from("/home/ada"))).expect("root");
        assert_eq!(root, PathBuf::from("/home/ada").join(DEFAULT_SUBDIR));
    }

    #[test]
    fn empty_gitpath_counts_as_unset() {
        let root = root_from(Some(PathBuf::new()), || Ok(PathBuf::from("/home/ada"))).expect("root");
        assert_eq!(root, PathBuf::from("/home/ada/src"));
    }

    #[test]
    fn missing_home_is_reported_only_without_gitpath() {
        assert!(matches!(root_from(None, no_home), Err(ConfigError::NoHome)));
        assert!(root_from(Some(PathBuf::from("/trees")), no_home).is_ok());
    }

    #[test]
    fn user_database_wins_over_home() {
        let home = home_from(Some(PathBuf::from("/home/db")), Some(OsString::from("/home/env")));
        assert_eq!(home.expect("home"), PathBuf::from("/home/db"));
    }

    #[test]
    fn home_env_is_used_when_database_has_no_entry() {
        let home = home_from(None, Some(OsString::from("/home/env")));
        assert_eq!(home.expect("home"), PathBuf::from("/home/env"));

        let home = home_from(Some(PathBuf::new()), Some(OsString::from("/home/env")));
        assert_eq!(home.expect("home"), PathBuf::from("/home/env"));
    }

    #[test]
    fn empty_or_missing_home_is_an_error() {
        assert!(matches!(home_from(None, None), Err(ConfigError::NoHome)));
        assert!(matches!(home_from(None, Some(OsString::new())), Err(ConfigError::NoHome)));
    }
}
