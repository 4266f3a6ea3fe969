//! Mapping of remote references onto local clone paths
//!
//! A remote reference is whatever the user (or `git ls-remote --get-url`)
//! hands us: a full URL, scp-like `user@host:path` shorthand, a bare
//! `host:path`, or a local path. Each recognised syntax is a variant of
//! [`RemoteForm`], and every reference maps to exactly one of them.

use percent_encoding::percent_decode_str;
use std::path::PathBuf;

use crate::utils::paths;

/// Host segment used for references that carry no host at all.
pub const LOCALHOST: &str = "localhost";

/// The syntactic form a remote reference was recognised as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteForm {
    /// `host:path`, where `host` is also a valid URL scheme (`example.com:org/repo`).
    Opaque { host: String, path: String },

    /// `[user@]host:path` that cannot be read as a URL (`git@example.com:org/repo.git`).
    Shorthand { host: String, path: String },

    /// `scheme://[user@]host[:port]/path`; the host is kept as written.
    Url { host: String, path: String },

    /// Anything else: local paths, `file:///` URLs, URLs without an authority.
    Local { path: String },
}

impl RemoteForm {
    /// Classify a reference. Never fails; unrecognised input is [`RemoteForm::Local`].
    pub fn classify(reference: &str) -> Self {
        let Some((scheme, rest)) = split_scheme(reference) else {
            if let Some((host, path)) = split_shorthand(reference) {
                return Self::Shorthand { host: host.to_string(), path: path.to_string() };
            }
            return Self::Local { path: reference.to_string() };
        };

        if !rest.is_empty() && !rest.starts_with('/') {
            return Self::Opaque { host: scheme.to_string(), path: format!("/{rest}") };
        }

        match split_authority(rest) {
            Some((authority, tail)) => {
                let host = authority_host(authority);
                if host.is_empty() {
                    Self::Local { path: url_path(tail) }
                } else {
                    Self::Url { host: host.to_string(), path: url_path(tail) }
                }
            }
            None => Self::Local { path: url_path(rest) },
        }
    }

    pub fn host(&self) -> &str {
        match self {
            Self::Opaque { host, .. } | Self::Shorthand { host, .. } | Self::Url { host, .. } => {
                host.as_str()
            }
            Self::Local { .. } => LOCALHOST,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Opaque { path, .. }
            | Self::Shorthand { path, .. }
            | Self::Url { path, .. }
            | Self::Local { path } => path.as_str(),
        }
    }

    /// Relative local path for this remote: `host/path`, lexically cleaned.
    pub fn import_path(&self) -> PathBuf {
        PathBuf::from(paths::clean(&format!("{}/{}", self.host(), self.path())))
    }
}

/// Convert a remote reference to the relative path it is cloned under.
pub fn import_path(reference: &str) -> PathBuf {
    RemoteForm::classify(reference).import_path()
}

/// Split `scheme:rest` when the text before the first colon is a valid
/// URL scheme (a letter followed by letters, digits, `+`, `-` or `.`).
fn split_scheme(reference: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = reference.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some((scheme, rest))
    } else {
        None
    }
}

/// Split `[user@]host:path`; the part before the colon must not contain `/`.
fn split_shorthand(reference: &str) -> Option<(&str, &str)> {
    let (prefix, path) = reference.split_once(':')?;
    if prefix.contains('/') {
        return None;
    }
    let host = prefix.split_once('@').map_or(prefix, |(_, host)| host);
    if host.is_empty() {
        return None;
    }
    Some((host, path))
}

/// Split `//authority/path` into the authority and everything after it.
fn split_authority(rest: &str) -> Option<(&str, &str)> {
    let after = rest.strip_prefix("//")?;
    let end = after.find(['/', '?', '#']).unwrap_or(after.len());
    Some(after.split_at(end))
}

/// Host part of an authority as written, without userinfo or port.
fn authority_host(authority: &str) -> &str {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host_port.starts_with('[') {
        if let Some(end) = host_port.find(']') {
            return &host_port[..=end];
        }
    }
    match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => host_port,
    }
}

/// URL path without query or fragment, percent-decoded.
fn url_path(tail: &str) -> String {
    let path = tail.split(['?', '#']).next().unwrap_or_default();
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}
