//! Lexical path cleanup

/// Clean a `/`-separated relative path without touching the filesystem.
///
/// Repeated separators collapse, `.` components are dropped and `..` removes
/// the component before it. A `..` with nothing left to remove is discarded,
/// so the result never climbs above the directory it is joined onto. The
/// result has no leading or trailing slash; an empty result is `"."`.
pub fn clean(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
