//! Safe, normalized relative paths for parsed file operations.

use serde::Serialize;
use std::fmt;

/// A normalized, platform-neutral relative path.
///
/// Guaranteed to be non-empty, `/`-separated, and free of `.`/`..` segments.
/// Candidates that would escape the destination root (leading `..`, `/` or
/// `\`) never become a `RelativePath`: `parse` returns `None` and the
/// caller drops them silently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Normalize a raw path candidate and validate it stays under the root.
    ///
    /// Separators are unified to `/`, `.` segments are dropped and `..`
    /// segments collapse lexically (no filesystem lookup). Returns `None`
    /// for absolute paths, paths that climb above the root, and empty
    /// results.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Absolute on either platform convention
        if trimmed.starts_with('/') || trimmed.starts_with('\\') {
            return None;
        }

        let mut segments: Vec<&str> = Vec::new();
        for segment in trimmed.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    // Popping past the first segment means the path escapes
                    // the destination root.
                    if segments.pop().is_none() {
                        return None;
                    }
                }
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            return None;
        }

        Some(Self(segments.join("/")))
    }

    /// The normalized path as a `/`-separated string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path component (base name).
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
