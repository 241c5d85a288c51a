//! File operations extracted from an AI markdown response.

use crate::path::RelativePath;
use serde::Serialize;

/// Literal marker inside a fenced block signaling that the file should be
/// deleted instead of written. Fixed by the exchange format; do not change.
pub const DELETION_SENTINEL: &str = "// 此文件已被删除";

/// A single extracted operation, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileOperation {
    /// Create or overwrite `path` with `content`.
    Write {
        path: RelativePath,
        /// Language tag from the opening fence (`text` when empty).
        language: String,
        /// Block body with the fence delimiters stripped.
        content: String,
    },
    /// Remove `path` from the destination tree.
    Delete { path: RelativePath },
}

impl FileOperation {
    /// The target path of this operation.
    pub fn path(&self) -> &RelativePath {
        match self {
            FileOperation::Write { path, .. } | FileOperation::Delete { path } => path,
        }
    }

    /// Whether this operation removes its target.
    pub fn is_delete(&self) -> bool {
        matches!(self, FileOperation::Delete { .. })
    }
}
