//! Fallback regex extraction for malformed documents.
//!
//! Used only when the strict parser yields nothing. A single document-wide
//! pattern recovers blocks whose header and fence are not separated exactly
//! the way the state machine expects, at the cost of being unable to handle
//! embedded fences inside file content at all: the first closing fence
//! always terminates a match.

use crate::header;
use crate::standard::block_to_operation;
use mdbridge_core::FileOperation;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Header text, blank separation, opening fence with optional language tag,
/// non-greedy body up to the next closing fence.
static FLEXIBLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)##\s+([^\n]+?)\s*\n\s*\n\s*```(\w*)[ \t]*\n(.*?)\s*\n\s*```")
        .expect("invalid flexible block regex")
});

/// Best-effort extraction across the whole document.
///
/// Every match passes through the same path validation and deletion-sentinel
/// handling as the strict parser.
pub fn extract_operations(document: &str) -> Vec<FileOperation> {
    let mut operations = Vec::new();

    for captures in FLEXIBLE_BLOCK.captures_iter(document) {
        let header_text = captures.get(1).map_or("", |m| m.as_str());
        let Some(path) = header::classify(header_text) else {
            debug!(header = header_text, "flexible match rejected by classifier");
            continue;
        };

        let tag = captures.get(2).map_or("", |m| m.as_str());
        let language = if tag.is_empty() { "text" } else { tag };
        let content = captures.get(3).map_or("", |m| m.as_str());

        operations.push(block_to_operation(
            path,
            language.to_string(),
            content.trim_matches('\n').to_string(),
        ));
    }

    operations
}
