//! Markdown response parsing for mdbridge.
//!
//! AI assistants return code wrapped in markdown whose formatting this
//! system does not control: prose around and inside code fences, nested
//! backtick sequences, inconsistent path notation, missing closing fences.
//! This crate turns such documents into an ordered list of
//! [`FileOperation`]s with a conservative state machine and a documented
//! regex fallback.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Domain)** crate:
//! - Depends on: mdbridge-core, regex
//! - Used by: mdbridge-apply, mdbridge (CLI)
//!
//! # Usage
//!
//! ```rust
//! use mdbridge_parser::{extract_operations, ParseMode};
//!
//! let doc = "## a.py\n\n```python\nprint(1)\n```\n";
//! let ops = extract_operations(doc, ParseMode::Flexible);
//! assert_eq!(ops.len(), 1);
//! ```

pub mod fence;
pub mod flexible;
pub mod header;
pub mod standard;
pub mod validate;

use mdbridge_core::FileOperation;
use tracing::debug;

/// Which extraction strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Strict state-machine parsing only.
    Strict,
    /// Strict parsing first, regex fallback when it finds nothing.
    #[default]
    Flexible,
}

/// Extract file operations from a markdown document.
///
/// Empty input or input with no recognizable file boundaries yields an
/// empty vector, never an error. Invalid paths and malformed blocks are
/// skipped silently.
pub fn extract_operations(document: &str, mode: ParseMode) -> Vec<FileOperation> {
    let ops = standard::extract_operations(document);
    if !ops.is_empty() || mode == ParseMode::Strict {
        return ops;
    }

    debug!("standard parse found no operations, trying flexible extraction");
    flexible::extract_operations(document)
}

pub use validate::validate;
