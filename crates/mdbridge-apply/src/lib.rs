//! Apply orchestration for mdbridge.
//!
//! Takes a markdown document, extracts file operations via mdbridge-parser,
//! and applies them against a destination root: parent directories created
//! on demand, existing targets renamed to timestamped backups when backup is
//! enabled, exclusion globs honored, and every per-operation failure
//! captured in the aggregate report instead of aborting the batch.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Domain)** crate:
//! - Depends on: mdbridge-core, mdbridge-parser
//! - Used by: mdbridge (CLI)
//!
//! Single-threaded, synchronous, batch execution: operations run strictly in
//! parse order and a partially applied batch is an accepted outcome.

pub mod apply;
pub mod diff;

pub use apply::{apply_document, ApplyOptions};
pub use diff::summarize_change;
