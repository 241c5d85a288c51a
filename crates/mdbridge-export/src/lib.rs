//! Project-tree → markdown serialization for mdbridge.
//!
//! The counterpart of mdbridge-parser: walks one or more source roots
//! (gitignore-aware), filters by extension and exclusion globs, and
//! assembles the markdown exchange document the parser reads back.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Domain)** crate:
//! - Depends on: mdbridge-core, ignore
//! - Used by: mdbridge (CLI)

pub mod export;
pub mod language;

pub use export::{export_tree, Export, ExportOptions};
pub use language::language_for;
