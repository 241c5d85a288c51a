//! Core types for the mdbridge markdown/filesystem bridge.
//!
//! This crate provides the foundation types used across all other mdbridge
//! crates. It has ZERO internal crate dependencies and only depends on a
//! handful of external libraries.
//!
//! ## Architecture Principle
//!
//! mdbridge-core sits at the bottom of the dependency hierarchy:
//! - Layer 1 (Foundation): mdbridge-core ← YOU ARE HERE
//! - Layer 2 (Domain): mdbridge-parser, mdbridge-apply, mdbridge-export
//! - Layer 3 (Application): mdbridge (CLI binary)

pub mod exclude;
pub mod operation;
pub mod path;
pub mod report;

// Re-exports
pub use exclude::ExclusionList;
pub use operation::{FileOperation, DELETION_SENTINEL};
pub use path::RelativePath;
pub use report::{
    AppliedFile, ApplyReport, DeletedFile, DiffSummary, ExtractedEntry, FailedFile, FormatType,
    ValidationDetails, ValidationReport,
};
