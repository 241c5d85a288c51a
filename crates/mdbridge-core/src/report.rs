//! Structured results returned by the apply orchestrator and the format
//! validator. The core never prints; presentation belongs to the caller.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Diff classification
// =============================================================================

/// Line-count-based change classification for a proposed write.
///
/// This is deliberately NOT a true diff: when an edit adds and removes the
/// same number of lines it reports `Modified` with both counts at zero.
/// Purely descriptive; never blocks an apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffSummary {
    /// Target did not exist or could not be read.
    NewFile { lines_added: usize },
    /// Old and new content are byte-identical.
    NoChange,
    /// Content changed; counts are the line-count delta, clamped at zero.
    Modified {
        lines_added: usize,
        lines_removed: usize,
    },
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffSummary::NewFile { lines_added } => write!(f, "new file (+{} lines)", lines_added),
            DiffSummary::NoChange => write!(f, "no change"),
            DiffSummary::Modified {
                lines_added,
                lines_removed,
            } => write!(f, "modified (+{} -{} lines)", lines_added, lines_removed),
        }
    }
}

// =============================================================================
// Apply report
// =============================================================================

/// A write that completed.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFile {
    /// Normalized relative path of the written file.
    pub path: String,
    /// Language tag the block carried.
    pub language: String,
    /// Where the previous content was renamed to, if backup was enabled
    /// and the target existed.
    pub backup: Option<PathBuf>,
    /// Change classification, present when diff reporting was requested.
    pub diff: Option<DiffSummary>,
}

/// An operation that hit an I/O error (or a delete of a missing target).
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: String,
    pub error: String,
}

/// A delete that completed.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedFile {
    pub path: String,
    pub backup: Option<PathBuf>,
}

/// Aggregate outcome of one apply call.
///
/// `success`, `deleted` and `failed` partition the non-skipped operations;
/// operations matching an exclusion glob appear in none of them but still
/// count toward `total`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    /// Number of operations parsed out of the document.
    pub total: usize,
    /// Paths of every parsed operation, in document order. Operations
    /// skipped by exclusion patterns appear only here.
    pub parsed_paths: Vec<String>,
    pub success: Vec<AppliedFile>,
    pub deleted: Vec<DeletedFile>,
    pub failed: Vec<FailedFile>,
}

impl ApplyReport {
    /// True when no per-operation failure was recorded.
    pub fn applied_cleanly(&self) -> bool {
        self.failed.is_empty()
    }
}

// =============================================================================
// Validation report
// =============================================================================

/// Which extraction strategy, if any, recognizes the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatType {
    /// Strict header + fence state machine succeeded.
    Standard,
    /// Only the fallback regex extractor succeeded.
    Flexible,
    /// Fenced blocks exist but no file boundaries were recognized.
    CodeBlocksOnly,
    /// Nothing recognizable at all.
    None,
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatType::Standard => "standard",
            FormatType::Flexible => "flexible",
            FormatType::CodeBlocksOnly => "code_blocks_only",
            FormatType::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// One extracted path/language pair, used in verbose validation details.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedEntry {
    pub path: String,
    pub language: String,
}

/// Verbose extraction details.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetails {
    /// Which parser produced the entries (`standard_parsing` / `flexible_parsing`).
    pub method: String,
    pub extracted: Vec<ExtractedEntry>,
}

/// Result of checking a document against the exchange format.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub format_type: FormatType,
    pub file_count: usize,
    /// Paths the winning parser extracted, in document order.
    pub files: Vec<String>,
    /// Non-fatal observations (e.g. flexible mode was needed).
    pub warnings: Vec<String>,
    /// Reasons the document is unusable.
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationDetails>,
}
