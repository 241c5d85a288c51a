//! Header classification: file path vs. markdown section title.
//!
//! AI assistants freely use `## ` both for prose sections ("## 1. Overview")
//! and for file boundaries ("## src/main.cpp"). The classifier trades recall
//! for precision: a missed file is recoverable, prose written to disk is not.

use mdbridge_core::RelativePath;
use regex::Regex;
use std::sync::LazyLock;

/// Numbered headings: `1. Intro`, `2.1 Usage`, ...
static NUMBERED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*\s").expect("invalid numbered heading regex"));

/// Lettered headings: `A. Intro`, `B. Usage`, ...
static LETTER_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\.\s").expect("invalid letter heading regex"));

/// Prose headings: leading capital or CJK character, no dot anywhere.
static PROSE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z\x{4e00}-\x{9fa5}][^.]*$").expect("invalid prose heading regex")
});

/// Optional label prefix before the actual path: `File: src/a.rs`, `文件：a.py`.
static PATH_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(文件|file)[:：]?\s*").expect("invalid path label regex"));

/// Extensions that mark a header as a document path even without separators.
const DOCUMENT_EXTENSIONS: [&str; 5] = [".md", ".txt", ".json", ".yaml", ".yml"];

/// Does the text after `## ` read as a markdown section title?
pub fn is_section_title(text: &str) -> bool {
    let text = text.trim();
    if NUMBERED_HEADING.is_match(text) || LETTER_HEADING.is_match(text) {
        return true;
    }
    // Pure prose: capitalized/CJK start, no extension dot, no separators
    PROSE_HEADING.is_match(text) && !text.contains('.') && !text.contains('/') && !text.contains('\\')
}

/// Acceptance heuristic for a candidate already known not to be a title.
///
/// Accepts only strings with explicit file-path features; everything else is
/// rejected (neither a title nor a usable path).
pub fn looks_like_file_path(candidate: &str) -> bool {
    let basename = candidate
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(candidate);

    basename.contains('.')
        || candidate.contains('/')
        || candidate.contains('\\')
        || DOCUMENT_EXTENSIONS.iter().any(|ext| candidate.ends_with(ext))
}

/// Classify a `## `-header's text, producing a validated path when it names a
/// file. Returns `None` for section titles, unsafe paths and ambiguous text.
pub fn classify(text: &str) -> Option<RelativePath> {
    let text = text.trim();
    if is_section_title(text) {
        return None;
    }

    let stripped = PATH_LABEL.replace(text, "");
    let path = RelativePath::parse(&stripped)?;
    if looks_like_file_path(path.as_str()) {
        Some(path)
    } else {
        None
    }
}
