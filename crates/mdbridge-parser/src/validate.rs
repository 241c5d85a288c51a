//! Document format validation: which extraction strategy, if any, works.
//!
//! Runs both parsers without touching the filesystem and classifies the
//! document as standard / flexible / code-blocks-only / none. Both parsers
//! skip on ambiguity instead of failing, so validation itself cannot fail.

use crate::{flexible, standard};
use mdbridge_core::{
    ExtractedEntry, FileOperation, FormatType, ValidationDetails, ValidationReport,
};
use regex::Regex;
use std::sync::LazyLock;

/// Any fenced block at all, independent of file headers.
static ANY_FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(\w*)[ \t]*\n(.*?)\n\s*```").expect("invalid fenced block regex")
});

/// Check a document against the exchange format.
///
/// `verbose` attaches the extracted path/language pairs and the parsing
/// method to the report.
pub fn validate(document: &str, verbose: bool) -> ValidationReport {
    let standard_ops = standard::extract_operations(document);
    if !standard_ops.is_empty() {
        return report_for(FormatType::Standard, standard_ops, Vec::new(), verbose, "standard_parsing");
    }

    let flexible_ops = flexible::extract_operations(document);
    if !flexible_ops.is_empty() {
        let warnings =
            vec!["flexible parsing was needed; prefer the standard format".to_string()];
        return report_for(FormatType::Flexible, flexible_ops, warnings, verbose, "flexible_parsing");
    }

    // Nothing extracted; distinguish stray code blocks from empty prose.
    let mut report = ValidationReport {
        is_valid: false,
        format_type: FormatType::None,
        file_count: 0,
        files: Vec::new(),
        warnings: Vec::new(),
        issues: vec!["no recognizable file format".to_string()],
        details: None,
    };

    let block_count = ANY_FENCED_BLOCK.captures_iter(document).count();
    if block_count > 0 {
        report.format_type = FormatType::CodeBlocksOnly;
        report.warnings.push(format!(
            "found {} code block(s) without file-path headers",
            block_count
        ));
    }

    report
}

fn report_for(
    format_type: FormatType,
    operations: Vec<FileOperation>,
    warnings: Vec<String>,
    verbose: bool,
    method: &str,
) -> ValidationReport {
    let files: Vec<String> = operations
        .iter()
        .map(|op| op.path().as_str().to_string())
        .collect();

    let details = verbose.then(|| ValidationDetails {
        method: method.to_string(),
        extracted: operations
            .iter()
            .map(|op| ExtractedEntry {
                path: op.path().as_str().to_string(),
                language: match op {
                    FileOperation::Write { language, .. } => language.clone(),
                    FileOperation::Delete { .. } => "deleted".to_string(),
                },
            })
            .collect(),
    });

    ValidationReport {
        is_valid: true,
        format_type,
        file_count: files.len(),
        files,
        warnings,
        issues: Vec::new(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_document() {
        let report = validate("## a.py\n\n```python\nprint(1)\n```\n", false);
        assert!(report.is_valid);
        assert_eq!(report.format_type, FormatType::Standard);
        assert_eq!(report.file_count, 1);
        assert_eq!(report.files, vec!["a.py"]);
        assert!(report.warnings.is_empty());
        assert!(report.details.is_none());
    }

    #[test]
    fn test_verbose_attaches_details() {
        let report = validate("## a.py\n\n```python\nprint(1)\n```\n", true);
        let details = report.details.unwrap();
        assert_eq!(details.method, "standard_parsing");
        assert_eq!(details.extracted.len(), 1);
        assert_eq!(details.extracted[0].language, "python");
    }

    #[test]
    fn test_flexible_document_warns() {
        // Header buried mid-line: invisible to the strict parser, recovered
        // by the regex fallback.
        let report = validate("Here you go: ## a.py\n\n```python\nprint(1)\n```\n", false);
        assert!(report.is_valid);
        assert_eq!(report.format_type, FormatType::Flexible);
        assert_eq!(report.files, vec!["a.py"]);
        assert!(report.warnings[0].contains("standard format"));
    }

    #[test]
    fn test_code_blocks_without_headers() {
        let report = validate("some prose\n\n```python\nprint(1)\n```\n", false);
        assert!(!report.is_valid);
        assert_eq!(report.format_type, FormatType::CodeBlocksOnly);
        assert_eq!(report.issues, vec!["no recognizable file format"]);
        assert!(report.warnings[0].contains("1 code block"));
    }

    #[test]
    fn test_plain_prose_is_none() {
        let report = validate("just words, nothing else", false);
        assert!(!report.is_valid);
        assert_eq!(report.format_type, FormatType::None);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let report = validate("", false);
        assert!(!report.is_valid);
        assert_eq!(report.format_type, FormatType::None);
        assert_eq!(report.file_count, 0);
    }
}
