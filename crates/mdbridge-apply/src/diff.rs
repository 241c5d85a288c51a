//! Line-count-based change classification.
//!
//! Deliberately not a real diff (see `DiffSummary`): the counts are the
//! clamped difference of line totals, which under-reports edits that add and
//! remove the same number of lines. Kept this way for compatibility with the
//! exchange format's reporting.

use mdbridge_core::DiffSummary;

/// Classify a proposed write against the existing content.
///
/// `old` is `None` when the target did not exist or could not be read.
pub fn summarize_change(old: Option<&str>, new: &str) -> DiffSummary {
    let Some(old) = old else {
        return DiffSummary::NewFile {
            lines_added: line_count(new),
        };
    };

    if old == new {
        return DiffSummary::NoChange;
    }

    let old_lines = line_count(old);
    let new_lines = line_count(new);
    DiffSummary::Modified {
        lines_added: new_lines.saturating_sub(old_lines),
        lines_removed: old_lines.saturating_sub(new_lines),
    }
}

fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file() {
        let summary = summarize_change(None, "a\nb\nc");
        assert_eq!(summary, DiffSummary::NewFile { lines_added: 3 });
    }

    #[test]
    fn test_no_change() {
        assert_eq!(summarize_change(Some("same"), "same"), DiffSummary::NoChange);
    }

    #[test]
    fn test_lines_added() {
        let summary = summarize_change(Some("a"), "a\nb\nc\nd");
        assert_eq!(
            summary,
            DiffSummary::Modified {
                lines_added: 3,
                lines_removed: 0
            }
        );
    }

    #[test]
    fn test_lines_removed() {
        let summary = summarize_change(Some("a\nb\nc"), "a");
        assert_eq!(
            summary,
            DiffSummary::Modified {
                lines_added: 0,
                lines_removed: 2
            }
        );
    }

    #[test]
    fn test_equal_length_edit_reports_zero_counts() {
        // Known imprecision, preserved on purpose.
        let summary = summarize_change(Some("old line"), "new line");
        assert_eq!(
            summary,
            DiffSummary::Modified {
                lines_added: 0,
                lines_removed: 0
            }
        );
    }
}
