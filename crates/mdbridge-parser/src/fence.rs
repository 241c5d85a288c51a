//! Fenced code block extraction.
//!
//! The closing-fence test is strict equality on the trimmed line (`` ``` ``
//! with nothing else), not a prefix test, so fences opened *inside* file
//! content (e.g. a markdown file embedding examples with language tags) do
//! not terminate extraction early. A standalone trimmed triple-backtick line
//! inside the content still does, a known ambiguity of the exchange format;
//! there is no escaping convention.

/// A successfully extracted fenced block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceBlock {
    /// Language tag from the opening fence, `text` when empty.
    pub language: String,
    /// Raw block body, fence delimiters stripped, leading and trailing
    /// blank lines trimmed.
    pub content: String,
    /// Index of the first line after the closing fence.
    pub next_index: usize,
}

/// Does this line open a fenced block?
pub fn is_fence_open(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Extract the block opened at `lines[open_index]`.
///
/// Returns `None` when the line is not a fence open or no closing fence
/// exists before end of input; the content is discarded in that case, never
/// partially returned.
pub fn extract_block(lines: &[&str], open_index: usize) -> Option<FenceBlock> {
    let open_line = lines.get(open_index)?.trim();
    let tag = open_line.strip_prefix("```")?.trim();
    let language = if tag.is_empty() { "text" } else { tag };

    let mut i = open_index + 1;
    while i < lines.len() {
        if lines[i].trim() == "```" {
            return Some(FenceBlock {
                language: language.to_string(),
                content: trim_blank_edges(&lines[open_index + 1..i]),
                next_index: i + 1,
            });
        }
        i += 1;
    }

    // No closing fence before end of input
    None
}

/// Join lines, dropping leading and trailing blank lines but preserving
/// interior blanks and indentation.
fn trim_blank_edges(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |p| p + 1);
    lines[start..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(doc: &str) -> Vec<&str> {
        doc.split('\n').collect()
    }

    #[test]
    fn test_extracts_simple_block() {
        let doc = lines("```python\nprint(1)\n```\nafter");
        let block = extract_block(&doc, 0).unwrap();
        assert_eq!(block.language, "python");
        assert_eq!(block.content, "print(1)");
        assert_eq!(block.next_index, 3);
    }

    #[test]
    fn test_empty_language_defaults_to_text() {
        let doc = lines("```\nhello\n```");
        let block = extract_block(&doc, 0).unwrap();
        assert_eq!(block.language, "text");
    }

    #[test]
    fn test_trims_blank_edges_keeps_interior() {
        let doc = lines("```rust\n\nfn a() {}\n\nfn b() {}\n\n```");
        let block = extract_block(&doc, 0).unwrap();
        assert_eq!(block.content, "fn a() {}\n\nfn b() {}");
    }

    #[test]
    fn test_preserves_indentation() {
        let doc = lines("```python\n    indented\n```");
        let block = extract_block(&doc, 0).unwrap();
        assert_eq!(block.content, "    indented");
    }

    #[test]
    fn test_embedded_fence_with_tag_does_not_close() {
        // A fence with a language tag inside the body is content, not a close
        let doc = lines("```markdown\nexample:\n```python\ncode\n```\n");
        let block = extract_block(&doc, 0).unwrap();
        assert_eq!(block.content, "example:\n```python\ncode");
        assert_eq!(block.next_index, 5);
    }

    #[test]
    fn test_missing_close_discards_block() {
        let doc = lines("```python\nprint(1)\nno close here");
        assert!(extract_block(&doc, 0).is_none());
    }

    #[test]
    fn test_not_a_fence_open() {
        let doc = lines("plain text\n```\n");
        assert!(extract_block(&doc, 0).is_none());
    }

    #[test]
    fn test_close_detected_with_surrounding_whitespace() {
        let doc = lines("```go\nx\n   ```   ");
        let block = extract_block(&doc, 0).unwrap();
        assert_eq!(block.content, "x");
    }
}
