//! Strict state-machine extraction over well-formed documents.
//!
//! States: Seeking (scan for an accepted `## ` file header) →
//! AwaitingFence (skip blanks, require a fence open) → InFence (delegate to
//! the fence extractor) → back to Seeking. Every malformed piece (rejected
//! header, header with no fence, unterminated fence) emits nothing and is
//! skipped silently.

use crate::fence;
use crate::header;
use mdbridge_core::{FileOperation, RelativePath, DELETION_SENTINEL};
use tracing::debug;

/// Extract operations from a well-formed document, in header order.
pub fn extract_operations(document: &str) -> Vec<FileOperation> {
    let lines: Vec<&str> = document.split('\n').collect();
    let mut operations = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        // Seeking
        let trimmed = lines[i].trim();
        let Some(header_text) = trimmed.strip_prefix("## ") else {
            i += 1;
            continue;
        };
        let Some(path) = header::classify(header_text) else {
            i += 1;
            continue;
        };

        // AwaitingFence: skip blank lines after the header
        let mut j = i + 1;
        while j < lines.len() && lines[j].trim().is_empty() {
            j += 1;
        }
        if j >= lines.len() || !fence::is_fence_open(lines[j]) {
            // No fence means no file; re-examine the line we stopped at, it
            // may itself be the next header.
            debug!(path = %path, "header without code fence, skipping");
            i = j;
            continue;
        }

        // InFence
        match fence::extract_block(&lines, j) {
            Some(block) => {
                operations.push(block_to_operation(path, block.language, block.content));
                i = block.next_index;
            }
            None => {
                debug!(path = %path, "unterminated code fence, block discarded");
                i = j + 1;
            }
        }
    }

    operations
}

/// Turn an extracted block into a write or, when the deletion marker is
/// present, a delete. The block body of a delete is discarded.
pub(crate) fn block_to_operation(
    path: RelativePath,
    language: String,
    content: String,
) -> FileOperation {
    if language == "deleted" || content.contains(DELETION_SENTINEL) {
        FileOperation::Delete { path }
    } else {
        FileOperation::Write {
            path,
            language,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file() {
        let ops = extract_operations("## a.py\n\n```python\nprint(1)\n```\n");
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            FileOperation::Write {
                path,
                language,
                content,
            } => {
                assert_eq!(path.as_str(), "a.py");
                assert_eq!(language, "python");
                assert_eq!(content, "print(1)");
            }
            other => panic!("expected write, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_files_in_order() {
        let doc = "\
Some intro prose.

## src/main.cpp

```cpp
int main() { return 0; }
```

## 1. Notes

This section is prose, not a file.

## src/util.h

```cpp
#pragma once
```
";
        let ops = extract_operations(doc);
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].path().as_str(), "src/main.cpp");
        assert_eq!(ops[1].path().as_str(), "src/util.h");
    }

    #[test]
    fn test_section_title_never_a_path() {
        let doc = "## 1. Introduction\n\n```text\nanything at all\n```\n";
        assert!(extract_operations(doc).is_empty());
    }

    #[test]
    fn test_header_without_fence_emits_nothing() {
        let doc = "## a.py\n\njust prose, no fence\n";
        assert!(extract_operations(doc).is_empty());
    }

    #[test]
    fn test_header_directly_after_abandoned_header_is_used() {
        // First header has no fence; the parser must still see the second.
        let doc = "## a.py\n\n## b.py\n\n```python\nx = 1\n```\n";
        let ops = extract_operations(doc);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].path().as_str(), "b.py");
    }

    #[test]
    fn test_unterminated_fence_discarded() {
        let doc = "## a.py\n\n```python\nprint(1)\n";
        assert!(extract_operations(doc).is_empty());
    }

    #[test]
    fn test_deleted_language_tag() {
        let doc = "## old.py\n\n```deleted\nwhatever\n```\n";
        let ops = extract_operations(doc);
        assert_eq!(ops.len(), 1);
        assert!(ops[0].is_delete());
    }

    #[test]
    fn test_deletion_sentinel_in_body() {
        let doc = format!("## old.py\n\n```python\n{}\n```\n", DELETION_SENTINEL);
        let ops = extract_operations(&doc);
        assert_eq!(ops.len(), 1);
        assert!(ops[0].is_delete());
    }

    #[test]
    fn test_unsafe_path_dropped_silently() {
        let doc = "## ../../etc/passwd\n\n```text\nowned\n```\n";
        assert!(extract_operations(doc).is_empty());
    }

    #[test]
    fn test_label_prefix_stripped() {
        let doc = "## File: src/a.rs\n\n```rust\nfn main() {}\n```\n";
        let ops = extract_operations(doc);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].path().as_str(), "src/a.rs");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_operations("").is_empty());
        assert!(extract_operations("no markers anywhere").is_empty());
    }

    #[test]
    fn test_content_with_tagged_inner_fence_survives() {
        let doc = "## README.md\n\n```markdown\nUsage:\n```bash\ncargo run\n```\n";
        // The inner ```bash does not close the block; the final ``` does.
        let ops = extract_operations(doc);
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            FileOperation::Write { content, .. } => {
                assert_eq!(content, "Usage:\n```bash\ncargo run");
            }
            other => panic!("expected write, got {:?}", other),
        }
    }
}
