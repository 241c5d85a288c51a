//! `mdbridge debug` - show what each parser extracts from a document.
//!
//! Troubleshooting aid for malformed AI responses: run both extraction
//! strategies and list every `## ` line the document contains. Both parser
//! views are always shown; when strict parsing only partially succeeds,
//! comparing the two reveals which blocks it dropped.

use anyhow::{Context, Result};
use mdbridge_core::FileOperation;
use mdbridge_parser::{flexible, standard};
use std::fs;
use std::path::Path;

pub fn run(file: &Path) -> Result<()> {
    let document = fs::read_to_string(file)
        .with_context(|| format!("failed to read markdown document {}", file.display()))?;
    print!("{}", render(&document));
    Ok(())
}

fn render(document: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    let standard_ops = standard::extract_operations(document);
    lines.push(format!(
        "standard parser: {} operation(s)",
        standard_ops.len()
    ));
    describe_operations(&standard_ops, &mut lines);

    let flexible_ops = flexible::extract_operations(document);
    lines.push(format!(
        "flexible parser: {} operation(s)",
        flexible_ops.len()
    ));
    describe_operations(&flexible_ops, &mut lines);

    lines.push("lines starting with '##':".to_string());
    for (number, line) in document.split('\n').enumerate() {
        if line.trim().starts_with("##") {
            lines.push(format!("  line {}: {}", number + 1, line.trim()));
        }
    }

    lines.join("\n") + "\n"
}

fn describe_operations(operations: &[FileOperation], lines: &mut Vec<String>) {
    for operation in operations {
        match operation {
            FileOperation::Write {
                path,
                language,
                content,
            } => lines.push(format!(
                "  write {} ({}, {} bytes)",
                path,
                language,
                content.len()
            )),
            FileOperation::Delete { path } => lines.push(format!("  delete {}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_parser_views_always_shown() {
        // Strict parsing succeeds here, but the flexible view must still
        // appear so partially parsed documents can be compared.
        let out = render("## a.py\n\n```python\nprint(1)\n```\n");
        assert!(out.contains("standard parser: 1 operation(s)"));
        assert!(out.contains("flexible parser: 1 operation(s)"));
        assert!(out.contains("  write a.py (python, 8 bytes)"));
    }

    #[test]
    fn test_header_lines_listed() {
        let out = render("prose\n## 1. Intro\n\n## a.py\n\n```python\nx\n```\n");
        assert!(out.contains("line 2: ## 1. Intro"));
        assert!(out.contains("line 4: ## a.py"));
    }

    #[test]
    fn test_unparseable_document_shows_zero_counts() {
        let out = render("nothing to see");
        assert!(out.contains("standard parser: 0 operation(s)"));
        assert!(out.contains("flexible parser: 0 operation(s)"));
    }
}
