//! Markdown assembly from a source tree.

use crate::language::language_for;
use anyhow::{bail, Result};
use chrono::Local;
use ignore::WalkBuilder;
use mdbridge_core::ExclusionList;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Placeholder body for files that exist but are not valid UTF-8.
const UNREADABLE_PLACEHOLDER: &str = "[file could not be read as UTF-8]";

/// Knobs for one export call.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// File extensions to include, without the leading dot. Empty means
    /// every file the walker yields.
    pub extensions: Vec<String>,
    /// Exclusion globs, matched against the normalized relative path.
    pub exclude: Vec<String>,
}

/// A serialized project.
#[derive(Debug, Clone)]
pub struct Export {
    /// The assembled markdown document.
    pub document: String,
    /// Number of files included.
    pub file_count: usize,
}

/// Serialize the files under `roots` into one markdown document.
///
/// Walks each root with gitignore-aware traversal, filters by extension and
/// exclusion globs, and emits a `## rel_path` header plus fenced block per
/// file, in sorted path order. Fails only when a root does not exist;
/// individual unreadable files contribute a placeholder body instead.
pub fn export_tree(roots: &[PathBuf], options: &ExportOptions) -> Result<Export> {
    for root in roots {
        if !root.is_dir() {
            bail!("source directory does not exist: {}", root.display());
        }
    }

    let exclusions = ExclusionList::new(&options.exclude);
    let extensions: Vec<String> = options
        .extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
        .collect();

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for root in roots {
        collect_files(root, &extensions, &exclusions, &mut files);
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut lines: Vec<String> = Vec::new();
    lines.push("# Project code export".to_string());
    lines.push(format!("Project: {}", project_names(roots)));
    lines.push(format!(
        "Exported: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!(
        "Source: {}",
        roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for (rel, abs) in &files {
        lines.push(format!("## {}", rel));
        lines.push(String::new());
        lines.push(format!("```{}", language_for(abs)));
        lines.push(read_body(abs));
        lines.push("```".to_string());
        lines.push(String::new());
    }

    if files.is_empty() {
        lines.push("No matching source files were found.".to_string());
        lines.push(String::new());
    }

    Ok(Export {
        document: lines.join("\n"),
        file_count: files.len(),
    })
}

fn collect_files(
    root: &Path,
    extensions: &[String],
    exclusions: &ExclusionList,
    out: &mut Vec<(String, PathBuf)>,
) {
    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error, entry skipped");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if !extension_matches(path, extensions) {
            continue;
        }

        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        let rel = rel.to_string_lossy().replace('\\', "/");
        if exclusions.matches(&rel) {
            debug!(path = %rel, "file excluded from export");
            continue;
        }

        out.push((rel, path.to_path_buf()));
    }
}

fn extension_matches(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|want| *want == ext)
        })
}

fn read_body(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => UNREADABLE_PLACEHOLDER.to_string(),
        },
        Err(e) => format!("[error reading file: {}]", e),
    }
}

fn project_names(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|r| {
            r.canonicalize()
                .unwrap_or_else(|_| r.clone())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| r.display().to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn options(extensions: &[&str]) -> ExportOptions {
        ExportOptions {
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
        }
    }

    #[test]
    fn test_exports_matching_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.py"), "print(1)").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let export = export_tree(&[dir.path().to_path_buf()], &options(&["py"])).unwrap();

        assert_eq!(export.file_count, 1);
        assert!(export.document.contains("## src/main.py"));
        assert!(export.document.contains("```python\nprint(1)\n```"));
        assert!(!export.document.contains("notes.txt"));
    }

    #[test]
    fn test_extensions_accept_leading_dot() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "x").unwrap();

        let export = export_tree(&[dir.path().to_path_buf()], &options(&[".py"])).unwrap();
        assert_eq!(export.file_count, 1);
    }

    #[test]
    fn test_empty_extension_list_takes_everything() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "y").unwrap();

        let export = export_tree(&[dir.path().to_path_buf()], &options(&[])).unwrap();
        assert_eq!(export.file_count, 2);
    }

    #[test]
    fn test_exclusion_globs_respected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.py"), "x").unwrap();
        fs::write(dir.path().join("a.log"), "noise").unwrap();

        let export = export_tree(
            &[dir.path().to_path_buf()],
            &ExportOptions {
                extensions: Vec::new(),
                exclude: vec!["*.log".to_string()],
            },
        )
        .unwrap();

        assert_eq!(export.file_count, 1);
        assert!(!export.document.contains("a.log"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let result = export_tree(&[PathBuf::from("/definitely/not/here")], &options(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_matches_notes_it() {
        let dir = tempdir().unwrap();
        let export = export_tree(&[dir.path().to_path_buf()], &options(&["py"])).unwrap();
        assert_eq!(export.file_count, 0);
        assert!(export.document.contains("No matching source files"));
    }

    #[test]
    fn test_sorted_output_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.py"), "2").unwrap();
        fs::write(dir.path().join("a.py"), "1").unwrap();

        let export = export_tree(&[dir.path().to_path_buf()], &options(&["py"])).unwrap();
        let a = export.document.find("## a.py").unwrap();
        let b = export.document.find("## b.py").unwrap();
        assert!(a < b);
    }
}
