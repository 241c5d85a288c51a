//! The apply orchestrator: parsed operations → backed-up filesystem changes.

use crate::diff::summarize_change;
use anyhow::{bail, Context, Result};
use chrono::Local;
use mdbridge_core::{
    AppliedFile, ApplyReport, DeletedFile, DiffSummary, ExclusionList, FailedFile, FileOperation,
};
use mdbridge_parser::{extract_operations, ParseMode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Knobs for one apply call.
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// Rename existing targets to a timestamped backup before overwriting
    /// or deleting.
    pub backup: bool,
    /// Extraction strategy (strict, or strict with regex fallback).
    pub mode: ParseMode,
    /// Attach a change classification to each write over an existing file.
    pub compute_diff: bool,
    /// Exclusion globs; matching operations are skipped silently.
    pub exclude: Vec<String>,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            backup: true,
            mode: ParseMode::Flexible,
            compute_diff: false,
            exclude: Vec::new(),
        }
    }
}

/// Parse `document` and apply every extracted operation under `dest_root`.
///
/// Operations run strictly in parse order. A failing operation is recorded
/// and the batch continues; the report's `success`/`deleted`/`failed` lists
/// partition the non-skipped operations.
pub fn apply_document(document: &str, dest_root: &Path, options: &ApplyOptions) -> ApplyReport {
    let operations = extract_operations(document, options.mode);
    let exclusions = ExclusionList::new(&options.exclude);

    let mut report = ApplyReport {
        total: operations.len(),
        parsed_paths: operations
            .iter()
            .map(|op| op.path().as_str().to_string())
            .collect(),
        ..ApplyReport::default()
    };

    for operation in operations {
        let rel = operation.path().as_str().to_string();
        if exclusions.matches(&rel) {
            debug!(path = %rel, "operation excluded by pattern");
            continue;
        }

        // Path safety was established during parsing; this join cannot
        // escape dest_root.
        let target = dest_root.join(&rel);

        match operation {
            FileOperation::Delete { .. } => match delete_target(&target, options.backup) {
                Ok(backup) => report.deleted.push(DeletedFile { path: rel, backup }),
                Err(e) => report.failed.push(FailedFile {
                    path: rel,
                    error: format!("{:#}", e),
                }),
            },
            FileOperation::Write {
                language, content, ..
            } => match write_target(&target, &content, options) {
                Ok((backup, diff)) => report.success.push(AppliedFile {
                    path: rel,
                    language,
                    backup,
                    diff,
                }),
                Err(e) => report.failed.push(FailedFile {
                    path: rel,
                    error: format!("{:#}", e),
                }),
            },
        }
    }

    report
}

/// `<target>.backup_YYYYMMDD_HHMMSS`
fn backup_path(target: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut name = target.as_os_str().to_os_string();
    name.push(format!(".backup_{}", timestamp));
    PathBuf::from(name)
}

fn delete_target(target: &Path, backup: bool) -> Result<Option<PathBuf>> {
    if !target.exists() {
        bail!("target does not exist");
    }

    if backup {
        let backup = backup_path(target);
        fs::rename(target, &backup).context("failed to move target to backup")?;
        Ok(Some(backup))
    } else {
        fs::remove_file(target).context("failed to delete target")?;
        Ok(None)
    }
}

fn write_target(
    target: &Path,
    content: &str,
    options: &ApplyOptions,
) -> Result<(Option<PathBuf>, Option<DiffSummary>)> {
    let diff = (options.compute_diff && target.exists())
        .then(|| summarize_change(fs::read_to_string(target).ok().as_deref(), content));

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).context("failed to create parent directories")?;
    }

    let backup = if options.backup && target.exists() {
        let backup = backup_path(target);
        fs::rename(target, &backup).context("failed to move target to backup")?;
        Some(backup)
    } else {
        None
    };

    fs::write(target, content).context("failed to write file")?;
    Ok((backup, diff))
}
