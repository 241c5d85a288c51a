//! `mdbridge apply` - apply a markdown response to disk.

use crate::args::Args;
use anyhow::{bail, Context, Result};
use mdbridge_apply::{apply_document, ApplyOptions};
use mdbridge_parser::ParseMode;
use mdbridge_settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(clippy::fn_params_excessive_bools)]
pub fn run(
    args: &Args,
    settings: &Settings,
    file: &Path,
    dest: Option<&Path>,
    no_backup: bool,
    strict: bool,
    diff: bool,
) -> Result<()> {
    // The one document-level failure: an unreadable source document.
    let document = fs::read_to_string(file)
        .with_context(|| format!("failed to read markdown document {}", file.display()))?;

    let dest_root = dest
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&settings.apply.target_dir));

    let mode = if strict || !settings.apply.flexible_parsing {
        ParseMode::Strict
    } else {
        ParseMode::Flexible
    };

    let options = ApplyOptions {
        backup: settings.apply.backup_enabled && !no_backup,
        mode,
        compute_diff: diff || settings.apply.show_diff,
        exclude: settings.exclude_patterns.clone(),
    };

    let report = apply_document(&document, &dest_root, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.applied_cleanly() {
            bail!("{} operation(s) failed", report.failed.len());
        }
        return Ok(());
    }

    println!(
        "processed {}/{} operation(s) successfully",
        report.success.len() + report.deleted.len(),
        report.total
    );

    for applied in &report.success {
        match &applied.backup {
            Some(backup) => println!("  wrote {} (backup: {})", applied.path, backup.display()),
            None => println!("  wrote {}", applied.path),
        }
        if let Some(diff) = &applied.diff {
            println!("    {}", diff);
        }
    }

    for deleted in &report.deleted {
        match &deleted.backup {
            Some(backup) => println!("  deleted {} (backup: {})", deleted.path, backup.display()),
            None => println!("  deleted {}", deleted.path),
        }
    }

    if !report.failed.is_empty() {
        println!("failed:");
        for failed in &report.failed {
            println!("  {}: {}", failed.path, failed.error);
        }
        bail!("{} operation(s) failed", report.failed.len());
    }

    Ok(())
}
