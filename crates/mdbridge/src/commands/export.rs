//! `mdbridge export` - serialize a project into markdown.

use anyhow::{Context, Result};
use mdbridge_export::{export_tree, ExportOptions};
use mdbridge_settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(
    settings: &Settings,
    dirs: &[PathBuf],
    output: Option<&Path>,
    extensions: &[String],
) -> Result<()> {
    let roots: Vec<PathBuf> = if dirs.is_empty() {
        vec![PathBuf::from(&settings.export.source_dir)]
    } else {
        dirs.to_vec()
    };

    let extensions = if extensions.is_empty() {
        settings.export.extensions.clone()
    } else {
        extensions.to_vec()
    };

    let export = export_tree(
        &roots,
        &ExportOptions {
            extensions,
            exclude: settings.exclude_patterns.clone(),
        },
    )?;

    match output {
        Some(path) => {
            fs::write(path, &export.document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "exported {} file(s) to {}",
                export.file_count,
                path.display()
            );
        }
        None => print!("{}", export.document),
    }

    Ok(())
}
