//! `mdbridge validate` - check a document against the exchange format.

use crate::args::Args;
use anyhow::{Context, Result};
use mdbridge_parser::validate;
use std::fs;
use std::path::Path;

pub fn run(args: &Args, file: &Path) -> Result<()> {
    let document = fs::read_to_string(file)
        .with_context(|| format!("failed to read markdown document {}", file.display()))?;

    let report = validate(&document, args.verbose);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "format: {} ({})",
        report.format_type,
        if report.is_valid { "valid" } else { "invalid" }
    );
    println!("files: {}", report.file_count);
    for file in &report.files {
        println!("  {}", file);
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for issue in &report.issues {
        println!("issue: {}", issue);
    }
    if let Some(details) = &report.details {
        println!("method: {}", details.method);
        for entry in &details.extracted {
            println!("  {} ({})", entry.path, entry.language);
        }
    }

    Ok(())
}
