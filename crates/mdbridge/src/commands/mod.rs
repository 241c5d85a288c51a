//! Command implementations.
//!
//! The engine crates only return structured results; every user-facing
//! println lives in this module tree.

mod apply;
mod debug;
mod export;
mod validate;

use crate::args::{Args, Command};
use anyhow::{Context, Result};
use mdbridge_settings::{init_settings, load_settings, SETTINGS_FILE_NAME};
use std::path::PathBuf;
use tracing::debug;

/// Dispatch the parsed command line.
pub fn run(args: &Args) -> Result<()> {
    let settings_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME));

    if matches!(args.command, Command::Init) {
        return init(&settings_path);
    }

    let settings = load_settings(&settings_path)
        .with_context(|| format!("failed to load settings from {}", settings_path.display()))?;
    debug!(path = %settings_path.display(), "settings resolved");

    match &args.command {
        Command::Export {
            dirs,
            output,
            extensions,
        } => export::run(&settings, dirs, output.as_deref(), extensions),
        Command::Apply {
            file,
            dest,
            no_backup,
            strict,
            diff,
        } => apply::run(args, &settings, file, dest.as_deref(), *no_backup, *strict, *diff),
        Command::Validate { file } => validate::run(args, file),
        Command::Debug { file } => debug::run(file),
        // Handled before settings loading
        Command::Init => Ok(()),
    }
}

fn init(path: &std::path::Path) -> Result<()> {
    if init_settings(path)? {
        println!("created {}", path.display());
    } else {
        println!("settings file already exists: {}", path.display());
    }
    Ok(())
}
