//! TOML-based settings for mdbridge.
//!
//! This crate provides configuration management for the mdbridge CLI:
//! - Loading settings from `.mdbridge.toml` in the working directory
//! - Partial configuration files via `#[serde(default)]` on every struct
//! - First-run template generation
//! - Atomic file writes with temp file + rename
//!
//! The parsing/apply engine itself takes no implicit configuration; the CLI
//! resolves settings here and passes explicit options down.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::{init_settings, load_settings, SettingsError, SETTINGS_FILE_NAME};
pub use schema::{ApplySettings, ExportSettings, Settings};
