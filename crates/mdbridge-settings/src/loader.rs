//! Settings file loading and first-run template generation.

use crate::schema::Settings;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = ".mdbridge.toml";

/// Commented template written on first run. Values mirror the defaults.
const SETTINGS_TEMPLATE: &str = r#"# mdbridge settings
# Every key is optional; missing keys fall back to built-in defaults.

# Globs skipped by both export and apply. A trailing slash excludes the
# whole directory.
exclude_patterns = ["*.log", "*.tmp", "node_modules/", "*.backup*"]

[export]
# Default source directory for `mdbridge export`.
source_dir = "."
# Extensions to include, without the leading dot.
extensions = ["cpp", "cc", "h", "hh", "py", "rs", "js", "ts"]

[apply]
# Default destination root for `mdbridge apply`.
target_dir = "."
# Rename existing files to timestamped backups before changing them.
backup_enabled = true
# Fall back to regex extraction when strict parsing finds nothing.
flexible_parsing = true
# Report per-file change classification.
show_diff = false
"#;

/// Errors from loading or initializing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load settings from `path`. A missing file yields the defaults; a present
/// but malformed file is an error rather than a silent fallback.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Write the commented template to `path` unless a file already exists.
/// Returns true when a new file was created.
pub fn init_settings(path: &Path) -> Result<bool, SettingsError> {
    if path.exists() {
        return Ok(false);
    }
    write_atomic(path, SETTINGS_TEMPLATE)?;
    Ok(true)
}

/// Write via a sibling temp file and rename, so readers never observe a
/// half-written settings file.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)
}
