//! Settings schema definitions for mdbridge configuration.
//!
//! All settings structs use `#[serde(default)]` to allow partial
//! configuration files. Missing fields are filled with defaults.

use serde::{Deserialize, Serialize};

/// Top-level settings, one `.mdbridge.toml` per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Globs skipped by both export and apply.
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    pub export: ExportSettings,
    pub apply: ApplySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exclude_patterns: default_exclude_patterns(),
            export: ExportSettings::default(),
            apply: ApplySettings::default(),
        }
    }
}

/// Settings for serializing a project to markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Default source directory when none is given on the command line.
    pub source_dir: String,
    /// File extensions to include, without the leading dot.
    pub extensions: Vec<String>,
}

/// Settings for applying a markdown response to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplySettings {
    /// Default destination root.
    pub target_dir: String,
    /// Rename existing targets to timestamped backups before changing them.
    pub backup_enabled: bool,
    /// Fall back to regex extraction when strict parsing finds nothing.
    pub flexible_parsing: bool,
    /// Report a change classification per written file.
    pub show_diff: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            source_dir: ".".to_string(),
            extensions: ["cpp", "cc", "h", "hh", "py", "rs", "js", "ts"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for ApplySettings {
    fn default() -> Self {
        Self {
            target_dir: ".".to_string(),
            backup_enabled: true,
            flexible_parsing: true,
            show_diff: false,
        }
    }
}

/// Default exclusion globs, applied when the file omits `exclude_patterns`.
pub fn default_exclude_patterns() -> Vec<String> {
    ["*.log", "*.tmp", "node_modules/", "*.backup*"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
