//! CLI argument parsing using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mdbridge - exchange source trees with AI assistants through markdown
#[derive(Parser, Debug, Clone)]
#[command(name = "mdbridge")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Settings file (default: .mdbridge.toml in the working directory)
    #[arg(short = 'c', long, global = true, env = "MDBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output (debug information)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Emit results as JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serialize source directories into one markdown document
    Export {
        /// Source directories (default: from settings)
        dirs: Vec<PathBuf>,

        /// Write the document here instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Extensions to include, comma separated (default: from settings)
        #[arg(long = "ext", value_delimiter = ',')]
        extensions: Vec<String>,
    },

    /// Apply a markdown response to the destination directory
    Apply {
        /// The markdown document to apply
        file: PathBuf,

        /// Destination root (default: from settings)
        #[arg(short = 'd', long)]
        dest: Option<PathBuf>,

        /// Do not create timestamped backups of changed files
        #[arg(long)]
        no_backup: bool,

        /// Strict parsing only; no regex fallback for malformed documents
        #[arg(long)]
        strict: bool,

        /// Report a per-file change classification
        #[arg(long)]
        diff: bool,
    },

    /// Check whether a document matches the exchange format
    Validate {
        /// The markdown document to check
        file: PathBuf,
    },

    /// Show what each parser extracts from a document
    Debug {
        /// The markdown document to inspect
        file: PathBuf,
    },

    /// Write a commented .mdbridge.toml template
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_defaults() {
        let args = Args::parse_from(["mdbridge", "apply", "resp.md"]);
        match args.command {
            Command::Apply {
                file,
                dest,
                no_backup,
                strict,
                diff,
            } => {
                assert_eq!(file, PathBuf::from("resp.md"));
                assert!(dest.is_none());
                assert!(!no_backup);
                assert!(!strict);
                assert!(!diff);
            }
            other => panic!("expected apply, got {:?}", other),
        }
    }

    #[test]
    fn test_export_extension_list() {
        let args = Args::parse_from(["mdbridge", "export", "src", "--ext", "rs,toml"]);
        match args.command {
            Command::Export {
                dirs, extensions, ..
            } => {
                assert_eq!(dirs, vec![PathBuf::from("src")]);
                assert_eq!(extensions, vec!["rs", "toml"]);
            }
            other => panic!("expected export, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Args::parse_from(["mdbridge", "--json", "validate", "resp.md"]);
        assert!(args.json);
        assert!(!args.verbose);
    }
}
