//! Exclusion patterns for apply and export.
//!
//! Two rule shapes: glob patterns (`*.log`, `*.backup*`) matched against the
//! whole normalized relative path, and directory prefixes (`node_modules/`)
//! matching everything under that directory.

use glob::Pattern;
use tracing::warn;

enum Rule {
    Glob(Pattern),
    DirPrefix(String),
}

/// A compiled set of exclusion patterns.
pub struct ExclusionList {
    rules: Vec<Rule>,
}

impl ExclusionList {
    /// Compile a pattern list. Unparseable globs are dropped with a warning
    /// rather than failing the whole apply.
    pub fn new(patterns: &[String]) -> Self {
        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            if let Some(prefix) = pattern.strip_suffix('/') {
                rules.push(Rule::DirPrefix(format!("{}/", prefix)));
                continue;
            }
            match Pattern::new(pattern) {
                Ok(compiled) => rules.push(Rule::Glob(compiled)),
                Err(e) => warn!(pattern = %pattern, error = %e, "invalid exclusion pattern ignored"),
            }
        }
        Self { rules }
    }

    /// Should this normalized (`/`-separated) relative path be skipped?
    pub fn matches(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| match rule {
            Rule::Glob(pattern) => pattern.matches(path),
            Rule::DirPrefix(prefix) => path.starts_with(prefix.as_str()),
        })
    }

    /// True when no patterns were configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
