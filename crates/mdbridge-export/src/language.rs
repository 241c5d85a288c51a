//! Extension → fence language tag mapping.

use std::path::Path;

/// Language tag for a file's opening fence, `text` when unknown.
pub fn language_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "text";
    };

    match ext.to_ascii_lowercase().as_str() {
        "cpp" | "cc" | "cxx" | "h" | "hh" | "hpp" => "cpp",
        "c" => "c",
        "py" => "python",
        "java" => "java",
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "html" => "html",
        "css" => "css",
        "sql" => "sql",
        "sh" | "bash" => "bash",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "md" => "markdown",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        _ => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(language_for(Path::new("a.py")), "python");
        assert_eq!(language_for(Path::new("src/main.cpp")), "cpp");
        assert_eq!(language_for(Path::new("lib.rs")), "rust");
        assert_eq!(language_for(Path::new("build.SH")), "bash");
    }

    #[test]
    fn test_unknown_defaults_to_text() {
        assert_eq!(language_for(Path::new("data.bin")), "text");
        assert_eq!(language_for(Path::new("Makefile")), "text");
    }
}
