use std::path::Path;

/// Syntax mode handed to the editing surface. Unknown extensions fall back to plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxMode {
    JavaScript,
    TypeScript,
    Json,
    Html,
    Css,
    Scss,
    Python,
    Java,
    Cpp,
    C,
    CSharp,
    Php,
    Ruby,
    Go,
    Rust,
    Sql,
    Xml,
    Markdown,
    Shell,
    Yaml,
    PlainText,
}

impl SyntaxMode {
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|s| s.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::PlainText)
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" => Self::JavaScript,
            "ts" | "tsx" => Self::TypeScript,
            "json" => Self::Json,
            "html" => Self::Html,
            "css" => Self::Css,
            "scss" => Self::Scss,
            "py" => Self::Python,
            "java" => Self::Java,
            "cpp" => Self::Cpp,
            "c" => Self::C,
            "cs" => Self::CSharp,
            "php" => Self::Php,
            "rb" => Self::Ruby,
            "go" => Self::Go,
            "rs" => Self::Rust,
            "sql" => Self::Sql,
            "xml" => Self::Xml,
            "md" => Self::Markdown,
            "sh" => Self::Shell,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::PlainText,
        }
    }

    /// Mode identifier understood by the editing surface.
    pub fn id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Json => "json",
            Self::Html => "html",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Python => "python",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::CSharp => "csharp",
            Self::Php => "php",
            Self::Ruby => "ruby",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Sql => "sql",
            Self::Xml => "xml",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
            Self::Yaml => "yaml",
            Self::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::PlainText => "Plain Text",
            other => other.id(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
