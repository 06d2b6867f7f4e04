//! Language tags and the file-extension resolver.

use phf::phf_map;
use std::path::Path;

/// A supported source language.
///
/// This is a closed set: adding a language means adding a variant here,
/// its extensions to [`EXTENSION_MAP`], and (optionally) a rule set under
/// `analysis/languages/`. Languages without a rule set still resolve but
/// contribute nothing to analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    Cpp,
    CSharp,
    Go,
    Java,
    JavaScript,
    Kotlin,
    Php,
    Python,
    Ruby,
    Rust,
    Swift,
    TypeScript,
    /// Sentinel for unmapped extensions.
    Unknown,
}

/// File extension (without dot, lowercase) to language tag.
static EXTENSION_MAP: phf::Map<&'static str, Language> = phf_map! {
    "cs" => Language::CSharp,
    "py" => Language::Python,
    "js" => Language::JavaScript,
    "jsx" => Language::JavaScript,
    "ts" => Language::TypeScript,
    "tsx" => Language::TypeScript,
    "java" => Language::Java,
    "go" => Language::Go,
    "rs" => Language::Rust,
    "cpp" => Language::Cpp,
    "c" => Language::C,
    "rb" => Language::Ruby,
    "php" => Language::Php,
    "swift" => Language::Swift,
    "kt" => Language::Kotlin,
};

impl Language {
    /// Resolve a file extension (without dot, any case) to a language.
    ///
    /// Returns [`Language::Unknown`] for unmapped extensions. Total: never
    /// fails.
    pub fn from_extension(ext: &str) -> Language {
        EXTENSION_MAP
            .get(ext.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(Language::Unknown)
    }

    /// Resolve a file path to a language via its extension.
    pub fn from_path(path: &Path) -> Language {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Language::from_extension(ext)
    }

    /// Parse a user-supplied language tag (e.g. from the CLI).
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.to_ascii_lowercase().as_str() {
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            "csharp" => Some(Language::CSharp),
            "go" => Some(Language::Go),
            "java" => Some(Language::Java),
            "javascript" => Some(Language::JavaScript),
            "kotlin" => Some(Language::Kotlin),
            "php" => Some(Language::Php),
            "python" => Some(Language::Python),
            "ruby" => Some(Language::Ruby),
            "rust" => Some(Language::Rust),
            "swift" => Some(Language::Swift),
            "typescript" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Kotlin => "kotlin",
            Language::Php => "php",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::TypeScript => "typescript",
            Language::Unknown => "unknown",
        }
    }

    /// All extensions that resolve to this language.
    pub fn extensions(&self) -> Vec<&'static str> {
        let mut exts: Vec<&'static str> = EXTENSION_MAP
            .entries()
            .filter(|(_, lang)| **lang == *self)
            .map(|(ext, _)| *ext)
            .collect();
        exts.sort_unstable();
        exts
    }

    /// All tags accepted by [`Language::from_tag`], for help/error text.
    pub fn supported_tags() -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = EXTENSION_MAP
            .values()
            .map(|lang| lang.as_str())
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
