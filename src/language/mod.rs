//! Language labels and file-type detection.
//!
//! Detection maps a `(filename, content)` pair onto a [`Language`] label.
//! The label is computed once per input and threaded through every later
//! stage (structure, complexity, explanation, documentation).

mod detect;
mod guess;

pub use detect::{detect, ContentRule, FilenameRule, CONTENT_RULES, FILENAME_RULES};
pub use guess::{guess_from_content, guess_from_filename};

use serde::{Serialize, Serializer};
use std::fmt;

/// A detected language or structured file kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    // Structured and configuration files
    Json,
    Yaml,
    Xml,
    Toml,
    EnvironmentVariables,
    IgnoreFile,
    ConfigurationFile,
    Markdown,
    // Programming languages
    TypeScriptReact,
    TypeScript,
    JavaScriptReact,
    JavaScript,
    Java,
    Python,
    C,
    Cpp,
    CSharp,
    Php,
    Go,
    Rust,
    Ruby,
    Shell,
    Html,
    Css,
    Sql,
    Swift,
    Kotlin,
    Scala,
    // Fallbacks
    PlainText,
    Unknown,
}

impl Language {
    /// Every label, in declaration order.
    pub const ALL: &'static [Language] = &[
        Language::Json,
        Language::Yaml,
        Language::Xml,
        Language::Toml,
        Language::EnvironmentVariables,
        Language::IgnoreFile,
        Language::ConfigurationFile,
        Language::Markdown,
        Language::TypeScriptReact,
        Language::TypeScript,
        Language::JavaScriptReact,
        Language::JavaScript,
        Language::Java,
        Language::Python,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Php,
        Language::Go,
        Language::Rust,
        Language::Ruby,
        Language::Shell,
        Language::Html,
        Language::Css,
        Language::Sql,
        Language::Swift,
        Language::Kotlin,
        Language::Scala,
        Language::PlainText,
        Language::Unknown,
    ];

    /// Human-readable label (also the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Xml => "XML",
            Language::Toml => "TOML",
            Language::EnvironmentVariables => "Environment Variables",
            Language::IgnoreFile => "Ignore File",
            Language::ConfigurationFile => "Configuration File",
            Language::Markdown => "Markdown",
            Language::TypeScriptReact => "TypeScript React",
            Language::TypeScript => "TypeScript",
            Language::JavaScriptReact => "JavaScript React",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Ruby => "Ruby",
            Language::Shell => "Shell",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Scala => "Scala",
            Language::PlainText => "Plain Text",
            Language::Unknown => "Unknown",
        }
    }

    /// Structured data/configuration kinds get the config-file analyzer
    /// and a banner instead of line-by-line documentation.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            Language::Json
                | Language::Yaml
                | Language::Xml
                | Language::Toml
                | Language::EnvironmentVariables
                | Language::IgnoreFile
                | Language::ConfigurationFile
                | Language::Markdown
        )
    }

    /// Languages handled by the C/C++ structural parser.
    pub fn is_c_family(&self) -> bool {
        matches!(self, Language::C | Language::Cpp)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown language: {}", s))
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for lang in Language::ALL {
            let parsed: Language = lang.as_str().parse().unwrap();
            assert_eq!(parsed, *lang);
        }
        assert!("Klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_structured_kinds() {
        assert!(Language::Json.is_structured());
        assert!(Language::IgnoreFile.is_structured());
        assert!(!Language::Python.is_structured());
        assert!(!Language::PlainText.is_structured());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Language::EnvironmentVariables).unwrap();
        assert_eq!(json, "\"Environment Variables\"");
    }
}
