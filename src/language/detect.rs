//! Ordered language detection rules.
//!
//! Detection walks four stages and stops at the first hit:
//!
//! 1. exact/prefix filename rules for dotfiles (`.env`, `.gitignore`, ...)
//! 2. the extension table (`.tsx`, `.json`, `.yaml`, ...)
//! 3. content markers gated by a filename hint (`def ` + `.py`, ...)
//! 4. the lexical guesser, then secondary heuristics, then a plain fallback
//!
//! Stages 1-3 are plain data ([`FILENAME_RULES`], [`CONTENT_RULES`]) so the
//! priority order is visible and testable.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::{guess_from_content, guess_from_filename, Language};

/// How a filename rule matches the lowercased filename.
#[derive(Debug, Clone, Copy)]
pub enum FileMatch {
    /// Whole filename equals the value.
    Name(&'static str),
    /// Filename starts with the value.
    NamePrefix(&'static str),
    /// Extension (without dot) is one of the values.
    Extension(&'static [&'static str]),
}

/// A filename-based detection rule.
#[derive(Debug, Clone, Copy)]
pub struct FilenameRule {
    pub file: FileMatch,
    pub language: Language,
    /// Only accept the rule when the content parses as JSON.
    pub requires_valid_json: bool,
}

impl FilenameRule {
    const fn new(file: FileMatch, language: Language) -> Self {
        Self {
            file,
            language,
            requires_valid_json: false,
        }
    }

    fn matches(&self, name_lower: &str, ext: &str, content: &str) -> bool {
        let file_hit = match self.file {
            FileMatch::Name(name) => name_lower == name,
            FileMatch::NamePrefix(prefix) => name_lower.starts_with(prefix),
            FileMatch::Extension(exts) => exts.contains(&ext),
        };
        file_hit && (!self.requires_valid_json || is_valid_json(content))
    }
}

/// Filename rules in priority order.
pub static FILENAME_RULES: &[FilenameRule] = &[
    FilenameRule::new(FileMatch::Name(".env"), Language::EnvironmentVariables),
    FilenameRule::new(FileMatch::NamePrefix(".env."), Language::EnvironmentVariables),
    FilenameRule::new(FileMatch::Name(".gitignore"), Language::IgnoreFile),
    FilenameRule::new(FileMatch::Name(".dockerignore"), Language::IgnoreFile),
    FilenameRule::new(FileMatch::Extension(&["tsx"]), Language::TypeScriptReact),
    FilenameRule::new(FileMatch::Extension(&["ts"]), Language::TypeScript),
    FilenameRule::new(FileMatch::Extension(&["jsx"]), Language::JavaScriptReact),
    FilenameRule {
        file: FileMatch::Extension(&["json"]),
        language: Language::Json,
        requires_valid_json: true,
    },
    FilenameRule::new(FileMatch::Extension(&["yml", "yaml"]), Language::Yaml),
    FilenameRule::new(FileMatch::Extension(&["xml"]), Language::Xml),
    FilenameRule::new(FileMatch::Extension(&["toml"]), Language::Toml),
    FilenameRule::new(
        FileMatch::Extension(&["ini", "cfg", "config"]),
        Language::ConfigurationFile,
    ),
    FilenameRule::new(FileMatch::Extension(&["md", "markdown"]), Language::Markdown),
];

/// A content marker gated by a filename plausibility hint.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    /// Substring that must appear in the content.
    pub marker: &'static str,
    pub language: Language,
    /// When a filename is present, at least one hint must appear in it
    /// (substring, not suffix). Empty means no gate.
    pub filename_hints: &'static [&'static str],
}

impl ContentRule {
    fn matches(&self, name_lower: Option<&str>, content: &str) -> bool {
        if !content.contains(self.marker) {
            return false;
        }
        match name_lower {
            Some(name) if !self.filename_hints.is_empty() => {
                self.filename_hints.iter().any(|hint| name.contains(hint))
            }
            _ => true,
        }
    }
}

/// Content rules in priority order.
pub static CONTENT_RULES: &[ContentRule] = &[
    ContentRule {
        marker: "public class ",
        language: Language::Java,
        filename_hints: &[".java"],
    },
    ContentRule {
        marker: "def ",
        language: Language::Python,
        filename_hints: &[".py"],
    },
    ContentRule {
        marker: "function ",
        language: Language::JavaScript,
        filename_hints: &[".js"],
    },
    ContentRule {
        marker: "#include",
        language: Language::C,
        filename_hints: &[".c", ".h"],
    },
    ContentRule {
        marker: "<?php",
        language: Language::Php,
        filename_hints: &[],
    },
    ContentRule {
        marker: "package ",
        language: Language::Go,
        filename_hints: &[".go"],
    },
    ContentRule {
        marker: "fn ",
        language: Language::Rust,
        filename_hints: &[".rs"],
    },
];

static REACT_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(import\s+React\b|from\s+['"]react['"]|require\(\s*['"]react['"]\s*\))"#)
        .expect("valid regex")
});

static TYPE_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\binterface\s+\w+|:\s*React\.FC\b|\w+\s*:\s*(string|number|boolean)\b)")
        .expect("valid regex")
});

static CONTROL_FLOW_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(if|else|for|while|switch|case|function|def|class|return)\b")
        .expect("valid regex")
});

/// Detect the language label for a file.
///
/// Total: always returns a label, falling back to `Plain Text` for
/// non-blank content and `Unknown` for blank content.
pub fn detect(filename: Option<&str>, content: &str) -> Language {
    let filename = filename.filter(|name| !name.is_empty());
    let name_lower = filename.map(str::to_lowercase);

    if let Some(name) = name_lower.as_deref() {
        if let Some(lang) = detect_by_filename(name, content) {
            return lang;
        }
    }

    if let Some(rule) = CONTENT_RULES
        .iter()
        .find(|rule| rule.matches(name_lower.as_deref(), content))
    {
        return rule.language;
    }

    if let Some(lang) = filename.and_then(guess_from_filename) {
        return lang;
    }
    if let Some(lang) = guess_from_content(content) {
        return lang;
    }

    secondary_heuristics(content)
}

/// Stages 1 and 2: dotfile names and the extension table.
fn detect_by_filename(name_lower: &str, content: &str) -> Option<Language> {
    let ext = Path::new(name_lower)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    FILENAME_RULES
        .iter()
        .find(|rule| rule.matches(name_lower, ext, content))
        .map(|rule| rule.language)
}

fn secondary_heuristics(content: &str) -> Language {
    if REACT_IMPORT.is_match(content) {
        return if TYPE_ANNOTATION.is_match(content) {
            Language::TypeScriptReact
        } else {
            Language::JavaScriptReact
        };
    }

    if content.contains('=') && !CONTROL_FLOW_KEYWORD.is_match(content) {
        return Language::EnvironmentVariables;
    }

    if content.trim().is_empty() {
        Language::Unknown
    } else {
        Language::PlainText
    }
}

pub(crate) fn is_valid_json(content: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(content).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotfiles() {
        assert_eq!(detect(Some(".env"), "A=1"), Language::EnvironmentVariables);
        assert_eq!(
            detect(Some(".env.production"), "def x"),
            Language::EnvironmentVariables
        );
        assert_eq!(detect(Some(".gitignore"), "target/"), Language::IgnoreFile);
        assert_eq!(detect(Some(".DockerIgnore"), "*.log"), Language::IgnoreFile);
    }

    #[test]
    fn test_extension_table() {
        assert_eq!(detect(Some("App.tsx"), ""), Language::TypeScriptReact);
        assert_eq!(detect(Some("index.ts"), ""), Language::TypeScript);
        assert_eq!(detect(Some("Button.jsx"), ""), Language::JavaScriptReact);
        assert_eq!(detect(Some("ci.yml"), ""), Language::Yaml);
        assert_eq!(detect(Some("pom.xml"), ""), Language::Xml);
        assert_eq!(detect(Some("Cargo.toml"), ""), Language::Toml);
        assert_eq!(detect(Some("setup.cfg"), ""), Language::ConfigurationFile);
        assert_eq!(detect(Some("README.md"), "# Hi"), Language::Markdown);
    }

    #[test]
    fn test_json_requires_valid_content() {
        assert_eq!(detect(Some("package.json"), r#"{"a": 1}"#), Language::Json);
        let lang = detect(Some("config.json"), "not valid json");
        assert_ne!(lang, Language::Json);
        assert_eq!(lang, Language::PlainText);
    }

    #[test]
    fn test_invalid_json_falls_through_to_content_rules() {
        // ".json" contains ".js", so the JavaScript marker is allowed through.
        let lang = detect(Some("broken.json"), "function broken( {");
        assert_eq!(lang, Language::JavaScript);
    }

    #[test]
    fn test_content_rule_priority() {
        let both = "public class A {}\ndef foo():\n    pass";
        assert_eq!(detect(None, both), Language::Java);
        assert_eq!(detect(None, "def foo():\n    pass"), Language::Python);
        assert_eq!(detect(None, "function a() {}"), Language::JavaScript);
        assert_eq!(detect(None, "#include <stdio.h>"), Language::C);
        assert_eq!(detect(None, "<?php echo 1; ?>"), Language::Php);
        assert_eq!(detect(None, "package main"), Language::Go);
        assert_eq!(detect(None, "fn main() {}"), Language::Rust);
    }

    #[test]
    fn test_content_rule_filename_gate() {
        // The Python marker is present but the filename does not look like Python.
        assert_eq!(detect(Some("notes.rs"), "def fn main"), Language::Rust);
        // PHP has no gate.
        assert_eq!(detect(Some("index.txt"), "<?php echo 1;"), Language::Php);
    }

    #[test]
    fn test_guesser_fallback() {
        assert_eq!(detect(Some("script.rb"), "puts 'hi'"), Language::Ruby);
        assert_eq!(detect(None, "#!/bin/bash\necho hi"), Language::Shell);
    }

    #[test]
    fn test_secondary_heuristics() {
        assert_eq!(detect(None, "HOST=localhost\nPORT=80"), Language::EnvironmentVariables);
        assert_eq!(
            detect(None, "import React from 'react';\nconst App = () => <div/>;"),
            Language::JavaScriptReact
        );
        assert_eq!(
            detect(None, "import React from 'react';\ninterface Props { name: string }"),
            Language::TypeScriptReact
        );
        assert_eq!(detect(None, "x = 1\nif x: y"), Language::PlainText);
    }

    #[test]
    fn test_plain_fallbacks() {
        assert_eq!(detect(None, "hello world"), Language::PlainText);
        assert_eq!(detect(None, ""), Language::Unknown);
        assert_eq!(detect(Some(""), "   \n"), Language::Unknown);
    }
}
