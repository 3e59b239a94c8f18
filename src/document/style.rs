//! Comment delimiters per language family.

use crate::language::Language;

/// Delimiters used for synthesized comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Prefix for one-line annotations.
    pub single: &'static str,
    /// Opening line of a block comment.
    pub start: &'static str,
    /// Prefix for each line inside a block comment.
    pub line: &'static str,
    /// Closing line of a block comment.
    pub end: &'static str,
}

pub const C_LIKE: CommentStyle = CommentStyle {
    single: "//",
    start: "/**",
    line: " * ",
    end: " */",
};

pub const HASH: CommentStyle = CommentStyle {
    single: "#",
    start: "\"\"\"",
    line: "",
    end: "\"\"\"",
};

pub const MARKUP: CommentStyle = CommentStyle {
    single: "<!-- ",
    start: "<!-- ",
    line: "",
    end: " -->",
};

pub const DEFAULT: CommentStyle = CommentStyle {
    single: "//",
    start: "/*",
    line: " * ",
    end: " */",
};

/// Families checked in order; the first list containing the label wins.
static STYLE_RULES: &[(&[Language], CommentStyle)] = &[
    (
        &[
            Language::JavaScript,
            Language::TypeScript,
            Language::JavaScriptReact,
            Language::TypeScriptReact,
            Language::C,
            Language::Cpp,
            Language::Java,
            Language::CSharp,
        ],
        C_LIKE,
    ),
    (
        &[Language::Python, Language::Ruby, Language::Shell, Language::Yaml],
        HASH,
    ),
    (&[Language::Html, Language::Xml], MARKUP),
];

/// Comment delimiters for a programming-language label.
pub fn comment_style(language: Language) -> CommentStyle {
    STYLE_RULES
        .iter()
        .find(|(family, _)| family.contains(&language))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT)
}

/// File-level banner for structured labels.
pub fn banner(language: Language) -> [String; 3] {
    match language {
        Language::Json => [
            "// JSON Configuration File".to_string(),
            "// This file contains configuration settings in JSON format.".to_string(),
            String::new(),
        ],
        Language::EnvironmentVariables => [
            "# Environment Variables".to_string(),
            "# This file contains environment-specific configuration variables.".to_string(),
            String::new(),
        ],
        Language::Xml | Language::Markdown => {
            let summary = if language == Language::Markdown {
                "This file contains documentation content."
            } else {
                "This file contains configuration settings."
            };
            [
                format!("<!-- {} File -->", language),
                format!("<!-- {} -->", summary),
                String::new(),
            ]
        }
        _ => {
            let marker = match language {
                Language::Yaml
                | Language::ConfigurationFile
                | Language::IgnoreFile
                | Language::Toml => "#",
                _ => "//",
            };
            [
                format!("{} {} File", marker, language),
                format!("{} This file contains configuration settings.", marker),
                String::new(),
            ]
        }
    }
}
