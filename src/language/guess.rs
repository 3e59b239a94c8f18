//! Generic lexical guesser used when the ordered detection rules miss.
//!
//! Keyed by filename first (well-known names, then extension) and then by a
//! sample of the content (shebangs, markup prologues, telltale statements).
//! Structured kinds that the extension table owns (`.json`, `.yaml`, ...)
//! are deliberately absent from the extension map so a failed JSON parse
//! cannot be resurrected here.

use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;
use std::path::Path;

use super::detect::is_valid_json;
use super::Language;

/// Number of bytes of content inspected by [`guess_from_content`].
const SAMPLE_BYTES: usize = 8 * 1024;

static EXTENSIONS: phf::Map<&'static str, Language> = phf_map! {
    "py" => Language::Python,
    "pyw" => Language::Python,
    "pyi" => Language::Python,
    "js" => Language::JavaScript,
    "mjs" => Language::JavaScript,
    "cjs" => Language::JavaScript,
    "java" => Language::Java,
    "c" => Language::C,
    "h" => Language::C,
    "cpp" => Language::Cpp,
    "cc" => Language::Cpp,
    "cxx" => Language::Cpp,
    "hpp" => Language::Cpp,
    "hh" => Language::Cpp,
    "cs" => Language::CSharp,
    "php" => Language::Php,
    "go" => Language::Go,
    "rs" => Language::Rust,
    "rb" => Language::Ruby,
    "sh" => Language::Shell,
    "bash" => Language::Shell,
    "zsh" => Language::Shell,
    "html" => Language::Html,
    "htm" => Language::Html,
    "css" => Language::Css,
    "scss" => Language::Css,
    "sql" => Language::Sql,
    "swift" => Language::Swift,
    "kt" => Language::Kotlin,
    "kts" => Language::Kotlin,
    "scala" => Language::Scala,
    "sc" => Language::Scala,
    "txt" => Language::PlainText,
};

static WELL_KNOWN_NAMES: phf::Map<&'static str, Language> = phf_map! {
    "gemfile" => Language::Ruby,
    "rakefile" => Language::Ruby,
    ".bashrc" => Language::Shell,
    ".zshrc" => Language::Shell,
    ".profile" => Language::Shell,
    "cmakelists.txt" => Language::PlainText,
};

/// Content signatures in priority order.
static SIGNATURES: Lazy<Vec<(Regex, Language)>> = Lazy::new(|| {
    [
        (r"^#!.*\bpython[0-9.]*\b", Language::Python),
        (r"^#!.*\b(bash|sh|zsh|ksh)\b", Language::Shell),
        (r"^#!.*\bnode\b", Language::JavaScript),
        (r"^#!.*\bruby\b", Language::Ruby),
        (r"(?i)^\s*(<!doctype html|<html[\s>])", Language::Html),
        (r"^\s*<\?xml", Language::Xml),
        (r"(?m)^\s*using\s+System(\.\w+)*\s*;", Language::CSharp),
        (r"(?im)^\s*(select\s+.+\s+from\s|create\s+table\s|insert\s+into\s)", Language::Sql),
        (
            r"(?m)^\s*(import\s+\w+(\.\w+)*(\s+as\s+\w+)?\s*$|from\s+[\w.]+\s+import\s+)",
            Language::Python,
        ),
        (r"\bconsole\.log\(", Language::JavaScript),
    ]
    .into_iter()
    .map(|(pattern, lang)| (Regex::new(pattern).expect("valid regex"), lang))
    .collect()
});

/// Guess a language from a filename alone.
pub fn guess_from_filename(filename: &str) -> Option<Language> {
    let path = Path::new(filename);
    let base = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
        .to_lowercase();

    if let Some(lang) = WELL_KNOWN_NAMES.get(base.as_str()) {
        return Some(*lang);
    }

    let ext = Path::new(&base).extension()?.to_str()?;
    EXTENSIONS.get(ext).copied()
}

/// Guess a language from a sample of the content.
pub fn guess_from_content(content: &str) -> Option<Language> {
    let sample = sample(content);
    if sample.trim().is_empty() {
        return None;
    }

    if let Some((_, lang)) = SIGNATURES.iter().find(|(re, _)| re.is_match(sample)) {
        return Some(*lang);
    }

    let trimmed = content.trim_start();
    if (trimmed.starts_with('{') || trimmed.starts_with('[')) && is_valid_json(content) {
        return Some(Language::Json);
    }

    None
}

/// Leading slice of the content, cut on a char boundary.
fn sample(content: &str) -> &str {
    if content.len() <= SAMPLE_BYTES {
        return content;
    }
    let mut end = SAMPLE_BYTES;
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    &content[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_by_extension() {
        assert_eq!(guess_from_filename("main.py"), Some(Language::Python));
        assert_eq!(guess_from_filename("src/lib.RS"), Some(Language::Rust));
        assert_eq!(guess_from_filename("widget.hpp"), Some(Language::Cpp));
        assert_eq!(guess_from_filename("Gemfile"), Some(Language::Ruby));
        assert_eq!(guess_from_filename("data.json"), None);
        assert_eq!(guess_from_filename("noext"), None);
    }

    #[test]
    fn test_guess_by_content() {
        assert_eq!(
            guess_from_content("#!/usr/bin/env python3\nprint(1)"),
            Some(Language::Python)
        );
        assert_eq!(guess_from_content("<!DOCTYPE html>\n<html>"), Some(Language::Html));
        assert_eq!(guess_from_content("<?xml version=\"1.0\"?>"), Some(Language::Xml));
        assert_eq!(
            guess_from_content("SELECT id FROM users;"),
            Some(Language::Sql)
        );
        assert_eq!(guess_from_content("import os\nprint(os.name)"), Some(Language::Python));
        assert_eq!(guess_from_content("[1, 2, 3]"), Some(Language::Json));
        assert_eq!(guess_from_content("just words"), None);
        assert_eq!(guess_from_content(""), None);
    }

    #[test]
    fn test_sample_respects_char_boundaries() {
        let content = "é".repeat(SAMPLE_BYTES);
        let s = sample(&content);
        assert!(s.len() <= SAMPLE_BYTES);
        assert!(content.starts_with(s));
    }
}
