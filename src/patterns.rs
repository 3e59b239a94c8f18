//! Line classification patterns shared by structure counting and the
//! documentation rewriter.
//!
//! All patterns are applied to a trimmed line. `IMPORT` and `VARIABLE` are
//! anchored at the start of the line; the others match anywhere.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefixes that mark a line as a comment for structure counting.
pub const COMMENT_PREFIXES: &[&str] = &["//", "/*", "*", "#"];

/// Prefixes the documentation rewriter passes through untouched.
pub const PASSTHROUGH_COMMENT_PREFIXES: &[&str] = &["//", "/*", "*/", "#", "<!--", "-->"];

/// `import x`, `from x`, `require x`, `using x`.
pub static IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(import|from|require|using)\s+").expect("valid regex"));

/// Function definitions. Capture groups hold the name for the
/// `function NAME` (2), `NAME = (...) =>` (3) and `def NAME` (4) forms;
/// `NAME: function` carries no name capture.
pub static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(function\s+(\w+)|\w+\s*:\s*function|(\w+)\s*=\s*\(.*\)\s*=>|def\s+(\w+))")
        .expect("valid regex")
});

/// Class, interface and type alias definitions.
pub static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(class\s+\w+|interface\s+\w+|type\s+\w+\s*=)").expect("valid regex")
});

/// Extracts the construct keyword (1) and its name (2) from a class line.
pub static CLASS_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(class|interface|type)\s+(\w+)").expect("valid regex"));

/// Variable declarations; group 2 is the variable name.
pub static VARIABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(var|let|const|int|float|string|bool|\w+:\s*\w+)\s+(\w+)").expect("valid regex")
});

pub static LOOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(for|while|do)\b").expect("valid regex"));

pub static CONDITIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|else|switch|case)\b").expect("valid regex"));

/// First parenthesized group on a line (parameter list).
pub static PARAMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*?)\)").expect("valid regex"));

/// Check whether a trimmed line is a comment for structure counting.
pub fn is_comment(trimmed: &str) -> bool {
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

/// Check whether the rewriter should pass a trimmed line through as an
/// existing comment.
pub fn is_passthrough_comment(trimmed: &str) -> bool {
    PASSTHROUGH_COMMENT_PREFIXES
        .iter()
        .any(|p| trimmed.starts_with(p))
}

/// Leading whitespace width of a line.
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
