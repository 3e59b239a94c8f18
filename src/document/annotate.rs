//! One-line annotations for variables, loops, conditionals, parameters
//! and return values.

use crate::language::Language;
use crate::patterns::PARAMS;

/// What a variable probably holds, judged from its name.
pub fn variable_purpose(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if name.contains("_id") || name.contains("Id") {
        "stores identifier"
    } else if has(&["count", "num"]) {
        "stores numeric count"
    } else if has(&["name"]) {
        "stores name string"
    } else if has(&["is", "has", "should"]) {
        "stores boolean flag"
    } else if has(&["date", "time"]) {
        "stores date/time value"
    } else if has(&["list", "array"]) || name.ends_with('s') {
        "stores collection of items"
    } else if has(&["config", "options", "settings"]) {
        "stores configuration options"
    } else {
        "stores data"
    }
}

/// What a loop line probably does.
pub fn loop_purpose(line: &str) -> &'static str {
    if ["i = 0", "i=0", "let i"].iter().any(|p| line.contains(p)) {
        "iterating through indices"
    } else if line.contains("forEach") || line.contains("map") {
        "processing each item in collection"
    } else if line.contains("while") && (line.contains("true") || line.contains('1')) {
        "running continuously until interrupted"
    } else {
        "iterating through items"
    }
}

/// Annotation text for a conditional line.
pub fn conditional_note(line: &str) -> Option<&'static str> {
    if line.contains("if") {
        Some(if line.contains("null") || line.contains("undefined") {
            "Conditional check for null/undefined value"
        } else if line.contains("==") {
            "Conditional check for equality"
        } else if line.contains('>') || line.contains('<') {
            "Conditional check for comparison"
        } else {
            "Conditional check"
        })
    } else if line.contains("else") {
        Some("Alternative condition")
    } else if line.contains("switch") || line.contains("case") {
        Some("Switch case for multiple conditions")
    } else {
        None
    }
}

/// Parameter names from the first parenthesized list on a line, with
/// type annotations and defaults stripped.
pub fn parameter_names(line: &str) -> Vec<String> {
    let Some(list) = PARAMS.captures(line).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    list.as_str()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != ")")
        .map(|p| {
            let name = if p.contains(':') {
                p.split(':').next()
            } else {
                p.split('=').next()
            };
            name.unwrap_or(p).trim().to_string()
        })
        .collect()
}

/// The `@returns` text for a function body.
///
/// Only JavaScript, TypeScript, Java and C# bodies are inspected; every
/// other language gets a generic placeholder.
pub fn returns_note(language: Language, body: &str) -> &'static str {
    let inspected = matches!(
        language,
        Language::JavaScript | Language::TypeScript | Language::Java | Language::CSharp
    );
    if !inspected {
        return "Description of return value";
    }
    if !body.contains("return ") {
        return "Void - no return value";
    }

    if body.contains("return true") || body.contains("return false") {
        "Boolean indicating success or validation result"
    } else if body.contains("return {") || body.contains("return new ") {
        "Object containing the result data"
    } else if body.contains("return [") {
        "Array of items"
    } else if body.contains("return null") {
        "Null in certain conditions"
    } else {
        "Result of the operation"
    }
}
