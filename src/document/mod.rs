//! Documentation rewriting.
//!
//! [`document`] walks the input once, left to right, and emits synthesized
//! comment lines ahead of the original lines it recognizes. Original lines
//! are never dropped, edited or reordered: deleting every inserted line
//! from the output gives back the input.
//!
//! Structured labels (JSON, YAML, ...) only get a file banner. Programming
//! labels get a header block plus per-line annotations; the first matching
//! rule wins:
//!
//! 1. blank line or existing comment: unchanged
//! 2. import: one note per run of consecutive imports
//! 3. class, interface or type alias: block comment
//! 4. function definition: block comment with purpose, params and returns
//! 5. variable declaration, loop, conditional: one-line note

mod annotate;
mod purpose;
mod style;

pub use annotate::{conditional_note, loop_purpose, parameter_names, returns_note, variable_purpose};
pub use purpose::{category, infer_purpose, return_kind, split_words, CATEGORIES, PREFIXES, RETURN_PATTERNS};
pub use style::{banner, comment_style, CommentStyle};

use crate::analysis::StructureMetrics;
use crate::language::Language;
use crate::patterns::{self, indent_width};

/// Produce the documented copy of `content`.
pub fn document(content: &str, language: Language, metrics: &StructureMetrics) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    if language.is_structured() {
        let mut out: Vec<String> = banner(language).into();
        out.extend(lines.iter().map(|l| l.to_string()));
        return out.join("\n");
    }

    let style = comment_style(language);
    let mut out = header(language, metrics, &style);

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        annotate_line(&lines, i, trimmed, language, &style, &mut out);
        out.push(line.to_string());
    }

    out.join("\n")
}

fn header(language: Language, m: &StructureMetrics, style: &CommentStyle) -> Vec<String> {
    let ml = style.line;
    let mut out = vec![
        style.start.to_string(),
        format!("{}File: {} code", ml, language),
        format!(
            "{}Description: This file contains {} code with {} functions and {} classes.",
            ml, language, m.function_definitions, m.class_definitions
        ),
    ];
    if m.import_statements > 0 {
        out.push(format!(
            "{}Imports: {} external modules/libraries",
            ml, m.import_statements
        ));
    }
    out.push(format!("{}Total lines: {}", ml, m.total_lines));
    out.push(style.end.to_string());
    out.push(String::new());
    out
}

/// Push the annotation lines (if any) that precede `lines[i]`.
fn annotate_line(
    lines: &[&str],
    i: usize,
    trimmed: &str,
    language: Language,
    style: &CommentStyle,
    out: &mut Vec<String>,
) {
    if trimmed.is_empty() || patterns::is_passthrough_comment(trimmed) {
        return;
    }

    if patterns::IMPORT.is_match(trimmed) {
        let continues_run = i > 0 && patterns::IMPORT.is_match(lines[i - 1].trim());
        if !continues_run {
            out.push(format!("{} Imports required modules", style.single));
        }
        return;
    }

    if patterns::CLASS.is_match(trimmed) {
        match patterns::CLASS_NAME.captures(trimmed) {
            Some(caps) => {
                let kind = &caps[1];
                let name = &caps[2];
                out.push(style.start.to_string());
                out.push(format!("{}{} {}", style.line, capitalize(kind), name));
                out.push(format!("{}Description: Defines the {} {}", style.line, name, kind));
                out.push(style.end.to_string());
            }
            None => {
                let first = trimmed.split_whitespace().next().unwrap_or(trimmed);
                out.push(format!("{} Defines a {}", style.single, first));
            }
        }
        return;
    }

    if let Some(caps) = patterns::FUNCTION.captures(trimmed) {
        let name = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4));
        match name {
            Some(name) => {
                let body = function_body(lines, i, language);
                out.extend(function_block(name.as_str(), lines[i], &body, language, style));
            }
            None => out.push(format!("{} Function definition", style.single)),
        }
        return;
    }

    if let Some(caps) = patterns::VARIABLE.captures(trimmed) {
        let var = &caps[2];
        out.push(format!(
            "{} {}: Variable that {}",
            style.single,
            var,
            variable_purpose(var)
        ));
        return;
    }

    if patterns::LOOP.is_match(trimmed) {
        out.push(format!("{} Loop for {}", style.single, loop_purpose(trimmed)));
        return;
    }

    if patterns::CONDITIONAL.is_match(trimmed) {
        if let Some(note) = conditional_note(trimmed) {
            out.push(format!("{} {}", style.single, note));
        }
    }
}

fn function_block(
    name: &str,
    line: &str,
    body: &str,
    language: Language,
    style: &CommentStyle,
) -> Vec<String> {
    let ml = style.line;
    let mut block = vec![
        style.start.to_string(),
        format!("{}Function: {}", ml, name),
        format!("{}Description: {}", ml, infer_purpose(name, body)),
    ];
    for param in parameter_names(line) {
        block.push(format!("{}@param {} - Parameter description", ml, param));
    }
    block.push(format!("{}@returns {}", ml, returns_note(language, body)));
    block.push(style.end.to_string());
    block
}

/// Source text of the function starting at `lines[start]`, one `\n` after
/// each line.
///
/// Python bodies run while lines are blank or indented deeper than the
/// definition. Other languages run while the `{`/`}` balance, seeded by
/// the definition line, stays positive.
pub fn function_body(lines: &[&str], start: usize, language: Language) -> String {
    let mut body = String::new();
    let mut push = |line: &str| {
        body.push_str(line);
        body.push('\n');
    };

    let def = lines[start];
    push(def);

    if language == Language::Python {
        let base = indent_width(def);
        for &line in &lines[start + 1..] {
            if line.trim().is_empty() || indent_width(line) > base {
                push(line);
            } else {
                break;
            }
        }
    } else {
        let mut balance = brace_delta(def);
        for &line in &lines[start + 1..] {
            if balance <= 0 {
                break;
            }
            push(line);
            balance += brace_delta(line);
        }
    }

    body
}

fn brace_delta(line: &str) -> i64 {
    line.matches('{').count() as i64 - line.matches('}').count() as i64
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
