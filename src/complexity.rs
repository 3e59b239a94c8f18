//! Complexity estimation from raw text and structural counts.
//!
//! Cyclomatic complexity is approximated as:
//! - Start at 1
//! - Add 1 for each substring occurrence of: if, else, for, while, case,
//!   catch, &&, ||, ?
//!
//! Nothing here is AST-based; the estimates are textual proxies.

use serde::{Deserialize, Serialize};

use crate::analysis::StructureMetrics;

/// Substrings counted as decision points.
pub const DECISION_TOKENS: &[&str] = &["if", "else", "for", "while", "case", "catch", "&&", "||", "?"];

/// Substrings that open a nesting level for cognitive complexity.
pub const NESTING_TOKENS: &[&str] = &["if", "for", "while", "switch"];

/// Substrings that break linear flow.
pub const JUMP_TOKENS: &[&str] = &["break", "continue", "return", "throw"];

/// Maintainability index bounds.
pub const MI_MAX: f64 = 100.0;
pub const MI_MIN: f64 = 0.0;

/// Complexity scores for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityScores {
    /// Always >= 1.
    pub cyclomatic_complexity: usize,
    pub cognitive_complexity: usize,
    /// In [0, 100].
    pub maintainability_index: f64,
}

/// Estimate all complexity scores.
pub fn estimate(content: &str, metrics: &StructureMetrics) -> ComplexityScores {
    ComplexityScores {
        cyclomatic_complexity: cyclomatic(content),
        cognitive_complexity: cognitive(content),
        maintainability_index: maintainability_index(metrics),
    }
}

/// 1 + number of decision-point substrings.
pub fn cyclomatic(content: &str) -> usize {
    1 + DECISION_TOKENS
        .iter()
        .map(|token| content.matches(token).count())
        .sum::<usize>()
}

/// Line-based cognitive complexity.
///
/// A line with a nesting token adds `1 + nesting` and opens a level; a
/// line with `}` closes one (never below zero); a line with a jump token
/// adds 1.
pub fn cognitive(content: &str) -> usize {
    let mut score = 0;
    let mut nesting = 0usize;

    for line in content.split('\n') {
        if NESTING_TOKENS.iter().any(|t| line.contains(t)) {
            score += 1 + nesting;
            nesting += 1;
        }
        if line.contains('}') {
            nesting = nesting.saturating_sub(1);
        }
        if JUMP_TOKENS.iter().any(|t| line.contains(t)) {
            score += 1;
        }
    }

    score
}

/// Maintainability index in [0, 100].
///
/// `171 - 5.2 ln(complexity per line) - 0.23 ln(lines) - 16.2 ln(comment ratio)`.
/// Inputs without any non-blank line score 100. A zero ratio has no
/// logarithm and scores 0.
pub fn maintainability_index(metrics: &StructureMetrics) -> f64 {
    if metrics.total_lines == 0 || metrics.empty_lines >= metrics.total_lines {
        return MI_MAX;
    }

    let lines = metrics.total_lines as f64;
    let comment_ratio = metrics.comment_lines as f64 / lines;
    let complexity_per_line =
        (metrics.loops + metrics.conditionals + metrics.function_definitions) as f64 / lines;

    if comment_ratio <= 0.0 || complexity_per_line <= 0.0 {
        return MI_MIN;
    }

    let mi = 171.0 - 5.2 * complexity_per_line.ln() - 0.23 * lines.ln() - 16.2 * comment_ratio.ln();
    if mi.is_finite() {
        mi.clamp(MI_MIN, MI_MAX)
    } else {
        MI_MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let metrics = StructureMetrics {
            total_lines: 1,
            empty_lines: 1,
            ..Default::default()
        };
        let scores = estimate("", &metrics);
        assert_eq!(scores.cyclomatic_complexity, 1);
        assert_eq!(scores.cognitive_complexity, 0);
        assert_eq!(scores.maintainability_index, 100.0);
    }

    #[test]
    fn test_zero_lines_is_fully_maintainable() {
        assert_eq!(maintainability_index(&StructureMetrics::default()), 100.0);
    }

    #[test]
    fn test_cyclomatic_counts_substrings() {
        // "if" x1, "else" x1, "&&" x1, "?" x1
        assert_eq!(cyclomatic("if (a && b) { x ? 1 : 2 } else {}"), 5);
        // Substring matching: "elif" contains "if", "format" contains "for".
        assert_eq!(cyclomatic("elif format"), 3);
    }

    #[test]
    fn test_cognitive_nesting() {
        let src = "if (a) {\n  for (x of y) {\n    return x;\n  }\n}";
        // if: 1, for: 1 + 1, return: 1
        assert_eq!(cognitive(src), 4);
    }

    #[test]
    fn test_cognitive_nesting_floor() {
        assert_eq!(cognitive("}\n}\nif (a) {"), 1);
    }

    #[test]
    fn test_maintainability_degenerate_ratios() {
        let no_comments = StructureMetrics {
            total_lines: 10,
            loops: 2,
            ..Default::default()
        };
        assert_eq!(maintainability_index(&no_comments), 0.0);

        let no_branches = StructureMetrics {
            total_lines: 10,
            comment_lines: 2,
            ..Default::default()
        };
        assert_eq!(maintainability_index(&no_branches), 0.0);
    }

    #[test]
    fn test_maintainability_is_clamped() {
        let metrics = StructureMetrics {
            total_lines: 40,
            comment_lines: 4,
            loops: 3,
            conditionals: 5,
            function_definitions: 2,
            ..Default::default()
        };
        let mi = maintainability_index(&metrics);
        assert!((0.0..=100.0).contains(&mi));
    }
}
