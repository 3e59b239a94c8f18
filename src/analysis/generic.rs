//! Regex-based structure counting for programming languages.

use crate::patterns;

use super::StructureMetrics;

/// Count structural lines in `content`.
///
/// Lines are split on `\n`, so empty content still has one (empty) line.
/// Each category is tested independently per trimmed line.
pub fn count(content: &str) -> StructureMetrics {
    let mut metrics = StructureMetrics::default();

    for line in content.split('\n') {
        let trimmed = line.trim();
        metrics.total_lines += 1;

        if trimmed.is_empty() {
            metrics.empty_lines += 1;
        }
        if patterns::is_comment(trimmed) {
            metrics.comment_lines += 1;
        }
        if patterns::IMPORT.is_match(trimmed) {
            metrics.import_statements += 1;
        }
        if patterns::FUNCTION.is_match(trimmed) {
            metrics.function_definitions += 1;
        }
        if patterns::CLASS.is_match(trimmed) {
            metrics.class_definitions += 1;
        }
        if patterns::VARIABLE.is_match(trimmed) {
            metrics.variable_declarations += 1;
        }
        if patterns::LOOP.is_match(trimmed) {
            metrics.loops += 1;
        }
        if patterns::CONDITIONAL.is_match(trimmed) {
            metrics.conditionals += 1;
        }
    }

    metrics
}
