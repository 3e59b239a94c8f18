//! Counting rules for structured data and configuration files.

use crate::language::Language;

use super::StructureMetrics;

/// Count structure for a structured/config `language`.
///
/// Programming languages get line and blank counts only; callers route
/// them to the generic counter instead.
pub fn count(content: &str, language: Language) -> StructureMetrics {
    let lines: Vec<&str> = content.split('\n').collect();
    let non_empty: Vec<&str> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let mut metrics = StructureMetrics {
        total_lines: lines.len(),
        empty_lines: lines.len() - non_empty.len(),
        ..Default::default()
    };

    let hash_comments = || non_empty.iter().filter(|l| l.starts_with('#')).count();

    match language {
        Language::Json => {
            metrics.variable_declarations = serde_json::from_str::<serde_json::Value>(content)
                .map(|value| count_json_pairs(&value))
                .unwrap_or(0);
        }
        Language::EnvironmentVariables => {
            metrics.variable_declarations = non_empty
                .iter()
                .filter(|l| l.contains('=') && !l.starts_with('#'))
                .count();
            metrics.comment_lines = hash_comments();
        }
        Language::Yaml | Language::ConfigurationFile => {
            metrics.variable_declarations = non_empty.iter().filter(|l| l.contains(':')).count();
            metrics.comment_lines = hash_comments();
        }
        Language::Toml => {
            metrics.variable_declarations = non_empty
                .iter()
                .filter(|l| l.contains('=') && !l.starts_with('#') && !l.starts_with('['))
                .count();
            metrics.comment_lines = hash_comments();
        }
        Language::Xml => {
            metrics.variable_declarations = content.matches("</").count();
            metrics.comment_lines = content.matches("<!--").count();
        }
        Language::Markdown => {
            metrics.comment_lines = non_empty.iter().filter(|l| l.starts_with("<!--")).count();
        }
        Language::IgnoreFile => {
            metrics.comment_lines = hash_comments();
            metrics.variable_declarations =
                non_empty.iter().filter(|l| !l.starts_with('#')).count();
        }
        _ => {}
    }

    metrics
}

/// Number of key/value pairs across all nested objects.
fn count_json_pairs(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Object(map) => {
            map.len() + map.values().map(count_json_pairs).sum::<usize>()
        }
        serde_json::Value::Array(items) => items.iter().map(count_json_pairs).sum(),
        _ => 0,
    }
}
