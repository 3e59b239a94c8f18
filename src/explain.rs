//! Natural-language explanation of an analysis.

use crate::analysis::{MlSignal, Structure, StructureMetrics};
use crate::language::Language;

/// How many class/function names are listed before eliding the rest.
const MAX_LISTED_NAMES: usize = 3;

/// Build the explanation paragraph for one input.
pub fn explain(language: Language, structure: &Structure, ml: &MlSignal) -> String {
    let metrics = &structure.metrics;
    if language.is_structured() {
        let mut text = describe_structured(language, metrics);
        if ml.is_ml_code {
            text.push(' ');
            text.push_str(&describe_ml(ml));
        }
        text
    } else {
        describe_code(language, structure, ml)
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Join phrases as "a", "a and b" or "a, b, and c".
fn join_phrases(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} and {}", a, b),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Indefinite article for a structured label, by its spoken first sound.
fn article(language: Language) -> &'static str {
    match language {
        Language::EnvironmentVariables | Language::IgnoreFile | Language::Xml => "an",
        _ => "a",
    }
}

fn describe_structured(language: Language, m: &StructureMetrics) -> String {
    let mut text = format!(
        "This is {} {} file with {}",
        article(language),
        language,
        plural(m.total_lines, "line", "lines")
    );

    let detail = match language {
        Language::Json => (m.variable_declarations > 0).then(|| {
            format!(
                "containing {}",
                plural(m.variable_declarations, "key/value pair", "key/value pairs")
            )
        }),
        Language::EnvironmentVariables => (m.variable_declarations > 0).then(|| {
            format!(
                "defining {}",
                plural(m.variable_declarations, "variable", "variables")
            )
        }),
        Language::Yaml | Language::ConfigurationFile | Language::Toml => {
            (m.variable_declarations > 0).then(|| {
                format!(
                    "declaring {}",
                    plural(m.variable_declarations, "setting", "settings")
                )
            })
        }
        Language::Xml => (m.variable_declarations > 0).then(|| {
            format!(
                "containing {}",
                plural(m.variable_declarations, "closing tag", "closing tags")
            )
        }),
        Language::IgnoreFile => (m.variable_declarations > 0).then(|| {
            format!(
                "listing {}",
                plural(m.variable_declarations, "ignore pattern", "ignore patterns")
            )
        }),
        _ => None,
    };
    if let Some(detail) = detail {
        text.push_str(", ");
        text.push_str(&detail);
    }

    if m.comment_lines > 0 {
        text.push_str(&format!(
            " and {}",
            plural(m.comment_lines, "comment", "comments")
        ));
    }
    text.push('.');
    text
}

fn describe_code(language: Language, structure: &Structure, ml: &MlSignal) -> String {
    let m = &structure.metrics;
    let mut text = format!(
        "This is {} code with {}.",
        language,
        plural(m.total_lines, "line", "lines")
    );
    if ml.is_ml_code {
        text.push(' ');
        text.push_str(&describe_ml(ml));
    }

    let mut contents = Vec::new();
    if m.function_definitions > 0 {
        contents.push(plural(m.function_definitions, "function", "functions"));
    }
    if m.class_definitions > 0 {
        contents.push(plural(m.class_definitions, "class", "classes"));
    }
    if m.import_statements > 0 {
        contents.push(plural(m.import_statements, "import", "imports"));
    }
    if contents.is_empty() {
        text.push_str(" It does not define any functions or classes and has no imports.");
    } else {
        text.push_str(&format!(" It contains {}.", join_phrases(&contents)));
    }

    let mut flow = Vec::new();
    if m.loops > 0 {
        flow.push(plural(m.loops, "loop", "loops"));
    }
    if m.conditionals > 0 {
        flow.push(plural(m.conditionals, "conditional statement", "conditional statements"));
    }
    if !flow.is_empty() {
        text.push_str(&format!(" The code includes {}.", join_phrases(&flow)));
    }

    if let Some(detail) = &structure.detailed_structure {
        if !detail.classes.is_empty() {
            let names: Vec<&str> = detail.classes.iter().map(|c| c.name.as_str()).collect();
            text.push_str(&format!(" Main classes include: {}.", list_names(&names)));
        }
        if !detail.functions.is_empty() {
            let names: Vec<&str> = detail.functions.iter().map(|f| f.name.as_str()).collect();
            text.push_str(&format!(" Key functions include: {}.", list_names(&names)));
        }
    }

    text
}

/// First names joined by commas, with "..." when more were found.
fn list_names(names: &[&str]) -> String {
    let shown = names
        .iter()
        .take(MAX_LISTED_NAMES)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > MAX_LISTED_NAMES {
        format!("{}...", shown)
    } else {
        shown
    }
}

fn describe_ml(ml: &MlSignal) -> String {
    let mut text = if ml.frameworks.is_empty() {
        "It appears to contain machine learning code".to_string()
    } else {
        format!(
            "It appears to be a machine learning project using {}",
            ml.frameworks.join(", ")
        )
    };
    if !ml.operations.is_empty() {
        text.push_str(&format!(
            ", performing operations such as {}",
            ml.operations.join(", ")
        ));
    }
    text.push('.');
    text
}
