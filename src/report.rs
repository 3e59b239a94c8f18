//! Output formatting for analysis results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: one array with an entry per input, for programmatic consumption

use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::InputError;
use crate::runner::AnalysisResult;

/// One analyzed input and its outcome.
pub type Outcome = (PathBuf, Result<AnalysisResult, InputError>);

// =============================================================================
// JSON Format
// =============================================================================

/// JSON entry: `{ path, result }` on success, `{ path, error }` on failure.
#[derive(Serialize)]
pub struct JsonEntry<'a> {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Build the JSON entries for a batch, in input order.
pub fn json_entries(outcomes: &[Outcome]) -> Vec<JsonEntry<'_>> {
    outcomes
        .iter()
        .map(|(path, outcome)| match outcome {
            Ok(result) => JsonEntry {
                path: display_path(path),
                result: Some(result),
                error: None,
            },
            Err(e) => JsonEntry {
                path: display_path(path),
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// Write results in JSON format.
pub fn write_json(outcomes: &[Outcome]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&json_entries(outcomes))?;
    println!("{}", json);
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(outcomes: &[Outcome], show_documented: bool) {
    // Header
    println!();
    print!("  ");
    print!("{}", "codelens".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    for (path, outcome) in outcomes {
        match outcome {
            Ok(result) => write_result(path, result, show_documented),
            Err(e) => {
                print!("  {}", "✗ ".red());
                println!("{}", display_path(path).blue());
                println!("      {}", e.to_string().red());
            }
        }
        println!();
    }

    write_final_status(outcomes);
    println!();
}

fn write_result(path: &Path, result: &AnalysisResult, show_documented: bool) {
    print!("  {}", "✓ ".green());
    print!("{}", display_path(path).blue());
    println!("  {}", result.language.as_str().bold());

    let m = &result.structure.metrics;
    println!(
        "      {}{} total, {} comment, {} empty",
        "Lines:      ".dimmed(),
        m.total_lines,
        m.comment_lines,
        m.empty_lines
    );
    println!(
        "      {}{} functions, {} classes, {} imports, {} variables",
        "Defines:    ".dimmed(),
        m.function_definitions,
        m.class_definitions,
        m.import_statements,
        m.variable_declarations
    );
    println!(
        "      {}{} loops, {} conditionals",
        "Flow:       ".dimmed(),
        m.loops,
        m.conditionals
    );

    let c = &result.complexity;
    print!("      {}", "Complexity: ".dimmed());
    print!("cyclomatic ");
    write_colored_cyclomatic(c.cyclomatic_complexity);
    print!(", cognitive {}, maintainability ", c.cognitive_complexity);
    write_colored_maintainability(c.maintainability_index);
    println!();

    if result.ml_info.is_ml_code {
        let frameworks = if result.ml_info.frameworks.is_empty() {
            "unknown framework".to_string()
        } else {
            result.ml_info.frameworks.join(", ")
        };
        print!("      {}", "ML:         ".dimmed());
        print!("{}", frameworks.magenta());
        if !result.ml_info.operations.is_empty() {
            print!(" ({})", result.ml_info.operations.join(", "));
        }
        println!();
    }

    println!();
    println!("      {}", result.explanation);

    if show_documented {
        println!();
        println!("      {}", "Documented code:".bold());
        for line in result.documented_code.split('\n') {
            println!("        {}", line);
        }
    }
}

fn write_colored_cyclomatic(n: usize) {
    match n {
        n if n <= 10 => print!("{}", n.to_string().green()),
        n if n <= 20 => print!("{}", n.to_string().yellow()),
        _ => print!("{}", n.to_string().red()),
    }
}

fn write_colored_maintainability(mi: f64) {
    let text = format!("{:.1}", mi);
    match mi {
        mi if mi >= 65.0 => print!("{}", text.green()),
        mi if mi >= 20.0 => print!("{}", text.yellow()),
        _ => print!("{}", text.red()),
    }
}

fn write_final_status(outcomes: &[Outcome]) {
    let failed = outcomes.iter().filter(|(_, o)| o.is_err()).count();
    let analyzed = outcomes.len() - failed;
    print!("  {}", format!("Analyzed: {}", analyzed).dimmed());
    if failed > 0 {
        print!("  {}", format!("Failed: {}", failed).red());
    } else {
        print!("  {}", "OK".green());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::analyze;

    #[test]
    fn test_json_entries_shape() {
        let outcomes: Vec<Outcome> = vec![
            (PathBuf::from("a.py"), Ok(analyze(Some("a.py"), "x = 1"))),
            (
                PathBuf::from("big.txt"),
                Err(InputError::TooLarge { len: 5, limit: 4 }),
            ),
        ];
        let value = serde_json::to_value(json_entries(&outcomes)).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 2);

        assert_eq!(list[0]["path"], "a.py");
        assert!(list[0].get("error").is_none());
        assert!(list[0]["result"]["language"].is_string());

        assert_eq!(list[1]["path"], "big.txt");
        assert!(list[1].get("result").is_none());
        assert_eq!(list[1]["error"], "content is 5 characters, limit is 4");
    }
}
