//! Language-specific structural parsers.

mod c;
mod python;
#[cfg(feature = "tree-sitter")]
mod tree;

pub use c::{scan_with_regex as scan_c_with_regex, CAnalyzer};
pub use python::PythonAnalyzer;

use once_cell::sync::OnceCell;

use super::StructureParser;
use crate::language::Language;

/// Static storage for Python analyzer.
static PYTHON_ANALYZER: OnceCell<PythonAnalyzer> = OnceCell::new();

/// Static storage for C analyzer.
static C_ANALYZER: OnceCell<CAnalyzer> = OnceCell::new();

/// Static storage for C++ analyzer.
static CPP_ANALYZER: OnceCell<CAnalyzer> = OnceCell::new();

fn python_analyzer() -> &'static PythonAnalyzer {
    PYTHON_ANALYZER.get_or_init(PythonAnalyzer::new)
}

fn c_analyzer(language: Language) -> Option<&'static CAnalyzer> {
    match language {
        Language::C => Some(C_ANALYZER.get_or_init(CAnalyzer::c)),
        Language::Cpp => Some(CPP_ANALYZER.get_or_init(CAnalyzer::cpp)),
        _ => None,
    }
}

/// Get the structural parser for a language label.
///
/// Returns None for languages that only get generic counting.
pub fn get_parser(language: Language) -> Option<&'static dyn StructureParser> {
    match language {
        Language::Python => Some(python_analyzer() as &'static dyn StructureParser),
        Language::C | Language::Cpp => {
            c_analyzer(language).map(|a| a as &'static dyn StructureParser)
        }
        _ => None,
    }
}
