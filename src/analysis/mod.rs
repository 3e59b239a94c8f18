//! Structure analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌───────────────────┐
//! │ Source text  │────▶│ config_files   │────▶│ StructureMetrics  │
//! │ + Language   │     │   or generic   │     └───────────────────┘
//! └──────────────┘     └────────────────┘               │
//!        │             ┌────────────────┐     ┌───────────────────┐
//!        └────────────▶│ languages      │────▶│ DetailedStructure │
//!                      │ (Python, C/C++)│     │ (optional)        │
//!                      └────────────────┘     └───────────────────┘
//! ```
//!
//! Structured labels (JSON, YAML, ...) use per-kind counting rules. All
//! other labels get generic regex counts; Python and C/C++ additionally get
//! a parser-backed [`DetailedStructure`]. A Python parse failure leaves the
//! generic counts as the whole answer; a C/C++ parse failure switches to
//! regex scans. ML detection is separate ([`detect_ml`]) and runs on every
//! input.

mod config_files;
mod facts;
mod generic;
mod languages;
mod ml;
mod traits;

pub use facts::{
    ClassInfo, ControlKeywordCounts, DetailedStructure, FunctionInfo, Structure,
    StructureMetrics,
};
pub use languages::{get_parser, scan_c_with_regex, CAnalyzer, PythonAnalyzer};
pub use ml::{detect_ml, MlSignal, FRAMEWORKS, OPERATIONS};
pub use traits::StructureParser;

pub use config_files::count as count_config_file;
pub use generic::count as count_generic;

use crate::language::Language;

/// Compute structural metrics for `content` under the detected `language`.
pub fn analyze_structure(content: &str, language: Language) -> Structure {
    if language.is_structured() {
        return Structure {
            metrics: config_files::count(content, language),
            detailed_structure: None,
        };
    }

    let metrics = generic::count(content);

    let detailed_structure = get_parser(language).and_then(|parser| parser.analyze(content));

    Structure {
        metrics,
        detailed_structure,
    }
}
