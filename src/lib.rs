//! codelens - heuristic source analyzer.
//!
//! Given a file name and its text, codelens infers the language, counts
//! structural elements, estimates complexity, explains the code in plain
//! words and produces a commented ("documented") copy of it.
//!
//! # Architecture
//!
//! - `language`: language/file-type detection
//! - `analysis`: structural metrics, Python and C/C++ structural parsers,
//!   ML signal detection
//! - `complexity`: cyclomatic, cognitive and maintainability estimates
//! - `explain`: natural-language explanation
//! - `document`: comment-injecting rewriter
//! - `runner`: the [`analyze`] facade plus the caching, batching [`Runner`]
//! - `cache`, `config`, `report`, `cli`: boundary layers around the core
//!
//! The core is [`analyze`]: pure, synchronous, and infallible.
//!
//! ```
//! let result = codelens::analyze(None, "def get_user_name(id):\n    return name");
//! assert_eq!(result.language.as_str(), "Python");
//! assert!(result.documented_code.contains("Retrieves or calculates user name"));
//! ```

pub mod analysis;
pub mod cache;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod document;
pub mod error;
pub mod explain;
pub mod language;
pub mod patterns;
pub mod report;
pub mod runner;

pub use analysis::{
    analyze_structure, detect_ml, DetailedStructure, MlSignal, Structure, StructureMetrics,
};
pub use cache::AnalysisCache;
pub use complexity::ComplexityScores;
pub use config::Settings;
pub use document::document;
pub use error::{InputError, ParseFailure};
pub use explain::explain;
pub use language::{detect as detect_language, Language};
pub use runner::{analyze, AnalysisResult, Runner};
