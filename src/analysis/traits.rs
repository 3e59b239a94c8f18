//! Core trait for parser-backed structure extraction.

use crate::error::ParseFailure;

use super::DetailedStructure;

/// Language-specific structural parser.
///
/// A failure is not an error for the caller: it decides which fallback to
/// take (generic counts only for Python, regex scans for C/C++).
///
/// # Thread Safety
///
/// tree_sitter::Parser is not Sync, so implementations create a parser per
/// call.
pub trait StructureParser: Send + Sync {
    /// Returns the language identifier (e.g., "python", "c").
    fn language_id(&self) -> &'static str;

    /// Extract imports, classes and top-level functions from `source`.
    fn parse_structure(&self, source: &str) -> Result<DetailedStructure, ParseFailure>;

    /// Structure to report when [`parse_structure`](Self::parse_structure)
    /// fails. None leaves the generic counts as the whole answer.
    fn fallback(&self, _source: &str) -> Option<DetailedStructure> {
        None
    }

    /// Parse, or take the fallback when parsing fails.
    fn analyze(&self, source: &str) -> Option<DetailedStructure> {
        match self.parse_structure(source) {
            Ok(structure) => Some(structure),
            Err(e) => {
                log::debug!("{} structural parse failed ({})", self.language_id(), e);
                self.fallback(source)
            }
        }
    }
}
