//! Structure facts produced by the analyzers.

use serde::{Deserialize, Serialize};

/// Line-level structural counts.
///
/// Every counter is independent: in the generic path one line may count
/// toward several categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureMetrics {
    pub total_lines: usize,
    pub empty_lines: usize,
    pub comment_lines: usize,
    pub import_statements: usize,
    pub function_definitions: usize,
    pub class_definitions: usize,
    pub variable_declarations: usize,
    pub loops: usize,
    pub conditionals: usize,
}

/// A class (or struct/union) found by a structural parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    /// Functions declared directly in the class body.
    pub methods: Vec<String>,
    /// 1-indexed.
    pub line_number: usize,
}

/// A top-level function found by a structural parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub arg_count: usize,
    /// 1-indexed.
    pub line_number: usize,
}

/// Control keyword counts reported by the C/C++ analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlKeywordCounts {
    pub for_loops: usize,
    pub while_loops: usize,
    pub if_statements: usize,
    pub switch_statements: usize,
}

/// Parser-backed structure for Python and C/C++ inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedStructure {
    /// Qualified import names in discovery order.
    pub imports: Vec<String>,
    pub classes: Vec<ClassInfo>,
    pub functions: Vec<FunctionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_flow: Option<ControlKeywordCounts>,
}

/// Structural counts plus optional parser-backed detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(flatten)]
    pub metrics: StructureMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_structure: Option<DetailedStructure>,
}
