//! C and C++ structural analysis.
//!
//! The tree-sitter grammar is tried first. When the tree contains errors
//! (or the feature is disabled) [`scan_with_regex`] produces the same
//! structure from independent regex scans.

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "tree-sitter")]
use streaming_iterator::StreamingIterator;
#[cfg(feature = "tree-sitter")]
use tree_sitter::{Language, Node, Query, QueryCursor};

#[cfg(feature = "tree-sitter")]
use super::tree::{line_of, node_text, parse_checked};
use crate::analysis::{
    ClassInfo, ControlKeywordCounts, DetailedStructure, FunctionInfo, StructureParser,
};
use crate::error::ParseFailure;

/// Tree-sitter query for extracting includes.
#[cfg(feature = "tree-sitter")]
const INCLUDE_QUERY: &str = r#"
; #include <header.h>
(preproc_include
  path: (system_lib_string) @system_include
)

; #include "header.h"
(preproc_include
  path: (string_literal) @local_include
)
"#;

/// Words that look like a return type in `TYPE NAME(...) {` but open a
/// control statement instead.
const CONTROL_WORDS: &[&str] = &["if", "for", "while", "switch"];

static FUNCTION_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\w+)\s+(\w+)\s*\(([^)]*)\)\s*\{").expect("valid regex"));
static RECORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(struct|union)\s+(\w+)\s*\{").expect("valid regex"));
static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\s*#\s*include\s*[<"]([^>"]+)[>"]"#).expect("valid regex"));
static FOR_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfor\b").expect("valid regex"));
static WHILE_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwhile\b").expect("valid regex"));
static IF_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bif\b").expect("valid regex"));
static SWITCH_KW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bswitch\b").expect("valid regex"));

/// C or C++ structural parser.
pub struct CAnalyzer {
    id: &'static str,
    #[cfg(feature = "tree-sitter")]
    language: Language,
}

impl CAnalyzer {
    pub fn c() -> Self {
        Self {
            id: "c",
            #[cfg(feature = "tree-sitter")]
            language: tree_sitter_c::LANGUAGE.into(),
        }
    }

    pub fn cpp() -> Self {
        Self {
            id: "cpp",
            #[cfg(feature = "tree-sitter")]
            language: tree_sitter_cpp::LANGUAGE.into(),
        }
    }

    #[cfg(feature = "tree-sitter")]
    fn extract_includes(&self, root: Node, src: &[u8]) -> Result<Vec<String>, ParseFailure> {
        let query = Query::new(&self.language, INCLUDE_QUERY)
            .map_err(|e| ParseFailure::Grammar(e.to_string()))?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, root, src);

        let mut includes = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let raw = node_text(capture.node, src);
                // <stdio.h> -> stdio.h, "header.h" -> header.h
                let path = raw.trim_matches(|c| c == '<' || c == '>' || c == '"');
                includes.push(path.to_string());
            }
        }
        Ok(includes)
    }
}

impl StructureParser for CAnalyzer {
    fn language_id(&self) -> &'static str {
        self.id
    }

    #[cfg(feature = "tree-sitter")]
    fn parse_structure(&self, source: &str) -> Result<DetailedStructure, ParseFailure> {
        let tree = parse_checked(&self.language, source)?;
        let root = tree.root_node();
        let src = source.as_bytes();

        let mut structure = DetailedStructure {
            imports: self.extract_includes(root, src)?,
            ..Default::default()
        };
        let mut counts = ControlKeywordCounts::default();
        walk(root, src, &mut structure, &mut counts);
        structure.control_flow = Some(counts);

        Ok(structure)
    }

    #[cfg(not(feature = "tree-sitter"))]
    fn parse_structure(&self, _source: &str) -> Result<DetailedStructure, ParseFailure> {
        Err(ParseFailure::Unavailable(self.id))
    }

    fn fallback(&self, source: &str) -> Option<DetailedStructure> {
        Some(scan_with_regex(source))
    }
}

/// Depth-first walk collecting functions, records and control statements.
///
/// Uses an explicit stack so nesting depth is bounded by heap, not by the
/// thread's call stack. Children are pushed in reverse to keep source order.
#[cfg(feature = "tree-sitter")]
fn walk(
    root: Node,
    src: &[u8],
    structure: &mut DetailedStructure,
    counts: &mut ControlKeywordCounts,
) {
    let mut stack: Vec<(Node, bool)> = vec![(root, false)];

    while let Some((node, in_record)) = stack.pop() {
        let mut inside = in_record;
        match node.kind() {
            "function_definition" if !in_record => {
                if let Some((name, arg_count)) = function_signature(node, src) {
                    structure.functions.push(FunctionInfo {
                        name,
                        arg_count,
                        line_number: line_of(node),
                    });
                }
            }
            "struct_specifier" | "union_specifier" | "class_specifier" => {
                if let (Some(name), Some(body)) = (
                    node.child_by_field_name("name"),
                    node.child_by_field_name("body"),
                ) {
                    structure.classes.push(ClassInfo {
                        name: node_text(name, src).to_string(),
                        methods: record_methods(body, src),
                        line_number: line_of(node),
                    });
                    inside = true;
                }
            }
            "for_statement" | "for_range_loop" => counts.for_loops += 1,
            "while_statement" | "do_statement" => counts.while_loops += 1,
            "if_statement" => counts.if_statements += 1,
            "switch_statement" => counts.switch_statements += 1,
            _ => {}
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, inside)));
    }
}

/// Name and parameter count of a function definition or declaration.
#[cfg(feature = "tree-sitter")]
fn function_signature(node: Node, src: &[u8]) -> Option<(String, usize)> {
    let mut declarator = node.child_by_field_name("declarator")?;
    while declarator.kind() != "function_declarator" {
        declarator = declarator.child_by_field_name("declarator")?;
    }

    let name = node_text(declarator.child_by_field_name("declarator")?, src).to_string();
    let arg_count = declarator
        .child_by_field_name("parameters")
        .map(|params| parameter_count(params, src))
        .unwrap_or(0);
    Some((name, arg_count))
}

#[cfg(feature = "tree-sitter")]
fn parameter_count(params: Node, src: &[u8]) -> usize {
    let mut cursor = params.walk();
    let list: Vec<Node> = params
        .named_children(&mut cursor)
        .filter(|p| p.kind().ends_with("parameter_declaration"))
        .collect();

    if list.len() == 1 && node_text(list[0], src).trim() == "void" {
        return 0;
    }
    list.len()
}

#[cfg(feature = "tree-sitter")]
fn record_methods(body: Node, src: &[u8]) -> Vec<String> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|m| matches!(m.kind(), "function_definition" | "field_declaration" | "declaration"))
        .filter_map(|m| function_signature(m, src))
        .map(|(name, _)| name)
        .collect()
}

/// Regex fallback: function signatures, struct/union records, includes and
/// control keyword counts, each from an independent scan.
pub fn scan_with_regex(source: &str) -> DetailedStructure {
    let newlines: Vec<usize> = source.match_indices('\n').map(|(i, _)| i).collect();
    let line_at = |offset: usize| newlines.partition_point(|&nl| nl < offset) + 1;

    let functions = FUNCTION_SIGNATURE
        .captures_iter(source)
        .filter(|caps| !CONTROL_WORDS.contains(&&caps[1]))
        .map(|caps| FunctionInfo {
            name: caps[2].to_string(),
            arg_count: count_params(&caps[3]),
            line_number: line_at(caps.get(0).map(|m| m.start()).unwrap_or(0)),
        })
        .collect();

    let classes = RECORD
        .captures_iter(source)
        .map(|caps| ClassInfo {
            name: caps[2].to_string(),
            methods: Vec::new(),
            line_number: line_at(caps.get(0).map(|m| m.start()).unwrap_or(0)),
        })
        .collect();

    let imports = INCLUDE
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect();

    DetailedStructure {
        imports,
        classes,
        functions,
        control_flow: Some(ControlKeywordCounts {
            for_loops: FOR_KW.find_iter(source).count(),
            while_loops: WHILE_KW.find_iter(source).count(),
            if_statements: IF_KW.find_iter(source).count(),
            switch_statements: SWITCH_KW.find_iter(source).count(),
        }),
    }
}

fn count_params(list: &str) -> usize {
    let list = list.trim();
    if list.is_empty() || list == "void" {
        return 0;
    }
    list.split(',').filter(|p| !p.trim().is_empty()).count()
}
