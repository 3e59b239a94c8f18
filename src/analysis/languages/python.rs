//! Python structural parser using tree-sitter.
//!
//! Nodes are visited breadth-first from the module root, so imports,
//! classes and functions come out in walk order rather than strictly in
//! source order.

#[cfg(feature = "tree-sitter")]
use std::collections::VecDeque;
#[cfg(feature = "tree-sitter")]
use tree_sitter::{Language, Node};

#[cfg(feature = "tree-sitter")]
use super::tree::{line_of, node_text, parse_checked};
use crate::analysis::{DetailedStructure, StructureParser};
#[cfg(feature = "tree-sitter")]
use crate::analysis::{ClassInfo, FunctionInfo};
use crate::error::ParseFailure;

pub struct PythonAnalyzer {
    #[cfg(feature = "tree-sitter")]
    language: Language,
}

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "tree-sitter")]
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureParser for PythonAnalyzer {
    fn language_id(&self) -> &'static str {
        "python"
    }

    #[cfg(feature = "tree-sitter")]
    fn parse_structure(&self, source: &str) -> Result<DetailedStructure, ParseFailure> {
        let tree = parse_checked(&self.language, source)?;
        let src = source.as_bytes();

        let mut structure = DetailedStructure::default();
        let mut queue = VecDeque::from([tree.root_node()]);

        while let Some(node) = queue.pop_front() {
            match node.kind() {
                "import_statement" => collect_import(node, src, &mut structure.imports),
                "import_from_statement" => collect_from_import(node, src, &mut structure.imports),
                "class_definition" => structure.classes.push(class_info(node, src)),
                "function_definition" if !is_async(node) && !is_class_body_member(node) => {
                    structure.functions.push(FunctionInfo {
                        name: field_text(node, "name", src),
                        arg_count: positional_arg_count(node),
                        line_number: line_of(node),
                    });
                }
                _ => {}
            }

            let mut cursor = node.walk();
            queue.extend(node.named_children(&mut cursor));
        }

        Ok(structure)
    }

    #[cfg(not(feature = "tree-sitter"))]
    fn parse_structure(&self, _source: &str) -> Result<DetailedStructure, ParseFailure> {
        Err(ParseFailure::Unavailable("python"))
    }
}

#[cfg(feature = "tree-sitter")]
fn field_text(node: Node, field: &str, src: &[u8]) -> String {
    node.child_by_field_name(field)
        .map(|n| node_text(n, src).to_string())
        .unwrap_or_default()
}

/// Dotted names may contain whitespace around the dots.
#[cfg(feature = "tree-sitter")]
fn dotted(node: Node, src: &[u8]) -> String {
    node_text(node, src)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Name imported by an `import` target (`a.b` or `a.b as c`).
#[cfg(feature = "tree-sitter")]
fn imported_name(node: Node, src: &[u8]) -> String {
    match node.kind() {
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|n| dotted(n, src))
            .unwrap_or_default(),
        "wildcard_import" => "*".to_string(),
        _ => dotted(node, src),
    }
}

#[cfg(feature = "tree-sitter")]
fn collect_import(node: Node, src: &[u8], imports: &mut Vec<String>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        imports.push(imported_name(name, src));
    }
}

/// `from m import a, b` records `m.a` and `m.b`. Relative imports drop
/// their leading dots, so `from . import a` records `.a`.
#[cfg(feature = "tree-sitter")]
fn collect_from_import(node: Node, src: &[u8], imports: &mut Vec<String>) {
    let module = match node.child_by_field_name("module_name") {
        Some(m) if m.kind() == "relative_import" => {
            let mut cursor = m.walk();
            let inner = m
                .named_children(&mut cursor)
                .find(|c| c.kind() == "dotted_name");
            inner.map(|n| dotted(n, src)).unwrap_or_default()
        }
        Some(m) => dotted(m, src),
        None => String::new(),
    };

    let mut names: Vec<String> = Vec::new();
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        names.push(imported_name(name, src));
    }

    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|c| c.kind() == "wildcard_import")
    {
        names.push("*".to_string());
    }

    for name in names {
        imports.push(format!("{}.{}", module, name));
    }
}

#[cfg(feature = "tree-sitter")]
fn class_info(node: Node, src: &[u8]) -> ClassInfo {
    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            let func = match member.kind() {
                "function_definition" => Some(member),
                "decorated_definition" => member
                    .child_by_field_name("definition")
                    .filter(|d| d.kind() == "function_definition"),
                _ => None,
            };
            if let Some(func) = func.filter(|f| !is_async(*f)) {
                methods.push(field_text(func, "name", src));
            }
        }
    }

    ClassInfo {
        name: field_text(node, "name", src),
        methods,
        line_number: line_of(node),
    }
}

#[cfg(feature = "tree-sitter")]
fn is_async(func: Node) -> bool {
    func.child(0).map(|c| c.kind() == "async").unwrap_or(false)
}

/// True when the function sits directly in some class body (decorators
/// are transparent). A function nested in an `if` inside a class, or in
/// another function, is not a class body member.
#[cfg(feature = "tree-sitter")]
fn is_class_body_member(func: Node) -> bool {
    let mut parent = func.parent();
    if let Some(p) = parent.filter(|p| p.kind() == "decorated_definition") {
        parent = p.parent();
    }
    parent
        .filter(|p| p.kind() == "block")
        .and_then(|block| block.parent())
        .map(|owner| owner.kind() == "class_definition")
        .unwrap_or(false)
}

/// Count plain positional parameters: positional-only parameters (before
/// `/`), `*args`, keyword-only parameters and `**kwargs` are excluded.
#[cfg(feature = "tree-sitter")]
fn positional_arg_count(func: Node) -> usize {
    let Some(params) = func.child_by_field_name("parameters") else {
        return 0;
    };

    let mut count = 0;
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        match param.kind() {
            "positional_separator" => count = 0,
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => break,
            "typed_parameter" if is_splat(param) => break,
            "identifier" | "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                count += 1
            }
            _ => {}
        }
    }
    count
}

#[cfg(feature = "tree-sitter")]
fn is_splat(param: Node) -> bool {
    param
        .named_child(0)
        .map(|c| matches!(c.kind(), "list_splat_pattern" | "dictionary_splat_pattern"))
        .unwrap_or(false)
}

#[cfg(all(test, feature = "tree-sitter"))]
mod tests {
    use super::*;
    use indoc::indoc;

    fn parse(source: &str) -> DetailedStructure {
        PythonAnalyzer::new()
            .parse_structure(source)
            .expect("should parse")
    }

    #[test]
    fn test_imports_are_flattened() {
        let s = parse(indoc! {"
            import os, sys as system
            from collections import OrderedDict, defaultdict
            from . import sibling
            from .pkg import thing
        "});
        assert_eq!(
            s.imports,
            vec![
                "os",
                "sys",
                "collections.OrderedDict",
                "collections.defaultdict",
                ".sibling",
                "pkg.thing",
            ]
        );
    }

    #[test]
    fn test_classes_and_top_level_functions() {
        let s = parse(indoc! {"
            class Repo:
                def load(self, key):
                    def inner():
                        pass
                    return inner

                @staticmethod
                def build():
                    pass

            def main(argv, env=None, *rest, flag=False, **kw):
                def helper(x):
                    return x
                return helper
        "});

        assert_eq!(s.classes.len(), 1);
        assert_eq!(s.classes[0].name, "Repo");
        assert_eq!(s.classes[0].methods, vec!["load", "build"]);
        assert_eq!(s.classes[0].line_number, 1);

        let names: Vec<&str> = s.functions.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"main"));
        assert!(names.contains(&"inner"));
        assert!(names.contains(&"helper"));
        assert!(!names.contains(&"load"));
        assert!(!names.contains(&"build"));

        let main = s.functions.iter().find(|f| f.name == "main").unwrap();
        assert_eq!(main.arg_count, 2);
        assert_eq!(main.line_number, 11);
    }

    #[test]
    fn test_function_in_conditional_class_block_is_top_level() {
        let s = parse(indoc! {"
            class Config:
                if True:
                    def hidden(self):
                        pass
        "});
        assert_eq!(s.classes[0].methods, Vec::<String>::new());
        assert_eq!(s.functions.len(), 1);
        assert_eq!(s.functions[0].name, "hidden");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = PythonAnalyzer::new()
            .parse_structure("def broken(:\n    pass")
            .unwrap_err();
        assert!(matches!(err, ParseFailure::Syntax { .. }));
    }
}
