//! Tree-sitter helpers shared by the structural parsers.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::ParseFailure;

/// Parse `source` and reject trees that contain ERROR or MISSING nodes.
///
/// Tree-sitter always recovers, so a tree with errors is treated the same
/// way a strict parser treats a syntax error.
pub fn parse_checked(language: &Language, source: &str) -> Result<Tree, ParseFailure> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| ParseFailure::Grammar(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseFailure::Grammar("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        let at = first_error(root).unwrap_or(root).start_position();
        return Err(ParseFailure::Syntax {
            line: at.row + 1,
            column: at.column + 1,
        });
    }

    Ok(tree)
}

/// Get text for a node.
pub fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// 1-indexed start line of a node.
pub fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

/// First ERROR or MISSING node in document order.
fn first_error(root: Node) -> Option<Node> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node
            .children(&mut cursor)
            .filter(|child| child.has_error() || child.is_missing())
            .collect();
        stack.extend(children.into_iter().rev());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_language() -> Language {
        tree_sitter_c::LANGUAGE.into()
    }

    #[test]
    fn test_syntax_error_position() {
        match parse_checked(&c_language(), "int ok;\nint broken(int a {\n") {
            Err(ParseFailure::Syntax { line, column }) => assert!(line >= 2 && column >= 1),
            other => panic!("expected syntax failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_deeply_nested_error_is_located() {
        let depth = 20_000;
        let src = format!(
            "int main(void) {{\n  return {}1 +{};\n}}\n",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        assert!(matches!(
            parse_checked(&c_language(), &src),
            Err(ParseFailure::Syntax { .. })
        ));
    }
}
