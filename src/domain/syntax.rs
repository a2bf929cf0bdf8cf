//! Go syntax helpers on top of tree-sitter-go.
//!
//! tree-sitter recovers from syntax errors instead of failing, so [`parse`]
//! rejects any tree containing `ERROR` or `MISSING` nodes: code generation
//! cannot proceed from a file the Go compiler would refuse.

use crate::domain::model::ImportSpec;
use anyhow::{Result, anyhow, bail};
use tree_sitter::{Language, Node, Parser, Tree};

/// Parse Go source, failing on the first syntax error.
pub fn parse(source: &str) -> Result<Tree> {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| anyhow!("Failed to load the Go grammar: {e}"))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("Go parser produced no syntax tree"))?;

    if let Some(node) = first_syntax_error(tree.root_node()) {
        let pos = node.start_position();
        let what = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "unexpected syntax".to_string()
        };
        bail!("{}:{}: {}", pos.row + 1, pos.column + 1, what);
    }

    Ok(tree)
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
pub fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(child) {
            return Some(found);
        }
    }
    None
}

pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> Result<&'s str> {
    Ok(node.utf8_text(source.as_bytes())?)
}

/// Package name from the file's `package` clause.
pub fn package_name(root: Node<'_>, source: &str) -> Result<String> {
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() != "package_clause" {
            continue;
        }
        // package_identifier is a plain child of package_clause, not a field
        let mut clause_cursor = child.walk();
        for part in child.named_children(&mut clause_cursor) {
            if part.kind() == "package_identifier" {
                return Ok(node_text(part, source)?.to_string());
            }
        }
    }
    bail!("Package clause not found")
}

/// Every import of the file in declaration order, grouped or not.
pub fn collect_imports(root: Node<'_>, source: &str) -> Vec<ImportSpec> {
    let mut imports = Vec::new();
    for decl in import_declarations(root) {
        let mut cursor = decl.walk();
        for child in decl.named_children(&mut cursor) {
            match child.kind() {
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    for spec in child.named_children(&mut list_cursor) {
                        if spec.kind() == "import_spec"
                            && let Some(import) = parse_import_spec(spec, source)
                        {
                            imports.push(import);
                        }
                    }
                }
                "import_spec" => {
                    if let Some(import) = parse_import_spec(child, source) {
                        imports.push(import);
                    }
                }
                _ => {}
            }
        }
    }
    imports
}

/// Top-level `import` declarations in file order.
pub fn import_declarations(root: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = root.walk();
    let declarations = root
        .children(&mut cursor)
        .filter(|child| child.kind() == "import_declaration")
        .collect();
    declarations
}

fn parse_import_spec(spec: Node<'_>, source: &str) -> Option<ImportSpec> {
    let path = spec.child_by_field_name("path")?;
    let path = node_text(path, source).ok()?;
    let path = path.trim_matches(|c| c == '"' || c == '`').to_string();
    if path.is_empty() {
        return None;
    }
    let alias = spec
        .child_by_field_name("name")
        .and_then(|name| node_text(name, source).ok())
        .map(str::to_string);
    Some(ImportSpec { path, alias })
}

/// Visit `node` and all of its descendants in source order.
pub fn visit<'t, F>(node: Node<'t>, callback: &mut F)
where
    F: FnMut(Node<'t>),
{
    callback(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, &mut *callback);
    }
}
