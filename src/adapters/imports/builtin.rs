use crate::domain::model::ImportSpec;
use crate::domain::ports::ImportResolver;
use crate::domain::render::{import_block, import_line};
use crate::domain::syntax;
use anyhow::{Context as _, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Last path element of a module major-version suffix, e.g. `v2`.
fn major_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^v[0-9]+$").expect("major version regex"))
}

/// Import reconciler that needs no Go toolchain.
///
/// Drops named imports whose package is never referenced, de-duplicates,
/// sorts by path and puts standard-library imports in their own leading
/// group. It cannot add imports it was never given: qualifiers without a
/// matching import are only reported.
///
/// A package may declare a name unrelated to its path
/// (`github.com/hashicorp/golang-lru` is `lru`). While any qualifier is
/// unaccounted for, unaliased imports are therefore never dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinImportResolver;

impl ImportResolver for BuiltinImportResolver {
    fn normalize(&self, source: &str, destination: &Path) -> Result<String> {
        let tree = syntax::parse(source).context("Rendered mock is not valid Go")?;
        let root = tree.root_node();

        let used = qualifiers(root, source)?;
        let imports = syntax::collect_imports(root, source);

        let unresolved: Vec<&String> = used
            .iter()
            .filter(|q| {
                !imports
                    .iter()
                    .any(|i| import_name(i).as_deref() == Some(q.as_str()))
            })
            .collect();
        for qualifier in &unresolved {
            warn!(
                qualifier = qualifier.as_str(),
                path = %destination.display(),
                "no import provides this package under its path name"
            );
        }

        let declarations = syntax::import_declarations(root);
        let (Some(first), Some(last)) = (declarations.first(), declarations.last()) else {
            return Ok(with_trailing_newline(source.to_string()));
        };

        let kept = reconcile(imports, &used, !unresolved.is_empty());
        let head = source[..first.start_byte()].trim_end();
        let tail = source[last.end_byte()..].trim_start();

        let mut out = String::with_capacity(source.len());
        out.push_str(head);
        out.push_str("\n\n");
        let block = format_imports(&kept);
        if !block.is_empty() {
            out.push_str(&block);
            out.push('\n');
        }
        out.push_str(tail);
        Ok(with_trailing_newline(out))
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

/// Package name an import binds in the file, or `None` for blank and dot
/// imports, which are always kept.
fn import_name(import: &ImportSpec) -> Option<String> {
    match import.alias.as_deref() {
        Some("_") | Some(".") => None,
        Some(alias) => Some(alias.to_string()),
        None => Some(assumed_package_name(&import.path)),
    }
}

/// Package name the Go toolchain assumes for an unaliased import path:
/// the last element (skipping a `vN` major-version element), without a
/// `go-` prefix, up to the first character that cannot appear in an
/// identifier.
pub fn assumed_package_name(path: &str) -> String {
    let mut elements = path.rsplit('/');
    let mut base = elements.next().unwrap_or(path);
    if major_version_regex().is_match(base)
        && let Some(parent) = elements.next()
    {
        base = parent;
    }
    let base = base.strip_prefix("go-").unwrap_or(base);
    let end = base
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(base.len());
    base[..end].to_string()
}

/// Package qualifiers referenced from types: `pkg.Type`, and `pkg.Const`
/// where a type embeds an expression such as an array length.
fn qualifiers(root: tree_sitter::Node<'_>, source: &str) -> Result<BTreeSet<String>> {
    let mut used = BTreeSet::new();
    let mut failure = None;
    syntax::visit(root, &mut |node| {
        if failure.is_some() {
            return;
        }
        let package = match node.kind() {
            "qualified_type" => node.child_by_field_name("package"),
            "selector_expression" if !inside_block(node) => node
                .child_by_field_name("operand")
                .filter(|operand| operand.kind() == "identifier"),
            _ => None,
        };
        if let Some(package) = package {
            match syntax::node_text(package, source) {
                Ok(name) => {
                    used.insert(name.to_string());
                }
                Err(e) => failure = Some(e),
            }
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(used),
    }
}

/// Method bodies only hold receiver selectors (`m.GetFunc`), never packages.
fn inside_block(node: tree_sitter::Node<'_>) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind() == "block" {
            return true;
        }
        current = parent.parent();
    }
    false
}

/// Keep referenced, blank and dot imports; sorted by path, no duplicates.
/// With `keep_unaliased`, imports bound to their package's own name survive
/// even when that name could not be matched.
fn reconcile(
    imports: Vec<ImportSpec>,
    used: &BTreeSet<String>,
    keep_unaliased: bool,
) -> Vec<ImportSpec> {
    let mut kept = BTreeSet::new();
    for import in imports {
        match import_name(&import) {
            Some(_) if keep_unaliased && import.alias.is_none() => {
                kept.insert(import);
            }
            Some(name) if !used.contains(&name) => {
                debug!(path = import.path.as_str(), "dropping unused import");
            }
            _ => {
                kept.insert(import);
            }
        }
    }
    kept.into_iter().collect()
}

/// Standard-library paths have no dot in their first element.
fn is_standard_library(path: &str) -> bool {
    !path.split('/').next().unwrap_or(path).contains('.')
}

fn format_imports(imports: &[ImportSpec]) -> String {
    if imports.len() <= 1 {
        return import_block(imports);
    }
    let (standard, others): (Vec<&ImportSpec>, Vec<&ImportSpec>) = imports
        .iter()
        .partition(|i| is_standard_library(&i.path));

    let mut out = String::from("import (\n");
    for (i, group) in [standard, others]
        .iter()
        .filter(|g| !g.is_empty())
        .enumerate()
    {
        if i > 0 {
            out.push('\n');
        }
        for import in group {
            out.push('\t');
            out.push_str(&import_line(import));
            out.push('\n');
        }
    }
    out.push_str(")\n");
    out
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
