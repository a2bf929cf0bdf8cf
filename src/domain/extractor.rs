//! Signature extraction: find one interface declaration in a Go file and
//! describe its methods.
//!
//! The tree is indexed once (`TypeIndex`), then the requested name is looked
//! up. A missing name, or a name bound to something other than an interface,
//! is not an error here: the model comes back with no methods and a
//! [`TargetStatus`] saying why, and the caller decides what to do with it.

use crate::domain::model::{InterfaceModel, MethodDescriptor, ParameterDescriptor, TargetStatus};
use crate::domain::naming::{Role, synthesize_names};
use crate::domain::syntax;
use anyhow::{Context as _, Result, anyhow};
use std::collections::HashMap;
use tracing::{debug, warn};
use tree_sitter::Node;

/// Parse `source` and extract the interface called `interface_name`.
pub fn extract(source: &str, interface_name: &str) -> Result<InterfaceModel> {
    let tree = syntax::parse(source).context("Failed to parse Go source")?;
    let root = tree.root_node();

    let mut model = InterfaceModel::new(syntax::package_name(root, source)?, interface_name);
    model.imports = syntax::collect_imports(root, source);

    let index = TypeIndex::build(root, source)?;
    for (name, count) in index.duplicates() {
        warn!(type_name = name, count, "type declared more than once; using the first declaration");
    }

    let Some(spec) = index.get(interface_name) else {
        warn!(interface = interface_name, "type not found; generating an empty mock");
        return Ok(model);
    };

    match spec.child_by_field_name("type") {
        Some(ty) if ty.kind() == "interface_type" => {
            if spec.child_by_field_name("type_parameters").is_some() {
                warn!(
                    interface = interface_name,
                    "type parameters are not supported; the mock will not be generic"
                );
            }
            model.methods = extract_methods(ty, source)
                .with_context(|| format!("Failed to extract methods of {interface_name}"))?;
            model.target = TargetStatus::Interface;
        }
        other => {
            warn!(
                interface = interface_name,
                kind = other.map(|n| n.kind()).unwrap_or("unknown"),
                "type is not an interface; generating an empty mock"
            );
            model.target = TargetStatus::NotInterface;
        }
    }

    debug!(
        interface = interface_name,
        methods = model.methods.len(),
        imports = model.imports.len(),
        "extracted interface"
    );
    Ok(model)
}

/// Name → first type declaration, covering nested declarations too.
struct TypeIndex<'t> {
    specs: HashMap<String, Node<'t>>,
    duplicate_counts: HashMap<String, usize>,
}

impl<'t> TypeIndex<'t> {
    fn build(root: Node<'t>, source: &str) -> Result<Self> {
        let mut specs: HashMap<String, Node<'t>> = HashMap::new();
        let mut duplicate_counts: HashMap<String, usize> = HashMap::new();
        let mut failure = None;

        syntax::visit(root, &mut |node| {
            if failure.is_some() || !matches!(node.kind(), "type_spec" | "type_alias") {
                return;
            }
            let Some(name_node) = node.child_by_field_name("name") else {
                return;
            };
            match syntax::node_text(name_node, source) {
                Ok(name) => {
                    if specs.contains_key(name) {
                        *duplicate_counts.entry(name.to_string()).or_insert(1) += 1;
                    } else {
                        specs.insert(name.to_string(), node);
                    }
                }
                Err(e) => failure = Some(e),
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }
        Ok(Self {
            specs,
            duplicate_counts,
        })
    }

    fn get(&self, name: &str) -> Option<Node<'t>> {
        self.specs.get(name).copied()
    }

    /// Names declared more than once, with their total declaration count.
    fn duplicates(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<_> = self
            .duplicate_counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        out.sort();
        out
    }
}

fn extract_methods(interface: Node<'_>, source: &str) -> Result<Vec<MethodDescriptor>> {
    let mut methods = Vec::new();
    let mut cursor = interface.walk();
    for elem in interface.named_children(&mut cursor) {
        match elem.kind() {
            // method_spec is the name used by older grammar releases
            "method_elem" | "method_spec" => methods.push(extract_method(elem, source)?),
            "comment" => {}
            kind => debug!(kind, "skipping embedded interface element"),
        }
    }
    Ok(methods)
}

fn extract_method(elem: Node<'_>, source: &str) -> Result<MethodDescriptor> {
    let name_node = elem
        .child_by_field_name("name")
        .ok_or_else(|| anyhow!("method without a name at line {}", elem.start_position().row + 1))?;
    let name = syntax::node_text(name_node, source)?.to_string();

    let mut parameters = match elem.child_by_field_name("parameters") {
        Some(list) => descriptors(list, source)?,
        None => Vec::new(),
    };

    let mut returns = match elem.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => descriptors(result, source)?,
        Some(result) => vec![ParameterDescriptor::new(
            "",
            syntax::node_text(result, source)?,
        )],
        None => Vec::new(),
    };

    synthesize_names(&mut parameters, Role::Parameter);
    synthesize_names(&mut returns, Role::Return);

    Ok(MethodDescriptor {
        name,
        parameters,
        returns,
    })
}

/// One descriptor per declared name; a declaration without names yields
/// one unnamed descriptor.
fn descriptors(list: Node<'_>, source: &str) -> Result<Vec<ParameterDescriptor>> {
    let mut out = Vec::new();
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        let type_text = match decl.kind() {
            "parameter_declaration" => {
                let ty = decl
                    .child_by_field_name("type")
                    .ok_or_else(|| anyhow!("parameter without a type"))?;
                syntax::node_text(ty, source)?.to_string()
            }
            "variadic_parameter_declaration" => variadic_type_text(decl, source)?,
            _ => continue,
        };

        let mut name_cursor = decl.walk();
        let names = decl
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| syntax::node_text(n, source).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;

        if names.is_empty() {
            out.push(ParameterDescriptor::new("", type_text));
        } else {
            for name in names {
                out.push(ParameterDescriptor::new(name, type_text.clone()));
            }
        }
    }
    Ok(out)
}

/// `...T`: from the ellipsis token through the end of the element type.
fn variadic_type_text(decl: Node<'_>, source: &str) -> Result<String> {
    let ty = decl
        .child_by_field_name("type")
        .ok_or_else(|| anyhow!("variadic parameter without a type"))?;
    let mut cursor = decl.walk();
    let start = decl
        .children(&mut cursor)
        .find(|c| c.kind() == "...")
        .map(|c| c.start_byte())
        .unwrap_or_else(|| ty.start_byte());
    source
        .get(start..ty.end_byte())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("variadic type span is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPO: &str = r#"package example

type User struct{}

type UserRepository interface {
	Init()
	FindUser(id string) (User, error)
	SaveUser(User) error
}
"#;

    fn params(method: &MethodDescriptor) -> Vec<(&str, &str)> {
        method
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.type_text.as_str()))
            .collect()
    }

    fn returns(method: &MethodDescriptor) -> Vec<(&str, &str)> {
        method
            .returns
            .iter()
            .map(|p| (p.name.as_str(), p.type_text.as_str()))
            .collect()
    }

    #[test]
    fn test_extracts_methods_in_declaration_order() {
        let model = extract(REPO, "UserRepository").unwrap();
        assert_eq!(model.package_name, "example");
        assert_eq!(model.target, TargetStatus::Interface);
        let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Init", "FindUser", "SaveUser"]);
    }

    #[test]
    fn test_unnamed_parameters_and_returns_are_synthesized() {
        let model = extract(REPO, "UserRepository").unwrap();
        let find = &model.methods[1];
        assert_eq!(params(find), [("id", "string")]);
        assert_eq!(returns(find), [("r0", "User"), ("r1", "error")]);

        let save = &model.methods[2];
        assert_eq!(params(save), [("a0", "User")]);
        assert_eq!(returns(save), [("r0", "error")]);
    }

    #[test]
    fn test_method_without_params_or_results() {
        let model = extract(REPO, "UserRepository").unwrap();
        let init = &model.methods[0];
        assert!(init.parameters.is_empty());
        assert!(init.returns.is_empty());
    }

    #[test]
    fn test_grouped_names_expand_to_one_descriptor_each() {
        let source = "package p\n\ntype Math interface {\n\tAdd(a, b int) (sum, carry int)\n}\n";
        let model = extract(source, "Math").unwrap();
        let add = &model.methods[0];
        assert_eq!(params(add), [("a", "int"), ("b", "int")]);
        assert_eq!(returns(add), [("sum", "int"), ("carry", "int")]);
    }

    #[test]
    fn test_type_text_is_verbatim() {
        let source = r#"package p

import "context"

type Store interface {
	Get(ctx context.Context, keys []*string, m map[string]chan<- int) (*Item, error)
	Each(fn func(k string) bool)
}
"#;
        let model = extract(source, "Store").unwrap();
        assert_eq!(
            params(&model.methods[0]),
            [
                ("ctx", "context.Context"),
                ("keys", "[]*string"),
                ("m", "map[string]chan<- int"),
            ]
        );
        assert_eq!(params(&model.methods[1]), [("fn", "func(k string) bool")]);
    }

    #[test]
    fn test_variadic_type_keeps_ellipsis() {
        let source = "package p\n\ntype Logger interface {\n\tLogf(format string, args ...any)\n}\n";
        let model = extract(source, "Logger").unwrap();
        assert_eq!(
            params(&model.methods[0]),
            [("format", "string"), ("args", "...any")]
        );
    }

    #[test]
    fn test_embedded_interfaces_are_skipped() {
        let source = r#"package p

import "io"

type ReadCloser interface {
	io.Reader
	// Close releases the resource.
	Close() error
}
"#;
        let model = extract(source, "ReadCloser").unwrap();
        assert_eq!(model.methods.len(), 1);
        assert_eq!(model.methods[0].name, "Close");
    }

    #[test]
    fn test_missing_target_yields_empty_model() {
        let source = "package p\n\ntype Bar interface {\n\tDo()\n}\n";
        let model = extract(source, "Foo").unwrap();
        assert_eq!(model.interface_name, "Foo");
        assert_eq!(model.target, TargetStatus::Missing);
        assert!(model.methods.is_empty());
    }

    #[test]
    fn test_non_interface_target_yields_empty_model() {
        let model = extract(REPO, "User").unwrap();
        assert_eq!(model.interface_name, "User");
        assert_eq!(model.target, TargetStatus::NotInterface);
        assert!(model.methods.is_empty());
    }

    #[test]
    fn test_first_declaration_wins() {
        let source = r#"package p

type Thing interface {
	First()
}

func f() {
	type Thing interface {
		Second()
	}
}
"#;
        let model = extract(source, "Thing").unwrap();
        let names: Vec<_> = model.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["First"]);
    }

    #[test]
    fn test_grouped_type_declaration() {
        let source = "package p\n\ntype (\n\tA struct{}\n\tB interface {\n\t\tRun() error\n\t}\n)\n";
        let model = extract(source, "B").unwrap();
        assert_eq!(model.target, TargetStatus::Interface);
        assert_eq!(model.methods[0].name, "Run");
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let err = extract("package p\n\ntype I interface {\n\tDo(\n", "I").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse Go source"));
    }

    #[test]
    fn test_missing_package_clause_is_fatal() {
        assert!(extract("type I interface{}\n", "I").is_err());
    }
}
