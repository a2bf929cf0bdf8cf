//! Mock rendering: fills the fixed mock template from an [`InterfaceModel`].
//!
//! Output is laid out the way `gofmt` prints it (tab indentation, aligned
//! struct fields, one blank line between declarations), so a file rendered
//! without import reconciliation is already canonical.

use crate::domain::model::{ImportSpec, InterfaceModel, MethodDescriptor, ParameterDescriptor, TargetStatus};
use std::fmt::Write as _;

pub const GENERATED_HEADER: &str = "// Code generated by gomo. DO NOT EDIT.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit `var _ I = &IMock{}` when the target resolved to an interface.
    pub assert_conformance: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            assert_conformance: true,
        }
    }
}

pub fn render(model: &InterfaceModel, options: &RenderOptions) -> String {
    let mock = model.mock_name();
    let mut out = String::new();

    out.push_str(GENERATED_HEADER);
    out.push_str("\n\n");
    let _ = writeln!(out, "package {}", model.package_name);

    if !model.imports.is_empty() {
        out.push('\n');
        out.push_str(&import_block(&model.imports));
    }

    out.push('\n');
    let _ = writeln!(out, "type {mock} struct {{");
    let width = model
        .methods
        .iter()
        .map(|m| field_name(m).chars().count())
        .max()
        .unwrap_or(0);
    for method in &model.methods {
        let _ = writeln!(
            out,
            "\t{:<width$} func({}){}",
            field_name(method),
            join_params(&method.parameters),
            returns_clause(&method.returns),
        );
    }
    out.push_str("}\n");

    if options.assert_conformance && model.target == TargetStatus::Interface {
        let _ = write!(out, "\nvar _ {} = &{mock}{{}}\n", model.interface_name);
    }

    for method in &model.methods {
        let receiver = receiver_name(method);
        out.push('\n');
        let _ = writeln!(
            out,
            "func ({receiver} *{mock}) {}({}){} {{",
            method.name,
            join_params(&method.parameters),
            returns_clause(&method.returns),
        );
        let call = format!(
            "{receiver}.{}({})",
            field_name(method),
            join_arguments(&method.parameters)
        );
        if method.returns.is_empty() {
            let _ = writeln!(out, "\t{call}");
        } else {
            let _ = writeln!(out, "\treturn {call}");
        }
        out.push_str("}\n");
    }

    out
}

/// `import "x"` for one import, a parenthesized block otherwise.
pub fn import_block(imports: &[ImportSpec]) -> String {
    match imports {
        [] => String::new(),
        [single] => format!("import {}\n", import_line(single)),
        _ => {
            let mut out = String::from("import (\n");
            for import in imports {
                let _ = writeln!(out, "\t{}", import_line(import));
            }
            out.push_str(")\n");
            out
        }
    }
}

pub fn import_line(import: &ImportSpec) -> String {
    match &import.alias {
        Some(alias) => format!("{alias} \"{}\"", import.path),
        None => format!("\"{}\"", import.path),
    }
}

fn field_name(method: &MethodDescriptor) -> String {
    format!("{}Func", method.name)
}

/// `name type, name type`
pub fn join_params(params: &[ParameterDescriptor]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", p.name, p.type_text))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameter names as call arguments; variadic slices are spread.
pub fn join_arguments(params: &[ParameterDescriptor]) -> String {
    params
        .iter()
        .map(|p| {
            if p.is_variadic() {
                format!("{}...", p.name)
            } else {
                p.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn returns_clause(returns: &[ParameterDescriptor]) -> String {
    if returns.is_empty() {
        String::new()
    } else {
        format!(" ({})", join_params(returns))
    }
}

/// `m`, lengthened until it no longer shadows a parameter or result name.
fn receiver_name(method: &MethodDescriptor) -> String {
    let taken = |name: &str| {
        method
            .parameters
            .iter()
            .chain(&method.returns)
            .any(|p| p.name == name)
    };
    let mut receiver = String::from("m");
    while taken(&receiver) {
        receiver.push('m');
    }
    receiver
}
