//! Extracted contract of one Go interface: the data handed from the extractor
//! to the renderer.
//!
//! Type text is carried as an opaque `String` sliced from the source file. It
//! is never parsed into a type model, so the generated mock reproduces the
//! declaration byte for byte (pointers, qualifiers, brackets, spacing).

use serde::Serialize;

/// One parameter or return value of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    /// Declared identifier, or a synthesized placeholder (`a0`, `r1`, ...).
    pub name: String,
    /// Verbatim source text of the type expression.
    pub type_text: String,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }

    /// Variadic parameters keep their `...` in the type text.
    pub fn is_variadic(&self) -> bool {
        self.type_text.starts_with("...")
    }
}

/// One method of the interface, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub returns: Vec<ParameterDescriptor>,
}

/// An import of the source file. `path` is unquoted; `alias` holds the
/// explicit package name, `_` or `.` when one was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ImportSpec {
    pub path: String,
    pub alias: Option<String>,
}

impl ImportSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

/// How the requested name resolved in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    /// Found, and its underlying type is an interface.
    Interface,
    /// Found, but declared as something other than an interface.
    NotInterface,
    /// No type declaration with that name.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceModel {
    pub package_name: String,
    pub interface_name: String,
    pub methods: Vec<MethodDescriptor>,
    pub imports: Vec<ImportSpec>,
    pub target: TargetStatus,
}

impl InterfaceModel {
    /// An empty model for `interface_name`; the target counts as missing
    /// until the extractor resolves it.
    pub fn new(package_name: impl Into<String>, interface_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            interface_name: interface_name.into(),
            methods: Vec::new(),
            imports: Vec::new(),
            target: TargetStatus::Missing,
        }
    }

    pub fn mock_name(&self) -> String {
        format!("{}Mock", self.interface_name)
    }
}
