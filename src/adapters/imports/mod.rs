//! Import reconciliation adapters
//!
//! The rendered mock copies every import of the source file, while its types
//! usually reference only a few of them. These adapters turn that into an
//! import section the Go compiler accepts.

mod builtin;
mod command;

pub use builtin::{BuiltinImportResolver, assumed_package_name};
pub use command::CommandImportResolver;

use crate::domain::ports::ImportResolver;
use anyhow::Result;
use std::path::Path;

/// Leaves the rendered text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughImportResolver;

impl ImportResolver for PassthroughImportResolver {
    fn normalize(&self, source: &str, _destination: &Path) -> Result<String> {
        Ok(source.to_string())
    }

    fn name(&self) -> &str {
        "off"
    }
}
