use crate::domain::model::TargetStatus;
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// How the import section of the rendered mock is reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Prune and sort imports without external tools.
    #[default]
    Builtin,
    /// Pipe the mock through `goimports`.
    Goimports,
    /// Keep every import of the source file as rendered.
    Off,
}

/// One generator invocation: which file, which interface.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub source_path: PathBuf,
    pub interface_name: String,
}

impl GenerateRequest {
    pub fn new(source_path: impl Into<PathBuf>, interface_name: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            interface_name: interface_name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub interface_name: String,
    pub destination: PathBuf,
    pub method_count: usize,
    pub target: TargetStatus,
    /// False when the mock was only rendered, as with `--stdout`.
    pub written: bool,
}
