use crate::domain::ports::MockWriter;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Writes generated files to disk, overwriting unconditionally.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileMockWriter;

impl FileMockWriter {
    pub fn new() -> Self {
        Self
    }
}

impl MockWriter for FileMockWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write mock file: {}", path.display()))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote mock file");
        Ok(())
    }
}
