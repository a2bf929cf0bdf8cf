//! In-memory port implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use gomo::domain::ports::{MockWriter, SourceReader};

/// Mock SourceReader that serves content from an in-memory map.
pub struct MockSourceReader {
    files: HashMap<PathBuf, String>,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl Default for MockSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for MockSourceReader {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }
}

/// Mock MockWriter that records every write; clones share the record.
#[derive(Clone, Default)]
pub struct RecordingWriter {
    writes: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().unwrap().clone()
    }
}

impl MockWriter for RecordingWriter {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}

/// Mock MockWriter that always fails, as a read-only directory would.
pub struct FailingWriter;

impl MockWriter for FailingWriter {
    fn write(&self, path: &Path, _content: &str) -> Result<()> {
        Err(anyhow!("permission denied: {}", path.display()))
    }
}
