use anyhow::Result;
use std::path::Path;

/// Source code reader port
pub trait SourceReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<String>;
}

/// Import reconciliation port: takes rendered Go text and returns it with a
/// canonical import section. `destination` is where the file will be written,
/// for resolvers that look at the surrounding package.
pub trait ImportResolver: Send + Sync {
    fn normalize(&self, source: &str, destination: &Path) -> Result<String>;

    fn name(&self) -> &str;
}

/// Generated file sink port
pub trait MockWriter: Send + Sync {
    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
