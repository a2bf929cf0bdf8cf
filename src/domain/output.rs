use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// `repo.go` → `repo_mock.go`: the first `.<ext>` in the base name becomes
/// `_mock.<ext>`.
pub fn mock_file_name(source_file_name: &str) -> Result<String> {
    let Some(ext) = Path::new(source_file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
    else {
        bail!("Source file name has no extension: {source_file_name}");
    };
    let suffix = format!(".{ext}");
    Ok(source_file_name.replacen(&suffix, &format!("_mock{suffix}"), 1))
}

/// Destination of the mock for `source_path`: same directory, derived name.
pub fn destination(source_path: &Path) -> Result<PathBuf> {
    let Some(file_name) = source_path.file_name().and_then(|n| n.to_str()) else {
        bail!("Invalid source file path: {}", source_path.display());
    };
    let name = mock_file_name(file_name)?;
    Ok(match source_path.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    })
}
