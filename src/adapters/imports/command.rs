use crate::domain::ports::ImportResolver;
use anyhow::{Context as _, Result, bail};
use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Pipes the rendered file through an external formatter such as
/// `goimports`, which reads the source on stdin and prints the result.
#[derive(Debug, Clone)]
pub struct CommandImportResolver {
    program: String,
    args: Vec<String>,
    pass_srcdir: bool,
}

impl CommandImportResolver {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            pass_srcdir: false,
        }
    }

    /// `goimports -srcdir <destination dir>`, so imports are resolved as if
    /// the file already lived in its package.
    pub fn goimports(program: impl Into<String>) -> Self {
        Self {
            pass_srcdir: true,
            ..Self::new(program, Vec::new())
        }
    }
}

impl ImportResolver for CommandImportResolver {
    fn normalize(&self, source: &str, destination: &Path) -> Result<String> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if self.pass_srcdir
            && let Some(dir) = destination.parent().filter(|d| !d.as_os_str().is_empty())
        {
            command.arg("-srcdir").arg(dir);
        }
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(program = self.program.as_str(), "running import formatter");
        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to run {}", self.program))?;
        {
            let mut stdin = child
                .stdin
                .take()
                .with_context(|| format!("No stdin for {}", self.program))?;
            stdin
                .write_all(source.as_bytes())
                .with_context(|| format!("Failed to send source to {}", self.program))?;
        }
        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", self.program))?;

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        String::from_utf8(output.stdout)
            .with_context(|| format!("{} produced non-UTF-8 output", self.program))
    }

    fn name(&self) -> &str {
        &self.program
    }
}
