use crate::adapters::fs::{FileMockWriter, FileSourceReader};
use crate::app::dto::{GenerateRequest, ImportMode};
use crate::app::generator::{GeneratorOptions, MockGenerator, import_resolver_for};
use crate::domain::render::RenderOptions;
use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Generate function-field mocks for Go interfaces.
///
/// Meant to run from a `//go:generate gomo <Interface>` directive: the file
/// then defaults to $GOFILE and the mock lands next to it as `<file>_mock.go`.
#[derive(Parser, Debug)]
#[command(name = "gomo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Interface to mock.
    #[arg(value_name = "INTERFACE", required_unless_present = "interface")]
    pub target: Option<String>,

    /// Interface to mock (flag form of INTERFACE).
    #[arg(short = 'i', long = "interface", value_name = "NAME", conflicts_with = "target")]
    pub interface: Option<String>,

    /// Go source file declaring the interface.
    #[arg(short = 'f', long = "file", value_name = "PATH", env = "GOFILE")]
    pub file: PathBuf,

    /// How to reconcile the import section of the mock.
    #[arg(long, value_enum, default_value_t = ImportMode::Builtin)]
    pub imports: ImportMode,

    /// Formatter used by `--imports goimports`.
    #[arg(long, value_name = "BIN", default_value = "goimports")]
    pub goimports_bin: String,

    /// Omit the `var _ I = &IMock{}` conformance assertion.
    #[arg(long)]
    pub no_assert: bool,

    /// Fail when the interface is missing or is not an interface.
    #[arg(long)]
    pub strict: bool,

    /// Print the mock instead of writing it.
    #[arg(long, conflicts_with = "dump_model")]
    pub stdout: bool,

    /// Print the extracted interface model as JSON and exit.
    #[arg(long)]
    pub dump_model: bool,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn interface_name(&self) -> Result<&str> {
        self.interface
            .as_deref()
            .or(self.target.as_deref())
            .ok_or_else(|| anyhow!("No interface name given"))
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            render: RenderOptions {
                assert_conformance: !self.no_assert,
            },
            strict: self.strict,
        }
    }

    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        let request = GenerateRequest::new(&self.file, self.interface_name()?);
        let generator = MockGenerator::new(
            Box::new(FileSourceReader::new()),
            import_resolver_for(self.imports, &self.goimports_bin),
            Box::new(FileMockWriter::new()),
        )
        .with_options(self.options());

        if self.dump_model {
            let model = generator.model(&request)?;
            println!("{}", serde_json::to_string_pretty(&model)?);
            return Ok(());
        }

        if self.stdout {
            let mock = generator.render(&request)?;
            print!("{}", mock.content);
            let report = mock.report(false);
            info!(
                interface = report.interface_name.as_str(),
                methods = report.method_count,
                written = report.written,
                "printed mock"
            );
            return Ok(());
        }

        generator.generate(&request)?;
        Ok(())
    }
}
