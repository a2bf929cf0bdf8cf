use crate::adapters::imports::{
    BuiltinImportResolver, CommandImportResolver, PassthroughImportResolver,
};
use crate::app::dto::*;
use crate::domain::extractor;
use crate::domain::model::{InterfaceModel, TargetStatus};
use crate::domain::output;
use crate::domain::ports::{ImportResolver, MockWriter, SourceReader};
use crate::domain::render::{self, RenderOptions};
use anyhow::{Context as _, Result, bail};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    pub render: RenderOptions,
    /// Fail instead of emitting an empty mock when the target is missing or
    /// not an interface.
    pub strict: bool,
}

/// A mock rendered and normalized, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedMock {
    pub model: InterfaceModel,
    pub destination: PathBuf,
    pub content: String,
}

impl RenderedMock {
    pub fn report(&self, written: bool) -> GenerateReport {
        GenerateReport {
            interface_name: self.model.interface_name.clone(),
            destination: self.destination.clone(),
            method_count: self.model.methods.len(),
            target: self.model.target,
            written,
        }
    }
}

/// Runs the read → extract → render → reconcile → write pipeline.
pub struct MockGenerator {
    source_reader: Box<dyn SourceReader>,
    import_resolver: Box<dyn ImportResolver>,
    writer: Box<dyn MockWriter>,
    options: GeneratorOptions,
}

impl MockGenerator {
    pub fn new(
        source_reader: Box<dyn SourceReader>,
        import_resolver: Box<dyn ImportResolver>,
        writer: Box<dyn MockWriter>,
    ) -> Self {
        Self {
            source_reader,
            import_resolver,
            writer,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Read the source file and extract the requested interface.
    pub fn model(&self, request: &GenerateRequest) -> Result<InterfaceModel> {
        let path = &request.source_path;
        let source = self.source_reader.read(path)?;
        let model = extractor::extract(&source, &request.interface_name)
            .with_context(|| format!("Failed to process {}", path.display()))?;

        if self.options.strict {
            match model.target {
                TargetStatus::Interface => {}
                TargetStatus::Missing => bail!(
                    "Interface {} not found in {}",
                    request.interface_name,
                    path.display()
                ),
                TargetStatus::NotInterface => bail!(
                    "{} in {} is not an interface",
                    request.interface_name,
                    path.display()
                ),
            }
        }
        Ok(model)
    }

    /// Everything but the write: the final text and where it belongs.
    pub fn render(&self, request: &GenerateRequest) -> Result<RenderedMock> {
        let destination = output::destination(&request.source_path)?;
        let model = self.model(request)?;

        let rendered = render::render(&model, &self.options.render);
        debug!(
            resolver = self.import_resolver.name(),
            bytes = rendered.len(),
            "rendered mock"
        );
        let content = self
            .import_resolver
            .normalize(&rendered, &destination)
            .with_context(|| {
                format!(
                    "Failed to reconcile imports of {} ({})",
                    destination.display(),
                    self.import_resolver.name()
                )
            })?;

        Ok(RenderedMock {
            model,
            destination,
            content,
        })
    }

    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateReport> {
        let mock = self.render(request)?;
        self.writer.write(&mock.destination, &mock.content)?;

        info!(
            interface = request.interface_name.as_str(),
            path = %mock.destination.display(),
            methods = mock.model.methods.len(),
            "generated mock"
        );
        Ok(mock.report(true))
    }
}

/// Resolver for an [`ImportMode`]; `goimports_bin` is only used by
/// [`ImportMode::Goimports`].
pub fn import_resolver_for(mode: ImportMode, goimports_bin: &str) -> Box<dyn ImportResolver> {
    match mode {
        ImportMode::Builtin => Box::new(BuiltinImportResolver),
        ImportMode::Goimports => Box::new(CommandImportResolver::goimports(goimports_bin)),
        ImportMode::Off => Box::new(PassthroughImportResolver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_resolver_for_each_mode() {
        assert_eq!(import_resolver_for(ImportMode::Builtin, "goimports").name(), "builtin");
        assert_eq!(import_resolver_for(ImportMode::Off, "goimports").name(), "off");
        assert_eq!(
            import_resolver_for(ImportMode::Goimports, "/opt/go/bin/goimports").name(),
            "/opt/go/bin/goimports"
        );
    }
}
