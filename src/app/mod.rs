pub mod dto;
pub mod generator;

pub use dto::{GenerateReport, GenerateRequest, ImportMode};
pub use generator::{GeneratorOptions, MockGenerator, RenderedMock, import_resolver_for};
