pub mod model;
pub mod naming;
pub mod syntax;
pub mod extractor;
pub mod render;
pub mod output;
pub mod ports;
