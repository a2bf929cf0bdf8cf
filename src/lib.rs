//! gomo library: Go interface extraction and function-field mock generation.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
