//! Fluent builder generation for setter-style methods.
//!
//! A discovery tool hands over the methods carrying the builder marker as
//! [`builder_types::Candidate`]s. [`processor::BuilderProcessor`] classifies
//! them, reports the ones that are not single-argument setters, and emits
//! one `<Target>Builder` source unit through a [`filer::SourceFileSink`].

pub mod classify;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod filer;
pub mod manifest;
pub mod processor;

pub use classify::{classify, is_valid_setter, setter_specs, Classification};
pub use emit::{emit, BuilderNames};
pub use error::ProcessError;
pub use processor::{BuilderPlan, BuilderProcessor, ProcessOutcome, ProcessorOptions};
