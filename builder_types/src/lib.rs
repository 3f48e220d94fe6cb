//! Builder Generator Type Definitions
//!
//! This crate contains the data structures shared by the builder generator:
//! candidate method descriptors handed over by a discovery tool, the setter
//! and target class views derived from them, the generated source unit and
//! the diagnostics reported along the way. It has no I/O or code generation
//! logic of its own.

pub mod candidate;
pub mod diagnostic;
pub mod manifest;
pub mod setter;
pub mod unit;

// Re-export commonly used types at the crate root
pub use candidate::*;
pub use diagnostic::*;
pub use manifest::*;
pub use setter::*;
pub use unit::*;
