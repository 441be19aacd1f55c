//! gridkata-core: array-fundamentals exercises over ndarray.
//!
//! This crate provides the four exercise operations as small, parameterized
//! functions (grid construction, rectangular block extraction, nested vs.
//! flat traversal, and evenly-spaced sequence generation with strided
//! overwrite), plus the run configuration consumed by the CLI.
//!
//! The design favors pure functions over owned ndarray values so every
//! operation can be tested without capturing process output.
pub mod config;
pub mod construct;
pub mod error;
pub mod extract;
pub mod sequence;
pub mod traverse;

pub use config::DrillConfig;
pub use error::DrillError;
