//! feria-cc library interface
//!
//! The catalog compiler as a library: product CSV in, validated typed
//! catalog module out. The `feria-cc` binary is a thin CLI wrapper around
//! [`compile::compile`]; integration tests drive the same entry point.

pub mod coerce;
pub mod compile;
pub mod dedup;
pub mod emit;
pub mod error;
pub mod rules;
pub mod schema;
pub mod source;
pub mod types;

pub use error::{CompileError, Result};
