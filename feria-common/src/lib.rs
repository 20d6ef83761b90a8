//! # Feria Common Library
//!
//! Shared code for the Feria workspace including:
//! - Product record model and catalog constants
//! - Currency formatting (whole-peso ARS amounts)
//! - Common error type

pub mod error;
pub mod model;
pub mod money;

pub use error::{Error, Result};
pub use model::{Currency, Product};
