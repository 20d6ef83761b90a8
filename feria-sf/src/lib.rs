//! # Feria Storefront Library
//!
//! Read-side of the store: everything here consumes the catalog module
//! that feria-cc compiles from the seller's spreadsheet.
//!
//! - **catalog**: typed access to the embedded product records
//! - **cart**: per-session quantity mapping and subtotal arithmetic
//! - **checkout**: order message composition and external handoff links
//! - **config**: seller identity and channel settings from feria.toml

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

pub use cart::{Cart, LineItem};
pub use config::StoreConfig;
