//! Store configuration
//!
//! Seller identity and outbound channel settings, loaded from a TOML
//! file. A missing file falls back to the built-in placeholder values so
//! the storefront runs out of the box; a malformed file is an error.

use std::path::Path;

use feria_common::{Error, Result};
use serde::Deserialize;

/// Everything about the seller that is not a product: display identity,
/// contact channels, and the shipping zones offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Display name used in page titles and outbound messages.
    pub store_name: String,
    pub instagram_handle: String,
    pub instagram_url: String,
    /// E.164 form, e.g. "+5493410000000". Reduced to bare digits when
    /// building the chat deep link.
    pub whatsapp_number: String,
    pub support_email: String,
    pub location: String,
    /// Static external payment link; shown as-is at checkout.
    pub payment_link_url: String,
    /// Zones offered in the checkout selector, in display order.
    pub shipping_zones: Vec<String>,
    pub default_shipping_zone: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Taller Brisa".to_string(),
            instagram_handle: "@taller.brisa".to_string(),
            instagram_url: "https://www.instagram.com/taller.brisa/".to_string(),
            whatsapp_number: "+5493410000000".to_string(),
            support_email: "hola@tallerbrisa.com.ar".to_string(),
            location: "Rosario, Argentina".to_string(),
            payment_link_url: "https://link.mercadopago.com.ar/tallerbrisa".to_string(),
            shipping_zones: vec![
                "Rosario Centro".to_string(),
                "Gran Rosario".to_string(),
                "Interior de Santa Fe".to_string(),
                "Buenos Aires".to_string(),
                "Resto del país".to_string(),
            ],
            default_shipping_zone: "Rosario Centro".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load the configuration from `path`. A missing file is not an
    /// error: the defaults apply until the seller writes their own
    /// feria.toml.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No store config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
