//! Product record model shared by the catalog compiler and the storefront
//!
//! Records are constructed once per compilation run and never mutated
//! afterwards; the storefront sees them as process-lifetime constants.

/// Public route prefix under which product photos are served.
///
/// The compiler validates bare filenames against the real asset directory,
/// then rewrites them to `{PUBLIC_ASSET_ROUTE}/{file}` when the catalog is
/// serialized. Compiler and storefront must agree on this prefix.
pub const PUBLIC_ASSET_ROUTE: &str = "/products";

/// Currency tag for catalog prices.
///
/// Single variant today; prices are whole pesos with no decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Ars,
}

/// One catalog entry.
///
/// Every invariant here is enforced by the compiler before a record is
/// emitted: `sku` and `id` are unique across the catalog, `stock` is 0 or 1,
/// and `photos` is non-empty with every entry pointing at an asset that
/// existed at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Human-facing stock code (e.g. "BR-0001"). Unique across the catalog.
    pub sku: String,
    /// URL/DOM-safe slug. Unique across the catalog, distinct namespace
    /// from `sku`.
    pub id: String,
    pub title: String,
    pub category: String,
    /// Whole pesos, no decimals.
    pub price_ars: u32,
    pub currency: Currency,
    /// 0 or 1. Each record is one unique physical piece, never bulk
    /// inventory.
    pub stock: u8,
    /// `None` means the dimension was left unspecified, which is distinct
    /// from an explicit zero.
    pub height_cm: Option<u32>,
    pub width_cm: Option<u32>,
    pub depth_cm: Option<u32>,
    pub weight_g: Option<u32>,
    /// Free-form; values outside the recommended set are accepted with a
    /// compile-time warning.
    pub shipping_class: String,
    /// Optional descriptive string; empty when unspecified.
    pub finish: String,
    /// Tri-state: `None` means "unspecified", not "no".
    pub food_safe: Option<bool>,
    pub microwave_safe: Option<bool>,
    pub dishwasher_safe: Option<bool>,
    pub description: String,
    pub care: String,
    /// Ordered, elements non-empty; may be empty overall.
    pub tags: Vec<String>,
    /// Ordered public asset paths (`/products/...`). Never empty; the first
    /// entry is the canonical thumbnail.
    pub photos: Vec<String>,
}
