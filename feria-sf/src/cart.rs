//! Shopping cart
//!
//! A per-session quantity mapping keyed by product id. Entries keep
//! insertion order so the checkout message lists pieces in the order the
//! buyer picked them. Quantities are not capped at stock: most pieces are
//! one-offs and availability is confirmed with the seller in chat anyway.

use crate::catalog;
use feria_common::model::Product;

/// One cart entry joined against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct LineItem {
    pub product: &'static Product,
    pub qty: u32,
}

impl LineItem {
    pub fn line_total_ars(&self) -> u64 {
        u64::from(self.product.price_ars) * u64::from(self.qty)
    }

    /// First photo, the canonical thumbnail.
    pub fn thumbnail(&self) -> Option<&'static str> {
        self.product.photos.first().map(String::as_str)
    }
}

/// Session cart state: product id to quantity, insertion ordered.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<(String, u32)>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, accumulating onto any existing entry.
    pub fn add(&mut self, product_id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| id == product_id) {
            entry.1 += 1;
        } else {
            self.entries.push((product_id.to_string(), 1));
        }
    }

    /// Set a product's quantity directly. Quantities floor at 1; use
    /// [`Cart::remove`] to drop a product entirely.
    pub fn set_qty(&mut self, product_id: &str, qty: u32) {
        let qty = qty.max(1);
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| id == product_id) {
            entry.1 = qty;
        } else {
            self.entries.push((product_id.to_string(), qty));
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|(id, _)| id != product_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries joined against the catalog, in insertion order. Ids with
    /// no catalog record are skipped.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.entries
            .iter()
            .filter_map(|(id, qty)| {
                catalog::by_id(id).map(|product| LineItem {
                    product,
                    qty: *qty,
                })
            })
            .collect()
    }

    /// Total units across known entries (the cart badge number).
    pub fn item_count(&self) -> u32 {
        self.line_items().iter().map(|item| item.qty).sum()
    }

    /// Sum of price times quantity over known entries.
    pub fn subtotal_ars(&self) -> u64 {
        self.line_items().iter().map(LineItem::line_total_ars).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal_is_price_times_qty_summed() {
        let mut cart = Cart::new();
        cart.add("taza-nube");
        cart.add("taza-nube");
        cart.add("bowl-arena");

        // 18_500 * 2 + 24_000 * 1
        assert_eq!(cart.subtotal_ars(), 61_000);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_accumulates_onto_existing_entry() {
        let mut cart = Cart::new();
        cart.add("taza-nube");
        cart.add("taza-nube");

        let items = cart.line_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].qty, 2);
    }

    #[test]
    fn test_line_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add("bowl-arena");
        cart.add("taza-nube");

        let items = cart.line_items();
        assert_eq!(items[0].product.id, "bowl-arena");
        assert_eq!(items[1].product.id, "taza-nube");
    }

    #[test]
    fn test_set_qty_floors_at_one() {
        let mut cart = Cart::new();
        cart.add("taza-nube");
        cart.set_qty("taza-nube", 0);

        assert_eq!(cart.line_items()[0].qty, 1);
    }

    #[test]
    fn test_set_qty_inserts_missing_entry() {
        let mut cart = Cart::new();
        cart.set_qty("plato-luna", 4);

        let items = cart.line_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].qty, 4);
    }

    #[test]
    fn test_unknown_ids_are_skipped_everywhere() {
        let mut cart = Cart::new();
        cart.add("taza-nube");
        cart.set_qty("no-such-piece", 3);

        assert_eq!(cart.line_items().len(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.subtotal_ars(), 18_500);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add("taza-nube");
        cart.add("bowl-arena");

        cart.remove("taza-nube");
        assert_eq!(cart.line_items().len(), 1);
        assert_eq!(cart.line_items()[0].product.id, "bowl-arena");

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal_ars(), 0);
    }

    #[test]
    fn test_thumbnail_is_the_first_photo() {
        let mut cart = Cart::new();
        cart.add("taza-nube");

        let items = cart.line_items();
        assert_eq!(items[0].thumbnail(), Some("/products/IMG_0001.jpg"));
    }
}
