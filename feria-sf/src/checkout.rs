//! Checkout handoff
//!
//! There is no payment gateway. Checkout composes a plain-text order
//! message and hands the buyer to an external channel: the WhatsApp deep
//! link with the message prefilled, or the static payment link from the
//! store configuration.

use crate::cart::Cart;
use crate::config::StoreConfig;
use feria_common::money::format_ars;

/// Compose the order message for the chat handoff. One bullet per cart
/// line, then the subtotal, the shipping zone when one was picked, and a
/// closing question for the seller.
pub fn checkout_message(cart: &Cart, config: &StoreConfig, shipping_zone: Option<&str>) -> String {
    let mut lines = vec![
        format!("Hola! Quiero comprar en {}.", config.store_name),
        "Items:".to_string(),
    ];
    for item in cart.line_items() {
        lines.push(format!(
            "• {} (x{}) — {}",
            item.product.title,
            item.qty,
            format_ars(item.line_total_ars())
        ));
    }
    lines.push(format!("Subtotal: {}", format_ars(cart.subtotal_ars())));
    if let Some(zone) = shipping_zone {
        lines.push(format!("Zona de envío: {}", zone));
    }
    lines.push("¿Me confirmás disponibilidad, costo de envío y medios de pago?".to_string());
    lines.join("\n")
}

/// Deep link opening the store's WhatsApp chat with `message` prefilled.
pub fn whatsapp_url(config: &StoreConfig, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(&config.whatsapp_number),
        urlencoding::encode(message)
    )
}

/// Deep link for a general consultation, independent of the cart.
pub fn inquiry_url(config: &StoreConfig) -> String {
    let message = format!("Hola! Quiero consultar por piezas de {}.", config.store_name);
    whatsapp_url(config, &message)
}

/// The static external payment link; unrelated to cart contents.
pub fn payment_link(config: &StoreConfig) -> &str {
    &config.payment_link_url
}

// wa.me takes the bare number, no '+' or separators.
fn digits_only(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}
