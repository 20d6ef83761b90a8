//! Currency formatting
//!
//! Prices are whole-peso ARS amounts; the storefront renders them the way
//! an Argentine buyer expects them ("$ 18.500", dot-grouped, no decimals).

use num_format::{Locale, ToFormattedString};

/// Format a whole-peso amount for display.
pub fn format_ars(amount: u64) -> String {
    format!("$ {}", amount.to_formatted_string(&Locale::es_AR))
}
