//! Catalog artifact serialization
//!
//! Renders the compiled records as a generated Rust module and writes it in
//! a single shot. Rendering is deterministic: two runs over identical
//! inputs differ only in the Generated timestamp line of the provenance
//! header.

use crate::error::Result;
use chrono::{SecondsFormat, Utc};
use feria_common::model::Product;
use std::fs;
use std::path::Path;

/// Render the generated catalog module as Rust source.
pub fn render_module(products: &[Product], source: &str) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut out = String::new();
    out.push_str("// AUTO-GENERATED by feria-cc. Do not edit by hand.\n");
    out.push_str(&format!("// Source: {}\n", source));
    out.push_str(&format!("// Generated: {}\n", timestamp));
    out.push('\n');
    out.push_str("use feria_common::model::{Currency, Product};\n");
    out.push_str("use once_cell::sync::Lazy;\n");
    out.push('\n');
    out.push_str("/// Compiled product catalog, in source order.\n");
    out.push_str("pub static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {\n");
    out.push_str("    vec![\n");
    for product in products {
        out.push_str(&render_product(product));
    }
    out.push_str("    ]\n");
    out.push_str("});\n");
    out
}

/// Render and write the artifact.
///
/// Nothing touches the filesystem until the whole module is rendered in
/// memory, and the write is a single `fs::write`, so a failed run can never
/// leave a partial artifact behind.
pub fn write_module(out_path: &Path, products: &[Product], source: &str) -> Result<()> {
    let rendered = render_module(products, source);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out_path, rendered)?;
    Ok(())
}

fn render_product(p: &Product) -> String {
    let mut out = String::new();
    out.push_str("        Product {\n");
    out.push_str(&format!("            sku: {},\n", string_field(&p.sku)));
    out.push_str(&format!("            id: {},\n", string_field(&p.id)));
    out.push_str(&format!("            title: {},\n", string_field(&p.title)));
    out.push_str(&format!("            category: {},\n", string_field(&p.category)));
    out.push_str(&format!("            price_ars: {},\n", p.price_ars));
    out.push_str("            currency: Currency::Ars,\n");
    out.push_str(&format!("            stock: {},\n", p.stock));
    out.push_str(&format!("            height_cm: {},\n", opt_u32(p.height_cm)));
    out.push_str(&format!("            width_cm: {},\n", opt_u32(p.width_cm)));
    out.push_str(&format!("            depth_cm: {},\n", opt_u32(p.depth_cm)));
    out.push_str(&format!("            weight_g: {},\n", opt_u32(p.weight_g)));
    out.push_str(&format!(
        "            shipping_class: {},\n",
        string_field(&p.shipping_class)
    ));
    out.push_str(&format!("            finish: {},\n", string_field(&p.finish)));
    out.push_str(&format!("            food_safe: {},\n", opt_bool(p.food_safe)));
    out.push_str(&format!(
        "            microwave_safe: {},\n",
        opt_bool(p.microwave_safe)
    ));
    out.push_str(&format!(
        "            dishwasher_safe: {},\n",
        opt_bool(p.dishwasher_safe)
    ));
    out.push_str(&format!(
        "            description: {},\n",
        string_field(&p.description)
    ));
    out.push_str(&format!("            care: {},\n", string_field(&p.care)));
    out.push_str(&format!("            tags: {},\n", string_vec(&p.tags)));
    out.push_str(&format!("            photos: {},\n", string_vec(&p.photos)));
    out.push_str("        },\n");
    out
}

// {:?} on str yields a valid, escaped Rust string literal.
fn string_field(s: &str) -> String {
    format!("{:?}.to_string()", s)
}

fn string_vec(items: &[String]) -> String {
    if items.is_empty() {
        return "vec![]".to_string();
    }
    let rendered: Vec<String> = items.iter().map(|s| string_field(s)).collect();
    format!("vec![{}]", rendered.join(", "))
}

fn opt_u32(value: Option<u32>) -> String {
    match value {
        Some(v) => format!("Some({})", v),
        None => "None".to_string(),
    }
}

fn opt_bool(value: Option<bool>) -> String {
    match value {
        Some(v) => format!("Some({})", v),
        None => "None".to_string(),
    }
}
