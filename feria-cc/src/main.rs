//! feria-cc - Catalog compiler for the Feria storefront
//!
//! Reads the product CSV source of truth, validates every row against the
//! schema and business rules, cross-checks photo assets on disk, and emits
//! the typed catalog module consumed by feria-sf. Runs once per content
//! update; a fatal finding aborts with a non-zero exit and no artifact
//! written.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "feria-cc",
    version,
    about = "Compile the product CSV into the typed catalog module"
)]
struct Cli {
    /// Product CSV source of truth
    #[arg(long, env = "FERIA_SOURCE", default_value = "data/products.csv")]
    source: PathBuf,

    /// Directory holding the product photos referenced by the CSV
    #[arg(long, env = "FERIA_ASSETS", default_value = "assets/products")]
    assets: PathBuf,

    /// Path of the generated catalog module
    #[arg(
        long,
        env = "FERIA_OUT",
        default_value = "feria-sf/src/catalog/generated.rs"
    )]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification first, before any work that can fail.
    info!(
        "Starting feria-cc (catalog compiler) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    info!("Source: {}", cli.source.display());
    info!("Assets: {}", cli.assets.display());

    match feria_cc::compile::compile(&cli.source, &cli.assets, &cli.out) {
        Ok(report) => {
            if !report.warnings.is_empty() {
                info!(
                    "{} advisory warning(s); see log above",
                    report.warnings.len()
                );
            }
            info!(
                "✓ Compiled {} products to {}",
                report.products.len(),
                cli.out.display()
            );
            Ok(())
        }
        Err(e) => {
            error!("Catalog compilation failed: {}", e);
            Err(e.into())
        }
    }
}
