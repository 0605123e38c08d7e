//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Product catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Path to the YAML product catalog
    #[arg(long = "catalog", env = "CATALOG_PATH", default_value = "fixtures/catalog.yml")]
    pub path: PathBuf,
}
