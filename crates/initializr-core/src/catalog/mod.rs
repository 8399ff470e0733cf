//! Support catalog: types, loading and compatibility checks
//!
//! This module provides:
//! - Catalog types (Catalog, SupportEntry, Language, BuildTool, Architecture)
//! - Catalog loading from the builtin table, local files or remote URLs
//! - CLI version compatibility checking for catalog files

pub mod fetcher;
pub mod model;
pub mod version;

pub use fetcher::{parse_catalog, CatalogFetcher, CatalogSource};
pub use model::{Architecture, BuildTool, Catalog, Language, SupportEntry, VersionOption};
pub use version::check_compatibility;

use crate::product::ProductConfig;
use anyhow::Result;

/// Load the catalog from `--catalog`, the product's environment variable or the builtin table
pub async fn load_catalog<C: ProductConfig>(config: &C, explicit: Option<&str>) -> Result<Catalog> {
    CatalogFetcher::from_config(config, explicit)?.fetch().await
}
