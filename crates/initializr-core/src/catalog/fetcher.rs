//! Catalog loading from the builtin table, a local file or a URL
//!
//! Remote and local catalogs share the same YAML format; any section left
//! out falls back to the builtin catalog.

use super::model::Catalog;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    Remote(Url),
    Local(PathBuf),
}

impl CatalogSource {
    /// Interpret a `--catalog` argument: http(s) URLs are remote, anything else is a path
    pub fn parse(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let url =
                Url::parse(location).with_context(|| format!("Invalid catalog URL: {}", location))?;
            Ok(Self::Remote(url))
        } else {
            Ok(Self::Local(PathBuf::from(location)))
        }
    }

    /// Pick the source from an explicit location, then the product's
    /// environment variable, then the builtin table
    pub fn resolve<C: ProductConfig>(config: &C, explicit: Option<&str>) -> Result<Self> {
        if let Some(location) = explicit {
            return Self::parse(location);
        }

        match std::env::var(config.catalog_env()) {
            Ok(location) if !location.trim().is_empty() => Self::parse(location.trim()),
            _ => Ok(Self::Builtin),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin => "builtin catalog".to_string(),
            CatalogSource::Remote(url) => format!("catalog from {}", url),
            CatalogSource::Local(path) => format!("catalog from {}", path.display()),
        }
    }
}

/// Catalog fetcher - handles retrieving the catalog from its source
pub struct CatalogFetcher {
    source: CatalogSource,
    client: reqwest::Client,
}

impl CatalogFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: CatalogSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config and an optional `--catalog` argument
    pub fn from_config<C: ProductConfig>(config: &C, explicit: Option<&str>) -> Result<Self> {
        let source = CatalogSource::resolve(config, explicit)?;
        Ok(Self::new(source, config.user_agent()))
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load and parse the catalog
    pub async fn fetch(&self) -> Result<Catalog> {
        tracing::debug!(source = %self.source.describe(), "loading catalog");

        let catalog = match &self.source {
            CatalogSource::Builtin => Catalog::builtin(),
            CatalogSource::Remote(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch catalog from {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch catalog from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                let content = response.text().await?;
                parse_catalog(&content)?
            }
            CatalogSource::Local(path) => {
                let content = fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                parse_catalog(&content)
                    .with_context(|| format!("Invalid catalog {}", path.display()))?
            }
        };

        for problem in catalog.lint() {
            tracing::warn!(%problem, "catalog problem");
        }

        Ok(catalog)
    }
}

/// Parse a YAML catalog document
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    serde_yaml::from_str(content).context("Failed to parse catalog")
}
