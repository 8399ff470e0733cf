//! Product configuration trait for CLI binaries
//!
//! Each framework that ships a picker implements this trait to configure
//! names, catalog overrides, documentation and post-download instructions.

use crate::selection::StarterConfig;

/// Configuration trait for different picker products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Catalog override environment variable
/// - Documentation links
/// - Post-download instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the catalog location
    fn catalog_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions once a link is resolved
    fn next_steps(&self, config: &StarterConfig, link: &str) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
