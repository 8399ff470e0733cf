//! Initializr Core - Starter picker library
//!
//! This library resolves a starter selection (framework version, language,
//! build tool, architecture and Java version) against a static support table
//! and turns it into a download link for a pre-built starter archive.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure resolution** - `Resolver` predicates, `apply_update` and
//!   `DownloadLinks::resolve` over an immutable `Catalog`
//! - **Layer 2: Edges** - catalog loading (builtin, file, URL), Java runtime
//!   detection, matrix report, `ProductConfig` for product-specific text
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based form (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive form
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use initializr_core::{apply_update, Catalog, Language, Resolver, StarterConfig, Update};
//!
//! let catalog = Catalog::builtin();
//! let config = apply_update(&catalog, &StarterConfig::default(), Update::Language(Language::Kotlin));
//!
//! assert!(!Resolver::new(&catalog, &config).is_build_supported(initializr_core::BuildTool::Gradle));
//! assert_eq!(
//!     catalog.download_links.resolve(&config),
//!     "https://github.com/mvysny/skeleton-starter-kotlin-spring/archive/master.zip"
//! );
//! ```

pub mod catalog;
pub mod error;
pub mod links;
pub mod product;
pub mod report;
pub mod resolver;
pub mod runtime;
pub mod selection;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{
    load_catalog, Architecture, BuildTool, Catalog, CatalogFetcher, CatalogSource, Language,
    SupportEntry,
};
pub use error::{InitializrError, Violation};
pub use links::DownloadLinks;
pub use product::ProductConfig;
pub use resolver::{Notice, Resolver};
pub use selection::{
    apply_update, apply_updates, resolve_selection, SelectionFlags, StarterConfig, Update,
};

#[cfg(feature = "tui")]
pub use tui::run;
