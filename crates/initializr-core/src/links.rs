//! Download link resolution

use crate::catalog::{BuildTool, Language};
use crate::selection::StarterConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder in link templates replaced by the selected version
pub const VERSION_PLACEHOLDER: &str = "<version>";

/// Link returned when no template matches the selection
pub const PLACEHOLDER_LINK: &str = "#";

/// Maps a selection key (`kotlin`, `gradle-<arch>` or `<arch>`) to a URL template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DownloadLinks(BTreeMap<String, String>);

impl DownloadLinks {
    pub fn builtin() -> Self {
        [
            (
                "kotlin",
                "https://github.com/mvysny/skeleton-starter-kotlin-spring/archive/master.zip",
            ),
            (
                "gradle-servlet",
                "https://github.com/vaadin/base-starter-gradle/archive/v<version>.zip",
            ),
            (
                "gradle-springboot",
                "https://github.com/vaadin/base-starter-spring-gradle/archive/v<version>.zip",
            ),
            (
                "springboot",
                "https://github.com/vaadin/skeleton-starter-flow-spring/archive/v<version>.zip",
            ),
            (
                "quarkus",
                "https://github.com/vaadin/base-starter-flow-quarkus/archive/v<version>.zip",
            ),
            (
                "jee",
                "https://github.com/vaadin/skeleton-starter-flow-cdi/archive/v<version>.zip",
            ),
            (
                "servlet",
                "https://github.com/vaadin/skeleton-starter-flow/archive/v<version>.zip",
            ),
            (
                "osgi",
                "https://github.com/vaadin/base-starter-flow-osgi/archive/v<version>.zip",
            ),
            (
                "karaf",
                "https://github.com/vaadin/vaadin-flow-karaf-example/archive/v<version>.zip",
            ),
        ]
        .into_iter()
        .collect()
    }

    /// Lookup key for a selection
    ///
    /// Kotlin has a single starter; Gradle starters are keyed per architecture.
    pub fn key_for(config: &StarterConfig) -> String {
        if config.language == Language::Kotlin {
            "kotlin".to_string()
        } else if config.build == BuildTool::Gradle {
            format!("gradle-{}", config.architecture.as_str())
        } else {
            config.architecture.as_str().to_string()
        }
    }

    /// URL template for a key
    pub fn template(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Resolve the download link for a selection, `#` when nothing matches
    pub fn resolve(&self, config: &StarterConfig) -> String {
        let key = Self::key_for(config);
        tracing::debug!(%key, version = %config.version, "resolving download link");

        self.template(&key)
            .unwrap_or(PLACEHOLDER_LINK)
            .replacen(VERSION_PLACEHOLDER, &config.version, 1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DownloadLinks {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Whether a resolved link points nowhere
pub fn is_placeholder(link: &str) -> bool {
    link == PLACEHOLDER_LINK
}

/// Hand the link to the default browser
pub fn open_in_browser(link: &str) -> Result<()> {
    if is_placeholder(link) {
        anyhow::bail!("No starter is published for this combination.");
    }
    open::that(link).with_context(|| format!("Failed to open {}", link))?;
    Ok(())
}
