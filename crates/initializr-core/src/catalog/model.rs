//! Catalog types: what each framework version supports and where its starters live

use crate::links::DownloadLinks;
use crate::selection::StarterConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    #[value(alias = "kt")]
    Kotlin,
}

impl Language {
    /// Language every version supports; unsupported selections fall back to it
    pub const BASE: Language = Language::Java;

    pub const ALL: [Language; 2] = [Language::Java, Language::Kotlin];

    /// Identifier used in catalogs and link keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Kotlin => "kotlin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
        }
    }

    /// Whether starters for this language come from a community add-on
    pub fn is_community_supported(&self) -> bool {
        matches!(self, Language::Kotlin)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Build tool of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    /// Build system selections fall back to
    pub const PRIMARY: BuildTool = BuildTool::Maven;

    pub const ALL: [BuildTool; 2] = [BuildTool::Maven, BuildTool::Gradle];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTool::Maven => "maven",
            BuildTool::Gradle => "gradle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BuildTool::Maven => "Maven",
            BuildTool::Gradle => "Gradle",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Deployment/integration style of the starter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[value(name = "springboot", alias = "spring-boot", alias = "spring")]
    SpringBoot,
    Quarkus,
    #[value(alias = "jakarta-ee", alias = "jakartaee")]
    Jee,
    Servlet,
    Osgi,
    Karaf,
}

impl Architecture {
    /// Every architecture, in display order
    pub const ALL: [Architecture; 6] = [
        Architecture::SpringBoot,
        Architecture::Quarkus,
        Architecture::Jee,
        Architecture::Servlet,
        Architecture::Osgi,
        Architecture::Karaf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::SpringBoot => "springboot",
            Architecture::Quarkus => "quarkus",
            Architecture::Jee => "jee",
            Architecture::Servlet => "servlet",
            Architecture::Osgi => "osgi",
            Architecture::Karaf => "karaf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Architecture::SpringBoot => "Spring Boot",
            Architecture::Quarkus => "Quarkus",
            Architecture::Jee => "Jakarta EE",
            Architecture::Servlet => "Servlet",
            Architecture::Osgi => "OSGi",
            Architecture::Karaf => "Karaf",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What a single framework version supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    /// Version identifier (e.g. "24")
    pub version: String,

    #[serde(alias = "language")]
    pub languages: Vec<Language>,

    #[serde(alias = "build")]
    pub builds: Vec<BuildTool>,

    #[serde(alias = "arch")]
    pub architectures: Vec<Architecture>,

    /// Minimum Java version the framework version runs on
    #[serde(alias = "javaMin")]
    pub java_min: u32,
}

impl SupportEntry {
    pub fn supports_language(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    pub fn supports_build(&self, build: BuildTool) -> bool {
        self.builds.contains(&build)
    }

    pub fn supports_architecture(&self, architecture: Architecture) -> bool {
        self.architectures.contains(&architecture)
    }
}

/// A selectable framework version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionOption {
    pub value: String,

    /// Label shown in the form, defaults to the value
    #[serde(default)]
    pub label: Option<String>,
}

impl VersionOption {
    pub fn new(value: &str, label: Option<&str>) -> Self {
        Self {
            value: value.to_string(),
            label: label.map(str::to_string),
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Everything the picker knows: options, support matrix, links and defaults
///
/// Every section is optional in a catalog file and falls back to the builtin
/// catalog, so a file overriding only `download_links` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Framework display name used in notices (e.g. "Vaadin Flow")
    pub product: String,

    /// Oldest CLI version able to interpret this catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cli_version: Option<String>,

    /// Framework versions offered, in display order
    pub versions: Vec<VersionOption>,

    /// Java versions offered, in display order
    pub java_versions: Vec<u32>,

    /// Full architecture catalog, in display order
    pub architectures: Vec<Architecture>,

    pub support: Vec<SupportEntry>,

    pub download_links: DownloadLinks,

    /// Selection the form starts from
    pub defaults: StarterConfig,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The Vaadin Flow support table shipped with the tool
    pub fn builtin() -> Self {
        use Architecture::*;

        Self {
            product: "Vaadin Flow".to_string(),
            min_cli_version: None,
            versions: vec![
                VersionOption::new("24", None),
                VersionOption::new("23", None),
                VersionOption::new("14", Some("14 (previous LTS)")),
            ],
            java_versions: vec![19, 17, 11, 8],
            architectures: Architecture::ALL.to_vec(),
            support: vec![
                SupportEntry {
                    version: "14".to_string(),
                    languages: vec![Language::Java],
                    builds: vec![BuildTool::Maven, BuildTool::Gradle],
                    architectures: vec![SpringBoot, Jee, Servlet, Osgi],
                    java_min: 8,
                },
                SupportEntry {
                    version: "23".to_string(),
                    languages: vec![Language::Java],
                    builds: vec![BuildTool::Maven, BuildTool::Gradle],
                    architectures: vec![SpringBoot, Quarkus, Jee, Servlet, Osgi, Karaf],
                    java_min: 11,
                },
                SupportEntry {
                    version: "24".to_string(),
                    languages: vec![Language::Java, Language::Kotlin],
                    builds: vec![BuildTool::Maven, BuildTool::Gradle],
                    architectures: vec![SpringBoot, Quarkus, Jee, Servlet],
                    java_min: 17,
                },
            ],
            download_links: DownloadLinks::builtin(),
            defaults: StarterConfig::default(),
        }
    }

    /// Support entry for a version, if the table has one
    pub fn support_for(&self, version: &str) -> Option<&SupportEntry> {
        self.support.iter().find(|s| s.version == version)
    }

    /// Find the offered option for a version value
    pub fn version_option(&self, version: &str) -> Option<&VersionOption> {
        self.versions.iter().find(|v| v.value == version)
    }

    /// Display label for a version, the raw value when it is not offered
    pub fn version_label<'a>(&'a self, version: &'a str) -> &'a str {
        self.version_option(version)
            .map(VersionOption::label)
            .unwrap_or(version)
    }

    /// Problems that make parts of the catalog unusable
    ///
    /// Nothing here is fatal: versions without support data simply end up
    /// with every option disabled.
    pub fn lint(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for option in &self.versions {
            if self.support_for(&option.value).is_none() {
                problems.push(format!(
                    "Version '{}' is offered but has no support entry",
                    option.value
                ));
            }
        }

        if self.support_for(&self.defaults.version).is_none() {
            problems.push(format!(
                "Default version '{}' has no support entry",
                self.defaults.version
            ));
        }

        if !self.java_versions.contains(&self.defaults.java) {
            problems.push(format!(
                "Default Java {} is missing from the Java version list",
                self.defaults.java
            ));
        }

        for entry in &self.support {
            for arch in &entry.architectures {
                if !self.architectures.contains(arch) {
                    problems.push(format!(
                        "Version '{}' supports '{}' which is missing from the architecture list",
                        entry.version,
                        arch.as_str()
                    ));
                }
            }
        }

        problems
    }
}
