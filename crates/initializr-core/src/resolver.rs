//! Compatibility resolution over the support table
//!
//! Every predicate answers "can this option be picked given the current
//! selection". A version missing from the table supports nothing, so all
//! predicates return `false` for it instead of failing.

use crate::catalog::{Architecture, BuildTool, Catalog, Language, SupportEntry};
use crate::error::Violation;
use crate::selection::StarterConfig;
use std::fmt;

/// Architectures with a Gradle starter
const GRADLE_ARCHITECTURES: [Architecture; 2] = [Architecture::SpringBoot, Architecture::Servlet];

/// The only architecture with a Kotlin starter
const KOTLIN_ARCHITECTURE: Architecture = Architecture::SpringBoot;

/// The only build tool with a Kotlin starter
const KOTLIN_BUILD: BuildTool = BuildTool::Maven;

/// Answers support questions for one selection against one catalog
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    config: &'a StarterConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a StarterConfig) -> Self {
        Self { catalog, config }
    }

    pub fn support_for(&self, version: &str) -> Option<&'a SupportEntry> {
        self.catalog.support_for(version)
    }

    pub fn minimum_runtime_for(&self, version: &str) -> Option<u32> {
        self.support_for(version).map(|s| s.java_min)
    }

    fn current(&self) -> Option<&'a SupportEntry> {
        self.support_for(&self.config.version)
    }

    /// Version runs on the selected Java and offers the selected architecture
    pub fn is_version_supported(&self, version: &str) -> bool {
        match self.support_for(version) {
            Some(support) => {
                self.config.java >= support.java_min
                    && support.supports_architecture(self.config.architecture)
            }
            None => false,
        }
    }

    /// Some support entry of the selected version accepts this Java version
    pub fn is_runtime_supported(&self, java: u32) -> bool {
        self.catalog
            .support
            .iter()
            .any(|s| s.version == self.config.version && java >= s.java_min)
    }

    pub fn is_architecture_supported(&self, architecture: Architecture) -> bool {
        let Some(support) = self.current() else {
            return false;
        };

        if self.config.build == BuildTool::Gradle {
            support.supports_architecture(architecture)
                && GRADLE_ARCHITECTURES.contains(&architecture)
        } else if self.config.language == Language::Kotlin {
            architecture == KOTLIN_ARCHITECTURE
        } else {
            support.supports_architecture(architecture)
        }
    }

    pub fn is_build_supported(&self, build: BuildTool) -> bool {
        let Some(support) = self.current() else {
            return false;
        };

        if self.config.language == Language::Kotlin {
            support.supports_build(build) && build == KOTLIN_BUILD
        } else {
            support.supports_build(build)
        }
    }

    pub fn is_language_supported(&self, language: Language) -> bool {
        self.current()
            .is_some_and(|support| support.supports_language(language))
    }

    /// Some architecture of the full catalog is missing for the selected version
    pub fn has_unsupported_architecture(&self) -> bool {
        match self.current() {
            Some(support) => self
                .catalog
                .architectures
                .iter()
                .any(|a| !support.supports_architecture(*a)),
            None => false,
        }
    }

    /// Advisory texts for the current selection
    pub fn notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();
        let product = &self.catalog.product;
        let version = &self.config.version;

        if !self.is_language_supported(self.config.language) {
            notices.push(Notice::LanguageUnsupported {
                product: product.clone(),
                version: version.clone(),
                language: self.config.language,
            });
        }

        if self.config.language.is_community_supported() {
            notices.push(Notice::CommunityAddon {
                language: self.config.language,
            });
        }

        if self.has_unsupported_architecture() {
            notices.push(Notice::PartialArchitectureSupport {
                product: product.clone(),
                version: version.clone(),
            });
        }

        notices
    }

    /// Every field of the selection the table rejects
    pub fn violations(&self) -> Vec<Violation> {
        let config = self.config;
        let version = config.version.clone();

        let Some(support) = self.current() else {
            return vec![Violation::UnknownVersion { version }];
        };

        let mut violations = Vec::new();

        if !self.catalog.java_versions.contains(&config.java) {
            violations.push(Violation::RuntimeNotOffered { java: config.java });
        }

        if !self.is_runtime_supported(config.java) {
            violations.push(Violation::RuntimeTooOld {
                version: version.clone(),
                minimum: support.java_min,
                java: config.java,
            });
        }

        if !self.is_language_supported(config.language) {
            violations.push(Violation::LanguageUnsupported {
                version: version.clone(),
                language: config.language,
            });
        }

        if !self.is_build_supported(config.build) {
            violations.push(Violation::BuildUnsupported {
                version: version.clone(),
                build: config.build,
                language: config.language,
            });
        }

        if !self.is_architecture_supported(config.architecture) {
            violations.push(Violation::ArchitectureUnsupported {
                version,
                architecture: config.architecture,
                build: config.build,
            });
        }

        violations
    }
}

/// Advisory message shown next to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LanguageUnsupported {
        product: String,
        version: String,
        language: Language,
    },
    CommunityAddon {
        language: Language,
    },
    PartialArchitectureSupport {
        product: String,
        version: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LanguageUnsupported {
                product,
                version,
                language,
            } => write!(
                f,
                "{} {} does not support {}",
                product,
                version,
                language.as_str()
            ),
            Notice::CommunityAddon { language } => write!(
                f,
                "{} support uses a community add-on.",
                language.display_name()
            ),
            Notice::PartialArchitectureSupport { product, version } => write!(
                f,
                "{} {} does not support all architectures.",
                product, version
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(version: &str) -> StarterConfig {
        StarterConfig {
            version: version.to_string(),
            ..StarterConfig::default()
        }
    }

    #[test]
    fn test_support_lookup() {
        let catalog = Catalog::builtin();
        let config = StarterConfig::default();
        let resolver = Resolver::new(&catalog, &config);

        assert_eq!(resolver.minimum_runtime_for("14"), Some(8));
        assert_eq!(resolver.minimum_runtime_for("23"), Some(11));
        assert_eq!(resolver.minimum_runtime_for("24"), Some(17));
        assert!(resolver.support_for("15").is_none());
        assert_eq!(resolver.minimum_runtime_for("15"), None);
    }

    #[test]
    fn test_version_support_matches_runtime_and_architecture() {
        let catalog = Catalog::builtin();

        for java in [8, 11, 17, 19] {
            for arch in Architecture::ALL {
                let config = StarterConfig {
                    java,
                    architecture: arch,
                    ..StarterConfig::default()
                };
                let resolver = Resolver::new(&catalog, &config);

                for entry in &catalog.support {
                    let expected = java >= entry.java_min && entry.architectures.contains(&arch);
                    assert_eq!(
                        resolver.is_version_supported(&entry.version),
                        expected,
                        "version {} java {} arch {:?}",
                        entry.version,
                        java,
                        arch
                    );
                }
            }
        }
    }

    #[test]
    fn test_runtime_support_for_current_version() {
        let catalog = Catalog::builtin();
        let config = config_for("23");
        let resolver = Resolver::new(&catalog, &config);

        assert!(!resolver.is_runtime_supported(8));
        assert!(resolver.is_runtime_supported(11));
        assert!(resolver.is_runtime_supported(19));
    }

    #[test]
    fn test_kotlin_only_builds_with_maven() {
        let catalog = Catalog::builtin();
        let config = StarterConfig {
            language: Language::Kotlin,
            ..StarterConfig::default()
        };
        let resolver = Resolver::new(&catalog, &config);

        assert!(!resolver.is_build_supported(BuildTool::Gradle));
        assert!(resolver.is_build_supported(BuildTool::Maven));
    }

    #[test]
    fn test_kotlin_only_offers_spring_boot() {
        let catalog = Catalog::builtin();
        let config = StarterConfig {
            language: Language::Kotlin,
            ..StarterConfig::default()
        };
        let resolver = Resolver::new(&catalog, &config);

        for arch in Architecture::ALL {
            assert_eq!(
                resolver.is_architecture_supported(arch),
                arch == Architecture::SpringBoot
            );
        }
    }

    #[test]
    fn test_gradle_excludes_karaf() {
        let catalog = Catalog::builtin();

        for version in ["14", "23", "24"] {
            let config = StarterConfig {
                build: BuildTool::Gradle,
                ..config_for(version)
            };
            let resolver = Resolver::new(&catalog, &config);

            assert!(!resolver.is_architecture_supported(Architecture::Karaf));
            assert!(!resolver.is_architecture_supported(Architecture::Quarkus));
            assert!(resolver.is_architecture_supported(Architecture::SpringBoot));
            assert!(resolver.is_architecture_supported(Architecture::Servlet));
        }
    }

    #[test]
    fn test_maven_uses_version_architectures() {
        let catalog = Catalog::builtin();
        let config = config_for("14");
        let resolver = Resolver::new(&catalog, &config);

        assert!(resolver.is_architecture_supported(Architecture::Osgi));
        assert!(!resolver.is_architecture_supported(Architecture::Quarkus));
        assert!(!resolver.is_architecture_supported(Architecture::Karaf));
    }

    #[test]
    fn test_language_support() {
        let catalog = Catalog::builtin();

        let v24 = config_for("24");
        assert!(Resolver::new(&catalog, &v24).is_language_supported(Language::Kotlin));

        let v23 = config_for("23");
        let resolver = Resolver::new(&catalog, &v23);
        assert!(resolver.is_language_supported(Language::Java));
        assert!(!resolver.is_language_supported(Language::Kotlin));
    }

    #[test]
    fn test_unsupported_architecture_caveat() {
        let catalog = Catalog::builtin();

        let v24 = config_for("24");
        assert!(Resolver::new(&catalog, &v24).has_unsupported_architecture());

        let v23 = config_for("23");
        assert!(!Resolver::new(&catalog, &v23).has_unsupported_architecture());
    }

    #[test]
    fn test_unknown_version_supports_nothing() {
        let catalog = Catalog::builtin();
        let config = config_for("15");
        let resolver = Resolver::new(&catalog, &config);

        assert!(!resolver.is_version_supported("15"));
        assert!(!resolver.is_runtime_supported(19));
        assert!(!resolver.is_language_supported(Language::Java));
        assert!(BuildTool::ALL.iter().all(|b| !resolver.is_build_supported(*b)));
        assert!(Architecture::ALL
            .iter()
            .all(|a| !resolver.is_architecture_supported(*a)));
        assert!(!resolver.has_unsupported_architecture());
        assert_eq!(
            resolver.violations(),
            vec![Violation::UnknownVersion {
                version: "15".to_string()
            }]
        );
    }

    #[test]
    fn test_notices() {
        let catalog = Catalog::builtin();

        let config = StarterConfig {
            language: Language::Kotlin,
            ..config_for("23")
        };
        let messages: Vec<String> = Resolver::new(&catalog, &config)
            .notices()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Vaadin Flow 23 does not support kotlin".to_string(),
                "Kotlin support uses a community add-on.".to_string(),
            ]
        );

        let config = config_for("24");
        let notices = Resolver::new(&catalog, &config).notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices[0].to_string(),
            "Vaadin Flow 24 does not support all architectures."
        );
    }

    #[test]
    fn test_violations_for_inconsistent_selection() {
        let catalog = Catalog::builtin();
        let config = StarterConfig {
            java: 11,
            architecture: Architecture::Karaf,
            ..config_for("24")
        };
        let violations = Resolver::new(&catalog, &config).violations();

        assert_eq!(violations.len(), 2);
        assert!(matches!(
            violations[0],
            Violation::RuntimeTooOld { minimum: 17, java: 11, .. }
        ));
        assert!(matches!(
            violations[1],
            Violation::ArchitectureUnsupported {
                architecture: Architecture::Karaf,
                ..
            }
        ));
    }

    #[test]
    fn test_java_outside_the_catalog_is_rejected() {
        let catalog = Catalog::builtin();
        let config = StarterConfig {
            java: 21,
            ..config_for("24")
        };
        let violations = Resolver::new(&catalog, &config).violations();

        assert_eq!(violations, vec![Violation::RuntimeNotOffered { java: 21 }]);
    }

    #[test]
    fn test_default_selection_is_valid() {
        let catalog = Catalog::builtin();
        let resolver = Resolver::new(&catalog, &catalog.defaults);
        assert!(resolver.violations().is_empty());
    }
}
