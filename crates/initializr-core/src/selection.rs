//! The user's selection and how it changes

use crate::catalog::{Architecture, BuildTool, Catalog, Language};
use crate::error::{InitializrError, Violation};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

/// Currently selected starter options
///
/// Never mutated in place by the form: every change produces a new value
/// through [`apply_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarterConfig {
    pub language: Language,
    pub build: BuildTool,
    #[serde(alias = "arch")]
    pub architecture: Architecture,
    /// Java runtime version
    #[serde(alias = "runtime")]
    pub java: u32,
    /// Framework version
    pub version: String,
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            language: Language::BASE,
            build: BuildTool::PRIMARY,
            architecture: Architecture::SpringBoot,
            java: 17,
            version: "24".to_string(),
        }
    }
}

/// A single field change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Language(Language),
    Build(BuildTool),
    Architecture(Architecture),
    Java(u32),
    Version(String),
}

/// Fields given up front (command-line flags)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    pub version: Option<String>,
    pub java: Option<u32>,
    pub language: Option<Language>,
    pub build: Option<BuildTool>,
    pub architecture: Option<Architecture>,
}

impl SelectionFlags {
    /// Updates in form order: version, Java, language, build tool, architecture
    pub fn updates(&self) -> Vec<Update> {
        let mut updates = Vec::new();
        if let Some(version) = &self.version {
            updates.push(Update::Version(version.clone()));
        }
        if let Some(java) = self.java {
            updates.push(Update::Java(java));
        }
        if let Some(language) = self.language {
            updates.push(Update::Language(language));
        }
        if let Some(build) = self.build {
            updates.push(Update::Build(build));
        }
        if let Some(architecture) = self.architecture {
            updates.push(Update::Architecture(architecture));
        }
        updates
    }

    /// Requested language or build tool that `apply_update` replaced with its fallback
    pub fn discarded(&self, config: &StarterConfig) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(language) = self.language {
            if language != config.language {
                violations.push(Violation::LanguageUnsupported {
                    version: config.version.clone(),
                    language,
                });
            }
        }

        if let Some(build) = self.build {
            if build != config.build {
                violations.push(Violation::BuildUnsupported {
                    version: config.version.clone(),
                    build,
                    language: config.language,
                });
            }
        }

        violations
    }
}

/// Replace one field, then fall back to the base language and the primary
/// build system if the resulting selection no longer supports them.
///
/// Architecture and version are left untouched even when unsupported.
pub fn apply_update(catalog: &Catalog, config: &StarterConfig, update: Update) -> StarterConfig {
    let mut next = config.clone();

    match update {
        Update::Language(language) => next.language = language,
        Update::Build(build) => next.build = build,
        Update::Architecture(architecture) => next.architecture = architecture,
        Update::Java(java) => next.java = java,
        Update::Version(version) => next.version = version,
    }

    if !Resolver::new(catalog, &next).is_language_supported(next.language) {
        tracing::debug!(
            from = next.language.as_str(),
            version = %next.version,
            "language unsupported, falling back to base language"
        );
        next.language = Language::BASE;
    }

    // Checked after the language fallback: Kotlin restricts the build tools
    if !Resolver::new(catalog, &next).is_build_supported(next.build) {
        tracing::debug!(
            from = next.build.as_str(),
            version = %next.version,
            "build tool unsupported, falling back to primary build system"
        );
        next.build = BuildTool::PRIMARY;
    }

    next
}

/// Apply updates in order
pub fn apply_updates(
    catalog: &Catalog,
    config: &StarterConfig,
    updates: impl IntoIterator<Item = Update>,
) -> StarterConfig {
    updates
        .into_iter()
        .fold(config.clone(), |current, update| {
            apply_update(catalog, &current, update)
        })
}

/// Start from the catalog defaults, apply the flags and reject the result
/// if any field is unsupported or a requested field had to fall back
pub fn resolve_selection(
    catalog: &Catalog,
    flags: &SelectionFlags,
) -> Result<StarterConfig, InitializrError> {
    let config = apply_updates(catalog, &catalog.defaults, flags.updates());

    let mut violations = flags.discarded(&config);
    violations.extend(Resolver::new(catalog, &config).violations());

    if violations.is_empty() {
        Ok(config)
    } else {
        tracing::warn!(count = violations.len(), "selection rejected");
        Err(InitializrError::Unsupported(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_change_resets_unsupported_language() {
        let catalog = Catalog::builtin();
        let kotlin = apply_update(
            &catalog,
            &StarterConfig::default(),
            Update::Language(Language::Kotlin),
        );
        assert_eq!(kotlin.language, Language::Kotlin);

        let next = apply_update(&catalog, &kotlin, Update::Version("23".to_string()));
        assert_eq!(next.version, "23");
        assert_eq!(next.language, Language::BASE);
    }

    #[test]
    fn test_kotlin_forces_maven() {
        let catalog = Catalog::builtin();
        let gradle = apply_update(
            &catalog,
            &StarterConfig::default(),
            Update::Build(BuildTool::Gradle),
        );
        assert_eq!(gradle.build, BuildTool::Gradle);

        let kotlin = apply_update(&catalog, &gradle, Update::Language(Language::Kotlin));
        assert_eq!(kotlin.language, Language::Kotlin);
        assert_eq!(kotlin.build, BuildTool::PRIMARY);
    }

    #[test]
    fn test_gradle_with_kotlin_is_reverted() {
        let catalog = Catalog::builtin();
        let kotlin = apply_update(
            &catalog,
            &StarterConfig::default(),
            Update::Language(Language::Kotlin),
        );
        let next = apply_update(&catalog, &kotlin, Update::Build(BuildTool::Gradle));
        assert_eq!(next.build, BuildTool::Maven);
        assert_eq!(next.language, Language::Kotlin);
    }

    #[test]
    fn test_architecture_and_version_are_not_corrected() {
        let catalog = Catalog::builtin();
        let karaf = apply_update(
            &catalog,
            &StarterConfig::default(),
            Update::Architecture(Architecture::Karaf),
        );
        assert_eq!(karaf.architecture, Architecture::Karaf);
        assert_eq!(karaf.version, "24");

        let unknown = apply_update(&catalog, &karaf, Update::Version("99".to_string()));
        assert_eq!(unknown.version, "99");
        assert_eq!(unknown.architecture, Architecture::Karaf);
    }

    #[test]
    fn test_update_leaves_original_untouched() {
        let catalog = Catalog::builtin();
        let original = StarterConfig::default();
        let next = apply_update(&catalog, &original, Update::Java(11));
        assert_eq!(original.java, 17);
        assert_eq!(next.java, 11);
    }

    #[test]
    fn test_updates_apply_in_order() {
        let catalog = Catalog::builtin();
        let config = apply_updates(
            &catalog,
            &StarterConfig::default(),
            [
                Update::Version("23".to_string()),
                Update::Build(BuildTool::Gradle),
                Update::Architecture(Architecture::Servlet),
            ],
        );
        assert_eq!(config.version, "23");
        assert_eq!(config.build, BuildTool::Gradle);
        assert_eq!(config.architecture, Architecture::Servlet);
    }

    #[test]
    fn test_resolve_selection_accepts_supported_combination() {
        let catalog = Catalog::builtin();
        let flags = SelectionFlags {
            version: Some("14".to_string()),
            java: Some(8),
            architecture: Some(Architecture::Osgi),
            ..SelectionFlags::default()
        };
        let config = resolve_selection(&catalog, &flags).unwrap();
        assert_eq!(config.java, 8);
        assert_eq!(config.architecture, Architecture::Osgi);
    }

    #[test]
    fn test_resolve_selection_rejects_unsupported_combination() {
        let catalog = Catalog::builtin();
        let flags = SelectionFlags {
            version: Some("24".to_string()),
            architecture: Some(Architecture::Osgi),
            ..SelectionFlags::default()
        };
        let err = resolve_selection(&catalog, &flags).unwrap_err();

        let InitializrError::Unsupported(violations) = err;
        assert_eq!(
            violations,
            vec![Violation::ArchitectureUnsupported {
                version: "24".to_string(),
                architecture: Architecture::Osgi,
                build: BuildTool::Maven,
            }]
        );
    }

    #[test]
    fn test_resolve_selection_rejects_language_the_version_lacks() {
        let catalog = Catalog::builtin();
        let flags = SelectionFlags {
            version: Some("23".to_string()),
            language: Some(Language::Kotlin),
            ..SelectionFlags::default()
        };

        let InitializrError::Unsupported(violations) =
            resolve_selection(&catalog, &flags).unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::LanguageUnsupported {
                version: "23".to_string(),
                language: Language::Kotlin,
            }]
        );
    }

    #[test]
    fn test_resolve_selection_rejects_gradle_for_kotlin() {
        let catalog = Catalog::builtin();
        let flags = SelectionFlags {
            language: Some(Language::Kotlin),
            build: Some(BuildTool::Gradle),
            ..SelectionFlags::default()
        };

        let InitializrError::Unsupported(violations) =
            resolve_selection(&catalog, &flags).unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::BuildUnsupported {
                version: "24".to_string(),
                build: BuildTool::Gradle,
                language: Language::Kotlin,
            }]
        );
    }

    #[test]
    fn test_resolve_selection_rejects_java_not_offered() {
        let catalog = Catalog::builtin();
        let flags = SelectionFlags {
            java: Some(21),
            ..SelectionFlags::default()
        };

        let InitializrError::Unsupported(violations) =
            resolve_selection(&catalog, &flags).unwrap_err();
        assert_eq!(violations, vec![Violation::RuntimeNotOffered { java: 21 }]);
    }

    #[test]
    fn test_discarded_ignores_fields_that_were_not_requested() {
        let catalog = Catalog::builtin();
        let flags = SelectionFlags {
            version: Some("23".to_string()),
            ..SelectionFlags::default()
        };
        let kotlin = StarterConfig {
            language: Language::Kotlin,
            ..StarterConfig::default()
        };
        let config = apply_updates(&catalog, &kotlin, flags.updates());

        assert_eq!(config.language, Language::BASE);
        assert!(flags.discarded(&config).is_empty());
    }

    #[test]
    fn test_flags_produce_updates_in_form_order() {
        let flags = SelectionFlags {
            architecture: Some(Architecture::Servlet),
            version: Some("23".to_string()),
            build: Some(BuildTool::Gradle),
            ..SelectionFlags::default()
        };
        assert_eq!(
            flags.updates(),
            vec![
                Update::Version("23".to_string()),
                Update::Build(BuildTool::Gradle),
                Update::Architecture(Architecture::Servlet),
            ]
        );
        assert!(SelectionFlags::default().updates().is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StarterConfig = serde_yaml::from_str("version: \"23\"\n").unwrap();
        assert_eq!(config.version, "23");
        assert_eq!(config.language, Language::BASE);
        assert_eq!(config.java, 17);
    }

    #[test]
    fn test_config_yaml_aliases() {
        let yaml = r#"
language: java
build: gradle
arch: servlet
runtime: 11
version: "23"
"#;
        let config: StarterConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.architecture, Architecture::Servlet);
        assert_eq!(config.java, 11);
        assert_eq!(config.build, BuildTool::Gradle);
    }
}
