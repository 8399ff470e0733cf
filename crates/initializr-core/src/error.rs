//! Error types for selection validation

use crate::catalog::{Architecture, BuildTool, Language};
use thiserror::Error;

/// A field of the selection the support table does not allow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("version {version} is not in the support table")]
    UnknownVersion { version: String },

    #[error("Java {java} is not offered by the catalog")]
    RuntimeNotOffered { java: u32 },

    #[error("version {version} requires Java {minimum} or newer (selected Java {java})")]
    RuntimeTooOld {
        version: String,
        minimum: u32,
        java: u32,
    },

    #[error("version {version} does not support {language}")]
    LanguageUnsupported { version: String, language: Language },

    #[error("version {version} does not support {build} with {language}")]
    BuildUnsupported {
        version: String,
        build: BuildTool,
        language: Language,
    },

    #[error("version {version} does not support the {architecture} architecture with {build}")]
    ArchitectureUnsupported {
        version: String,
        architecture: Architecture,
        build: BuildTool,
    },
}

/// Errors returned by the selection API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitializrError {
    #[error("unsupported selection: {}", join_violations(.0))]
    Unsupported(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
