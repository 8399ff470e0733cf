//! Version comparison for CLI and catalog compatibility

use anyhow::Result;
use semver::Version;

/// Compare the CLI version against the minimum a catalog asks for
/// Returns a warning message if the CLI is older than the catalog expects
pub fn check_compatibility(
    cli_version: &str,
    required_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    // Unparseable versions can't be compared, skip the warning
    let cli_ver = parse_version(cli_version).ok()?;
    let required_ver = parse_version(required_version).ok()?;

    if cli_ver < required_ver {
        Some(format!(
            "This catalog was written for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            required_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading 'v'
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install vaadin-initializr --force";

    #[test]
    fn test_cli_older_than_catalog() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE);
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_or_newer() {
        assert!(check_compatibility("0.1.0", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.2.0", "v0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_invalid_versions() {
        assert!(check_compatibility("invalid", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", "latest", UPGRADE).is_none());
    }

    #[test]
    fn test_parse_version_strips_prefix() {
        assert_eq!(parse_version("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert!(parse_version("1.2").is_err());
    }
}
