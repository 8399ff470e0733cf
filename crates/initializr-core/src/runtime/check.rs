//! Java runtime detection

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    /// Raw version string as reported by the runtime
    pub version: Option<String>,
    /// Feature release number (8 for "1.8.0_392", 17 for "17.0.2")
    pub major: Option<u32>,
    pub available: bool,
}

impl RuntimeInfo {
    fn missing() -> Self {
        Self {
            name: "Java",
            version: None,
            major: None,
            available: false,
        }
    }
}

/// Check if a Java runtime is on the PATH
pub fn check_java() -> RuntimeInfo {
    let output = Command::new("java").arg("-version").output();

    match output {
        Ok(out) if out.status.success() => {
            // `java -version` writes to stderr; some distributions use stdout
            let mut text = String::from_utf8_lossy(&out.stderr).to_string();
            if text.trim().is_empty() {
                text = String::from_utf8_lossy(&out.stdout).to_string();
            }

            let version = quoted_version(&text).map(str::to_string);
            let major = parse_java_major(&text);
            tracing::debug!(?version, ?major, "detected java runtime");

            RuntimeInfo {
                name: "Java",
                version,
                major,
                available: true,
            }
        }
        _ => RuntimeInfo::missing(),
    }
}

/// The first double-quoted token, e.g. `17.0.2` in `openjdk version "17.0.2" 2022-01-18`
fn quoted_version(output: &str) -> Option<&str> {
    let start = output.find('"')? + 1;
    let len = output[start..].find('"')?;
    Some(&output[start..start + len])
}

/// Extract the feature release from `java -version` output
///
/// Handles the legacy `1.x` scheme as well as `17.0.2`, `21` and `22-ea`.
pub fn parse_java_major(output: &str) -> Option<u32> {
    let version = quoted_version(output)?;
    let mut parts = version.split(|c: char| !c.is_ascii_digit());

    let first: u32 = parts.next()?.parse().ok()?;
    if first == 1 {
        parts.next()?.parse().ok()
    } else {
        Some(first)
    }
}

/// Newest offered Java version that the detected runtime can satisfy
pub fn pick_java_version(offered: &[u32], detected: u32) -> Option<u32> {
    offered.iter().copied().filter(|v| *v <= detected).max()
}
