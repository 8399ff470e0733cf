//! Runtime detection
//!
//! Detects the local Java runtime so the form can preselect a Java version
//! and warn when it is too old for the chosen framework version.

pub mod check;

pub use check::{check_java, parse_java_major, pick_java_version, RuntimeInfo};
