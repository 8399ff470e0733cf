//! Plain-text compatibility matrix

use crate::catalog::{BuildTool, Catalog, Language};
use colored::Colorize;

/// One framework version's line in the matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub label: String,
    pub java_min: Option<u32>,
    pub languages: Vec<&'static str>,
    pub builds: Vec<&'static str>,
    /// (architecture label, supported) in catalog order
    pub architectures: Vec<(&'static str, bool)>,
}

/// Build matrix rows in the catalog's version order
pub fn matrix_rows(catalog: &Catalog) -> Vec<MatrixRow> {
    catalog
        .versions
        .iter()
        .map(|option| {
            let support = catalog.support_for(&option.value);

            MatrixRow {
                label: option.label().to_string(),
                java_min: support.map(|s| s.java_min),
                languages: Language::ALL
                    .iter()
                    .filter(|l| support.is_some_and(|s| s.supports_language(**l)))
                    .map(|l| l.display_name())
                    .collect(),
                builds: BuildTool::ALL
                    .iter()
                    .filter(|b| support.is_some_and(|s| s.supports_build(**b)))
                    .map(|b| b.display_name())
                    .collect(),
                architectures: catalog
                    .architectures
                    .iter()
                    .map(|a| {
                        (
                            a.display_name(),
                            support.is_some_and(|s| s.supports_architecture(*a)),
                        )
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Print the compatibility matrix to stdout
pub fn print_matrix(catalog: &Catalog) {
    println!(
        "{}",
        format!("{} compatibility", catalog.product).cyan().bold()
    );
    println!();

    for row in matrix_rows(catalog) {
        let java = match row.java_min {
            Some(min) => format!("Java {}+", min),
            None => "no support data".red().to_string(),
        };
        println!("  {} {} ({})", "->".blue(), row.label.bold(), java);

        if row.java_min.is_none() {
            continue;
        }

        println!("     {:<14}{}", "Languages:", row.languages.join(", "));
        println!("     {:<14}{}", "Build tools:", row.builds.join(", "));

        let architectures: Vec<String> = row
            .architectures
            .iter()
            .map(|(name, supported)| {
                if *supported {
                    name.green().to_string()
                } else {
                    name.dimmed().strikethrough().to_string()
                }
            })
            .collect();
        println!("     {:<14}{}", "Architectures:", architectures.join(", "));
    }

    println!();
    println!(
        "{} Gradle starters exist for Spring Boot and Servlet only; Kotlin starters use Maven and Spring Boot.",
        "Note:".yellow()
    );
}
