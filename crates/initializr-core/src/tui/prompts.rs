//! Charm-style CLI form using cliclack

use crate::catalog::{check_compatibility, BuildTool, Catalog, CatalogFetcher, Language};
use crate::links;
use crate::product::ProductConfig;
use crate::resolver::{Notice, Resolver};
use crate::runtime::check;
use crate::selection::{apply_update, apply_updates, SelectionFlags, StarterConfig, Update};
use anyhow::Result;

/// CLI arguments for the pick command
#[derive(Debug, Clone, Default)]
pub struct PickArgs {
    /// Catalog file or URL overriding the builtin support table
    pub catalog: Option<String>,

    /// Pre-answered form fields
    pub selection: SelectionFlags,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Open the resolved link in the browser without asking
    pub open: bool,
}

impl PickArgs {
    fn answered(&self, field: Field) -> bool {
        self.yes
            || match field {
                Field::Version => self.selection.version.is_some(),
                Field::Java => self.selection.java.is_some(),
                Field::Language => self.selection.language.is_some(),
                Field::Build => self.selection.build.is_some(),
                Field::Architecture => self.selection.architecture.is_some(),
            }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Version,
    Java,
    Language,
    Build,
    Architecture,
}

/// An option of a form group
struct Choice<T> {
    value: T,
    label: String,
    enabled: bool,
}

/// Run the picker with interactive prompts
pub async fn run<C: ProductConfig>(product: &C, args: PickArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(product.display_name())?;

    // Step 1: Load the support catalog
    let catalog = load_catalog(product, &args).await?;

    if let Some(required) = &catalog.min_cli_version {
        if let Some(warning) =
            check_compatibility(cli_version, required, product.upgrade_command())
        {
            cliclack::log::warning(format!(
                "Version warning: {}",
                warning.lines().next().unwrap_or(&warning)
            ))?;
        }
    }

    // Step 2: Detect the local Java runtime (advisory only)
    let detected = detect_java()?;
    let suggested_java =
        detected.and_then(|major| check::pick_java_version(&catalog.java_versions, major));

    // Step 3: Apply pre-answered fields, then fill in the rest
    let mut config = apply_updates(&catalog, &catalog.defaults, args.selection.updates());

    let discarded = args.selection.discarded(&config);
    if !discarded.is_empty() {
        for violation in &discarded {
            cliclack::log::error(violation.to_string())?;
        }
        anyhow::bail!("The requested combination is not supported.");
    }

    config = select_version(&catalog, config, &args)?;
    config = select_java(&catalog, config, &args, suggested_java)?;
    config = select_language(&catalog, config, &args)?;
    config = select_build(&catalog, config, &args)?;
    config = select_architecture(&catalog, config, &args)?;

    // Step 4: Reject anything the form could not correct
    let resolver = Resolver::new(&catalog, &config);
    let mut violations = args.selection.discarded(&config);
    violations.extend(resolver.violations());
    if !violations.is_empty() {
        for violation in &violations {
            cliclack::log::error(violation.to_string())?;
        }
        anyhow::bail!("The selected combination is not supported.");
    }

    if let Some(major) = detected {
        if let Some(minimum) = resolver.minimum_runtime_for(&config.version) {
            if major < minimum {
                cliclack::log::warning(format!(
                    "Installed Java {} is older than the Java {} required by {} {}",
                    major, minimum, catalog.product, config.version
                ))?;
            }
        }
    }

    // Step 5: Resolve and present the link
    let Some(link) = published_link(&catalog, &config) else {
        cliclack::log::warning("No starter is published for this combination.")?;
        cliclack::outro("Pick another combination or check the catalog's download links.")?;
        return Ok(());
    };
    show_link(&link, &args)?;

    // Step 6: Show next steps
    print_next_steps(product, &config, &link)?;

    Ok(())
}

/// Resolved link, or `None` when the catalog has no starter for the selection
fn published_link(catalog: &Catalog, config: &StarterConfig) -> Option<String> {
    let link = catalog.download_links.resolve(config);
    (!links::is_placeholder(&link)).then_some(link)
}

async fn load_catalog<C: ProductConfig>(product: &C, args: &PickArgs) -> Result<Catalog> {
    let fetcher = CatalogFetcher::from_config(product, args.catalog.as_deref())?;

    let spinner = cliclack::spinner();
    spinner.start("Loading catalog...");

    match fetcher.fetch().await {
        Ok(catalog) => {
            spinner.stop(format!("Using {}", fetcher.source().describe()));
            for problem in catalog.lint() {
                cliclack::log::warning(problem)?;
            }
            Ok(catalog)
        }
        Err(e) => {
            spinner.stop("Failed to load catalog");
            Err(e)
        }
    }
}

fn detect_java() -> Result<Option<u32>> {
    let info = check::check_java();

    if info.available {
        cliclack::log::info(format!(
            "Detected {} ({})",
            info.name,
            info.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::remark("No Java runtime found on PATH")?;
    }

    Ok(info.major)
}

fn select_version(
    catalog: &Catalog,
    config: StarterConfig,
    args: &PickArgs,
) -> Result<StarterConfig> {
    if args.answered(Field::Version) {
        cliclack::log::info(format!(
            "Version: {}",
            catalog.version_label(&config.version)
        ))?;
        return Ok(config);
    }

    let resolver = Resolver::new(catalog, &config);
    let choices = catalog
        .versions
        .iter()
        .map(|v| Choice {
            value: v.value.clone(),
            label: v.label().to_string(),
            enabled: resolver.is_version_supported(&v.value),
        })
        .collect();

    let version = choose(
        &format!("{} version", catalog.product),
        choices,
        &config.version,
        None,
    )?;
    Ok(apply_update(catalog, &config, Update::Version(version)))
}

fn select_java(
    catalog: &Catalog,
    config: StarterConfig,
    args: &PickArgs,
    suggested: Option<u32>,
) -> Result<StarterConfig> {
    if args.answered(Field::Java) {
        cliclack::log::info(format!("Java: {}", config.java))?;
        return Ok(config);
    }

    let resolver = Resolver::new(catalog, &config);
    let choices = catalog
        .java_versions
        .iter()
        .map(|java| Choice {
            value: *java,
            label: format!("Java {}", java),
            enabled: resolver.is_runtime_supported(*java),
        })
        .collect();

    let java = choose("Java version", choices, &config.java, suggested.as_ref())?;
    Ok(apply_update(catalog, &config, Update::Java(java)))
}

fn select_language(
    catalog: &Catalog,
    config: StarterConfig,
    args: &PickArgs,
) -> Result<StarterConfig> {
    let config = if args.answered(Field::Language) {
        cliclack::log::info(format!("Language: {}", config.language))?;
        config
    } else {
        let resolver = Resolver::new(catalog, &config);
        let choices = Language::ALL
            .iter()
            .map(|l| Choice {
                value: *l,
                label: l.display_name().to_string(),
                enabled: resolver.is_language_supported(*l),
            })
            .collect();

        let language = choose("Language", choices, &config.language, None)?;
        apply_update(catalog, &config, Update::Language(language))
    };

    show_language_notices(catalog, &config)?;
    Ok(config)
}

fn select_build(
    catalog: &Catalog,
    config: StarterConfig,
    args: &PickArgs,
) -> Result<StarterConfig> {
    if args.answered(Field::Build) {
        cliclack::log::info(format!("Build tool: {}", config.build))?;
        return Ok(config);
    }

    let resolver = Resolver::new(catalog, &config);
    let choices = BuildTool::ALL
        .iter()
        .map(|b| Choice {
            value: *b,
            label: b.display_name().to_string(),
            enabled: resolver.is_build_supported(*b),
        })
        .collect();

    let build = choose("Build tool", choices, &config.build, None)?;
    Ok(apply_update(catalog, &config, Update::Build(build)))
}

fn select_architecture(
    catalog: &Catalog,
    config: StarterConfig,
    args: &PickArgs,
) -> Result<StarterConfig> {
    let config = if args.answered(Field::Architecture) {
        cliclack::log::info(format!("Architecture: {}", config.architecture))?;
        config
    } else {
        let resolver = Resolver::new(catalog, &config);
        let choices = catalog
            .architectures
            .iter()
            .map(|a| Choice {
                value: *a,
                label: a.display_name().to_string(),
                enabled: resolver.is_architecture_supported(*a),
            })
            .collect();

        let architecture = choose("Architecture", choices, &config.architecture, None)?;
        apply_update(catalog, &config, Update::Architecture(architecture))
    };

    for notice in Resolver::new(catalog, &config).notices() {
        if let Notice::PartialArchitectureSupport { .. } = notice {
            cliclack::log::remark(notice)?;
        }
    }

    Ok(config)
}

fn show_language_notices(catalog: &Catalog, config: &StarterConfig) -> Result<()> {
    for notice in Resolver::new(catalog, config).notices() {
        match notice {
            Notice::LanguageUnsupported { .. } => cliclack::log::warning(notice)?,
            Notice::CommunityAddon { .. } => cliclack::log::remark(notice)?,
            Notice::PartialArchitectureSupport { .. } => {}
        }
    }

    Ok(())
}

/// Prompt for one group, offering only enabled choices
fn choose<T: Clone + Eq>(
    prompt: &str,
    choices: Vec<Choice<T>>,
    current: &T,
    preferred: Option<&T>,
) -> Result<T> {
    let (enabled, disabled): (Vec<_>, Vec<_>) = choices.into_iter().partition(|c| c.enabled);

    if !disabled.is_empty() {
        let names: Vec<&str> = disabled.iter().map(|c| c.label.as_str()).collect();
        cliclack::log::remark(format!(
            "{} unavailable for this selection: {}",
            prompt,
            names.join(", ")
        ))?;
    }

    // If only one choice, use it automatically
    if let [only] = enabled.as_slice() {
        cliclack::log::info(format!("{}: {}", prompt, only.label))?;
        return Ok(only.value.clone());
    }

    if enabled.is_empty() {
        anyhow::bail!("No {} is available for this selection.", prompt.to_lowercase());
    }

    let offered = |value: &T| enabled.iter().any(|c| &c.value == value);
    let initial = preferred
        .filter(|v| offered(*v))
        .or_else(|| offered(current).then_some(current))
        .cloned();

    let mut select = cliclack::select(prompt);
    for choice in &enabled {
        select = select.item(choice.value.clone(), &choice.label, "");
    }
    if let Some(value) = initial {
        select = select.initial_value(value);
    }

    Ok(select.interact()?)
}

fn show_link(link: &str, args: &PickArgs) -> Result<()> {
    cliclack::note("Download starter", link)?;

    let open = if args.open {
        true
    } else if args.yes {
        false
    } else {
        cliclack::confirm("Open the download link in your browser?")
            .initial_value(false)
            .interact()?
    };

    if open {
        links::open_in_browser(link)?;
        cliclack::log::success("Opened in your browser")?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    product: &C,
    config: &StarterConfig,
    link: &str,
) -> Result<()> {
    let steps = product.next_steps(config, link);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
