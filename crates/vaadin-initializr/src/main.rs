//! Vaadin Initializr - pick a Vaadin Flow starter and get its download link

use anyhow::Result;
use clap::{Args as ClapArgs, CommandFactory, FromArgMatches, Parser, Subcommand};
use initializr_core::tui::PickArgs;
use initializr_core::{
    Architecture, BuildTool, Language, ProductConfig, SelectionFlags, StarterConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vaadin product configuration
#[derive(Clone)]
pub struct VaadinConfig;

impl ProductConfig for VaadinConfig {
    fn name(&self) -> &'static str {
        "vaadin-initializr"
    }

    fn display_name(&self) -> &'static str {
        "Vaadin Initializr"
    }

    fn catalog_env(&self) -> &'static str {
        "VAADIN_INITIALIZR_CATALOG"
    }

    fn docs_url(&self) -> &'static str {
        "https://vaadin.com/docs"
    }

    fn cli_description(&self) -> &'static str {
        "Pick a Vaadin Flow starter and get its download link"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install vaadin-initializr --force"
    }

    fn next_steps(&self, config: &StarterConfig, link: &str) -> Vec<String> {
        let mut steps = Vec::new();

        // Step 1: Fetch the archive
        steps.push(format!("Download {}", link));

        // Step 2: Unpack it
        steps.push("Unzip the archive and cd into the project directory".to_string());

        // Step 3: Run with the wrapper of the chosen build tool
        let run = match (config.build, config.architecture) {
            (BuildTool::Maven, _) => "./mvnw (mvnw.cmd on Windows)",
            (BuildTool::Gradle, Architecture::SpringBoot) => "./gradlew bootRun",
            (BuildTool::Gradle, _) => "./gradlew appRun",
        };
        steps.push(format!("Start the application: {}", run));

        // Step 4: Kotlin starters are community maintained
        if config.language == Language::Kotlin {
            steps.push("Check the starter's README for Kotlin specifics".to_string());
        }

        steps.push(format!("Read the docs: {}", self.docs_url()));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "vaadin-initializr")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Command definition with the product's description as help text
    pub fn command_for<C: ProductConfig>(product: &C) -> clap::Command {
        Self::command().about(product.cli_description())
    }

    pub fn parse_for<C: ProductConfig>(product: &C) -> Self {
        let matches = Self::command_for(product).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick a starter interactively (default)
    Pick(CliPickArgs),
    /// Print the download link for a selection without prompting
    Link(CliLinkArgs),
    /// Print the compatibility matrix
    Matrix(CatalogArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct CatalogArgs {
    /// Catalog file or URL to use instead of the builtin support table
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CliSelectionArgs {
    /// Vaadin Flow version (e.g. 24, 23, 14)
    #[arg(short, long = "flow-version", visible_alias = "vaadin")]
    pub version: Option<String>,

    /// Java version
    #[arg(short, long)]
    pub java: Option<u32>,

    /// Project language
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Build tool
    #[arg(short, long, value_enum)]
    pub build: Option<BuildTool>,

    /// Architecture
    #[arg(short, long = "arch", value_enum)]
    pub architecture: Option<Architecture>,
}

impl From<CliSelectionArgs> for SelectionFlags {
    fn from(args: CliSelectionArgs) -> Self {
        SelectionFlags {
            version: args.version,
            java: args.java,
            language: args.language,
            build: args.build,
            architecture: args.architecture,
        }
    }
}

#[derive(ClapArgs, Debug, Default)]
pub struct CliPickArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub selection: CliSelectionArgs,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Open the download link in the browser
    #[arg(long)]
    pub open: bool,
}

impl From<CliPickArgs> for PickArgs {
    fn from(args: CliPickArgs) -> Self {
        PickArgs {
            catalog: args.catalog.catalog,
            selection: args.selection.into(),
            yes: args.yes,
            open: args.open,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct CliLinkArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub selection: CliSelectionArgs,

    /// Open the download link in the browser
    #[arg(long)]
    pub open: bool,
}

/// Resolve a selection from flags and print only the link
async fn print_link(args: CliLinkArgs) -> Result<()> {
    let catalog =
        initializr_core::load_catalog(&VaadinConfig, args.catalog.catalog.as_deref()).await?;
    let flags: SelectionFlags = args.selection.into();
    let config = initializr_core::resolve_selection(&catalog, &flags)?;

    let link = catalog.download_links.resolve(&config);
    if initializr_core::links::is_placeholder(&link) {
        anyhow::bail!("No starter is published for this combination.");
    }

    println!("{}", link);

    if args.open {
        initializr_core::links::open_in_browser(&link)?;
    }

    Ok(())
}

async fn print_matrix(args: CatalogArgs) -> Result<()> {
    let catalog = initializr_core::load_catalog(&VaadinConfig, args.catalog.as_deref()).await?;
    initializr_core::report::print_matrix(&catalog);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr, silent unless RUST_LOG is set
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = VaadinConfig;
    let args = Args::parse_for(&config);

    match args.command {
        Some(Command::Link(link_args)) => print_link(link_args).await,
        Some(Command::Matrix(catalog_args)) => print_matrix(catalog_args).await,
        Some(Command::Pick(pick_args)) => run_picker(&config, pick_args.into()).await,
        // No subcommand provided, default to the interactive picker
        None => run_picker(&config, PickArgs::default()).await,
    }
}

async fn run_picker(config: &VaadinConfig, args: PickArgs) -> Result<()> {
    let result = initializr_core::run(config, args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
