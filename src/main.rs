//! sbom-tree: render SBOM dependency trees
//!
//! Reads a `CycloneDX` or SPDX JSON document and draws its dependency
//! graph as an ASCII tree, a Graphviz DOT graph, an interactive HTML page,
//! or a JSON tree.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_tree::{
    cli,
    config::{self, AppConfig},
    error::SbomTreeError,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  CycloneDX: JSON (components, nested components, dependencies)",
        "\n  SPDX:      JSON (packages, files, relationships)",
        "\n\nOutput Formats:",
        "\n  ascii, dot, html, json"
    )
}

#[derive(Parser)]
#[command(name = "sbom-tree")]
#[command(version, long_version = build_long_version())]
#[command(about = "Render SBOM dependency trees", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Unexpected error (e.g. output could not be written)
    2  Input file unreadable or not valid JSON
    3  JSON is neither CycloneDX nor SPDX
    4  No roots found to render
    5  Invalid configuration (e.g. HTML without --output)

EXAMPLES:
    # Print the dependency tree of a CycloneDX document
    sbom-tree render bom.cdx.json

    # Start from a specific component, two levels deep
    sbom-tree render bom.cdx.json --root pkg:npm/app@1.0.0 --max-depth 2

    # Graphviz output
    sbom-tree render sbom.spdx.json -f dot -o deps.dot

    # Interactive HTML (requires an output file)
    sbom-tree render sbom.spdx.json -f html -o deps.html")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `render` subcommand
#[derive(Parser)]
struct RenderArgs {
    /// Path to the SBOM JSON file
    sbom: PathBuf,

    /// Output format (default: ascii, or the config file's value)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Output file path (stdout if not specified; required for html)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Root node id to render from (repeatable)
    #[arg(long = "root", value_name = "ID")]
    roots: Vec<String>,

    /// Append node ids to labels
    #[arg(long)]
    show_ids: bool,

    /// Maximum depth to render (roots are depth 0)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Fully expand repeated subtrees instead of marking them "(seen)"
    #[arg(long)]
    include_dupes: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dependency tree of an SBOM
    Render(RenderArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-tree.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered trees on stdout stay clean
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::Render(args) => {
            let overrides = AppConfig::builder()
                .roots(args.roots)
                .show_ids(args.show_ids)
                .max_depth(args.max_depth)
                .include_dupes(args.include_dupes)
                .output_file(args.output)
                .build();
            let (config, loaded_from) = AppConfig::from_file_with_overrides(
                cli.config.as_deref(),
                &overrides,
                args.format,
            );
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            match cli::run_render(&args.sbom, &config, cli.quiet) {
                Ok(code) => {
                    if code != exit_codes::SUCCESS {
                        std::process::exit(code);
                    }
                    Ok(())
                }
                Err(err) => {
                    let code = err
                        .downcast_ref::<SbomTreeError>()
                        .map_or(exit_codes::ERROR, SbomTreeError::exit_code);
                    eprintln!("Error: {err:#}");
                    std::process::exit(code);
                }
            }
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-tree", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema =
                config::generate_json_schema().context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sbom-tree.yaml");
                config::write_example_config(&target)
                    .with_context(|| format!("failed to initialize {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
