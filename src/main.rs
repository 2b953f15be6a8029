//! Folio-Loom main entry point
//!
//! This is the command-line interface for the Folio-Loom content hydrator.

use anyhow::Context;
use clap::Parser;
use folio_loom::config::load_config_with_hash;
use folio_loom::content::ContentKind;
use folio_loom::output::{generate_markdown_summary, print_summary, HydrationSummary};
use folio_loom::Hydrator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Folio-Loom: a portfolio content hydrator
///
/// Folio-Loom fetches the site's content documents, parses them into
/// records, and substitutes fixed fallback content whenever live content
/// is unavailable, so every section always has something to render.
#[derive(Parser, Debug)]
#[command(name = "folio-loom")]
#[command(version = "1.0.0")]
#[command(about = "A portfolio content hydrator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Hydrate only one content kind (timeline, education, projects)
    #[arg(long, value_name = "KIND")]
    kind: Option<String>,

    /// Language substituted into {lang} document paths
    #[arg(long, value_name = "LANG")]
    language: Option<String>,

    /// Validate config and show resolved document URLs without fetching
    #[arg(long, conflicts_with = "export_summary")]
    dry_run: bool,

    /// Write the markdown summary file after hydrating
    #[arg(long, conflicts_with = "dry_run")]
    export_summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    // Resolve the requested kinds up front
    let kinds = match &cli.kind {
        Some(name) => match ContentKind::from_str(name) {
            Some(kind) => vec![kind],
            None => {
                tracing::error!("Unknown content kind: {}", name);
                return Err(folio_loom::LoomError::UnknownKind(name.clone()).into());
            }
        },
        None => ContentKind::all_kinds(),
    };

    let hydrator = Hydrator::new(config)?;

    if cli.dry_run {
        handle_dry_run(&hydrator, &kinds, cli.language.as_deref())?;
    } else {
        handle_hydrate(
            &hydrator,
            &kinds,
            cli.language.as_deref(),
            cli.export_summary,
        )
        .await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("folio_loom=info,warn"),
            1 => EnvFilter::new("folio_loom=debug,info"),
            2 => EnvFilter::new("folio_loom=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be fetched
fn handle_dry_run(
    hydrator: &Hydrator,
    kinds: &[ContentKind],
    language: Option<&str>,
) -> anyhow::Result<()> {
    let config = hydrator.config();

    println!("=== Folio-Loom Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!(
        "  Default language: {}",
        config.site.default_language.as_deref().unwrap_or("(none)")
    );

    println!("\nClient:");
    println!(
        "  User agent: {}/{}",
        config.client.agent_name, config.client.agent_version
    );

    println!("\nDocuments:");
    for kind in kinds {
        match hydrator.resolve_document_url(*kind, language) {
            Ok(url) => println!("  {} -> {}", kind, url),
            Err(e) => println!("  {} -> unresolvable ({})", kind, e),
        }
    }

    println!("\nOutput:");
    println!("  Summary: {}", config.output.summary_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would hydrate {} section(s)", kinds.len());

    Ok(())
}

/// Handles the main hydrate operation
async fn handle_hydrate(
    hydrator: &Hydrator,
    kinds: &[ContentKind],
    language: Option<&str>,
    export_summary: bool,
) -> anyhow::Result<()> {
    for kind in kinds {
        tracing::info!("Hydrating {} section", kind);
        let records = hydrator.hydrate(*kind, language).await;
        tracing::info!("Section {} published {} record(s)", kind, records.len());
    }

    let summary = HydrationSummary::from_hydrator(hydrator);
    print_summary(&summary);

    if export_summary {
        let path = hydrator.config().output.summary_path.clone();
        generate_markdown_summary(&summary, std::path::Path::new(&path))?;
        println!("\n✓ Summary exported to: {}", path);
    }

    Ok(())
}
