//! campaign-sites main entry point
//!
//! This is the command-line interface for the campaign website scraper.

use anyhow::Context;
use campaign_sites::config::{load_config_with_hash, Config};
use campaign_sites::crawler::crawl;
use campaign_sites::output::print_statistics;
use campaign_sites::Category;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// campaign-sites: collect candidate campaign websites per state
///
/// Walks the house and senate index pages, scrapes every state page they
/// link to, and writes the party-tagged candidates with their website links
/// to a JSON document. Runs with built-in defaults when given no arguments.
#[derive(Parser, Debug)]
#[command(name = "campaign-sites")]
#[command(version)]
#[command(about = "Collect candidate campaign websites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the output JSON path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.json_path = output.display().to_string();
    }

    if cli.dry_run {
        handle_dry_run(&config)
    } else {
        handle_crawl(&config, cli.quiet).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("campaign_sites=info,warn"),
            1 => EnvFilter::new("campaign_sites=debug,info"),
            2 => EnvFilter::new("campaign_sites=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    campaign_sites::config::validate(config).context("Invalid configuration")?;

    let base = url::Url::parse(&config.site.base_url)?;

    println!("=== campaign-sites Dry Run ===\n");

    println!("Index Pages:");
    for category in Category::ALL {
        let page = match category {
            Category::House => &config.site.house_index,
            Category::Senate => &config.site.senate_index,
        };
        println!("  {}: {}", category, base.join(page)?);
    }

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nCrawler:");
    println!(
        "  Request interval: {}ms",
        config.crawler.request_interval_ms
    );
    println!("  Timeout: {}s", config.crawler.timeout_secs);
    println!("  Party marker: ({})", config.crawler.party);

    println!("\nOutput:");
    println!("  JSON: {}", config.output.json_path);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    campaign_sites::config::validate(config).context("Invalid configuration")?;
    tracing::info!("Starting crawl of {}", config.site.base_url);

    let report = match crawl(config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    if !quiet {
        println!();
        print_statistics(&report);
    }

    Ok(())
}
