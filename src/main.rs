//! Title-Sweep main entry point
//!
//! This is the command-line interface for the Title-Sweep bulk title fetcher.

use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use title_sweep::config::{load_config, validate, Config, Overrides};
use title_sweep::crawler::{Dispatcher, TitleFetcher};
use title_sweep::input::read_url_list;
use title_sweep::output::{print_summary, summarize, write_csv_report};
use tracing_subscriber::EnvFilter;

/// Title-Sweep: fetch the HTML title of many URLs
///
/// Fetches every URL concurrently with a bounded number of workers and writes
/// one CSV row per URL, in input order, with its title, domain, status and
/// error.
#[derive(Parser, Debug)]
#[command(name = "title-sweep")]
#[command(version)]
#[command(about = "Fetch page titles for many URLs", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
struct Cli {
    /// A single URL to fetch
    #[arg(short, long)]
    url: Option<String>,

    /// Text file with one URL per line (blank lines are ignored)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// CSV report path [default: url_titles.csv]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of concurrent fetches [default: 10]
    #[arg(short, long)]
    workers: Option<usize>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // The returned error is printed once, by the anyhow report on exit
    run(cli).await?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("title_sweep=info,warn"),
            1 => EnvFilter::new("title_sweep=debug,info"),
            2 => EnvFilter::new("title_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads, fetches and reports
async fn run(cli: Cli) -> title_sweep::Result<()> {
    let config = load_settings(&cli)?;
    let urls = acquire_urls(&cli)?;

    if urls.is_empty() {
        tracing::warn!("No URLs to process");
    }

    let fetcher = TitleFetcher::from_config(&config.fetch)?;
    tracing::debug!(
        "Fetching with {} workers, {}s timeout",
        config.fetch.workers,
        config.fetch.timeout_secs
    );

    println!("Processing {} URLs...", urls.len());
    let records = Dispatcher::new(fetcher, config.fetch.workers)
        .run(&urls)
        .await;

    print_summary(&summarize(&records));

    let output_path = Path::new(&config.output.path);
    write_csv_report(&records, output_path)?;
    println!("Results saved to {}", output_path.display());

    Ok(())
}

/// Builds the effective configuration: file (if any), then CLI overrides
fn load_settings(cli: &Cli) -> title_sweep::Result<Config> {
    let base = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let config = base.with_overrides(Overrides {
        workers: cli.workers,
        timeout_secs: cli.timeout,
        output_path: cli
            .output
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
    });
    validate(&config)?;

    Ok(config)
}

/// Returns the URLs to fetch from `--url` or `--file`
fn acquire_urls(cli: &Cli) -> title_sweep::Result<Vec<String>> {
    if let Some(url) = &cli.url {
        return Ok(vec![url.trim().to_string()]);
    }

    match &cli.file {
        Some(path) => {
            let urls = read_url_list(path)?;
            tracing::info!("Read {} URLs from {}", urls.len(), path.display());
            Ok(urls)
        }
        // clap enforces that one of the two is present
        None => Ok(Vec::new()),
    }
}
