mod config;
mod error;
mod location;
mod net;
mod sheet;
mod temples;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use config::Settings;
use location::{LocationStandardizer, OpenAiPlaceClassifier};
use net::Fetcher;
use temples::classifier::TempleClassifier;
use temples::trawell::TempleScraper;
use temples::{fallback, karnataka, TempleRecord};

#[derive(Parser)]
#[command(name = "temple_scraper", about = "Temple listings scraper and location standardizer")]
struct Cli {
    /// TOML settings file (default: temple_scraper.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Heuristically extract temples from the trawell.in pilgrimages article
    Trawell {
        #[arg(long)]
        url: Option<String>,
        /// Output sheet (.xlsx, .csv or .tsv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Scrape temple cards from the Karnataka tourism listing and their detail pages
    Karnataka {
        #[arg(long)]
        url: Option<String>,
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Max detail pages to visit
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Reduce the `location` column of a sheet to standard place names
    Standardize {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    let result = match cli.command {
        Commands::Trawell { url, out } => {
            let url = url.unwrap_or_else(|| settings.trawell_url.clone());
            let out = out.unwrap_or_else(|| PathBuf::from(&settings.trawell_output));
            run_trawell(&settings, &url, &out)
        }
        Commands::Karnataka { url, out, limit } => {
            let url = url.unwrap_or_else(|| settings.karnataka_url.clone());
            let out = out.unwrap_or_else(|| PathBuf::from(&settings.karnataka_output));
            run_karnataka(&settings, &url, &out, limit)
        }
        Commands::Standardize { input, out } => {
            let input = input.unwrap_or_else(|| PathBuf::from(&settings.locations_input));
            let out = out.unwrap_or_else(|| PathBuf::from(&settings.locations_output));
            run_standardize(&settings, &input, &out)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    result
}

fn run_trawell(settings: &Settings, url: &str, out: &Path) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(settings)?;
    let html = fetcher
        .fetch_html(url)
        .with_context(|| format!("Failed to fetch webpage {}", url))?;

    let scraper = TempleScraper::new(
        TempleClassifier::default(),
        fallback::records(fallback::TRAWELL_TAMIL_NADU),
    );
    let outcome = scraper.scrape(&html);
    if outcome.used_fallback {
        println!("No temples found on the page; using the curated list.");
    }
    println!("Found {} temples", outcome.records.len());

    println!("\nFirst few temples found:");
    for (i, t) in outcome.records.iter().take(3).enumerate() {
        println!("{}. {}", i + 1, t.name);
        println!("   Description: {}...\n", truncate(&t.description, 100));
    }

    write_records(&outcome.records, "Description", out)?;
    println!("Summary:");
    println!("  Total temples extracted: {}", outcome.records.len());
    println!("  Output file: {}", out.display());
    println!("  Columns: Temple Name, Description");
    Ok(())
}

fn run_karnataka(
    settings: &Settings,
    url: &str,
    out: &Path,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let fetcher = Fetcher::new(settings)?;
    println!("Fetching list of temples from the main page...");
    let records = karnataka::scrape(&fetcher, url, limit)
        .with_context(|| format!("Failed to scrape listing {}", url))?;
    println!("Scraped {} temples.", records.len());
    write_records(&records, "Information", out)
}

fn run_standardize(settings: &Settings, input: &Path, out: &Path) -> anyhow::Result<()> {
    let sheet = sheet::read_sheet(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    println!("Loaded {} rows from {}", sheet.rows.len(), input.display());

    let classifier = OpenAiPlaceClassifier::from_env(settings)?;
    if !classifier.has_api_key() {
        error!("OPENAI_API_KEY is not set; every location will map to {}", location::UNKNOWN);
    }

    let standardized = LocationStandardizer::new(&classifier)
        .with_progress(true)
        .standardize_sheet(sheet)?;
    sheet::write_sheet(out, &standardized)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Standardized file saved to: {}", out.display());
    Ok(())
}

fn write_records(records: &[TempleRecord], info_header: &str, out: &Path) -> anyhow::Result<()> {
    let sheet = temples::to_sheet(records, info_header);
    sheet::write_sheet(out, &sheet).with_context(|| format!("Failed to write {}", out.display()))?;
    info!(rows = records.len(), path = %out.display(), "Saved sheet");
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
