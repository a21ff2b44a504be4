use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use scraping::get_product_image_url::{
    fetch_product_image_url, get_product_image_url, render_line, ImageLocator,
};
use utilities::build_client::build_client;
use utilities::init_logging::init_logging;

// Import modules
mod config;
mod error;
mod extractors;
mod scraping;
mod utilities;

const USAGE: &str = "Usage: goods_img_scrapping <product_page_url>";

/// Prints the main product image URL of a product page.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Product page to scrape
    product_page_url: Option<String>,

    /// Anything after the URL is accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// Settings file, skipped when missing
    #[arg(long, default_value = "Settings.toml")]
    config: String,

    /// Fall back to og:image and the best <img> when the selector finds nothing
    #[arg(long)]
    fallback: bool,

    /// Exit with status 2 when no image URL could be printed
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(page_url) = cli.product_page_url else {
        println!("{}", USAGE);
        return Ok(ExitCode::from(1));
    };

    init_logging();

    if !cli.ignored.is_empty() {
        debug!(ignored = ?cli.ignored, "Ignoring extra arguments");
    }

    // Load configuration settings
    let config = match config::load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    let client = build_client(&config.scraper).context("Failed to build HTTP client")?;
    let locator = ImageLocator::from_settings(&config.scraper)?
        .with_fallback(config.scraper.fallback || cli.fallback);

    info!(%page_url, "Looking up product image");

    if !cli.strict {
        println!("{}", get_product_image_url(&client, &locator, &page_url).await);
        return Ok(ExitCode::SUCCESS);
    }

    let result = fetch_product_image_url(&client, &locator, &page_url).await;
    let failed = result.is_err();
    println!("{}", render_line(&page_url, result));

    Ok(if failed { ExitCode::from(2) } else { ExitCode::SUCCESS })
}
