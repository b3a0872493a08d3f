use crate::config::cli::Args;
use crate::config::Config;
use crate::domain::storage::Storage;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, PageFetcher};
use crate::services::{ReviewService, ScrapeRequest, ScrapingService};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::new(args)?;

    let store: Arc<dyn Storage> = Arc::new(FileSystemStore::new(&config.args.output_dir));
    let scraping = ScrapingService::new(
        PageFetcher::new(config.http_client.clone()),
        config.profiles.clone(),
    );
    let service = ReviewService::new(store, scraping);

    let request = ScrapeRequest {
        company: config.args.company.clone(),
        start_date: config.args.start_date.clone(),
        end_date: config.args.end_date.clone(),
        source: config.args.source.clone(),
    };

    // Failed runs are reported, not turned into an exit status.
    match service.run(&request).await {
        Ok(report) => info!(
            "Scraping completed: {} reviews in {}",
            report.reviews,
            report.path.display()
        ),
        Err(e) => error!("Error: {}", e),
    }

    Ok(())
}
