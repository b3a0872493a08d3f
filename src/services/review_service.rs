use crate::domain::storage::Storage;
use crate::domain::{DateRange, Source};
use crate::error::Result;
use crate::services::scraping::ScrapingService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Raw caller input for one run. Nothing here has been validated yet.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeReport {
    pub path: PathBuf,
    pub reviews: usize,
}

pub struct ReviewService {
    store: Arc<dyn Storage>,
    scraping: ScrapingService,
}

impl ReviewService {
    pub fn new(store: Arc<dyn Storage + 'static>, scraping: ScrapingService) -> Self {
        Self { store, scraping }
    }

    /// Validates the request, scrapes the selected source and writes the
    /// matching reviews to `<company>_reviews.json`. Nothing is written when
    /// any step fails.
    pub async fn run(&self, request: &ScrapeRequest) -> Result<ScrapeReport> {
        let source: Source = request.source.parse()?;
        let range = DateRange::parse(&request.start_date, &request.end_date)?;

        info!(
            "Scraping {} reviews for {} between {} and {}",
            source, request.company, range.start, range.end
        );
        let reviews = self.scraping.scrape(source, &range).await?;

        let path = self.store.save_reviews(&request.company, &reviews)?;
        info!("Reviews saved to {}", path.display());

        Ok(ScrapeReport {
            path,
            reviews: reviews.len(),
        })
    }
}
