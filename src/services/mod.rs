pub(crate) mod filtering;
pub(crate) mod review_service;
pub(crate) mod scraping;

pub use review_service::{ReviewService, ScrapeRequest};
pub use scraping::ScrapingService;
