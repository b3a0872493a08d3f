mod fetcher;
mod scrapers;
mod storage;

pub use fetcher::PageFetcher;
pub use scrapers::ReviewExtractor;
pub use storage::fs_store::FileSystemStore;
