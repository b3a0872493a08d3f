use super::Review;
use crate::error::Result;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn save_reviews(&self, company: &str, reviews: &[Review]) -> Result<PathBuf>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const REVIEWS_SUFFIX: &'static str = "_reviews";

    pub fn reviews(company: &str) -> String {
        format!("{}{}", company, Self::REVIEWS_SUFFIX)
    }
}
