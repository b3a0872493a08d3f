use crate::domain::Source;
use crate::error::{ReviewError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Product page both built-in profiles request. The company argument is not
/// part of the URL.
pub const DEFAULT_REVIEWS_URL: &str =
    "https://www.g2.com/products/salesforce-salesforce-sales-cloud/video-reviews";

/// Where to fetch reviews for a source and how to find them in the page.
/// Every selector is a plain `tag.class` CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceProfile {
    pub url: String,
    pub container_selector: String,
    pub title_selector: String,
    pub description_selector: String,
    pub date_selector: String,
    pub rating_selector: String,
    pub reviewer_selector: String,
}

impl SourceProfile {
    pub fn builtin(source: Source) -> Self {
        match source {
            Source::G2 => Self {
                url: DEFAULT_REVIEWS_URL.to_string(),
                container_selector: "div.review__content".to_string(),
                title_selector: "h2.review__title".to_string(),
                description_selector: "div.review__description".to_string(),
                date_selector: "span.review__date".to_string(),
                rating_selector: "span.star-rating__value".to_string(),
                reviewer_selector: "span.user__name".to_string(),
            },
            Source::Capterra => Self {
                url: DEFAULT_REVIEWS_URL.to_string(),
                container_selector: "div.review-card".to_string(),
                title_selector: "h4.review-title".to_string(),
                description_selector: "p.review-body".to_string(),
                date_selector: "span.review-date".to_string(),
                rating_selector: "span.rating-stars".to_string(),
                reviewer_selector: "span.reviewer-name".to_string(),
            },
        }
    }
}

/// Profiles for every supported source.
#[derive(Debug, Clone)]
pub struct SourceProfiles {
    profiles: HashMap<Source, SourceProfile>,
}

impl Default for SourceProfiles {
    fn default() -> Self {
        Self {
            profiles: Source::ALL
                .iter()
                .map(|&source| (source, SourceProfile::builtin(source)))
                .collect(),
        }
    }
}

impl SourceProfiles {
    pub fn get(&self, source: Source) -> &SourceProfile {
        // Every variant is inserted by `default`, overrides only replace.
        &self.profiles[&source]
    }

    pub fn with_profile(mut self, source: Source, profile: SourceProfile) -> Self {
        self.profiles.insert(source, profile);
        self
    }

    /// Applies overrides from a JSON object keyed by source name, e.g.
    /// `{"capterra": {"url": "...", "container_selector": "...", ...}}`.
    pub fn with_overrides_from_str(mut self, json: &str) -> Result<Self> {
        let overrides: HashMap<String, SourceProfile> = serde_json::from_str(json)?;

        for (name, profile) in overrides {
            let source: Source = name.parse().map_err(|_| {
                ReviewError::Other(format!("Unknown source {name:?} in sources file"))
            })?;
            info!("Overriding {} profile ({})", source, profile.url);
            self = self.with_profile(source, profile);
        }

        Ok(self)
    }

    pub fn with_overrides_from_file(self, path: &Path) -> Result<Self> {
        info!("Loading source profiles from {:?}", path);
        self.with_overrides_from_str(&std::fs::read_to_string(path)?)
    }
}
