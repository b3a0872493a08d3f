use crate::config::sources::SourceProfile;
use crate::domain::{Review, ANONYMOUS, NO_DESCRIPTION, NO_RATING, NO_TITLE, UNKNOWN_DATE};
use crate::error::{ReviewError, Result};
use scraper::{ElementRef, Html, Selector};

pub struct Selectors {
    pub container: Selector,
    pub title: Selector,
    pub description: Selector,
    pub date: Selector,
    pub rating: Selector,
    pub reviewer: Selector,
}

impl Selectors {
    pub fn new(profile: &SourceProfile) -> Result<Self> {
        Ok(Self {
            container: parse(&profile.container_selector)?,
            title: parse(&profile.title_selector)?,
            description: parse(&profile.description_selector)?,
            date: parse(&profile.date_selector)?,
            rating: parse(&profile.rating_selector)?,
            reviewer: parse(&profile.reviewer_selector)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ReviewError::Selector(format!("{selector}: {e}")))
}

/// Pulls review records out of a page using one source's selectors.
pub struct ReviewExtractor {
    selectors: Selectors,
}

impl ReviewExtractor {
    pub fn new(profile: &SourceProfile) -> Result<Self> {
        Ok(Self {
            selectors: Selectors::new(profile)?,
        })
    }

    /// Returns one review per container, in document order. Missing fields
    /// get their sentinel and never skip the container.
    pub fn extract(&self, html: &str) -> Vec<Review> {
        let document = Html::parse_document(html);

        document
            .select(&self.selectors.container)
            .map(|container| Review {
                title: field_text(container, &self.selectors.title, NO_TITLE),
                description: field_text(container, &self.selectors.description, NO_DESCRIPTION),
                date: field_text(container, &self.selectors.date, UNKNOWN_DATE),
                reviewer: field_text(container, &self.selectors.reviewer, ANONYMOUS),
                rating: field_text(container, &self.selectors.rating, NO_RATING),
            })
            .collect()
    }
}

fn field_text(container: ElementRef<'_>, selector: &Selector, sentinel: &str) -> String {
    container
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| sentinel.to_string())
}
