use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Display format review sites use for dates, e.g. `Mar 05, 2023`.
pub const REVIEW_DATE_FORMAT: &str = "%b %d, %Y";

// chrono alone lets the spaces match nothing and `%Y` take any digit count.
static DISPLAY_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3}\s+\d{1,2},\s+\d{4}$").unwrap());

pub const NO_TITLE: &str = "No Title";
pub const NO_DESCRIPTION: &str = "No Description";
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const NO_RATING: &str = "No Rating";
pub const ANONYMOUS: &str = "Anonymous";

/// One review as it appeared on the page. Every field is kept verbatim;
/// a field whose element was missing holds its sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    pub description: String,
    pub date: String,
    pub reviewer: String,
    pub rating: String,
}

impl Default for Review {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            date: UNKNOWN_DATE.to_string(),
            reviewer: ANONYMOUS.to_string(),
            rating: NO_RATING.to_string(),
        }
    }
}

impl Review {
    /// Calendar date of the review, or `None` when the displayed text does
    /// not match [`REVIEW_DATE_FORMAT`].
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        if !DISPLAY_DATE_SHAPE.is_match(&self.date) {
            return None;
        }
        NaiveDate::parse_from_str(&self.date, REVIEW_DATE_FORMAT).ok()
    }
}
