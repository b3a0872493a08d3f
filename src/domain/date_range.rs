use crate::error::{ReviewError, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Format callers use for the range bounds.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

static INPUT_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap());

/// Inclusive calendar range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            warn!("Start date {start} is after end date {end}; no review can match");
        }
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_input_date(start)?, parse_input_date(end)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn parse_input_date(raw: &str) -> Result<NaiveDate> {
    if !INPUT_DATE_SHAPE.is_match(raw) {
        return Err(ReviewError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
        .map_err(|_| ReviewError::InvalidDate(raw.to_string()))
}
