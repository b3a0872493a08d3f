use crate::domain::{DateRange, Review};
use tracing::debug;

/// Keeps reviews dated inside `range`, preserving order. A review whose date
/// text does not parse is dropped whatever it says.
pub fn filter_by_date(reviews: Vec<Review>, range: &DateRange) -> Vec<Review> {
    let total = reviews.len();

    let kept: Vec<Review> = reviews
        .into_iter()
        .filter(|review| match review.parsed_date() {
            Some(date) => range.contains(date),
            None => {
                debug!("Dropping review {:?}: unparseable date {:?}", review.title, review.date);
                false
            }
        })
        .collect();

    debug!("{} of {} reviews fall inside {:?}", kept.len(), total, range);
    kept
}
