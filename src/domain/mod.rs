mod date_range;
mod review;
mod source;
pub(crate) mod storage;

pub use date_range::DateRange;
pub use review::Review;
pub use source::Source;

pub use review::{ANONYMOUS, NO_DESCRIPTION, NO_RATING, NO_TITLE, UNKNOWN_DATE};
