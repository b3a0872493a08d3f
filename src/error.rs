use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Invalid date format. Please use YYYY-MM-DD. (got {0:?})")]
    InvalidDate(String),
    #[error("Unsupported source {0:?}. Please choose either 'G2' or 'Capterra'.")]
    UnsupportedSource(String),
    #[error("Unable to fetch data from {url}: HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
