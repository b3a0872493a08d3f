use crate::error::ReviewError;
use std::fmt;
use std::str::FromStr;

/// Review platform to scrape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Source {
    #[default]
    G2,
    Capterra,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::G2, Source::Capterra];
}

impl FromStr for Source {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "g2" => Ok(Source::G2),
            "capterra" => Ok(Source::Capterra),
            _ => Err(ReviewError::UnsupportedSource(s.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::G2 => write!(f, "G2"),
            Source::Capterra => write!(f, "Capterra"),
        }
    }
}
