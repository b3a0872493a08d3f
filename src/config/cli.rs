use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Company identifier; names the output file `<company>_reviews.json`
    pub company: String,

    /// First day of the range to keep (YYYY-MM-DD, inclusive)
    pub start_date: String,

    /// Last day of the range to keep (YYYY-MM-DD, inclusive)
    pub end_date: String,

    /// Review platform to scrape (G2 or Capterra)
    #[arg(long, env = "REVIEW_SOURCE", default_value = "G2")]
    pub source: String,

    /// Directory the review file is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON file overriding the built-in source profiles
    #[arg(long)]
    pub sources_file: Option<PathBuf>,

    /// HTTP request timeout in seconds, 0 disables it
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
