use crate::config::cli::Args;
use crate::config::sources::SourceProfiles;
use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;
pub(crate) mod sources;

/// Browser User-Agent sent with every page request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct Config {
    pub args: Args,
    pub profiles: SourceProfiles,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let profiles = match &args.sources_file {
            Some(path) => SourceProfiles::default().with_overrides_from_file(path)?,
            None => SourceProfiles::default(),
        };

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if args.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(args.timeout_secs));
        }
        let http_client = builder.build()?;

        info!("Configuration loaded, output dir {:?}", args.output_dir);
        Ok(Self {
            args,
            profiles,
            http_client,
        })
    }
}
