use crate::error::{ReviewError, Result};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

/// Single-shot page download. No retries; anything but `200 OK` fails the fetch.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Unable to fetch data from {}: {}", url, status);
            return Err(ReviewError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
