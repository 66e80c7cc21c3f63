//! Radio-browser directory API client.

use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::models::RawStation;
use crate::utils::HttpClient;
use tracing::debug;

pub struct DirectoryClient {
    http_client: HttpClient,
    config: DirectoryConfig,
}

impl DirectoryClient {
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            config: config.clone(),
        }
    }

    /// Fetch one page of stations for the configured tag, ordered by click
    /// count descending, broken stations filtered server-side.
    ///
    /// An empty page means the directory is exhausted. Errors are fatal to
    /// the run and propagate.
    pub async fn search_page(&self, offset: usize) -> Result<Vec<RawStation>> {
        let url = format!("{}/json/stations/search", self.config.base_url);
        let offset_str = offset.to_string();
        let limit_str = self.config.page_size.to_string();

        let stations: Vec<RawStation> = self
            .http_client
            .get_json(
                &url,
                &[
                    ("offset", offset_str.as_str()),
                    ("limit", limit_str.as_str()),
                    ("tagList", self.config.tag.as_str()),
                    ("hidebroken", "true"),
                    ("order", "clickcount"),
                    ("reverse", "true"),
                ],
            )
            .await?;

        debug!(
            "Directory page at offset {}: {} stations",
            offset,
            stations.len()
        );
        Ok(stations)
    }
}
