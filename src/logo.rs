//! Homepage scraping fallback for stations without a usable favicon.

use crate::error::{HarvestError, Result};
use crate::images::ImageStore;
use crate::utils::HttpClient;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

const HOMEPAGE_TIMEOUT: Duration = Duration::from_secs(15);

pub struct LogoResolver {
    http_client: HttpClient,
}

impl LogoResolver {
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
        }
    }

    /// Scrape `homepage` for a logo image and store it under the station
    /// name. Returns the public reference path, or `None` when the homepage
    /// is missing, unreachable, or carries no recognizable logo. Nothing
    /// here propagates; every failure is absorbed to the sentinel.
    pub async fn resolve(
        &self,
        store: &ImageStore,
        homepage: &str,
        station_name: &str,
    ) -> Option<String> {
        if homepage.is_empty() {
            return None;
        }

        match self.extract_logo_url(homepage).await {
            Ok(logo_url) => {
                info!("🧲 Logo found for {}: {}", station_name, logo_url);
                store.fetch_and_store(logo_url.as_str(), station_name).await
            }
            Err(HarvestError::Scraping(_)) => {
                warn!("⚠️ No <img> logo candidate found for {}", station_name);
                None
            }
            Err(e) => {
                warn!(
                    "❌ Failed logo extraction for {} from {}: {}",
                    station_name, homepage, e
                );
                None
            }
        }
    }

    async fn extract_logo_url(&self, homepage: &str) -> Result<Url> {
        let (html, final_homepage) = self.fetch_homepage(homepage).await?;

        let src = find_logo_src(&html)
            .ok_or_else(|| HarvestError::scraping("no <img> logo candidate"))?;

        let base = Url::parse(&final_homepage)?;
        Ok(base.join(&src)?)
    }

    /// Fetch the homepage, downgrading https to plain http on failure.
    /// The downgrade fires at most once; plain-http failures propagate.
    async fn fetch_homepage(&self, homepage: &str) -> Result<(String, String)> {
        let mut final_homepage = if homepage.starts_with("http") {
            homepage.to_string()
        } else {
            format!("http://{}", homepage)
        };

        match self
            .http_client
            .get_text(&final_homepage, HOMEPAGE_TIMEOUT)
            .await
        {
            Ok(html) => Ok((html, final_homepage)),
            Err(e) => {
                if final_homepage.starts_with("https://") {
                    final_homepage = final_homepage.replacen("https://", "http://", 1);
                    warn!("🔁 Retrying over HTTP: {}", final_homepage);
                    let html = self
                        .http_client
                        .get_text(&final_homepage, HOMEPAGE_TIMEOUT)
                        .await?;
                    Ok((html, final_homepage))
                } else {
                    Err(e)
                }
            }
        }
    }
}

impl Default for LogoResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// First `<img>` in document order whose `src` contains "logo",
/// case-insensitively.
fn find_logo_src(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img").unwrap();

    document.select(&selector).find_map(|img| {
        let src = img.value().attr("src")?;
        if src.to_lowercase().contains("logo") {
            Some(src.to_string())
        } else {
            None
        }
    })
}
