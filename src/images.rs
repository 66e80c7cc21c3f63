//! Logo image download and local persistence.

use crate::config::StorageConfig;
use crate::error::Result;
use crate::utils::HttpClient;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Downloads station images into a local cache directory and hands back the
/// public-facing reference path under which they will later be served.
pub struct ImageStore {
    http_client: HttpClient,
    dir: PathBuf,
    public_base_url: String,
}

impl ImageStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            dir: PathBuf::from(&config.image_dir),
            public_base_url: config.public_base_url.clone(),
        }
    }

    /// Download `source_url` and store it as `{base_name}{ext}` in the image
    /// directory, overwriting any colliding file.
    ///
    /// Returns the public reference path, or `None` when either input is
    /// empty (no image source to try) or the download fails. Failures are
    /// absorbed here; the caller only ever sees the sentinel.
    pub async fn fetch_and_store(&self, source_url: &str, base_name: &str) -> Option<String> {
        if source_url.is_empty() || base_name.is_empty() {
            return None;
        }

        match self.download(source_url, base_name).await {
            Ok(reference) => Some(reference),
            Err(e) => {
                warn!("⚠️ Failed image download for {}: {}", base_name, e);
                None
            }
        }
    }

    async fn download(&self, source_url: &str, base_name: &str) -> Result<String> {
        let ext = extension_for(source_url)?;
        let file_name = format!("{}{}", sanitize_filename(base_name), ext);

        let data = self.http_client.get_bytes(source_url).await?;

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&file_name), &data).await?;
        debug!("Stored image {} ({} bytes)", file_name, data.len());

        Ok(format!("{}{}", self.public_base_url, file_name))
    }
}

/// Extension of the URL's path component, query string excluded.
/// Defaults to `.png` when the path carries none.
fn extension_for(source_url: &str) -> Result<String> {
    let parsed = Url::parse(source_url)?;
    let ext = Path::new(parsed.path())
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_else(|| ".png".to_string());
    Ok(ext)
}

/// Replace filesystem-hostile characters so any station name yields a
/// storable file name.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches('.')
        .trim_matches(' ')
        .to_string()
}
