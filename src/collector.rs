//! Harvest driver: page through the directory, acquire logos, accumulate.

use crate::config::Config;
use crate::directory::DirectoryClient;
use crate::error::Result;
use crate::images::ImageStore;
use crate::models::CatalogEntry;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

pub struct Collector {
    directory: DirectoryClient,
    images: ImageStore,
    page_size: usize,
    target_count: usize,
}

impl Collector {
    pub fn new(config: &Config) -> Self {
        Self {
            directory: DirectoryClient::new(&config.directory),
            images: ImageStore::new(&config.storage),
            page_size: config.directory.page_size,
            target_count: config.directory.target_count,
        }
    }

    /// Page through the directory accumulating catalog entries until the
    /// target count is reached or the directory runs dry.
    ///
    /// A record is accepted only when it has a non-blank name, a stream URL,
    /// and a favicon that actually downloads; everything else is skipped
    /// silently. A failed page fetch aborts the whole run.
    pub async fn collect(&self) -> Result<Vec<CatalogEntry>> {
        let mut catalog: Vec<CatalogEntry> = Vec::new();
        let mut offset = 0;

        let pb = ProgressBar::new(self.target_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        while catalog.len() < self.target_count {
            info!("🔄 Fetching stations {} to {}...", offset, offset + self.page_size);
            let stations = self.directory.search_page(offset).await?;

            if stations.is_empty() {
                break;
            }

            for station in &stations {
                let name = station.display_name();
                if name.is_empty() || station.url_resolved.is_empty() {
                    continue;
                }

                let Some(logo) = self.images.fetch_and_store(&station.favicon, name).await else {
                    continue;
                };

                catalog.push(CatalogEntry::from_station(station, logo));
                pb.inc(1);
                pb.set_message(name.to_string());
                info!("✅ Added: {}", name);

                if catalog.len() >= self.target_count {
                    break;
                }
            }

            offset += self.page_size;
        }

        pb.finish_and_clear();
        Ok(catalog)
    }
}

/// Serialize the accumulated catalog, pretty-printed, in one shot.
pub async fn write_catalog(entries: &[CatalogEntry], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    tokio::fs::write(path, json).await?;
    info!("✅ DONE: Saved {} stations to {}", entries.len(), path.display());
    Ok(())
}
