use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub directory: DirectoryConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub tag: String,
    pub page_size: usize,
    pub target_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub image_dir: String,
    pub catalog_path: String,
    pub public_base_url: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            directory: DirectoryConfig {
                base_url: "https://fi1.api.radio-browser.info".to_string(),
                tag: "christian".to_string(),
                page_size: 500,
                target_count: 200,
            },
            storage: StorageConfig {
                image_dir: "logos".to_string(),
                catalog_path: "stations.json".to_string(),
                public_base_url: "https://www.eternityready.com/radio/img/".to_string(),
            },
        }
    }
}
