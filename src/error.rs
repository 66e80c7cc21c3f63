use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Scraping error: {0}")]
    Scraping(String),
}

impl HarvestError {
    pub fn scraping(msg: impl Into<String>) -> Self {
        Self::Scraping(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
