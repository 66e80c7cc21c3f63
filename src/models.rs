use serde::{Deserialize, Serialize};

/// Fixed rating assigned to every catalog entry.
pub const STATION_RATING: u32 = 4;

/// Category used when a station reports no tags.
pub const DEFAULT_GENRE: &str = "Christian";

/// Station record as returned by the radio-browser search endpoint.
///
/// The API omits fields freely, so everything defaults to the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url_resolved: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub country: String,
}

impl RawStation {
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    /// First comma-delimited tag token, falling back to the default genre.
    pub fn genre(&self) -> String {
        self.tags
            .split(',')
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .unwrap_or_else(|| DEFAULT_GENRE.to_string())
    }

    pub fn country_or_unknown(&self) -> &str {
        if self.country.is_empty() {
            "Unknown"
        } else {
            &self.country
        }
    }
}

/// One accepted station in the output catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub src: String,
    pub logo: String,
    pub tags: Vec<String>,
    pub rating: u32,
    pub categories: Vec<String>,
}

impl CatalogEntry {
    /// Build an entry from an accepted station and its stored logo reference.
    pub fn from_station(station: &RawStation, logo: String) -> Self {
        Self {
            name: station.display_name().to_string(),
            description: format!(
                "Christian radio station from {}.",
                station.country_or_unknown()
            ),
            src: station.url_resolved.clone(),
            logo,
            // Reserved slots, currently always empty.
            tags: vec![String::new(), String::new()],
            rating: STATION_RATING,
            categories: vec![station.genre()],
        }
    }
}
