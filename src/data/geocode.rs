use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{GeocodeResolution, Location};

const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Result cap for search-as-you-type suggestions.
pub const SUGGESTION_COUNT: usize = 5;
/// Queries shorter than this clear the suggestions without a request.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// Up to `count` places matching `name`. A response without results is an
    /// empty list, not an error.
    pub async fn search(&self, name: &str, count: usize) -> Result<Vec<Location>> {
        let count = count.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", name),
                ("count", count.as_str()),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodeResult::into_location)
            .collect())
    }

    pub async fn suggest(&self, query: &str) -> Result<Vec<Location>> {
        if query.trim().chars().count() < MIN_QUERY_CHARS {
            return Ok(Vec::new());
        }
        self.search(query.trim(), SUGGESTION_COUNT).await
    }

    /// First match for a free-text search.
    pub async fn resolve(&self, city: String) -> Result<GeocodeResolution> {
        let mut results = self.search(city.trim(), 1).await?;
        if results.is_empty() {
            return Ok(GeocodeResolution::NotFound(city));
        }
        Ok(GeocodeResolution::Selected(results.remove(0)))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    id: Option<u64>,
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
    timezone: Option<String>,
}

impl GeocodeResult {
    fn into_location(self) -> Location {
        Location {
            id: self.id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country,
            admin1: self.admin1,
            timezone: self.timezone,
        }
    }
}
