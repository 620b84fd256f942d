use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::core::config::GeocoderConfig;
use crate::features::forecasts::models::Coordinates;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(String),

    #[error("Geocoder returned status {0}")]
    Status(u16),

    #[error("Failed to parse geocoding response: {0}")]
    Parse(String),
}

/// Free-text address to coordinates lookup
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the provider has no match for the address.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

/// Nominatim search result; only the fields we use
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

impl NominatimResult {
    fn coordinates(&self) -> Result<Coordinates, GeocodeError> {
        let lat = self
            .lat
            .parse::<f64>()
            .map_err(|e| GeocodeError::Parse(format!("lat {:?}: {}", self.lat, e)))?;
        let lng = self
            .lon
            .parse::<f64>()
            .map_err(|e| GeocodeError::Parse(format!("lon {:?}: {}", self.lon, e)))?;
        Ok(Coordinates { lat, lng })
    }
}

/// Geocoder backed by the OpenStreetMap Nominatim search API
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn search_url(&self, address: &str) -> String {
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(address)
        )
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = self.search_url(address);
        tracing::debug!("Geocoding (free-form): {} -> {}", address, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        results
            .into_iter()
            .next()
            .map(|r| r.coordinates())
            .transpose()
    }
}
