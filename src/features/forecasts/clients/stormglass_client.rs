use async_trait::async_trait;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::config::StormglassConfig;
use crate::core::error::AppError;
use crate::features::forecasts::models::{Coordinates, ForecastPayload};
use crate::shared::constants::{STORMGLASS_PARAMS, STORMGLASS_SOURCE};

#[derive(Debug, Error)]
pub enum MarineWeatherError {
    /// Provider answered with a non-success status; `body` is the raw text.
    #[error("Stormglass API error: {body}")]
    Status { status: u16, body: String },

    #[error("Stormglass request failed: {0}")]
    Request(String),

    #[error("Failed to decode Stormglass response: {0}")]
    Decode(String),
}

impl From<MarineWeatherError> for AppError {
    fn from(err: MarineWeatherError) -> Self {
        let message = err.to_string();
        match err {
            MarineWeatherError::Status { status, .. } => AppError::Upstream {
                status: StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message,
            },
            _ => AppError::Internal(message),
        }
    }
}

/// Point marine-weather lookup
#[async_trait]
pub trait MarineWeatherClient: Send + Sync {
    async fn point_forecast(
        &self,
        coords: Coordinates,
    ) -> Result<StormglassResponse, MarineWeatherError>;
}

/// Response body of `GET /v2/weather/point`
#[derive(Debug, Clone, Deserialize)]
pub struct StormglassResponse {
    #[serde(default)]
    pub hours: Vec<StormglassHour>,
    pub meta: Value,
}

/// One hourly bucket; each parameter maps source name to value
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StormglassHour {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub wave_height: Option<SourceValues>,
    #[serde(default)]
    pub wind_speed: Option<SourceValues>,
    #[serde(default)]
    pub water_temperature: Option<SourceValues>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceValues {
    #[serde(default)]
    pub noaa: Option<f64>,
}

fn noaa_value(values: &Option<SourceValues>, param: &str) -> Result<f64, MarineWeatherError> {
    values
        .as_ref()
        .and_then(|v| v.noaa)
        .ok_or_else(|| {
            MarineWeatherError::Decode(format!(
                "missing hours[0].{}.{}",
                param, STORMGLASS_SOURCE
            ))
        })
}

impl StormglassResponse {
    /// Build the forecast payload from the first hourly bucket.
    pub fn into_first_hour_payload(self) -> Result<ForecastPayload, MarineWeatherError> {
        let first = self.hours.first().ok_or_else(|| {
            MarineWeatherError::Decode("response contains no hourly data".to_string())
        })?;
        tracing::debug!("Using first hourly bucket: time={:?}", first.time);

        Ok(ForecastPayload {
            wave_height: noaa_value(&first.wave_height, "waveHeight")?,
            wind_speed: noaa_value(&first.wind_speed, "windSpeed")?,
            water_temperature: noaa_value(&first.water_temperature, "waterTemperature")?,
            meta: self.meta,
        })
    }
}

/// Stormglass point-weather API client
///
/// No request timeout is configured; a hung provider holds the request open.
pub struct StormglassClient {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl StormglassClient {
    pub fn new(config: StormglassConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: config.api_key,
            api_url: config.api_url,
        }
    }
}

#[async_trait]
impl MarineWeatherClient for StormglassClient {
    async fn point_forecast(
        &self,
        coords: Coordinates,
    ) -> Result<StormglassResponse, MarineWeatherError> {
        tracing::debug!(
            "Fetching Stormglass point forecast: lat={}, lng={}",
            coords.lat,
            coords.lng
        );

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("lat", coords.lat.to_string()),
                ("lng", coords.lng.to_string()),
                ("params", STORMGLASS_PARAMS.to_string()),
                ("source", STORMGLASS_SOURCE.to_string()),
            ])
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Stormglass request failed: {:?}", e);
                MarineWeatherError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarineWeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<StormglassResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse Stormglass response: {:?}", e);
            MarineWeatherError::Decode(e.to_string())
        })
    }
}
