use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::forecasts::models::{Coordinates, ForecastPayload};
use crate::shared::constants::MAX_LOCATION_LENGTH;
use crate::shared::validation::validate_forecast_date;

/// Request DTO for a surf forecast
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForecastRequestDto {
    /// Free-text place name, used verbatim as the cache key
    #[validate(length(
        min = 1,
        max = MAX_LOCATION_LENGTH,
        message = "Location must be 1-255 characters"
    ))]
    #[schema(example = "Malibu, CA")]
    pub location: String,

    /// Forecast date in `YYYY-MM-DD` form
    #[validate(custom(function = "validate_forecast_date"))]
    #[schema(example = "2024-06-01")]
    pub date: String,
}

/// Response DTO for a surf forecast
///
/// `latitude`/`longitude` are `null` when the forecast came from the cache.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponseDto {
    pub location: String,
    pub date: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wave_height: f64,
    pub wind_speed: f64,
    pub water_temperature: f64,
    /// Provider metadata, passed through unchanged
    #[schema(value_type = Object)]
    pub meta: Value,
}

impl ForecastResponseDto {
    /// Response for a forecast served from the cache; coordinates are not re-resolved.
    pub fn cached(location: &str, date: &str, payload: ForecastPayload) -> Self {
        Self::build(location, date, None, payload)
    }

    /// Response for a freshly fetched forecast.
    pub fn fresh(location: &str, date: &str, coords: Coordinates, payload: ForecastPayload) -> Self {
        Self::build(location, date, Some(coords), payload)
    }

    fn build(
        location: &str,
        date: &str,
        coords: Option<Coordinates>,
        payload: ForecastPayload,
    ) -> Self {
        Self {
            location: location.to_string(),
            date: date.to_string(),
            latitude: coords.map(|c| c.lat),
            longitude: coords.map(|c| c.lng),
            wave_height: payload.wave_height,
            wind_speed: payload.wind_speed,
            water_temperature: payload.water_temperature,
            meta: payload.meta,
        }
    }
}
