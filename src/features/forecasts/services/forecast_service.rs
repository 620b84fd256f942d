use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::forecasts::clients::{Geocoder, MarineWeatherClient};
use crate::features::forecasts::dtos::ForecastResponseDto;
use crate::features::forecasts::models::{Coordinates, ForecastPayload};
use crate::features::forecasts::services::cache_store::{CacheStore, StoreError};
use crate::features::forecasts::services::coordinate_resolver::CoordinateResolver;

/// Service answering forecast requests from cache or from Stormglass
///
/// Flow: forecast cache hit returns immediately with no coordinates; on a
/// miss the place name is resolved, the provider is called, and the result
/// is cached before returning it with the resolved coordinates.
///
/// There is no per-key in-flight deduplication. Concurrent misses for the
/// same key both call the providers and the losing insert is ignored.
pub struct ForecastService {
    store: Arc<dyn CacheStore>,
    resolver: CoordinateResolver,
    weather: Arc<dyn MarineWeatherClient>,
}

impl ForecastService {
    pub fn new(
        store: Arc<dyn CacheStore>,
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn MarineWeatherClient>,
    ) -> Self {
        Self {
            resolver: CoordinateResolver::new(Arc::clone(&store), geocoder),
            store,
            weather,
        }
    }

    pub async fn submit_forecast_request(
        &self,
        location: &str,
        date: &str,
    ) -> Result<ForecastResponseDto> {
        if let Some(cached) = self.store.get_forecast(location, date).await? {
            tracing::debug!("Serving cached forecast for {:?} @ {}", location, date);
            return Ok(ForecastResponseDto::cached(location, date, cached));
        }

        let coords = self.resolver.resolve(location).await?.ok_or_else(|| {
            AppError::BadRequest(format!("Could not find coordinates for {}", location))
        })?;

        let payload = self.fetch_forecast(coords, location, date).await?;

        Ok(ForecastResponseDto::fresh(location, date, coords, payload))
    }

    /// Fetch from the provider and write the result through to the cache.
    async fn fetch_forecast(
        &self,
        coords: Coordinates,
        location: &str,
        date: &str,
    ) -> Result<ForecastPayload> {
        let payload = self
            .weather
            .point_forecast(coords)
            .await?
            .into_first_hour_payload()?;

        match self.store.put_forecast(location, date, &payload).await {
            Ok(()) => {}
            Err(StoreError::Duplicate(key)) => {
                tracing::debug!("Forecast already cached by a concurrent request: {}", key);
            }
            Err(e) => return Err(AppError::Internal(e.to_string())),
        }

        Ok(payload)
    }
}
