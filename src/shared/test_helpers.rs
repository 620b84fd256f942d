//! In-memory fakes for the forecast collaborators.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::features::forecasts::clients::nominatim_geocoder::GeocodeError;
use crate::features::forecasts::clients::stormglass_client::{
    MarineWeatherError, StormglassResponse,
};
use crate::features::forecasts::clients::{Geocoder, MarineWeatherClient};
use crate::features::forecasts::models::{Coordinates, ForecastPayload};
use crate::features::forecasts::services::cache_store::{CacheStore, StoreError};

/// Insert-only map-backed store with the same uniqueness contract as SQLite
#[derive(Default)]
pub struct InMemoryCacheStore {
    coordinates: Mutex<HashMap<String, Coordinates>>,
    forecasts: Mutex<HashMap<(String, String), ForecastPayload>>,
    duplicate_coordinate_inserts: AtomicBool,
    failing_coordinate_inserts: AtomicBool,
    duplicate_forecast_inserts: AtomicBool,
}

impl InMemoryCacheStore {
    /// Make every coordinate insert fail as if a concurrent request won the race.
    pub fn fail_coordinate_inserts_as_duplicate(&self) {
        self.duplicate_coordinate_inserts.store(true, Ordering::SeqCst);
    }

    /// Make every coordinate insert fail with a database error.
    pub fn fail_coordinate_inserts(&self) {
        self.failing_coordinate_inserts.store(true, Ordering::SeqCst);
    }

    /// Make every forecast insert fail as if a concurrent request won the race.
    pub fn fail_forecast_inserts_as_duplicate(&self) {
        self.duplicate_forecast_inserts.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get_coordinates(&self, location: &str) -> Result<Option<Coordinates>, StoreError> {
        Ok(self.coordinates.lock().unwrap().get(location).copied())
    }

    async fn put_coordinates(
        &self,
        location: &str,
        coords: Coordinates,
    ) -> Result<(), StoreError> {
        if self.failing_coordinate_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        let mut map = self.coordinates.lock().unwrap();
        if self.duplicate_coordinate_inserts.load(Ordering::SeqCst) || map.contains_key(location) {
            return Err(StoreError::Duplicate(location.to_string()));
        }
        map.insert(location.to_string(), coords);
        Ok(())
    }

    async fn get_forecast(
        &self,
        location: &str,
        date: &str,
    ) -> Result<Option<ForecastPayload>, StoreError> {
        let key = (location.to_string(), date.to_string());
        Ok(self.forecasts.lock().unwrap().get(&key).cloned())
    }

    async fn put_forecast(
        &self,
        location: &str,
        date: &str,
        payload: &ForecastPayload,
    ) -> Result<(), StoreError> {
        let key = (location.to_string(), date.to_string());
        let mut map = self.forecasts.lock().unwrap();
        if self.duplicate_forecast_inserts.load(Ordering::SeqCst) || map.contains_key(&key) {
            return Err(StoreError::Duplicate(format!("{} @ {}", location, date)));
        }
        map.insert(key, payload.clone());
        Ok(())
    }
}

enum GeocodeOutcome {
    Found(Coordinates),
    NotFound,
    Fail,
}

/// Geocoder with a fixed answer that counts its calls
pub struct FakeGeocoder {
    outcome: GeocodeOutcome,
    calls: AtomicUsize,
}

impl FakeGeocoder {
    fn with(outcome: GeocodeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn found(coords: Coordinates) -> Self {
        Self::with(GeocodeOutcome::Found(coords))
    }

    pub fn not_found() -> Self {
        Self::with(GeocodeOutcome::NotFound)
    }

    pub fn failing() -> Self {
        Self::with(GeocodeOutcome::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            GeocodeOutcome::Found(coords) => Ok(Some(*coords)),
            GeocodeOutcome::NotFound => Ok(None),
            GeocodeOutcome::Fail => Err(GeocodeError::Status(500)),
        }
    }
}

enum WeatherOutcome {
    Respond(StormglassResponse),
    Status(u16, String),
    Unreachable(String),
}

/// Marine weather client with a fixed answer that counts its calls
pub struct FakeMarineWeather {
    outcome: WeatherOutcome,
    calls: AtomicUsize,
}

impl FakeMarineWeather {
    fn with(outcome: WeatherOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn responding(response: StormglassResponse) -> Self {
        Self::with(WeatherOutcome::Respond(response))
    }

    pub fn failing_with_status(status: u16, body: &str) -> Self {
        Self::with(WeatherOutcome::Status(status, body.to_string()))
    }

    pub fn unreachable(reason: &str) -> Self {
        Self::with(WeatherOutcome::Unreachable(reason.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarineWeatherClient for FakeMarineWeather {
    async fn point_forecast(
        &self,
        _coords: Coordinates,
    ) -> Result<StormglassResponse, MarineWeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            WeatherOutcome::Respond(response) => Ok(response.clone()),
            WeatherOutcome::Status(status, body) => Err(MarineWeatherError::Status {
                status: *status,
                body: body.clone(),
            }),
            WeatherOutcome::Unreachable(reason) => Err(MarineWeatherError::Request(reason.clone())),
        }
    }
}

/// Stormglass body for Malibu on 2024-06-01
pub fn malibu_stormglass_response() -> StormglassResponse {
    serde_json::from_value(json!({
        "hours": [
            {
                "time": "2024-06-01T00:00:00+00:00",
                "waveHeight": {"noaa": 1.2},
                "windSpeed": {"noaa": 5.4},
                "waterTemperature": {"noaa": 18.3}
            }
        ],
        "meta": {
            "cost": 1,
            "dailyQuota": 10,
            "lat": 34.0259,
            "lng": -118.7798,
            "params": ["waveHeight", "windSpeed", "waterTemperature"],
            "requestCount": 1
        }
    }))
    .unwrap()
}
