use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::core::error::AppError;
use crate::features::forecasts::models::{
    Coordinates, ForecastPayload, ForecastRecord, LocationCoordinate,
};

/// Errors surfaced by a cache store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row already exists for the key; rows are never overwritten.
    #[error("Cache entry already exists: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to (de)serialize forecast metadata: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => AppError::Database(e),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Durable cache of resolved coordinates and fetched forecasts.
///
/// Keys are used verbatim. Entries are insert-only: a second `put_*` for an
/// existing key fails with [`StoreError::Duplicate`].
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get_coordinates(&self, location: &str) -> Result<Option<Coordinates>, StoreError>;

    async fn put_coordinates(&self, location: &str, coords: Coordinates)
        -> Result<(), StoreError>;

    async fn get_forecast(
        &self,
        location: &str,
        date: &str,
    ) -> Result<Option<ForecastPayload>, StoreError>;

    async fn put_forecast(
        &self,
        location: &str,
        date: &str,
        payload: &ForecastPayload,
    ) -> Result<(), StoreError>;
}

/// SQLite-backed cache store
///
/// Every call checks out its own pooled connection and runs one
/// autocommitted statement.
pub struct SqliteCacheStore {
    pool: SqlitePool,
}

impl SqliteCacheStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error, key: String) -> StoreError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::Duplicate(key),
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn get_coordinates(&self, location: &str) -> Result<Option<Coordinates>, StoreError> {
        let row = sqlx::query_as::<_, LocationCoordinate>(
            "SELECT location, lat, lng FROM locations WHERE location = ?",
        )
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| {
            tracing::debug!("Coordinate cache hit: {}", r.location);
            r.into()
        }))
    }

    async fn put_coordinates(
        &self,
        location: &str,
        coords: Coordinates,
    ) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO locations (location, lat, lng) VALUES (?, ?, ?)")
            .bind(location)
            .bind(coords.lat)
            .bind(coords.lng)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, location.to_string()))?;

        tracing::info!(
            "Coordinates cached: location={:?}, lat={}, lng={}",
            location,
            coords.lat,
            coords.lng
        );
        Ok(())
    }

    async fn get_forecast(
        &self,
        location: &str,
        date: &str,
    ) -> Result<Option<ForecastPayload>, StoreError> {
        let row = sqlx::query_as::<_, ForecastRecord>(
            r#"
            SELECT location, date, wave_height, wind_speed, water_temperature, meta
            FROM forecasts
            WHERE location = ? AND date = ?
            "#,
        )
        .bind(location)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(record) => {
                tracing::debug!("Forecast cache hit: {} @ {}", record.location, record.date);
                Ok(Some(ForecastPayload::try_from(record)?))
            }
            None => Ok(None),
        }
    }

    async fn put_forecast(
        &self,
        location: &str,
        date: &str,
        payload: &ForecastPayload,
    ) -> Result<(), StoreError> {
        let meta = serde_json::to_string(&payload.meta)?;

        sqlx::query(
            r#"
            INSERT INTO forecasts (location, date, wave_height, wind_speed, water_temperature, meta)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(location)
        .bind(date)
        .bind(payload.wave_height)
        .bind(payload.wind_speed)
        .bind(payload.water_temperature)
        .bind(meta)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, format!("{} @ {}", location, date)))?;

        tracing::info!("Forecast cached: location={:?}, date={}", location, date);
        Ok(())
    }
}
