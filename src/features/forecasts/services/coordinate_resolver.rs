use std::sync::Arc;

use crate::core::error::Result;
use crate::features::forecasts::clients::Geocoder;
use crate::features::forecasts::models::Coordinates;
use crate::features::forecasts::services::cache_store::{CacheStore, StoreError};

/// Cache-aside coordinate lookup in front of the geocoder
pub struct CoordinateResolver {
    store: Arc<dyn CacheStore>,
    geocoder: Arc<dyn Geocoder>,
}

impl CoordinateResolver {
    pub fn new(store: Arc<dyn CacheStore>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { store, geocoder }
    }

    /// Resolve a place name, consulting the cache first.
    ///
    /// Returns `Ok(None)` when the geocoder has no match *or* fails; callers
    /// cannot tell the two apart. Only a failed cache read is an error.
    pub async fn resolve(&self, location: &str) -> Result<Option<Coordinates>> {
        if let Some(coords) = self.store.get_coordinates(location).await? {
            return Ok(Some(coords));
        }

        tracing::debug!("Coordinate cache miss, geocoding: {:?}", location);

        let coords = match self.geocoder.geocode(location).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                tracing::info!("Geocoder found no match for {:?}", location);
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!("Geocoding {:?} failed: {}", location, e);
                return Ok(None);
            }
        };

        match self.store.put_coordinates(location, coords).await {
            Ok(()) => Ok(Some(coords)),
            // Lost a race with a concurrent request for the same name
            Err(StoreError::Duplicate(_)) => {
                tracing::debug!("Coordinates for {:?} already cached", location);
                Ok(Some(coords))
            }
            Err(e) => {
                tracing::warn!("Failed to cache coordinates for {:?}: {}", location, e);
                Ok(None)
            }
        }
    }
}
