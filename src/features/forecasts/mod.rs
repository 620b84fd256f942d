//! Surf forecasts by place name and date.
//!
//! Place names are geocoded through Nominatim and forecasts fetched from
//! Stormglass; both lookups are cached in SQLite and never refreshed.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/forecast` | No | Get wave height, wind speed and water temperature |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::{NominatimGeocoder, StormglassClient};
pub use services::{CacheStore, ForecastService, SqliteCacheStore};
