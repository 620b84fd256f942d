pub mod cache_store;
mod coordinate_resolver;
mod forecast_service;

pub use cache_store::{CacheStore, SqliteCacheStore};
pub use forecast_service::ForecastService;
