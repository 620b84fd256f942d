use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::forecasts::handlers;
use crate::features::forecasts::services::ForecastService;

/// Create routes for the forecasts feature
pub fn routes(service: Arc<ForecastService>) -> Router {
    Router::new()
        .route("/forecast", post(handlers::submit_forecast_request))
        .with_state(service)
}
