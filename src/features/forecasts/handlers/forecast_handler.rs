use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::forecasts::dtos::{ForecastRequestDto, ForecastResponseDto};
use crate::features::forecasts::services::ForecastService;
use crate::shared::types::ApiResponse;

/// Get the surf forecast for a place and date
///
/// Served from the local cache when this (location, date) pair was fetched
/// before; cached responses carry `null` latitude/longitude.
///
/// A location longer than 255 characters or a date that is not a real
/// `YYYY-MM-DD` day is rejected with 400 before any cache or geocoder lookup.
#[utoipa::path(
    post,
    path = "/forecast",
    request_body = ForecastRequestDto,
    responses(
        (status = 200, description = "Forecast found", body = ApiResponse<ForecastResponseDto>),
        (status = 400, description = "Invalid request or location could not be geocoded"),
        (status = 500, description = "Unexpected failure while fetching the forecast")
    ),
    tag = "forecasts"
)]
pub async fn submit_forecast_request(
    State(service): State<Arc<ForecastService>>,
    AppJson(dto): AppJson<ForecastRequestDto>,
) -> Result<Json<ApiResponse<ForecastResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let forecast = service
        .submit_forecast_request(&dto.location, &dto.date)
        .await?;

    Ok(Json(ApiResponse::success(Some(forecast), None, None)))
}
