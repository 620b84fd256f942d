use utoipa::{Modify, OpenApi};

use crate::features::forecasts::{dtos as forecasts_dtos, handlers as forecasts_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Forecasts (public)
        forecasts_handlers::submit_forecast_request,
    ),
    components(
        schemas(
            // Forecasts
            forecasts_dtos::ForecastRequestDto,
            forecasts_dtos::ForecastResponseDto,
            ApiResponse<forecasts_dtos::ForecastResponseDto>,
        )
    ),
    tags(
        (name = "forecasts", description = "Surf forecasts by place name and date (public)"),
    ),
    info(
        title = "Surf Forecast API",
        version = "0.1.0",
        description = "Cached surf forecasts by place name and date",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
