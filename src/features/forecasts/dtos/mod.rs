mod forecast_dto;

pub use forecast_dto::{ForecastRequestDto, ForecastResponseDto};
