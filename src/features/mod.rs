pub mod forecasts;
