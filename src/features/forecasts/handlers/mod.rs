mod forecast_handler;

pub use forecast_handler::*;
