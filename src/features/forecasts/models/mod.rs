mod forecast_record;
mod location_coordinate;

pub use forecast_record::{ForecastPayload, ForecastRecord};
pub use location_coordinate::{Coordinates, LocationCoordinate};
