/// Marine parameters requested from Stormglass, in request order
pub const STORMGLASS_PARAMS: &str = "waveHeight,windSpeed,waterTemperature";

/// Upstream data source whose values are read from each hourly bucket
pub const STORMGLASS_SOURCE: &str = "noaa";

/// Date format for forecast requests and cache keys
pub const FORECAST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum accepted length of a place name
pub const MAX_LOCATION_LENGTH: u64 = 255;
