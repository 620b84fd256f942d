pub mod nominatim_geocoder;
pub mod stormglass_client;

pub use nominatim_geocoder::{Geocoder, NominatimGeocoder};
pub use stormglass_client::{MarineWeatherClient, StormglassClient};
