use sqlx::FromRow;

/// Resolved latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Database model for the `locations` cache table
#[derive(Debug, Clone, FromRow)]
pub struct LocationCoordinate {
    pub location: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<LocationCoordinate> for Coordinates {
    fn from(row: LocationCoordinate) -> Self {
        Self {
            lat: row.lat,
            lng: row.lng,
        }
    }
}
