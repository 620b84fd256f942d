use serde_json::Value;
use sqlx::FromRow;

/// Forecast values for one (place name, date) pair plus provider metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPayload {
    pub wave_height: f64,
    pub wind_speed: f64,
    pub water_temperature: f64,
    pub meta: Value,
}

/// Database model for the `forecasts` cache table
///
/// `meta` holds the provider metadata serialized as JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct ForecastRecord {
    pub location: String,
    pub date: String,
    pub wave_height: f64,
    pub wind_speed: f64,
    pub water_temperature: f64,
    pub meta: String,
}

impl TryFrom<ForecastRecord> for ForecastPayload {
    type Error = serde_json::Error;

    fn try_from(row: ForecastRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            wave_height: row.wave_height,
            wind_speed: row.wind_speed,
            water_temperature: row.water_temperature,
            meta: serde_json::from_str(&row.meta)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(meta: &str) -> ForecastRecord {
        ForecastRecord {
            location: "Malibu, CA".to_string(),
            date: "2024-06-01".to_string(),
            wave_height: 1.2,
            wind_speed: 5.4,
            water_temperature: 18.3,
            meta: meta.to_string(),
        }
    }

    #[test]
    fn test_meta_is_rehydrated_from_text() {
        let payload =
            ForecastPayload::try_from(record(r#"{"cost":1,"params":["waveHeight"]}"#)).unwrap();
        assert_eq!(payload.meta, json!({"cost": 1, "params": ["waveHeight"]}));
        assert_eq!(payload.wave_height, 1.2);
    }

    #[test]
    fn test_corrupt_meta_is_an_error() {
        assert!(ForecastPayload::try_from(record("{not json")).is_err());
    }
}
