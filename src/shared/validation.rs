use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::shared::constants::FORECAST_DATE_FORMAT;

lazy_static! {
    /// Regex for forecast dates
    /// Must be zero-padded `YYYY-MM-DD`
    /// - Valid: "2024-06-01", "1999-12-31"
    /// - Invalid: "2024-6-1", "01-06-2024", "2024/06/01", "2024-06-01T00:00"
    pub static ref DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Validates a `YYYY-MM-DD` string that is also a real calendar date.
pub fn validate_forecast_date(date: &str) -> Result<(), ValidationError> {
    if !DATE_REGEX.is_match(date) || NaiveDate::parse_from_str(date, FORECAST_DATE_FORMAT).is_err() {
        let mut err = ValidationError::new("date_format");
        err.message = Some("Date must be a valid calendar date in YYYY-MM-DD format".into());
        return Err(err);
    }
    Ok(())
}
