//! Validation utilities for mowing check inputs
//!
//! The evaluator assumes a well-formed snapshot; these checks run in the
//! hosting surfaces before it is called.

use crate::models::WeatherSnapshot;

pub const LOCATION_REQUIRED: &str =
    "Please provide a \"location\" field in the request body (town, city, or postcode)";

/// Validate a free-text location and return it trimmed
pub fn validate_location_input(location: &str) -> Result<&str, &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(LOCATION_REQUIRED);
    }
    Ok(trimmed)
}

/// Check the snapshot shape the evaluator relies on
pub fn validate_snapshot(snapshot: &WeatherSnapshot) -> Result<(), &'static str> {
    let current = &snapshot.current;

    let readings = [
        current.temperature_celsius,
        current.humidity_percent,
        current.wind_speed_kmh,
        current.precipitation_mm,
        current.rain_mm,
    ];
    if readings.iter().any(|v| !v.is_finite()) {
        return Err("Current conditions contain non-numeric readings");
    }
    if current.wind_gusts_kmh.is_some_and(|g| !g.is_finite()) {
        return Err("Current conditions contain non-numeric readings");
    }

    if !(0.0..=100.0).contains(&current.humidity_percent) {
        return Err("Relative humidity must be between 0 and 100%");
    }

    let soil_out_of_range = snapshot
        .hourly
        .soil_moisture
        .iter()
        .flatten()
        .flatten()
        .any(|m| !is_valid_soil_moisture(*m));
    if soil_out_of_range {
        return Err("Soil moisture must be a fraction between 0 and 1");
    }

    let daily = &snapshot.daily;
    if daily.is_empty() {
        return Err("Daily forecast must contain at least one day");
    }
    if daily.max_temperature_celsius.len() != daily.min_temperature_celsius.len() {
        return Err("Daily maximum and minimum temperature series differ in length");
    }

    Ok(())
}

/// Check if a soil moisture fraction is physically plausible
pub fn is_valid_soil_moisture(moisture: f64) -> bool {
    (0.0..=1.0).contains(&moisture)
}
