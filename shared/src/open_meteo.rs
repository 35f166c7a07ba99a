//! Open-Meteo request and response contracts
//!
//! Both the server and the browser talk to the same two endpoints, so the URL
//! layout and the geocoding response shape live here.

use serde::Deserialize;
use url::Url;

use crate::types::{GpsCoordinates, ResolvedLocation};

pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

pub const CURRENT_VARIABLES: &str = "temperature_2m,relative_humidity_2m,precipitation,rain,weather_code,wind_speed_10m,wind_gusts_10m";
pub const HOURLY_VARIABLES: &str = "temperature_2m,precipitation,weather_code,soil_moisture_0_to_1cm";
pub const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_hours";

pub const LOCATION_NOT_FOUND: &str = "Location not found. Please try a different location.";

/// Build the geocoding search URL for a place name
pub fn geocoding_url(base: &str, name: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        base,
        &[
            ("name", name),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
        ],
    )
}

/// Build the forecast URL for a location.
///
/// `timezone=auto` keeps the hourly series aligned to local midnight at the
/// location, which the evaluator's hour indexing depends on.
pub fn forecast_url(
    base: &str,
    coordinates: &GpsCoordinates,
    forecast_days: u8,
) -> Result<Url, url::ParseError> {
    let latitude = coordinates.latitude.to_string();
    let longitude = coordinates.longitude.to_string();
    let days = forecast_days.to_string();

    Url::parse_with_params(
        base,
        &[
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("current", CURRENT_VARIABLES),
            ("hourly", HOURLY_VARIABLES),
            ("daily", DAILY_VARIABLES),
            ("timezone", "auto"),
            ("forecast_days", days.as_str()),
        ],
    )
}

/// Geocoding search response
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodingResponse {
    /// The best match, if the search found anything
    pub fn into_location(self) -> Option<ResolvedLocation> {
        let first = self.results?.into_iter().next()?;
        let coordinates = GpsCoordinates::from_f64(first.latitude, first.longitude)?;

        Some(ResolvedLocation {
            name: first.name,
            country: first.country,
            coordinates,
        })
    }
}
