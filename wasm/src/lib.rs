//! WebAssembly module for the mowing check page
//!
//! The page script does the `fetch` calls and DOM updates; everything in
//! between runs here, on the same evaluator the server uses:
//! - Location validation and Open-Meteo request URLs
//! - Geocoding result parsing
//! - Mowing condition evaluation
//! - Building the response envelope the page renders

use chrono::{DateTime, Utc};
use shared::open_meteo::{self, GeocodingResponse};
use shared::{evaluate, evaluate_at_hour, validate_location_input, validate_snapshot};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Validate the location typed into the form, returning it trimmed
#[wasm_bindgen]
pub fn validate_location(input: &str) -> Result<String, JsValue> {
    validate_location_input(input)
        .map(str::to_string)
        .map_err(|_| JsValue::from_str("Please enter a location"))
}

/// URL for the geocoding search of a location
#[wasm_bindgen]
pub fn geocoding_request_url(location: &str) -> Result<String, JsValue> {
    open_meteo::geocoding_url(open_meteo::GEOCODING_URL, location)
        .map(String::from)
        .map_err(|e| to_js_error(e.to_string()))
}

/// URL for the forecast at a resolved location
#[wasm_bindgen]
pub fn forecast_request_url(latitude: f64, longitude: f64) -> Result<String, JsValue> {
    forecast_url_for(latitude, longitude).map_err(to_js_error)
}

/// Parse a geocoding response into a resolved location (JSON)
#[wasm_bindgen]
pub fn parse_geocoding(response_json: &str) -> Result<String, JsValue> {
    resolve_from_json(response_json)
        .and_then(|location| serde_json::to_string(&location).map_err(|e| e.to_string()))
        .map_err(to_js_error)
}

/// Assess a forecast response (JSON) at the hour of its current observation
#[wasm_bindgen]
pub fn assess_weather(weather_json: &str) -> Result<String, JsValue> {
    assess_json(weather_json, None).map_err(to_js_error)
}

/// Assess a forecast response (JSON) using an explicit local hour of day
#[wasm_bindgen]
pub fn assess_weather_at_hour(weather_json: &str, hour: u32) -> Result<String, JsValue> {
    assess_json(weather_json, Some(hour as usize)).map_err(to_js_error)
}

/// Build the full check response from a resolved location and a forecast
#[wasm_bindgen]
pub fn build_check_response(location_json: &str, weather_json: &str) -> Result<String, JsValue> {
    let now = DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default();
    check_response_json(location_json, weather_json, now).map_err(to_js_error)
}

/// Icon shown next to the recommendation
#[wasm_bindgen]
pub fn recommendation_icon(can_mow: bool) -> String {
    if can_mow { "✅" } else { "❌" }.to_string()
}

fn forecast_url_for(latitude: f64, longitude: f64) -> Result<String, String> {
    let coordinates = GpsCoordinates::from_f64(latitude, longitude)
        .ok_or_else(|| "Invalid coordinates".to_string())?;
    open_meteo::forecast_url(
        open_meteo::FORECAST_URL,
        &coordinates,
        open_meteo::DEFAULT_FORECAST_DAYS,
    )
    .map(String::from)
    .map_err(|e| e.to_string())
}

fn resolve_from_json(response_json: &str) -> Result<ResolvedLocation, String> {
    let response: GeocodingResponse = serde_json::from_str(response_json)
        .map_err(|e| format!("Invalid geocoding response: {}", e))?;
    response
        .into_location()
        .ok_or_else(|| open_meteo::LOCATION_NOT_FOUND.to_string())
}

fn parse_snapshot(weather_json: &str) -> Result<WeatherSnapshot, String> {
    let snapshot: WeatherSnapshot = serde_json::from_str(weather_json)
        .map_err(|e| format!("Invalid weather data: {}", e))?;
    validate_snapshot(&snapshot).map_err(str::to_string)?;
    Ok(snapshot)
}

fn assess_json(weather_json: &str, hour: Option<usize>) -> Result<String, String> {
    let snapshot = parse_snapshot(weather_json)?;
    let assessment = match hour {
        Some(hour) => evaluate_at_hour(&snapshot, hour),
        None => evaluate(&snapshot),
    };
    serde_json::to_string(&assessment).map_err(|e| e.to_string())
}

fn check_response_json(
    location_json: &str,
    weather_json: &str,
    now: DateTime<Utc>,
) -> Result<String, String> {
    let location: ResolvedLocation = serde_json::from_str(location_json)
        .map_err(|e| format!("Invalid location: {}", e))?;
    let snapshot = parse_snapshot(weather_json)?;
    let assessment = evaluate(&snapshot);

    let response = MowingCheckResponse::new(&location, &snapshot, assessment, now);
    serde_json::to_string(&response).map_err(|e| e.to_string())
}
