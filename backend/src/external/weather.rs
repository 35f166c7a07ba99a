//! Weather API client for fetching weather data
//!
//! Integrates with the Open-Meteo forecast API for current conditions, the
//! hourly series and daily aggregates in one request.

use reqwest::Client;
use shared::open_meteo;
use shared::{GpsCoordinates, WeatherSnapshot};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    forecast_days: u8,
}

impl WeatherClient {
    /// Create a new WeatherClient for a forecast endpoint
    pub fn new(client: Client, base_url: String, forecast_days: u8) -> Self {
        Self {
            client,
            base_url,
            forecast_days,
        }
    }

    /// Fetch the weather snapshot for GPS coordinates.
    ///
    /// The request uses `timezone=auto`, so hourly index 0 is local midnight
    /// of the current day at the location.
    pub async fn fetch_snapshot(&self, coordinates: &GpsCoordinates) -> AppResult<WeatherSnapshot> {
        let url = open_meteo::forecast_url(&self.base_url, coordinates, self.forecast_days)
            .map_err(|e| AppError::Configuration(format!("Invalid forecast URL: {}", e)))?;

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Weather API request failed: {}", e);
            AppError::UpstreamFetch("Failed to fetch weather data".to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::UpstreamFetch(
                "Failed to fetch weather data".to_string(),
            ));
        }

        let snapshot: WeatherSnapshot = response.json().await.map_err(|e| {
            AppError::UpstreamFetch(format!("Failed to parse weather response: {}", e))
        })?;

        tracing::debug!(
            time = %snapshot.current.time,
            hours = snapshot.hourly.precipitation_mm.len(),
            days = snapshot.daily.len(),
            "Fetched weather snapshot"
        );
        Ok(snapshot)
    }
}
