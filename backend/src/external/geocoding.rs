//! Geocoding client resolving place names to coordinates
//!
//! Uses the Open-Meteo geocoding search API (no API key required).

use reqwest::Client;
use shared::open_meteo::{self, GeocodingResponse};
use shared::ResolvedLocation;

use crate::error::{AppError, AppResult};

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a new GeocodingClient for a search endpoint
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Resolve a free-text place name to its best match
    pub async fn resolve(&self, location: &str) -> AppResult<ResolvedLocation> {
        let url = open_meteo::geocoding_url(&self.base_url, location)
            .map_err(|e| AppError::Configuration(format!("Invalid geocoding URL: {}", e)))?;

        tracing::debug!(%location, "Resolving location");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Geocoding request failed: {}", e);
            AppError::UpstreamFetch("Failed to find location".to_string())
        })?;

        if !response.status().is_success() {
            tracing::warn!("Geocoding API returned status {}", response.status());
            return Err(AppError::UpstreamFetch("Failed to find location".to_string()));
        }

        let data: GeocodingResponse = response.json().await.map_err(|e| {
            AppError::UpstreamFetch(format!("Failed to parse geocoding response: {}", e))
        })?;

        let resolved = data
            .into_location()
            .ok_or_else(|| AppError::LocationNotFound(open_meteo::LOCATION_NOT_FOUND.to_string()))?;

        tracing::info!(
            name = %resolved.name,
            latitude = %resolved.coordinates.latitude,
            longitude = %resolved.coordinates.longitude,
            "Resolved location"
        );
        Ok(resolved)
    }
}
