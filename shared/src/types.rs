//! Common types used across the mowing check surfaces

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places kept when converting provider coordinates
const COORDINATE_SCALE: u32 = 6;

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build coordinates from provider floats, rounded to 6 decimal places.
    ///
    /// Returns `None` for non-finite input.
    pub fn from_f64(latitude: f64, longitude: f64) -> Option<Self> {
        let round = |v: f64| {
            Decimal::from_f64_retain(v).map(|d| d.round_dp(COORDINATE_SCALE).normalize())
        };
        Some(Self::new(round(latitude)?, round(longitude)?))
    }
}

/// A place name resolved to coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(flatten)]
    pub coordinates: GpsCoordinates,
}
