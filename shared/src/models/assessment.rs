//! Mowing assessment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WeatherSnapshot;
use crate::types::ResolvedLocation;

pub const RECOMMENDATION_YES: &str = "YES, You Can Mow!";
pub const RECOMMENDATION_NO: &str = "NO, Wait to Mow";
pub const DETAIL_YES: &str = "Weather conditions are suitable for mowing your lawn.";
pub const DETAIL_NO: &str =
    "Current conditions are not ideal for mowing. Check the analysis for details.";

/// Whether a reason speaks for or against mowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonType {
    Positive,
    Negative,
}

/// One human-readable line of the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ReasonType,
}

impl Reason {
    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReasonType::Positive,
        }
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReasonType::Negative,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.kind == ReasonType::Negative
    }
}

/// Result of evaluating a weather snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MowingAssessment {
    pub can_mow: bool,
    pub recommendation: String,
    pub detail_text: String,
    pub reasons: Vec<Reason>,
}

impl MowingAssessment {
    /// Pair the verdict with its fixed display strings
    pub fn new(can_mow: bool, reasons: Vec<Reason>) -> Self {
        let (recommendation, detail_text) = if can_mow {
            (RECOMMENDATION_YES, DETAIL_YES)
        } else {
            (RECOMMENDATION_NO, DETAIL_NO)
        };

        Self {
            can_mow,
            recommendation: recommendation.to_string(),
            detail_text: detail_text.to_string(),
            reasons,
        }
    }

    pub fn negative_reasons(&self) -> impl Iterator<Item = &Reason> {
        self.reasons.iter().filter(|r| r.is_negative())
    }
}

/// Location block echoed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&ResolvedLocation> for LocationSummary {
    fn from(location: &ResolvedLocation) -> Self {
        use rust_decimal::prelude::ToPrimitive;

        Self {
            name: location.name.clone(),
            country: location.country.clone(),
            latitude: location.coordinates.latitude.to_f64().unwrap_or_default(),
            longitude: location.coordinates.longitude.to_f64().unwrap_or_default(),
        }
    }
}

/// Current conditions plus the analysis lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub summary: String,
    pub conditions: Vec<Reason>,
}

/// Response envelope for a completed mowing check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MowingCheckResponse {
    pub success: bool,
    pub can_mow: bool,
    pub location: LocationSummary,
    pub recommendation: String,
    pub details: String,
    pub weather: WeatherSummary,
    pub timestamp: DateTime<Utc>,
}

impl MowingCheckResponse {
    pub fn new(
        location: &ResolvedLocation,
        snapshot: &WeatherSnapshot,
        assessment: MowingAssessment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let current = &snapshot.current;

        Self {
            success: true,
            can_mow: assessment.can_mow,
            location: LocationSummary::from(location),
            recommendation: assessment.recommendation,
            details: assessment.detail_text,
            weather: WeatherSummary {
                temperature: current.temperature_celsius,
                humidity: current.humidity_percent,
                wind_speed: current.wind_speed_kmh,
                precipitation: current.precipitation_mm,
                summary: current.condition().description().to_string(),
                conditions: assessment.reasons,
            },
            timestamp,
        }
    }
}
