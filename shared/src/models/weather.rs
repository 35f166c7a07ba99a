//! Weather data models
//!
//! The snapshot mirrors the Open-Meteo forecast payload: a `current` block,
//! plus `hourly` and `daily` blocks made of parallel arrays.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// The complete weather payload for one location at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    #[serde(default)]
    pub hourly: HourlySeries,
    #[serde(default)]
    pub daily: DailySeries,
}

impl WeatherSnapshot {
    /// Local hour of day of the current observation.
    ///
    /// Hourly arrays are aligned so that index 0 is local midnight of today,
    /// which makes this hour a direct index into them.
    pub fn current_hour(&self) -> usize {
        self.current.time.hour() as usize
    }
}

/// Conditions at the current instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local time of the observation
    #[serde(with = "local_time")]
    pub time: NaiveDateTime,
    #[serde(rename = "temperature_2m")]
    pub temperature_celsius: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity_percent: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed_kmh: f64,
    #[serde(rename = "wind_gusts_10m", default)]
    pub wind_gusts_kmh: Option<f64>,
    #[serde(rename = "precipitation")]
    pub precipitation_mm: f64,
    #[serde(rename = "rain", default)]
    pub rain_mm: f64,
    #[serde(default)]
    pub weather_code: Option<i32>,
}

impl CurrentConditions {
    /// Gust speed, falling back to the sustained wind speed when not reported.
    /// A gust reading of zero counts as not reported.
    pub fn effective_gusts_kmh(&self) -> f64 {
        self.wind_gusts_kmh
            .filter(|gusts| *gusts != 0.0)
            .unwrap_or(self.wind_speed_kmh)
    }

    pub fn condition(&self) -> WeatherCondition {
        self.weather_code
            .map(WeatherCondition::from_wmo_code)
            .unwrap_or_default()
    }
}

/// Hour-by-hour series, one entry per hour starting at local midnight today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m", default)]
    pub temperature_celsius: Vec<Option<f64>>,
    #[serde(rename = "precipitation", default)]
    pub precipitation_mm: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    /// Surface layer soil moisture as a fraction (0.0 - 1.0)
    #[serde(rename = "soil_moisture_0_to_1cm", default)]
    pub soil_moisture: Option<Vec<Option<f64>>>,
}

impl HourlySeries {
    /// Total precipitation over the hours in `[start, end)`.
    ///
    /// Missing hours and indexes past the end of the series count as zero.
    pub fn precipitation_between(&self, start: usize, end: usize) -> f64 {
        (start..end)
            .filter_map(|i| self.precipitation_mm.get(i).copied().flatten())
            .sum()
    }

    /// Soil moisture at an hour index, if reported.
    /// A reading of exactly zero counts as not reported.
    pub fn soil_moisture_at(&self, hour: usize) -> Option<f64> {
        self.soil_moisture
            .as_ref()?
            .get(hour)
            .copied()
            .flatten()
            .filter(|moisture| *moisture != 0.0)
    }
}

/// Day-by-day aggregates, one entry per day starting today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max", default)]
    pub max_temperature_celsius: Vec<f64>,
    #[serde(rename = "temperature_2m_min", default)]
    pub min_temperature_celsius: Vec<f64>,
    #[serde(rename = "precipitation_sum", default)]
    pub precipitation_sum_mm: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_hours: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.max_temperature_celsius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_temperature_celsius.is_empty()
    }
}

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert a WMO weather code, unknown codes read as clear
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 | 66 | 67 => Self::Sleet,
            61 | 63 | 80 => Self::Rain,
            65 | 81 | 82 => Self::HeavyRain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Open-Meteo local timestamps (`2024-05-01T14:15`, seconds optional)
mod local_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const MINUTES: &str = "%Y-%m-%dT%H:%M";
    const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(MINUTES))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, MINUTES)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, SECONDS))
            .map_err(serde::de::Error::custom)
    }
}
