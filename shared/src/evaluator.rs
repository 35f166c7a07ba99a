//! Mowing condition evaluator
//!
//! Turns a [`WeatherSnapshot`] into a [`MowingAssessment`] by running a fixed,
//! ordered list of agronomic rules. Each rule looks at the snapshot and yields
//! at most one [`Verdict`]; the verdicts are folded into the assessment in rule
//! order. A single blocking verdict is enough to advise against mowing.
//!
//! Evaluation is pure: no I/O, no clock, no shared state.

use crate::format::{fixed, number};
use crate::models::{MowingAssessment, Reason, WeatherSnapshot};

/// Below this air temperature grass is dormant (°C, strict)
pub const MIN_TEMPERATURE_C: f64 = 7.0;
/// Above this air temperature mowing stresses the grass (°C, strict)
pub const MAX_TEMPERATURE_C: f64 = 28.0;
/// Hours before the current hour summed for recent rain
pub const RECENT_RAIN_WINDOW_HOURS: usize = 6;
pub const RECENT_RAIN_HEAVY_MM: f64 = 5.0;
pub const RECENT_RAIN_LIGHT_MM: f64 = 1.0;
pub const SOIL_WATERLOGGED: f64 = 0.4;
pub const SOIL_DRY: f64 = 0.1;
pub const STRONG_WIND_KMH: f64 = 30.0;
pub const STRONG_GUST_KMH: f64 = 40.0;
pub const MODERATE_WIND_KMH: f64 = 20.0;
/// Daily minimum at or below this is a frost risk (°C, inclusive)
pub const FROST_MIN_TEMPERATURE_C: f64 = 2.0;
pub const COLD_SPELL_MAX_TEMPERATURE_C: f64 = 10.0;
pub const COLD_SPELL_DAYS: usize = 3;
pub const VERY_HIGH_HUMIDITY_PERCENT: f64 = 90.0;
pub const HIGH_HUMIDITY_PERCENT: f64 = 75.0;

/// Snapshot plus the hour used to index its hourly series
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub hour: usize,
}

impl EvaluationContext<'_> {
    /// Precipitation over the recent rain window, clipped at the series start
    pub fn recent_rain_mm(&self) -> f64 {
        let start = self.hour.saturating_sub(RECENT_RAIN_WINDOW_HOURS);
        self.snapshot.hourly.precipitation_between(start, self.hour)
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub reason: Reason,
    /// Whether this verdict rules out mowing
    pub blocks: bool,
}

impl Verdict {
    fn pass(text: impl Into<String>) -> Self {
        Self {
            reason: Reason::positive(text),
            blocks: false,
        }
    }

    fn block(text: impl Into<String>) -> Self {
        Self {
            reason: Reason::negative(text),
            blocks: true,
        }
    }
}

/// A named rule in the evaluation order
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&EvaluationContext<'_>) -> Option<Verdict>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in evaluation order. The order is the order of the reasons.
pub const RULES: &[Rule] = &[
    Rule { name: "temperature", check: temperature },
    Rule { name: "current_rain", check: current_rain },
    Rule { name: "recent_rain", check: recent_rain },
    Rule { name: "soil_moisture", check: soil_moisture },
    Rule { name: "wind", check: wind },
    Rule { name: "frost", check: frost },
    Rule { name: "cold_spell", check: cold_spell },
    Rule { name: "humidity", check: humidity },
];

/// Evaluate a snapshot at the hour of its current observation
pub fn evaluate(snapshot: &WeatherSnapshot) -> MowingAssessment {
    evaluate_at_hour(snapshot, snapshot.current_hour())
}

/// Evaluate a snapshot using `hour` as the index into the hourly series.
///
/// `hour` must be the local hour of day, with hourly index 0 being local
/// midnight of the current day.
pub fn evaluate_at_hour(snapshot: &WeatherSnapshot, hour: usize) -> MowingAssessment {
    let ctx = EvaluationContext { snapshot, hour };

    let (can_mow, reasons) = RULES
        .iter()
        .filter_map(|rule| (rule.check)(&ctx))
        .fold((true, Vec::new()), |(can_mow, mut reasons), verdict| {
            reasons.push(verdict.reason);
            (can_mow && !verdict.blocks, reasons)
        });

    MowingAssessment::new(can_mow, reasons)
}

fn temperature(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let temp = ctx.snapshot.current.temperature_celsius;

    Some(if temp < MIN_TEMPERATURE_C {
        Verdict::block(format!(
            "Temperature too cold ({}°C). Grass below 7°C is dormant and shouldn't be mowed.",
            number(temp)
        ))
    } else if temp > MAX_TEMPERATURE_C {
        Verdict::block(format!(
            "Temperature too hot ({}°C). Mowing in extreme heat stresses the grass.",
            number(temp)
        ))
    } else {
        Verdict::pass(format!("Temperature is suitable ({}°C).", number(temp)))
    })
}

fn current_rain(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let current = &ctx.snapshot.current;

    Some(if current.precipitation_mm > 0.0 || current.rain_mm > 0.0 {
        Verdict::block(format!(
            "Currently raining ({}mm). Wait for rain to stop and grass to dry.",
            number(current.precipitation_mm)
        ))
    } else {
        Verdict::pass("Not currently raining.")
    })
}

fn recent_rain(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let rain = ctx.recent_rain_mm();

    if rain > RECENT_RAIN_HEAVY_MM {
        Some(Verdict::block(format!(
            "Significant recent rain ({}mm in last 6 hours). Grass likely still wet.",
            fixed(rain, 1)
        )))
    } else if rain > RECENT_RAIN_LIGHT_MM {
        Some(Verdict::block(format!(
            "Some recent rain ({}mm in last 6 hours). Check if grass is dry.",
            fixed(rain, 1)
        )))
    } else {
        None
    }
}

fn soil_moisture(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let moisture = ctx.snapshot.hourly.soil_moisture_at(ctx.hour)?;
    let percent = moisture * 100.0;

    if moisture > SOIL_WATERLOGGED {
        Some(Verdict::block(format!(
            "Soil is waterlogged (moisture: {}%). Wait for ground to dry.",
            fixed(percent, 0)
        )))
    } else if moisture < SOIL_DRY {
        Some(Verdict::block(format!(
            "Soil very dry (moisture: {}%). Possible drought conditions.",
            fixed(percent, 0)
        )))
    } else {
        None
    }
}

fn wind(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let current = &ctx.snapshot.current;
    let speed = current.wind_speed_kmh;
    let gusts = current.effective_gusts_kmh();

    Some(if speed > STRONG_WIND_KMH || gusts > STRONG_GUST_KMH {
        Verdict::block(format!(
            "Strong winds ({} km/h, gusts {} km/h). Unsafe and ineffective mowing.",
            number(speed),
            number(gusts)
        ))
    } else if speed > MODERATE_WIND_KMH {
        Verdict::block(format!(
            "Moderate winds ({} km/h). Mowing possible but not ideal.",
            number(speed)
        ))
    } else {
        Verdict::pass(format!("Wind conditions acceptable ({} km/h).", number(speed)))
    })
}

fn frost(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let min_temp = *ctx.snapshot.daily.min_temperature_celsius.first()?;

    (min_temp <= FROST_MIN_TEMPERATURE_C).then(|| {
        Verdict::block(format!(
            "Frost risk (min temp {}°C today). Wait for warmer conditions.",
            number(min_temp)
        ))
    })
}

fn cold_spell(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let snapshot = ctx.snapshot;
    // vacuously true when no days are available
    let cold_days = snapshot
        .daily
        .max_temperature_celsius
        .iter()
        .take(COLD_SPELL_DAYS)
        .all(|max| *max < COLD_SPELL_MAX_TEMPERATURE_C);

    (cold_days && snapshot.current.temperature_celsius < COLD_SPELL_MAX_TEMPERATURE_C).then(|| {
        Verdict::block("Winter cold spell detected. Grass is dormant and should not be mowed.")
    })
}

fn humidity(ctx: &EvaluationContext<'_>) -> Option<Verdict> {
    let humidity = ctx.snapshot.current.humidity_percent;

    if humidity > VERY_HIGH_HUMIDITY_PERCENT {
        Some(Verdict::block(format!(
            "Very high humidity ({}%). Grass likely wet from dew or moisture.",
            number(humidity)
        )))
    } else if humidity > HIGH_HUMIDITY_PERCENT {
        // advisory only: does not rule out mowing
        Some(Verdict::pass(format!(
            "High humidity ({}%). Check if grass is dry before mowing.",
            number(humidity)
        )))
    } else {
        None
    }
}
