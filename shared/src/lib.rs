//! Shared types and the mowing condition evaluator
//!
//! This crate contains the weather data contracts and the rule evaluation
//! used by both the backend server and the browser surface (via WASM).

pub mod evaluator;
pub mod format;
pub mod models;
pub mod open_meteo;
pub mod types;
pub mod validation;

pub use evaluator::{evaluate, evaluate_at_hour};
pub use models::*;
pub use types::*;
pub use validation::*;
