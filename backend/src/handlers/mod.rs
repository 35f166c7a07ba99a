//! HTTP request handlers

mod health;
mod mowing;

pub use health::*;
pub use mowing::*;
