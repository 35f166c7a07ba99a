//! Domain models for the mowing check

mod assessment;
mod weather;

pub use assessment::*;
pub use weather::*;
