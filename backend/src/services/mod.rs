//! Business logic services for the mowing check server

pub mod mowing;

pub use mowing::MowingCheckService;
