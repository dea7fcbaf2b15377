//! Common types and utilities shared across the crate

pub mod errors;
pub mod types;

pub use errors::{FareError, Result};
pub use types::{round_fare, TimeOfDay, Trip, FARE_DECIMAL_PLACES};
