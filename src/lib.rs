//! TransitFares Library
//!
//! Fare calculation for bus, metro and taxi trips. Pricing strategies are
//! swappable at runtime and can be wrapped in commission and discount
//! adjustments that stack in any order.

pub mod common;
pub mod config;
pub mod report;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{FareError, Result};
pub use common::types::{round_fare, TimeOfDay, Trip};
pub use crate::config::types::AppConfig;
pub use report::{build_standard_report, FareQuote, FareReport, ReportRequest, TripSection};

// Strategy types
pub use strategy::{
    BoxedFareStrategy, BusFare, CommissionAdjustment, DiscountAdjustment, FareCalculator,
    FareStrategy, MetroFare, PassthroughAdjustment, PriceAdjustment, SharedFareStrategy, TaxiFare,
    TransportMode,
};
