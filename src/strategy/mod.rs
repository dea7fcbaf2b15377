//! Fare strategies, price adjustments and the calculator that runs them
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FareCalculator                                             │
//! │    - holds exactly one active strategy                      │
//! │    - set_strategy() swaps it for later computations         │
//! └─────────────────────────────────────────────────────────────┘
//!        │ compute(&trip)
//!        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  DiscountAdjustment            (outermost, runs last)       │
//! │    └─ CommissionAdjustment                                  │
//! │         └─ BusFare / MetroFare / TaxiFare  (runs first)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`FareStrategy`]: Trait every strategy and adjustment implements
//! - [`BusFare`], [`MetroFare`], [`TaxiFare`]: Per-mode formulas, rounded to 2 dp
//! - [`PriceAdjustment`]: Trait for wrappers that transform a wrapped price
//! - [`CommissionAdjustment`], [`DiscountAdjustment`], [`PassthroughAdjustment`]
//! - [`FareCalculator`]: Runtime-swappable context
//! - [`TransportMode`]: Picks a strategy from a runtime value
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use transit_fares::strategy::{
//!     BusFare, CommissionAdjustment, DiscountAdjustment, FareCalculator,
//! };
//! use transit_fares::{TimeOfDay, Trip};
//!
//! let trip = Trip::new(dec!(10), TimeOfDay::Day, 2)?;
//! let chain = DiscountAdjustment::new(CommissionAdjustment::new(BusFare, dec!(10))?, dec!(50))?;
//! let calculator = FareCalculator::new(chain);
//!
//! assert_eq!(calculator.compute(&trip)?, dec!(40.00));
//! # Ok::<(), transit_fares::FareError>(())
//! ```

mod adjustments;
mod calculator;
mod fares;
mod traits;

pub use traits::{BoxedFareStrategy, FareStrategy, PriceAdjustment, SharedFareStrategy};

pub use fares::{BusFare, MetroFare, TaxiFare, TransportMode};

pub use adjustments::{CommissionAdjustment, DiscountAdjustment, PassthroughAdjustment};

pub use calculator::FareCalculator;
