use std::sync::Arc;

use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::common::types::Trip;

/// Core fare strategy trait
///
/// A strategy prices one trip for one transport mode. Strategies hold no
/// per-trip state, so a single instance can be reused and shared freely.
///
/// # Implementation Notes
///
/// - `calculate_price` must not mutate anything; it only reads the trip
/// - Concrete strategies round to fare precision before returning
/// - Adjustments wrap another strategy and implement this same trait
///
/// # Example
///
/// ```ignore
/// struct FlatFare(Decimal);
///
/// impl FareStrategy for FlatFare {
///     fn name(&self) -> &str { "flat" }
///
///     fn calculate_price(&self, _trip: &Trip) -> Result<Decimal> {
///         Ok(round_fare(self.0))
///     }
/// }
/// ```
pub trait FareStrategy: Send + Sync {
    /// Short identifier for this strategy
    fn name(&self) -> &str;

    /// Compute the price of a trip
    ///
    /// # Errors
    /// Returns an error if the computation cannot produce a price, for example
    /// on decimal overflow. Errors from wrapped strategies pass through as is.
    fn calculate_price(&self, trip: &Trip) -> Result<Decimal>;

    /// Human-readable description of the whole pricing chain
    ///
    /// Plain strategies describe themselves by name; adjustments override this
    /// to include the strategy they wrap.
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Boxed strategy for dynamic dispatch
pub type BoxedFareStrategy = Box<dyn FareStrategy>;

/// Shared strategy, usable by several chains at once
pub type SharedFareStrategy = Arc<dyn FareStrategy>;

impl<S: FareStrategy + ?Sized> FareStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        (**self).calculate_price(trip)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: FareStrategy + ?Sized> FareStrategy for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        (**self).calculate_price(trip)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: FareStrategy + ?Sized> FareStrategy for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn calculate_price(&self, trip: &Trip) -> Result<Decimal> {
        (**self).calculate_price(trip)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Price adjustment trait
///
/// An adjustment owns exactly one wrapped strategy and transforms its result.
/// Evaluation always runs innermost first: [`PriceAdjustment::apply`] prices the
/// trip with the wrapped strategy, then hands that price to
/// [`PriceAdjustment::adjust`].
pub trait PriceAdjustment: FareStrategy {
    /// The strategy this adjustment decorates
    fn wrapped(&self) -> &dyn FareStrategy;

    /// Transform the wrapped strategy's price
    fn adjust(&self, price: Decimal) -> Result<Decimal>;

    /// Price the trip through the wrapped strategy, then adjust
    fn apply(&self, trip: &Trip) -> Result<Decimal> {
        let base = self.wrapped().calculate_price(trip)?;
        let adjusted = self.adjust(base)?;
        tracing::trace!(adjustment = self.name(), %base, %adjusted, "applied price adjustment");
        Ok(adjusted)
    }
}
