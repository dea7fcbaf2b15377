use rust_decimal::Decimal;

use crate::common::errors::Result;
use crate::common::types::Trip;
use crate::strategy::traits::{BoxedFareStrategy, FareStrategy};

/// Fare calculator
///
/// Holds the currently active strategy (possibly an adjustment chain) and
/// prices trips with it. The strategy can be swapped at any time; a swap only
/// affects computations started afterwards.
///
/// The calculator does no locking of its own. Callers sharing one across
/// threads should put it behind a `Mutex` or `RwLock`.
pub struct FareCalculator {
    strategy: BoxedFareStrategy,
}

impl FareCalculator {
    pub fn new(strategy: impl FareStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Create a calculator from an already boxed strategy
    pub fn from_boxed(strategy: BoxedFareStrategy) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy
    pub fn set_strategy(&mut self, strategy: impl FareStrategy + 'static) {
        self.set_boxed_strategy(Box::new(strategy));
    }

    pub fn set_boxed_strategy(&mut self, strategy: BoxedFareStrategy) {
        tracing::debug!(
            from = %self.strategy.describe(),
            to = %strategy.describe(),
            "switching fare strategy"
        );
        self.strategy = strategy;
    }

    /// Price a trip with the active strategy
    ///
    /// Returns exactly what the strategy returns, errors included.
    pub fn compute(&self, trip: &Trip) -> Result<Decimal> {
        let price = self.strategy.calculate_price(trip)?;
        tracing::debug!(strategy = self.strategy.name(), %trip, %price, "computed fare");
        Ok(price)
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Description of the full active chain
    pub fn describe(&self) -> String {
        self.strategy.describe()
    }

    /// Give back the active strategy, consuming the calculator
    pub fn into_strategy(self) -> BoxedFareStrategy {
        self.strategy
    }
}

impl std::fmt::Debug for FareCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FareCalculator")
            .field("strategy", &self.strategy.describe())
            .finish()
    }
}
