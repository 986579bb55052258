pub mod balance;
pub mod bracket;
pub mod crossing;
pub mod duality;
pub mod ham_sandwich;
pub mod interval_search;
pub mod median_level;
pub mod reconstruct;

pub use balance::{BalanceCheck, BalanceReport, SideCounts};
pub use duality::DualCrossing;
pub use ham_sandwich::HamSandwichCut;
pub use interval_search::SearchOutcome;

use crate::error::{InputError, Result};

/// Parameters controlling the bisection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutParams {
    /// Convergence width relative to the half-width of the initial bracket.
    pub tolerance: f64,
    /// Hard cap on bisection steps.
    pub max_iterations: usize,
}

impl Default for CutParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 200,
        }
    }
}

impl CutParams {
    /// Checks that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidParams` if `tolerance` is negative or
    /// non-finite, or `max_iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(InputError::InvalidParams(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            ))
            .into());
        }
        if self.max_iterations == 0 {
            return Err(
                InputError::InvalidParams("max_iterations must be at least 1".to_owned()).into(),
            );
        }
        Ok(())
    }
}
