use tracing::debug;

use super::bracket::initial_bracket;
use super::crossing::{locate_crossing, vertical_crossing};
use super::duality::{dual_functions, DualCrossing};
use super::interval_search::{bisect, SearchOutcome};
use super::median_level::{LevelPair, MedianLevel};
use super::reconstruct::reconstruct;
use super::CutParams;
use crate::error::{InputError, Result};
use crate::geometry::{AffineFunction, Color, Cut, PointSet};
use crate::math::Point2;

/// Computes a line that simultaneously bisects a red and a blue point set.
///
/// # Algorithm
///
/// 1. Map every point `(a, b)` to its dual line `y = a·x − b`.
/// 2. Bracket all dual arrangement vertices in `(-M, M)`.
/// 3. Bisect on the sign of `red_median(x) − blue_median(x)` until the
///    interval is within tolerance.
/// 4. Rebuild both median levels exactly inside the final interval and
///    intersect them.
/// 5. Map the dual crossing `(m, c)` back to the line `y = m·x − c`, or to a
///    vertical line when the levels never change order.
///
/// The computation is deterministic and holds no state between runs.
#[derive(Debug, Clone)]
pub struct HamSandwichCut {
    red: PointSet,
    blue: PointSet,
    params: CutParams,
}

impl HamSandwichCut {
    /// Creates a new cut operation with default parameters.
    #[must_use]
    pub fn new(red: PointSet, blue: PointSet) -> Self {
        Self {
            red,
            blue,
            params: CutParams::default(),
        }
    }

    /// Creates a cut operation from raw point lists.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyPointSet` or `InputError::NonFiniteCoordinate`
    /// if either list is invalid.
    pub fn from_points(red: Vec<Point2>, blue: Vec<Point2>) -> Result<Self> {
        Ok(Self::new(
            PointSet::new(Color::Red, red)?,
            PointSet::new(Color::Blue, blue)?,
        ))
    }

    /// Sets custom search parameters.
    #[must_use]
    pub fn with_params(mut self, params: CutParams) -> Self {
        self.params = params;
        self
    }

    /// The red point set.
    #[must_use]
    pub fn red(&self) -> &PointSet {
        &self.red
    }

    /// The blue point set.
    #[must_use]
    pub fn blue(&self) -> &PointSet {
        &self.blue
    }

    /// Executes the computation, returning the cut.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidParams` for unusable parameters, and the
    /// `SearchError` variants when the search cannot certify a crossing:
    /// `BracketOverflow`, `NonFiniteLevel`, `IterationCapReached`, or
    /// `NoIntersectionFound`.
    pub fn execute(&self) -> Result<Cut> {
        self.params.validate()?;

        let red_duals = dual_functions(&self.red);
        let blue_duals = dual_functions(&self.blue);
        let levels = LevelPair::new(level(&red_duals, Color::Red)?, level(&blue_duals, Color::Blue)?);

        let bracket = initial_bracket(&self.red, &self.blue)?;
        debug!(
            red = self.red.len(),
            blue = self.blue.len(),
            half_width = bracket.r(),
            "initial bracket"
        );

        let outcome = bisect(&levels, bracket, &self.params)?;
        debug!(?outcome, "bisection finished");

        let crossing = match outcome {
            SearchOutcome::Converged(interval) => locate_crossing(interval, &levels)?,
            SearchOutcome::Root(x) => DualCrossing::Point {
                slope: x,
                value: levels.red.evaluate(x),
            },
            SearchOutcome::Unbracketed => vertical_crossing(&self.red, &self.blue, bracket)?,
        };

        let cut = reconstruct(crossing);
        debug!(?cut, "ham-sandwich cut");
        Ok(cut)
    }
}

fn level(duals: &[AffineFunction], color: Color) -> Result<MedianLevel<'_>> {
    MedianLevel::new(duals).ok_or_else(|| InputError::EmptyPointSet { color }.into())
}
