//! Ham-sandwich cuts for two finite point sets in the plane.
//!
//! Given a red and a blue point set, [`HamSandwichCut`] finds one line with at
//! most `⌊n/2⌋` points of each color strictly on either side. Points are mapped
//! to dual lines, and the cut is the crossing of the red and blue median
//! levels, found by bisection followed by an exact local reconstruction.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{HamCutError, Result};
pub use geometry::{Color, Cut, PointSet, Side};
pub use operations::{BalanceCheck, BalanceReport, CutParams, HamSandwichCut};
