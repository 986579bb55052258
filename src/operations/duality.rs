//! Point–line duality.
//!
//! A primal point `(a, b)` maps to the dual line `y = a·x − b`. A point lies
//! below the primal line `y = m·x − c` exactly when its dual line passes above
//! the dual point `(m, c)`, which turns "k points on one side of a line" into
//! "k dual lines on one side of a point".

use crate::geometry::{AffineFunction, Cut, PointSet};
use crate::math::Point2;

/// A crossing of the two median levels in dual space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DualCrossing {
    /// The dual point `(slope, value)`; maps to `y = slope·x − value`.
    Point { slope: f64, value: f64 },
    /// No finite crossing exists; the cut is the vertical line `x = x`.
    Vertical { x: f64 },
}

/// Maps a primal point `(a, b)` to its dual function `y = a·x − b`.
#[must_use]
pub fn point_to_dual(p: &Point2) -> AffineFunction {
    AffineFunction::new(p.x, -p.y)
}

/// Maps every point of a set to its dual function, preserving order.
#[must_use]
pub fn dual_functions(set: &PointSet) -> Vec<AffineFunction> {
    set.points().iter().map(point_to_dual).collect()
}

/// Maps the dual point `(m, c)` back to the primal line `y = m·x − c`.
#[must_use]
pub fn dual_point_to_line(m: f64, c: f64) -> Cut {
    Cut::NonVertical {
        slope: m,
        intercept: -c,
    }
}
