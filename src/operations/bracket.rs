use crate::error::{Result, SearchError};
use crate::geometry::{Interval, PointSet};

/// Computes a dual-space interval `(-M, M)` that lies strictly beyond every
/// vertex of the dual line arrangement of both sets.
///
/// Two dual lines cross at the dual x equal to the slope of the primal segment
/// joining their points. With `S = y_span / min_dx`, where `min_dx` is the
/// smallest non-zero gap between distinct x-coordinates of all points, every
/// such slope satisfies `|slope| <= S`. Choosing `M = 2S + 1` therefore leaves
/// the order of all dual lines, and with it the sign of the median-level
/// difference, fixed outside the interval.
///
/// # Errors
///
/// Returns `SearchError::BracketOverflow` if `M` is not a finite `f64`.
pub fn initial_bracket(red: &PointSet, blue: &PointSet) -> Result<Interval> {
    let half_width = 2.0 * slope_bound(red, blue) + 1.0;
    if !half_width.is_finite() {
        return Err(SearchError::BracketOverflow { half_width }.into());
    }
    Interval::symmetric(half_width)
}

/// Upper bound on the absolute slope of any segment joining two points with
/// distinct x-coordinates, or `0.0` if all points share one x-coordinate.
fn slope_bound(red: &PointSet, blue: &PointSet) -> f64 {
    let points = red.points().iter().chain(blue.points());

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut xs = Vec::with_capacity(red.len() + blue.len());
    for p in points {
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
        xs.push(p.x);
    }
    xs.sort_by(f64::total_cmp);

    let min_dx = xs
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|&dx| dx > 0.0)
        .fold(f64::INFINITY, f64::min);

    if min_dx.is_infinite() {
        return 0.0;
    }
    (y_max - y_min) / min_dx
}
