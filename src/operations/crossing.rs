use tracing::debug;

use super::duality::DualCrossing;
use super::median_level::{LevelPair, MedianLevel};
use crate::error::{Result, SearchError};
use crate::geometry::{AffineFunction, Interval, PointSet};
use crate::math::polyline::{PolylineIntersection, XMonotonePolyline};
use crate::math::select::{lower_median_rank, select_rank};
use crate::math::Point2;

/// Locates the exact crossing of the red and blue median levels inside a
/// converged interval.
///
/// Both levels are rebuilt as polylines from their values at `l`, at every
/// same-color arrangement vertex strictly inside the interval, and at `r`.
/// Between those samples each level follows a single dual line, so the
/// polylines are exact and their intersection is the crossing. Where the
/// levels coincide over a stretch, the point on both levels halfway across
/// the overlap is returned.
///
/// # Errors
///
/// Returns `SearchError::NoIntersectionFound` if the polylines do not meet,
/// which means the bracketing invariant was lost upstream.
pub fn locate_crossing(interval: Interval, levels: &LevelPair<'_>) -> Result<DualCrossing> {
    let not_found = || SearchError::NoIntersectionFound { interval };

    let red = level_polyline(&levels.red, interval).ok_or_else(not_found)?;
    let blue = level_polyline(&levels.blue, interval).ok_or_else(not_found)?;
    debug!(
        l = interval.l(),
        r = interval.r(),
        red_vertices = red.vertices().len(),
        blue_vertices = blue.vertices().len(),
        "median level polylines"
    );

    let hit = red.intersect(&blue).ok_or_else(not_found)?;
    if let PolylineIntersection::Overlap { start, end, .. } = hit {
        debug!(from = start.x, to = end.x, "median levels overlap");
    }
    let p = hit.representative();
    Ok(DualCrossing::Point {
        slope: p.x,
        value: p.y,
    })
}

/// Builds the polyline of a median level over `interval`.
///
/// Returns `None` if a sampled value is non-finite.
#[must_use]
pub fn level_polyline(level: &MedianLevel<'_>, interval: Interval) -> Option<XMonotonePolyline> {
    let breakpoints = crossings_within(level.functions(), interval);
    let mut vertices = Vec::with_capacity(breakpoints.len() + 2);
    vertices.push(Point2::new(interval.l(), level.evaluate(interval.l())));
    for x in breakpoints {
        vertices.push(Point2::new(x, level.evaluate(x)));
    }
    vertices.push(Point2::new(interval.r(), level.evaluate(interval.r())));
    XMonotonePolyline::new(vertices)
}

/// Returns the sorted, deduplicated x-coordinates where two of `functions`
/// cross strictly inside `interval`.
///
/// Functions are ordered by their value at `l` and then insertion-sorted by
/// their value at `r`. Every swap exchanges a pair whose order flips inside
/// the interval, so the work is proportional to `n log n` plus the number of
/// crossings rather than to all `n²` pairs.
#[must_use]
pub fn crossings_within(functions: &[AffineFunction], interval: Interval) -> Vec<f64> {
    let at_l: Vec<f64> = functions.iter().map(|f| f.evaluate(interval.l())).collect();
    let at_r: Vec<f64> = functions.iter().map(|f| f.evaluate(interval.r())).collect();

    let mut order: Vec<usize> = (0..functions.len()).collect();
    order.sort_by(|&i, &j| at_l[i].total_cmp(&at_l[j]).then(at_r[i].total_cmp(&at_r[j])));

    let mut xs = Vec::new();
    for i in 1..order.len() {
        let mut j = i;
        while j > 0 && at_r[order[j - 1]] > at_r[order[j]] {
            let (a, b) = (order[j - 1], order[j]);
            if let Some(x) = functions[a].crossing_x(&functions[b]) {
                if interval.contains_open(x) {
                    xs.push(x);
                }
            }
            order.swap(j - 1, j);
            j -= 1;
        }
    }

    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs
}

/// Chooses the vertical cut when the median-level difference keeps one sign
/// over the whole bracket.
///
/// Each set is bisected by any vertical line between its lower and upper
/// median x-coordinate. Beyond the bracket the dual order is the order by x,
/// so equal signs at both ends force these two ranges to overlap; the
/// midpoint of the overlap bisects both sets.
///
/// # Errors
///
/// Returns `SearchError::NoIntersectionFound` if the ranges do not overlap.
pub fn vertical_crossing(red: &PointSet, blue: &PointSet, bracket: Interval) -> Result<DualCrossing> {
    let (red_lo, red_hi) = median_x_range(red);
    let (blue_lo, blue_hi) = median_x_range(blue);
    let lo = red_lo.max(blue_lo);
    let hi = red_hi.min(blue_hi);
    debug!(red_lo, red_hi, blue_lo, blue_hi, "median x ranges");
    if lo > hi {
        return Err(SearchError::NoIntersectionFound { interval: bracket }.into());
    }
    Ok(DualCrossing::Vertical {
        x: lo + (hi - lo) * 0.5,
    })
}

/// Lower and upper median x-coordinate of a point set.
fn median_x_range(set: &PointSet) -> (f64, f64) {
    let n = set.len();
    let rank = lower_median_rank(n);
    let mut xs: Vec<f64> = set.points().iter().map(|p| p.x).collect();
    let lo = select_rank(&mut xs, rank).unwrap_or(f64::NAN);
    let hi = select_rank(&mut xs, n - rank + 1).unwrap_or(f64::NAN);
    (lo, hi)
}
