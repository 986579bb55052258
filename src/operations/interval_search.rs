use std::cmp::Ordering;

use tracing::trace;

use super::median_level::{LevelPair, MedianLevelSample};
use super::CutParams;
use crate::error::{Result, SearchError};
use crate::geometry::Interval;
use crate::math::sign;

/// Result of bisecting the median-level difference over a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// The difference changes sign across this interval, whose width is within
    /// tolerance (or cannot be split further in `f64`).
    Converged(Interval),
    /// The levels meet exactly at this x.
    Root(f64),
    /// The difference has the same sign at both ends of the bracket, so no
    /// finite crossing is guaranteed.
    Unbracketed,
}

/// Narrows `bracket` around a crossing of the red and blue median levels.
///
/// Each step halves the interval and keeps the half whose endpoints still see
/// opposite signs of `red - blue`. The sign at the left end never changes
/// (moving right only happens when the midpoint shares it), so it is sampled
/// once up front.
///
/// # Errors
///
/// Returns `SearchError::IterationCapReached` with the best interval if the
/// width is still above tolerance after `params.max_iterations` steps, or
/// `SearchError::NonFiniteLevel` if a sample overflows.
pub fn bisect(
    levels: &LevelPair<'_>,
    bracket: Interval,
    params: &CutParams,
) -> Result<SearchOutcome> {
    let left = checked_sample(levels, bracket.l())?;
    let right = checked_sample(levels, bracket.r())?;
    let left_sign = sign(left.delta());
    let right_sign = sign(right.delta());

    if left_sign == Ordering::Equal {
        return Ok(SearchOutcome::Root(left.x));
    }
    if right_sign == Ordering::Equal {
        return Ok(SearchOutcome::Root(right.x));
    }
    if left_sign == right_sign {
        return Ok(SearchOutcome::Unbracketed);
    }

    let epsilon = params.tolerance * bracket.width() * 0.5;
    let mut interval = bracket;
    for iteration in 0..params.max_iterations {
        if interval.width() <= epsilon {
            return Ok(SearchOutcome::Converged(interval));
        }
        let Some((mid, lower, upper)) = interval.bisect() else {
            return Ok(SearchOutcome::Converged(interval));
        };
        let sample = checked_sample(levels, mid)?;
        trace!(iteration, l = interval.l(), r = interval.r(), delta = sample.delta(), "bisect");

        match sign(sample.delta()) {
            Ordering::Equal => return Ok(SearchOutcome::Root(mid)),
            s if s != left_sign => interval = lower,
            _ => interval = upper,
        }
    }

    if interval.width() <= epsilon {
        Ok(SearchOutcome::Converged(interval))
    } else {
        Err(SearchError::IterationCapReached {
            iterations: params.max_iterations,
            interval,
        }
        .into())
    }
}

fn checked_sample(levels: &LevelPair<'_>, x: f64) -> Result<MedianLevelSample> {
    let sample = levels.sample(x);
    if sample.delta().is_finite() {
        Ok(sample)
    } else {
        Err(SearchError::NonFiniteLevel { x }.into())
    }
}
