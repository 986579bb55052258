use std::fmt;

use crate::error::{InputError, Result};

/// An open interval `(l, r)` of the dual x-axis with finite bounds and `l < r`.
///
/// Intervals are values: refinement produces a new interval rather than
/// mutating an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    l: f64,
    r: f64,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidInterval` if either bound is non-finite or
    /// `l >= r`.
    pub fn new(l: f64, r: f64) -> Result<Self> {
        if !l.is_finite() || !r.is_finite() || l >= r {
            return Err(InputError::InvalidInterval { l, r }.into());
        }
        Ok(Self { l, r })
    }

    /// Creates the symmetric interval `(-half_width, half_width)`.
    ///
    /// # Errors
    ///
    /// Same as [`Interval::new`].
    pub fn symmetric(half_width: f64) -> Result<Self> {
        Self::new(-half_width, half_width)
    }

    /// Left bound.
    #[must_use]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Right bound.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Width `r - l`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.r - self.l
    }

    /// Returns whether `x` lies strictly between the bounds.
    #[must_use]
    pub fn contains_open(&self, x: f64) -> bool {
        self.l < x && x < self.r
    }

    /// Splits at the midpoint into `(l, mid)` and `(mid, r)`.
    ///
    /// Returns `None` once the midpoint is no longer representable strictly
    /// between the bounds.
    #[must_use]
    pub fn bisect(&self) -> Option<(f64, Self, Self)> {
        let mid = self.l + (self.r - self.l) * 0.5;
        if !self.contains_open(mid) {
            return None;
        }
        Some((
            mid,
            Self { l: self.l, r: mid },
            Self { l: mid, r: self.r },
        ))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.l, self.r)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn rejects_empty_and_non_finite() {
        assert!(Interval::new(1.0, 1.0).is_err());
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Interval::new(0.0, f64::NAN).is_err());
        assert!(Interval::symmetric(0.0).is_err());
    }

    #[test]
    fn bisect_halves() {
        let iv = Interval::new(-2.0, 6.0).unwrap();
        let (mid, left, right) = iv.bisect().unwrap();
        assert!((mid - 2.0).abs() < TOLERANCE);
        assert_eq!(left, Interval::new(-2.0, 2.0).unwrap());
        assert_eq!(right, Interval::new(2.0, 6.0).unwrap());
        assert!((left.width() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn bisect_stops_at_float_resolution() {
        let l = 1.0_f64;
        let r = f64::from_bits(l.to_bits() + 1);
        let iv = Interval::new(l, r).unwrap();
        assert!(iv.bisect().is_none());
    }

    #[test]
    fn display_format() {
        let iv = Interval::new(-1.5, 2.0).unwrap();
        assert_eq!(iv.to_string(), "(-1.5, 2)");
    }
}
