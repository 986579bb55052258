use std::fmt;

use crate::error::{InputError, Result};
use crate::math::Point2;

/// Which of the two input sets a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

/// A non-empty, ordered set of finite points of one color.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    color: Color,
    points: Vec<Point2>,
}

impl PointSet {
    /// Creates a point set.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyPointSet` if `points` is empty, or
    /// `InputError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    pub fn new(color: Color, points: Vec<Point2>) -> Result<Self> {
        if points.is_empty() {
            return Err(InputError::EmptyPointSet { color }.into());
        }
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InputError::NonFiniteCoordinate {
                color,
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }
        Ok(Self { color, points })
    }

    /// Creates a point set from `(x, y)` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Same as [`PointSet::new`].
    pub fn from_coords(color: Color, coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(
            color,
            coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        )
    }

    /// Returns the color of this set.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the points in input order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; point sets are validated non-empty on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HamCutError;

    #[test]
    fn from_coords_keeps_order() {
        let set = PointSet::from_coords(Color::Red, &[(1.0, 2.0), (-3.0, 4.0)]).unwrap();
        assert_eq!(set.color(), Color::Red);
        assert_eq!(set.len(), 2);
        assert_eq!(set.points()[1], Point2::new(-3.0, 4.0));
    }

    #[test]
    fn empty_set_rejected() {
        let err = PointSet::new(Color::Blue, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            HamCutError::Input(InputError::EmptyPointSet { color: Color::Blue })
        ));
    }

    #[test]
    fn non_finite_rejected() {
        let err =
            PointSet::from_coords(Color::Red, &[(0.0, 0.0), (f64::INFINITY, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            HamCutError::Input(InputError::NonFiniteCoordinate { index: 1, .. })
        ));
        assert_eq!(
            err.to_string(),
            "red point 1 has a non-finite coordinate (inf, 1)"
        );
    }
}
