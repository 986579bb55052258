use crate::math::{Point2, Vector2};

/// A line in the primal plane that bisects both point sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cut {
    /// The vertical line `x = x`.
    Vertical { x: f64 },
    /// The line `y = slope * x + intercept`.
    NonVertical { slope: f64, intercept: f64 },
}

/// Position of a point relative to a [`Cut`].
///
/// For a non-vertical cut, `Positive` is above the line. For a vertical cut,
/// `Positive` is to the right of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Positive,
    On,
    Negative,
}

impl Cut {
    /// Returns `true` for a vertical cut.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Vertical { .. })
    }

    /// Signed perpendicular distance from `p` to the line, positive on the
    /// [`Side::Positive`] side.
    #[must_use]
    pub fn signed_distance(&self, p: &Point2) -> f64 {
        match *self {
            Self::Vertical { x } => p.x - x,
            Self::NonVertical { slope, intercept } => {
                (p.y - (slope * p.x + intercept)) / slope.hypot(1.0)
            }
        }
    }

    /// Classifies `p`; points within `tolerance` of the line are [`Side::On`].
    #[must_use]
    pub fn side_of(&self, p: &Point2, tolerance: f64) -> Side {
        let d = self.signed_distance(p);
        if d > tolerance {
            Side::Positive
        } else if d < -tolerance {
            Side::Negative
        } else {
            Side::On
        }
    }

    /// Returns whether `p` lies on the line within `tolerance`.
    #[must_use]
    pub fn contains(&self, p: &Point2, tolerance: f64) -> bool {
        self.side_of(p, tolerance) == Side::On
    }

    /// Image of this cut under `p ↦ scale * p + translation`.
    ///
    /// `scale` must be non-zero; a negative scale also flips the sides.
    #[must_use]
    pub fn mapped(&self, scale: f64, translation: &Vector2) -> Self {
        match *self {
            Self::Vertical { x } => Self::Vertical {
                x: scale * x + translation.x,
            },
            Self::NonVertical { slope, intercept } => Self::NonVertical {
                slope,
                intercept: scale * intercept + translation.y - slope * translation.x,
            },
        }
    }
}
