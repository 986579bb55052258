/// An affine function `y = slope * x + intercept`, i.e. a non-vertical line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineFunction {
    /// Coefficient of `x`.
    pub slope: f64,
    /// Value at `x = 0`.
    pub intercept: f64,
}

impl AffineFunction {
    /// Creates a new affine function.
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns the x-coordinate where `self` and `other` take the same value.
    ///
    /// Returns `None` for parallel (including identical) functions.
    #[must_use]
    pub fn crossing_x(&self, other: &Self) -> Option<f64> {
        let ds = self.slope - other.slope;
        if ds == 0.0 {
            return None;
        }
        Some((other.intercept - self.intercept) / ds)
    }
}
