use crate::geometry::AffineFunction;
use crate::math::select::{lower_median_rank, select_rank};

/// Returns the value of the given 1-indexed ascending rank among
/// `functions` evaluated at `x`.
///
/// Runs in expected linear time via deterministic introselect.
///
/// Returns `None` if `rank` is zero or exceeds `functions.len()`.
#[must_use]
pub fn median_level(functions: &[AffineFunction], rank: usize, x: f64) -> Option<f64> {
    let mut values: Vec<f64> = functions.iter().map(|f| f.evaluate(x)).collect();
    select_rank(&mut values, rank)
}

/// The lower-median level of a non-empty set of affine functions.
///
/// As a function of `x` this is continuous and piecewise linear, with
/// breakpoints where functions of adjacent rank cross.
#[derive(Debug, Clone, Copy)]
pub struct MedianLevel<'a> {
    functions: &'a [AffineFunction],
    rank: usize,
}

impl<'a> MedianLevel<'a> {
    /// Creates the lower-median level of `functions`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn new(functions: &'a [AffineFunction]) -> Option<Self> {
        if functions.is_empty() {
            return None;
        }
        Some(Self {
            functions,
            rank: lower_median_rank(functions.len()),
        })
    }

    /// The underlying functions.
    #[must_use]
    pub fn functions(&self) -> &'a [AffineFunction] {
        self.functions
    }

    /// The fixed 1-indexed rank selected at every `x`.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Evaluates the level at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        // `rank` is within 1..=len by construction.
        median_level(self.functions, self.rank, x).unwrap_or(f64::NAN)
    }
}

/// Red and blue median levels sampled at one x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianLevelSample {
    pub x: f64,
    pub red: f64,
    pub blue: f64,
}

impl MedianLevelSample {
    /// `red - blue`; its sign changes exactly where the levels cross.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.red - self.blue
    }
}

/// The pair of median levels whose crossing is sought.
#[derive(Debug, Clone, Copy)]
pub struct LevelPair<'a> {
    pub red: MedianLevel<'a>,
    pub blue: MedianLevel<'a>,
}

impl<'a> LevelPair<'a> {
    /// Creates the pair.
    #[must_use]
    pub fn new(red: MedianLevel<'a>, blue: MedianLevel<'a>) -> Self {
        Self { red, blue }
    }

    /// Samples both levels at `x`.
    #[must_use]
    pub fn sample(&self, x: f64) -> MedianLevelSample {
        MedianLevelSample {
            x,
            red: self.red.evaluate(x),
            blue: self.blue.evaluate(x),
        }
    }
}
