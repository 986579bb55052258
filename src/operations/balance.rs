use crate::geometry::{Cut, PointSet, Side};

/// Number of points on each side of a cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCounts {
    /// Points strictly on the positive side (above, or right of a vertical cut).
    pub positive: usize,
    /// Points within tolerance of the cut.
    pub on: usize,
    /// Points strictly on the negative side.
    pub negative: usize,
}

impl SideCounts {
    /// Total number of points counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.on + self.negative
    }

    /// Largest number of points allowed strictly on either side: `⌊n/2⌋`.
    #[must_use]
    pub fn max_allowed(&self) -> usize {
        self.total() / 2
    }

    /// Whether neither side holds more than [`SideCounts::max_allowed`] points.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let max = self.max_allowed();
        self.positive <= max && self.negative <= max
    }
}

/// Side counts of both sets for one cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReport {
    pub red: SideCounts,
    pub blue: SideCounts,
}

impl BalanceReport {
    /// Whether the cut bisects both sets.
    #[must_use]
    pub fn is_bisecting(&self) -> bool {
        self.red.is_balanced() && self.blue.is_balanced()
    }
}

/// Counts how a cut splits the red and blue point sets.
///
/// Points whose perpendicular distance to the cut is at most `tolerance` are
/// counted as lying on it.
#[derive(Debug, Clone, Copy)]
pub struct BalanceCheck {
    cut: Cut,
    tolerance: f64,
}

impl BalanceCheck {
    /// Creates a new balance check.
    #[must_use]
    pub fn new(cut: Cut, tolerance: f64) -> Self {
        Self { cut, tolerance }
    }

    /// Counts a single set.
    #[must_use]
    pub fn count(&self, set: &PointSet) -> SideCounts {
        let mut counts = SideCounts::default();
        for p in set.points() {
            match self.cut.side_of(p, self.tolerance) {
                Side::Positive => counts.positive += 1,
                Side::On => counts.on += 1,
                Side::Negative => counts.negative += 1,
            }
        }
        counts
    }

    /// Executes the check on both sets.
    #[must_use]
    pub fn execute(&self, red: &PointSet, blue: &PointSet) -> BalanceReport {
        BalanceReport {
            red: self.count(red),
            blue: self.count(blue),
        }
    }
}
