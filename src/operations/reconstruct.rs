use super::duality::{dual_point_to_line, DualCrossing};
use crate::geometry::Cut;

/// Maps a dual crossing back to the primal cut.
#[must_use]
pub fn reconstruct(crossing: DualCrossing) -> Cut {
    match crossing {
        DualCrossing::Point { slope, value } => dual_point_to_line(slope, value),
        DualCrossing::Vertical { x } => Cut::Vertical { x },
    }
}
