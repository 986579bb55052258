pub mod affine;
pub mod cut;
pub mod interval;
pub mod point_set;

pub use affine::AffineFunction;
pub use cut::{Cut, Side};
pub use interval::Interval;
pub use point_set::{Color, PointSet};
