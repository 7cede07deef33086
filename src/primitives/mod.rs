//! Floating-point geometric primitives and operations.

mod angle;
mod fat_line2;
mod line2;
mod point2;
mod segment2;
mod vec2;

pub use angle::Angle;
pub use fat_line2::FatLine2;
pub use line2::Line2;
pub use point2::{distance, distance_squared, lerp, Point2};
pub use segment2::Segment2;
pub use vec2::Vec2;
