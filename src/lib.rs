//! planar - 2D geometry kernel with explicit tolerances
//!
//! Floating-point geometry rarely lands exactly on a line or an endpoint.
//! Every query in this crate that could be decided by a near miss takes the
//! accuracy it tolerates as a parameter; there are no hidden epsilons.
//!
//! The building blocks are value types generic over `f32`/`f64`:
//!
//! - [`Angle`], compared on its representative in `[0, 2π)`
//! - [`Vec2`] and [`Point2`]
//! - [`Line2`] in normal form and the [`FatLine2`] slab around it
//! - [`Segment2`], whose [`intersection`](Segment2::intersection) classifies
//!   a segment pair as [`Intersection::Empty`], a finite set of points, or an
//!   infinite [`Overlap`]
//! - [`CubicBezier2`], with clamped evaluation and de Casteljau splitting
//!
//! # Example
//!
//! ```
//! use planar::{ApproxEq, Intersection, Overlap, Point2, Segment2};
//!
//! let a: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(12.0, 12.0));
//! let b = Segment2::new(Point2::new(33.0, 33.0), Point2::new(11.0, 11.0));
//!
//! let expected = Intersection::Infinite(Overlap::Segment(Segment2::new(
//!     Point2::new(11.0, 11.0),
//!     Point2::new(12.0, 12.0),
//! )));
//! assert!(Segment2::intersection(&a, &b, 1e-12).approx_eq(&expected, 1e-12));
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `trace`-level events from the intersection classifier.

pub mod curves;
pub mod error;
pub mod intersection;
mod log;
pub mod primitives;
pub mod tolerance;

pub use curves::CubicBezier2;
pub use error::GeomError;
pub use intersection::{Intersection, Overlap};
pub use primitives::{
    distance, distance_squared, lerp, Angle, FatLine2, Line2, Point2, Segment2, Vec2,
};
pub use tolerance::{ApproxEq, ClosedRange};
