//! Results of intersection queries.

use crate::primitives::{Line2, Point2, Segment2};
use crate::tolerance::ApproxEq;
use num_traits::{Float, FloatConst};

/// The continuum shared by two coinciding inputs.
#[derive(Debug, Clone, Copy)]
pub enum Overlap<F> {
    /// The inputs share a line segment.
    Segment(Segment2<F>),
    /// The inputs are the same infinite line.
    Line(Line2<F>),
}

/// Outcome of intersecting two geometric objects.
///
/// # Example
///
/// ```
/// use planar::{Intersection, Point2, Segment2};
///
/// let a: Segment2<f64> = Segment2::new(Point2::new(-33.0, 0.0), Point2::new(33.0, 0.0));
/// let b = Segment2::new(Point2::new(0.0, 1.0), Point2::new(0.0, -1.0));
/// assert_eq!(
///     Segment2::intersection(&a, &b, 1e-12),
///     Intersection::Finite(vec![Point2::origin()])
/// );
/// ```
#[derive(Debug, Clone)]
pub enum Intersection<F> {
    /// No common points.
    Empty,
    /// Finitely many isolated common points, in order of discovery.
    Finite(Vec<Point2<F>>),
    /// Infinitely many common points, described by the overlap.
    Infinite(Overlap<F>),
}

impl<F> Intersection<F> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Intersection::Infinite(_))
    }

    /// Returns the isolated intersection points; empty unless the result is
    /// [`Intersection::Finite`].
    pub fn points(&self) -> &[Point2<F>] {
        match self {
            Intersection::Finite(points) => points,
            _ => &[],
        }
    }

    pub fn overlap(&self) -> Option<&Overlap<F>> {
        match self {
            Intersection::Infinite(overlap) => Some(overlap),
            _ => None,
        }
    }
}

impl<F: Float + FloatConst> PartialEq for Overlap<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Overlap::Segment(a), Overlap::Segment(b)) => a == b,
            (Overlap::Line(a), Overlap::Line(b)) => a == b,
            _ => false,
        }
    }
}

impl<F: Float + FloatConst> PartialEq for Intersection<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Intersection::Empty, Intersection::Empty) => true,
            (Intersection::Finite(a), Intersection::Finite(b)) => a == b,
            (Intersection::Infinite(a), Intersection::Infinite(b)) => a == b,
            _ => false,
        }
    }
}

impl<F: Float + FloatConst> ApproxEq for Overlap<F> {
    type Accuracy = F;

    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        match (self, other) {
            (Overlap::Segment(a), Overlap::Segment(b)) => a.approx_eq(b, accuracy),
            (Overlap::Line(a), Overlap::Line(b)) => a.approx_eq(b, accuracy),
            _ => false,
        }
    }
}

impl<F: Float + FloatConst> ApproxEq for Intersection<F> {
    type Accuracy = F;

    /// Variants must match; points are compared element-wise and overlaps
    /// by their payload.
    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        match (self, other) {
            (Intersection::Empty, Intersection::Empty) => true,
            (Intersection::Finite(a), Intersection::Finite(b)) => a.approx_eq(b, accuracy),
            (Intersection::Infinite(a), Intersection::Infinite(b)) => a.approx_eq(b, accuracy),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Angle;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment2<f64> {
        Segment2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn test_accessors() {
        let empty: Intersection<f64> = Intersection::Empty;
        assert!(empty.is_empty());
        assert!(empty.points().is_empty());
        assert!(empty.overlap().is_none());

        let finite = Intersection::Finite(vec![Point2::new(1.0, 2.0)]);
        assert_eq!(finite.points(), &[Point2::new(1.0, 2.0)]);
        assert!(!finite.is_infinite());

        let infinite = Intersection::Infinite(Overlap::Segment(segment(0.0, 0.0, 1.0, 0.0)));
        assert!(infinite.is_infinite());
        assert_eq!(
            infinite.overlap(),
            Some(&Overlap::Segment(segment(0.0, 0.0, 1.0, 0.0)))
        );
    }

    #[test]
    fn test_variants_differ() {
        let finite: Intersection<f64> = Intersection::Finite(vec![Point2::origin()]);
        let infinite = Intersection::Infinite(Overlap::Segment(segment(0.0, 0.0, 1.0, 0.0)));
        assert_ne!(finite, Intersection::Empty);
        assert_ne!(finite, infinite);
        assert!(!finite.approx_eq(&infinite, 1.0));
        assert!(!Intersection::Empty.approx_eq(&finite, 1.0));
    }

    #[test]
    fn test_approx_eq_finite() {
        let a: Intersection<f64> = Intersection::Finite(vec![Point2::new(1.0, 1.0)]);
        let b = Intersection::Finite(vec![Point2::new(1.0, 1.0 + 1e-9)]);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&b, 1e-12));

        let two = Intersection::Finite(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)]);
        assert!(!a.approx_eq(&two, 1.0));
    }

    #[test]
    fn test_approx_eq_overlap() {
        let a = Overlap::Segment(segment(0.0, 0.0, 1.0, 0.0));
        let b = Overlap::Segment(segment(0.0, 1e-9, 1.0, 0.0));
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&b, 1e-12));

        let line = Overlap::Line(Line2::new(Angle::ZERO, 0.0));
        assert!(!a.approx_eq(&line, 1.0));
        assert!(line.approx_eq(&line, 1e-12));
    }
}
