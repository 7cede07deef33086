//! 2D line segment and segment/segment intersection.

use super::{Line2, Point2, Vec2};
use crate::error::GeomError;
use crate::intersection::{Intersection, Overlap};
use crate::log::trace;
use crate::tolerance::{ApproxEq, ClosedRange};
use num_traits::{Float, FloatConst};

/// A 2D line segment between two distinct points.
///
/// Generic over floating-point types (`f32` or `f64`). The endpoints are
/// private so the `start != end` invariant cannot be broken after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    start: Point2<F>,
    end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a segment from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `start == end`; a degenerate segment has no direction.
    /// Use [`try_new`](Self::try_new) to handle that case.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        match Self::try_new(start, end) {
            Ok(segment) => segment,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a segment, or returns [`GeomError::DegenerateSegment`] if the
    /// endpoints coincide.
    #[inline]
    pub fn try_new(start: Point2<F>, end: Point2<F>) -> Result<Self, GeomError> {
        if start == end {
            Err(GeomError::DegenerateSegment)
        } else {
            Ok(Self { start, end })
        }
    }

    /// Creates a segment from coordinate pairs.
    ///
    /// # Panics
    ///
    /// Panics if both endpoints are the same point.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.end
    }

    /// Returns the vector from start to end.
    #[inline]
    pub fn vector(&self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> F {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn length_squared(&self) -> F {
        self.start.distance_squared(self.end)
    }

    /// The closed range of x-coordinates covered by the segment.
    #[inline]
    pub fn x_range(&self) -> ClosedRange<F> {
        ClosedRange::new(self.start.x, self.end.x)
    }

    /// The closed range of y-coordinates covered by the segment.
    #[inline]
    pub fn y_range(&self) -> ClosedRange<F> {
        ClosedRange::new(self.start.y, self.end.y)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        let half = F::one() / (F::one() + F::one());
        self.point_at(half)
    }

    /// Returns the segment translated by `vector`.
    #[inline]
    pub fn offset_by(&self, vector: Vec2<F>) -> Self {
        Self {
            start: self.start + vector,
            end: self.end + vector,
        }
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(&self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.vector();
        let t = (p - self.start).dot(v) / v.length_squared();
        let t = ClosedRange::unit().clamp(t);
        (self.point_at(t), t)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(&self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance(closest)
    }

    /// Intersects two segments with tolerance `accuracy`.
    ///
    /// The same `accuracy` drives every comparison: the parallel and
    /// collinear tests (on raw cross products, so they scale with segment
    /// length), the overlap test on the parameter range and the endpoint
    /// inclusion of the crossing parameters. Touching at an endpoint counts
    /// as intersecting.
    ///
    /// Returns:
    /// - [`Intersection::Infinite`] with the shared sub-segment when the
    ///   segments are collinear and overlap; it runs towards increasing x, or
    ///   increasing y when vertical, whatever the input orientations
    /// - [`Intersection::Finite`] with a single point of `lhs` when they cross
    ///   or touch, including collinear segments that only share an endpoint
    /// - [`Intersection::Empty`] otherwise
    ///
    /// If the segments are so close to parallel that the cross product is
    /// nonzero but below what the tolerance gap catches, the parameters are
    /// computed with IEEE arithmetic and may be infinite or NaN, in which case
    /// the result is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use planar::{Intersection, Overlap, Point2, Segment2};
    ///
    /// let a: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(12.0, 12.0));
    /// let b = Segment2::new(Point2::new(33.0, 33.0), Point2::new(11.0, 11.0));
    /// let expected = Segment2::new(Point2::new(11.0, 11.0), Point2::new(12.0, 12.0));
    /// assert_eq!(
    ///     Segment2::intersection(&a, &b, 1e-12),
    ///     Intersection::Infinite(Overlap::Segment(expected))
    /// );
    /// ```
    pub fn intersection(lhs: &Self, rhs: &Self, accuracy: F) -> Intersection<F> {
        let start_vector = rhs.start - lhs.start;
        let lhs_vector = lhs.vector();
        let rhs_vector = rhs.vector();
        let parallel = Vec2::are_parallel(lhs_vector, rhs_vector, accuracy);
        let collinear = Vec2::are_parallel(start_vector, lhs_vector, accuracy);

        match (parallel, collinear) {
            (true, true) => Self::collinear_intersection(lhs, rhs, accuracy),
            (true, false) => {
                trace!("segments lie on distinct parallel lines");
                Intersection::Empty
            }
            (false, _) => {
                // Cramer's rule on lhs.start + t * lhs_vector == rhs.start + u * rhs_vector
                let denominator = lhs_vector.cross(rhs_vector);
                let t = start_vector.cross(rhs_vector) / denominator;
                let u = start_vector.cross(lhs_vector) / denominator;
                let unit = ClosedRange::unit();

                if unit.contains_approx(t, accuracy) && unit.contains_approx(u, accuracy) {
                    trace!(t = ?t.to_f64(), u = ?u.to_f64(), "segments cross");
                    Intersection::Finite(vec![lhs.start + lhs_vector * t])
                } else {
                    trace!(t = ?t.to_f64(), u = ?u.to_f64(), "carrier lines cross outside the segments");
                    Intersection::Empty
                }
            }
        }
    }

    /// Like [`intersection`](Self::intersection), but rejects an accuracy that
    /// is not strictly positive and finite.
    pub fn try_intersection(
        lhs: &Self,
        rhs: &Self,
        accuracy: F,
    ) -> Result<Intersection<F>, GeomError> {
        if accuracy > F::zero() && accuracy.is_finite() {
            Ok(Self::intersection(lhs, rhs, accuracy))
        } else {
            Err(GeomError::InvalidTolerance)
        }
    }

    /// Both segments lie on the same line. Projects rhs onto lhs's parameter
    /// axis (lhs spans `[0, 1]`) and keeps the common part.
    fn collinear_intersection(lhs: &Self, rhs: &Self, accuracy: F) -> Intersection<F> {
        let lhs_vector = lhs.vector();
        let length_squared = lhs_vector.length_squared();
        let parameter = |p: Point2<F>| (p - lhs.start).dot(lhs_vector) / length_squared;

        // rhs's endpoints with their parameters, ordered along lhs.
        let mut near = (parameter(rhs.start), rhs.start);
        let mut far = (parameter(rhs.end), rhs.end);
        if rhs.vector().dot(lhs_vector) < F::zero() {
            std::mem::swap(&mut near, &mut far);
        }

        let rhs_range = ClosedRange::new(near.0, far.0);
        if !ClosedRange::unit().overlaps_approx(rhs_range, accuracy) {
            trace!("collinear segments are disjoint");
            return Intersection::Empty;
        }

        // Endpoints of the overlap are endpoints of either input.
        let (lower, overlap_start) = if near.0 > F::zero() {
            near
        } else {
            (F::zero(), lhs.start)
        };
        let (upper, overlap_end) = if far.0 < F::one() {
            far
        } else {
            (F::one(), lhs.end)
        };

        if upper - lower <= accuracy || overlap_start == overlap_end {
            trace!("collinear segments touch at a single point");
            // rhs may start past lhs.end by up to `accuracy`.
            let point = if lower > F::one() { lhs.end } else { overlap_start };
            return Intersection::Finite(vec![point]);
        }

        // Orient by increasing x, then by increasing y.
        let direction = overlap_end - overlap_start;
        let (overlap_start, overlap_end) = if direction.dx < F::zero()
            || (direction.dx == F::zero() && direction.dy < F::zero())
        {
            (overlap_end, overlap_start)
        } else {
            (overlap_start, overlap_end)
        };

        trace!(
            lower = ?lower.to_f64(),
            upper = ?upper.to_f64(),
            "collinear segments overlap"
        );
        Intersection::Infinite(Overlap::Segment(Self {
            start: overlap_start,
            end: overlap_end,
        }))
    }
}

impl<F: Float + FloatConst> Segment2<F> {
    /// Returns the infinite line through the segment, in normal form.
    ///
    /// Returns `None` if the line is not representable, e.g. when a
    /// coordinate is NaN or the endpoint difference overflows.
    #[inline]
    pub fn line(&self) -> Option<Line2<F>> {
        Line2::through_points(self.start, self.end)
    }
}

impl<F: Float> ApproxEq for Segment2<F> {
    type Accuracy = F;

    /// Starts and ends must each be closer than `accuracy`. Orientation
    /// matters: a segment is not approximately equal to its reversal.
    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        self.start.approx_eq(&other.start, accuracy) && self.end.approx_eq(&other.end, accuracy)
    }
}

impl<F: Float> TryFrom<(Point2<F>, Point2<F>)> for Segment2<F> {
    type Error = GeomError;

    fn try_from((start, end): (Point2<F>, Point2<F>)) -> Result<Self, GeomError> {
        Self::try_new(start, end)
    }
}
