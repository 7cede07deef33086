//! Cubic Bézier curves.
//!
//! Evaluation clamps the parameter to `[0, 1]`; subdivision uses de
//! Casteljau's construction so that split halves reproduce the original
//! curve exactly.

use crate::primitives::{FatLine2, Point2, Segment2, Vec2};
use crate::tolerance::{ApproxEq, ClosedRange};
use num_traits::{Float, FloatConst};

/// Subdivision depth at which [`CubicBezier2::to_polyline`] stops halving.
const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// A cubic Bézier curve defined by 4 control points.
///
/// The curve starts at `start`, is pulled towards `c1` and `c2`, and ends
/// at `end`.
///
/// # Example
///
/// ```
/// use planar::{CubicBezier2, Point2};
///
/// let curve: CubicBezier2<f64> = CubicBezier2::new(
///     Point2::new(-1.0, 1.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
/// );
/// assert_eq!(curve.point_at(0.5), Point2::new(0.0, 0.25));
///
/// // Parameters outside [0, 1] saturate at the endpoints.
/// assert_eq!(curve.point_at(-1.0), curve.start);
/// assert_eq!(curve.point_at(2.0), curve.end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2<F> {
    /// Start point
    pub start: Point2<F>,
    /// First control point
    pub c1: Point2<F>,
    /// Second control point
    pub c2: Point2<F>,
    /// End point
    pub end: Point2<F>,
}

impl<F: Float> CubicBezier2<F> {
    /// Creates a new cubic Bézier curve.
    #[inline]
    pub fn new(start: Point2<F>, c1: Point2<F>, c2: Point2<F>, end: Point2<F>) -> Self {
        Self { start, c1, c2, end }
    }

    /// Returns the control points in order.
    #[inline]
    pub fn control_points(&self) -> [Point2<F>; 4] {
        [self.start, self.c1, self.c2, self.end]
    }

    /// Evaluates the curve at parameter `t`, clamped to `[0, 1]`.
    ///
    /// Computes `(1-t)³·start + 3(1-t)²t·c1 + 3(1-t)t²·c2 + t³·end`.
    pub fn point_at(&self, t: F) -> Point2<F> {
        let t = ClosedRange::unit().clamp(t);
        let three = F::one() + F::one() + F::one();
        let t2 = t * t;
        let t3 = t2 * t;

        let q = F::one() - t;
        let q2 = q * q;
        let q3 = q2 * q;

        let mut v = self.start.to_vec() * q3;
        v += self.c1.to_vec() * (three * q2 * t);
        v += self.c2.to_vec() * (three * q * t2);
        v += self.end.to_vec() * t3;
        Point2::from_vec(v)
    }

    /// Splits the curve at parameter `t`, returning two new curves.
    ///
    /// The first curve runs from `start` to the split point and the second
    /// from the split point to `end`.
    pub fn split(&self, t: F) -> (Self, Self) {
        // de Casteljau's algorithm
        let l1 = [
            self.start.lerp(self.c1, t),
            self.c1.lerp(self.c2, t),
            self.c2.lerp(self.end, t),
        ];
        let l2 = [l1[0].lerp(l1[1], t), l1[1].lerp(l1[2], t)];
        let split = l2[0].lerp(l2[1], t);

        (
            Self::new(self.start, l1[0], l2[0], split),
            Self::new(split, l2[1], l1[2], self.end),
        )
    }

    /// Returns the same curve traversed from `end` to `start`.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.c2, self.c1, self.start)
    }

    /// Returns the maximum distance from the inner control points to the
    /// chord `start → end`.
    ///
    /// Used as a flatness measure for adaptive subdivision. For a closed
    /// curve (`start == end`) the distance is measured to `start`.
    pub fn flatness(&self) -> F {
        match Segment2::try_new(self.start, self.end) {
            Ok(chord) => chord
                .distance_to_point(self.c1)
                .max(chord.distance_to_point(self.c2)),
            Err(_) => self
                .start
                .distance(self.c1)
                .max(self.start.distance(self.c2)),
        }
    }

    /// Converts the curve to a polyline using adaptive subdivision.
    ///
    /// Sub-curves are halved until their [`flatness`](Self::flatness) is at
    /// most `tolerance`. The result starts at `start` and ends at `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use planar::{CubicBezier2, Point2};
    ///
    /// let curve = CubicBezier2::new(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 2.0),
    ///     Point2::new(3.0, 2.0),
    ///     Point2::new(4.0, 0.0),
    /// );
    ///
    /// let polyline = curve.to_polyline(0.1);
    /// assert!(polyline.len() >= 2);
    /// assert_eq!(polyline.first().unwrap().x, 0.0);
    /// assert_eq!(polyline.last().unwrap().x, 4.0);
    /// ```
    pub fn to_polyline(&self, tolerance: F) -> Vec<Point2<F>> {
        let mut points = vec![self.start];
        self.subdivide_recursive(tolerance, 0, &mut points);
        points
    }

    fn subdivide_recursive(&self, tolerance: F, depth: u32, points: &mut Vec<Point2<F>>) {
        if depth >= MAX_SUBDIVISION_DEPTH || self.flatness() <= tolerance {
            points.push(self.end);
        } else {
            let half = F::one() / (F::one() + F::one());
            let (left, right) = self.split(half);
            left.subdivide_recursive(tolerance, depth + 1, points);
            right.subdivide_recursive(tolerance, depth + 1, points);
        }
    }

    /// Returns the approximate arc length of the curve: the length of the
    /// polyline produced by [`to_polyline`](Self::to_polyline).
    pub fn length(&self, tolerance: F) -> F {
        self.to_polyline(tolerance)
            .windows(2)
            .fold(F::zero(), |length, pair| length + pair[0].distance(pair[1]))
    }

    /// Returns the bounding box of the curve's control points.
    ///
    /// The curve lies inside the convex hull of its control points, so this
    /// is a conservative bound.
    pub fn control_bounds(&self) -> (Point2<F>, Point2<F>) {
        let [p0, p1, p2, p3] = self.control_points();
        let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
        let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
        let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
        let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
        (Point2::new(min_x, min_y), Point2::new(max_x, max_y))
    }

    /// Returns the tangent vector `B'(t)` at the clamped parameter `t`.
    pub fn derivative_at(&self, t: F) -> Vec2<F> {
        let t = ClosedRange::unit().clamp(t);
        let three = F::one() + F::one() + F::one();
        let q = F::one() - t;

        let d0 = self.c1 - self.start;
        let d1 = self.c2 - self.c1;
        let d2 = self.end - self.c2;
        (d0 * (q * q) + d1 * ((q + q) * t) + d2 * (t * t)) * three
    }
}

impl<F: Float + FloatConst> CubicBezier2<F> {
    /// Returns the tight fat line around the curve; see
    /// [`FatLine2::bounding_cubic`].
    #[inline]
    pub fn fat_line(&self) -> Option<FatLine2<F>> {
        FatLine2::bounding_cubic(self)
    }
}

impl<F: Float> ApproxEq for CubicBezier2<F> {
    type Accuracy = F;

    /// Control points are compared pairwise.
    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        self.control_points()[..].approx_eq(&other.control_points()[..], accuracy)
    }
}
