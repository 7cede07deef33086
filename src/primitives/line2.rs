//! 2D infinite line in normal form.

use super::{Angle, Point2, Vec2};
use crate::intersection::{Intersection, Overlap};
use crate::tolerance::ApproxEq;
use num_traits::{Float, FloatConst};

/// A 2D infinite line in normal form.
///
/// The line is described by its normal segment: the perpendicular dropped
/// from the origin onto the line. `angle` is the inclination of that
/// perpendicular and `distance_from_origin` its length, so the line is the
/// set of points `P` with `P · (cos angle, sin angle) == distance_from_origin`.
///
/// # Example
///
/// ```
/// use planar::{Angle, Line2, Point2};
///
/// // Horizontal line through y = 1
/// let line: Line2<f64> = Line2::new(Angle::PI / 2.0, 1.0);
/// assert!(line.contains(Point2::new(5.0, 1.0), 1e-12));
/// assert!((line.signed_distance(Point2::new(5.0, 3.0)) - 2.0).abs() < 1e-12);
/// assert!((line.signed_distance(Point2::new(5.0, -1.0)) + 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Line2<F> {
    /// Inclination of the normal segment.
    pub angle: Angle<F>,
    /// Length of the normal segment.
    pub distance_from_origin: F,
}

impl<F: Float + FloatConst> Line2<F> {
    #[inline]
    pub fn new(angle: Angle<F>, distance_from_origin: F) -> Self {
        Self {
            angle,
            distance_from_origin,
        }
    }

    /// Creates the line passing through `p` and `q`.
    ///
    /// The normal is oriented so that `distance_from_origin >= 0`. Returns
    /// `None` if the points coincide or the result is not finite (NaN
    /// coordinates, or a difference that overflows).
    pub fn through_points(p: Point2<F>, q: Point2<F>) -> Option<Self> {
        let direction = q - p;
        let normal = Vec2::new(-direction.dy, direction.dx).try_normalized()?;
        let distance = p.to_vec().dot(normal);
        if !(normal.dx.is_finite() && normal.dy.is_finite() && distance.is_finite()) {
            return None;
        }

        let (normal, distance) = if distance < F::zero() {
            (-normal, -distance)
        } else {
            (normal, distance)
        };

        Some(Self {
            angle: normal.angle(),
            distance_from_origin: distance,
        })
    }

    /// Returns the unit normal `(cos angle, sin angle)`.
    #[inline]
    pub fn normal(&self) -> Vec2<F> {
        Vec2::from_angle(self.angle)
    }

    /// Returns a unit vector along the line.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        let n = self.normal();
        Vec2::new(-n.dy, n.dx)
    }

    /// Returns the foot of the normal segment, the point of the line closest
    /// to the origin.
    #[inline]
    pub fn point_closest_to_origin(&self) -> Point2<F> {
        Point2::from_vec(self.normal() * self.distance_from_origin)
    }

    /// Returns the signed distance from `point` to the line.
    ///
    /// Positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        point.to_vec().dot(self.normal()) - self.distance_from_origin
    }

    /// Returns the unsigned distance from `point` to the line.
    #[inline]
    pub fn distance(&self, point: Point2<F>) -> F {
        self.signed_distance(point).abs()
    }

    /// Returns `true` if `point` is closer than `accuracy` to the line.
    #[inline]
    pub fn contains(&self, point: Point2<F>, accuracy: F) -> bool {
        self.distance(point) < accuracy
    }

    /// Projects `point` onto the line.
    #[inline]
    pub fn closest_point(&self, point: Point2<F>) -> Point2<F> {
        point - self.normal() * self.signed_distance(point)
    }

    /// Intersects two infinite lines.
    ///
    /// Lines whose normals are parallel within `accuracy` are either the same
    /// line ([`Intersection::Infinite`]) or disjoint. Otherwise the single
    /// crossing point is returned.
    pub fn intersection(lhs: &Self, rhs: &Self, accuracy: F) -> Intersection<F> {
        let n1 = lhs.normal();
        let n2 = rhs.normal();
        let determinant = n1.cross(n2);

        if determinant.abs() < accuracy {
            return if lhs.approx_eq(rhs, accuracy) {
                Intersection::Infinite(Overlap::Line(*lhs))
            } else {
                Intersection::Empty
            };
        }

        let d1 = lhs.distance_from_origin;
        let d2 = rhs.distance_from_origin;
        let x = (d1 * n2.dy - n1.dy * d2) / determinant;
        let y = (n1.dx * d2 - d1 * n2.dx) / determinant;
        Intersection::Finite(vec![Point2::new(x, y)])
    }
}

impl<F: Float + FloatConst> ApproxEq for Line2<F> {
    type Accuracy = F;

    /// Compares the normal angles and distances. `(θ, d)` and `(θ + π, -d)`
    /// describe the same line and compare equal.
    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        let close = |a: Angle<F>, b: Angle<F>| Angle::distance(a, b).radians() < accuracy;

        let same = close(self.angle, other.angle)
            && (self.distance_from_origin - other.distance_from_origin).abs() < accuracy;
        let flipped = close(self.angle, other.angle + Angle::pi())
            && (self.distance_from_origin + other.distance_from_origin).abs() < accuracy;
        same || flipped
    }
}

impl<F: Float + FloatConst> PartialEq for Line2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.angle == other.angle && self.distance_from_origin == other.distance_from_origin
    }
}
