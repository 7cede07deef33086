//! 2D displacement vector.

use super::{Angle, Point2};
use crate::tolerance::ApproxEq;
use num_traits::{Float, FloatConst};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A free 2D displacement `(dx, dy)`.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub dx: F,
    pub dy: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(dx: F, dy: F) -> Self {
        Self { dx, dy }
    }

    /// The vector of length zero.
    #[inline]
    pub fn zero() -> Self {
        Self {
            dx: F::zero(),
            dy: F::zero(),
        }
    }

    /// Creates the vector pointing from `tail` to `head`.
    #[inline]
    pub fn from_points(head: Point2<F>, tail: Point2<F>) -> Self {
        Self {
            dx: head.x - tail.x,
            dy: head.y - tail.y,
        }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Computes the 2D cross product `dx1 * dy2 - dy1 * dx2`.
    ///
    /// This is the signed area of the parallelogram spanned by the two
    /// vectors. Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Returns the Euclidean length.
    #[inline]
    pub fn length(self) -> F {
        self.dx.hypot(self.dy)
    }

    #[inline]
    pub fn length_squared(self) -> F {
        self.dot(self)
    }

    /// Returns a unit vector with the same direction.
    ///
    /// A zero-length vector yields NaN components. Use
    /// [`try_normalized`](Self::try_normalized) when the input may be degenerate.
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    /// Returns a unit vector, or `None` if the length is zero.
    #[inline]
    pub fn try_normalized(self) -> Option<Self> {
        let length = self.length();
        if length > F::zero() {
            Some(self / length)
        } else {
            None
        }
    }

    /// Returns the vector multiplied by `factor`.
    #[inline]
    pub fn scaled_by(self, factor: F) -> Self {
        self * factor
    }

    /// Returns `true` if `a` and `b` are parallel (or anti-parallel): the
    /// magnitude of their cross product is below `accuracy`.
    ///
    /// The test is not normalized by length, so longer vectors need a
    /// proportionally larger accuracy.
    #[inline]
    pub fn are_parallel(a: Self, b: Self, accuracy: F) -> bool {
        a.cross(b).abs() < accuracy
    }
}

impl<F: Float + FloatConst> Vec2<F> {
    /// Creates the unit vector `(cos θ, sin θ)`.
    #[inline]
    pub fn from_angle(angle: Angle<F>) -> Self {
        Self {
            dx: angle.cos(),
            dy: angle.sin(),
        }
    }

    /// Returns the polar angle of the vector, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> Angle<F> {
        Angle::from_radians(self.dy.atan2(self.dx))
    }
}

impl<F: Float> ApproxEq for Vec2<F> {
    type Accuracy = F;

    /// Two vectors are equal if their difference is shorter than `accuracy`.
    #[inline]
    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        (*self - *other).length() < accuracy
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            dx: self.dx - other.dx,
            dy: self.dy - other.dy,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            dx: self.dx * scalar,
            dy: self.dy * scalar,
        }
    }
}

impl Mul<Vec2<f64>> for f64 {
    type Output = Vec2<f64>;

    #[inline]
    fn mul(self, vector: Vec2<f64>) -> Vec2<f64> {
        vector * self
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            dx: self.dx / scalar,
            dy: self.dy / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        *self = *self * scalar;
    }
}

impl<F: Float> DivAssign<F> for Vec2<F> {
    #[inline]
    fn div_assign(&mut self, scalar: F) {
        *self = *self / scalar;
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let v: Vec2<f64> = Vec2::from_points(Point2::new(4.0, 6.0), Point2::new(1.0, 2.0));
        assert_eq!(v, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_from_angle() {
        let v: Vec2<f64> = Vec2::from_angle(Angle::PI / 2.0);
        assert_relative_eq!(v.dx, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.dy, 1.0, epsilon = 1e-15);
        assert_relative_eq!(Vec2::from_angle(Angle::<f64>::from_degrees(33.0)).length(), 1.0);
    }

    #[test]
    fn test_angle() {
        let v: Vec2<f64> = Vec2::new(-1.0, 0.0);
        assert_eq!(v.angle(), Angle::PI);
        assert_relative_eq!(Vec2::<f64>::new(1.0, 1.0).angle().degrees(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_product() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_cross_product() {
        let a: Vec2<f64> = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(Vec2::<f64>::new(2.0, 3.0).cross(Vec2::new(4.0, 5.0)), -2.0);
    }

    #[test]
    fn test_length() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_normalized() {
        let n: Vec2<f64> = Vec2::new(3.0, 4.0).normalized();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.dx, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.dy, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_zero_is_nan() {
        let n: Vec2<f64> = Vec2::zero().normalized();
        assert!(n.dx.is_nan());
        assert!(n.dy.is_nan());
        assert!(Vec2::<f64>::zero().try_normalized().is_none());
    }

    #[test]
    fn test_are_parallel() {
        let a: Vec2<f64> = Vec2::new(1.0, 1.0);
        assert!(Vec2::are_parallel(a, Vec2::new(-3.0, -3.0), 1e-12));
        assert!(!Vec2::are_parallel(a, Vec2::new(1.0, 1.001), 1e-6));
        assert!(Vec2::are_parallel(a, Vec2::new(1.0, 1.001), 1e-2));
    }

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a.scaled_by(2.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v: Vec2<f64> = Vec2::new(1.0, 1.0);
        v += Vec2::new(1.0, 2.0);
        assert_eq!(v, Vec2::new(2.0, 3.0));
        v -= Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vec2::new(3.0, 6.0));
        v /= 3.0;
        assert_eq!(v, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_approx_eq() {
        let a: Vec2<f64> = Vec2::new(1.0, 1.0);
        let b = Vec2::new(1.0 + 1e-9, 1.0);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&b, 1e-12));
        assert!(a.approx_eq(&a, f64::MIN_POSITIVE));
    }
}
