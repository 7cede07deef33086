//! 2D point type.

use super::Vec2;
use crate::tolerance::ApproxEq;
use num_traits::Float;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// An absolute 2D position.
///
/// Points do not add to each other: subtracting two points gives a [`Vec2`],
/// and a point can be offset by a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Creates the point at the head of `vector` when its tail is at the origin.
    #[inline]
    pub fn from_vec(vector: Vec2<F>) -> Self {
        Self {
            x: vector.dx,
            y: vector.dy,
        }
    }

    /// Returns the position vector of the point (origin to `self`).
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).length_squared()
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).length()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`. Other
    /// values extrapolate along the line through both points.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }
}

/// Linearly interpolates between `a` and `b`; see [`Point2::lerp`].
#[inline]
pub fn lerp<F: Float>(a: Point2<F>, b: Point2<F>, t: F) -> Point2<F> {
    a.lerp(b, t)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<F: Float>(a: Point2<F>, b: Point2<F>) -> F {
    a.distance(b)
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared<F: Float>(a: Point2<F>, b: Point2<F>) -> F {
    a.distance_squared(b)
}

impl<F: Float> ApproxEq for Point2<F> {
    type Accuracy = F;

    /// Two points are equal if they are closer than `accuracy`.
    #[inline]
    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        self.distance(*other) < accuracy
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::from_points(self, other)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.dx,
            y: self.y + v.dy,
        }
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.dx,
            y: self.y - v.dy,
        }
    }
}

impl<F: Float> AddAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<F>) {
        *self = *self + v;
    }
}

impl<F: Float> SubAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn sub_assign(&mut self, v: Vec2<F>) {
        *self = *self - v;
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin() {
        let p: Point2<f64> = Point2::origin();
        assert_eq!(p, Point2::new(0.0, 0.0));
        assert_eq!(p, Point2::default());
    }

    #[test]
    fn test_vec_conversion() {
        let v: Vec2<f64> = Vec2::new(2.5, -1.0);
        let p = Point2::from_vec(v);
        assert_eq!(p, Point2::new(2.5, -1.0));
        assert_eq!(p.to_vec(), v);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        let b = Point2::new(4.0, 5.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance_squared(a, b), 25.0);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_lerp() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Point2::new(5.0, 10.0));
        assert_eq!(lerp(a, b, -1.0), Point2::new(-10.0, -20.0));
    }

    #[test]
    fn test_arithmetic() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        let q = Point2::new(4.0, 6.0);
        let v = q - p;
        assert_eq!(v, Vec2::new(3.0, 4.0));
        assert_eq!(p + v, q);
        assert_eq!(q - v, p);

        let mut r = p;
        r += v;
        assert_eq!(r, q);
        r -= v;
        assert_eq!(r, p);
    }

    #[test]
    fn test_approx_eq() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0, 2.0 + 1e-8);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(b.approx_eq(&a, 1e-6));
        assert!(!a.approx_eq(&b, 1e-9));
        assert_relative_eq!(a.distance(b), 1e-8, epsilon = 1e-12);
    }
}
