//! Angle type with periodic comparison semantics.

use crate::tolerance::ApproxEq;
use num_traits::{Float, FloatConst};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// An angle stored in radians.
///
/// Equality and ordering compare the [positive normalized](Angle::positive_normalized)
/// value, so `π == -π` and `0 == 2π`. Arithmetic works on the raw value and
/// never normalizes.
///
/// Only radians are stored. Degrees are a two-way view: [`from_degrees`]
/// converts in, [`degrees`] converts out. Angles are immutable, so setting
/// a value in degrees means building a new angle with `from_degrees`.
///
/// [`from_degrees`]: Angle::from_degrees
/// [`degrees`]: Angle::degrees
///
/// # Example
///
/// ```
/// use planar::Angle;
///
/// let a: Angle<f64> = Angle::from_degrees(-40.0 - 360.0);
/// assert!((a.positive_normalized().degrees() - 320.0).abs() < 1e-9);
/// assert_eq!(Angle::<f64>::PI, -Angle::<f64>::PI);
///
/// let right = Angle::from_degrees(a.degrees() + 130.0);
/// assert!((right.positive_normalized().degrees() - 90.0).abs() < 1e-9);
/// assert!((right.positive_normalized().radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Angle<F> {
    radians: F,
}

impl Angle<f64> {
    /// Zero radians.
    pub const ZERO: Self = Self { radians: 0.0 };
    /// Half a turn.
    pub const PI: Self = Self {
        radians: std::f64::consts::PI,
    };
    /// A full turn.
    pub const TAU: Self = Self {
        radians: std::f64::consts::TAU,
    };
    /// The smallest positive angle; useful as the tightest accuracy for
    /// [`ApproxEq`].
    pub const SMALLEST: Self = Self {
        radians: 4.940_656_458_412_465_4e-324,
    };
}

impl<F: Float + FloatConst> Angle<F> {
    /// Creates an angle from a value in radians.
    #[inline]
    pub fn from_radians(radians: F) -> Self {
        Self { radians }
    }

    /// Creates an angle from a value in degrees.
    #[inline]
    pub fn from_degrees(degrees: F) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { radians: F::zero() }
    }

    #[inline]
    pub fn pi() -> Self {
        Self { radians: F::PI() }
    }

    #[inline]
    pub fn tau() -> Self {
        Self { radians: F::TAU() }
    }

    /// Value in radians, as stored.
    #[inline]
    pub fn radians(self) -> F {
        self.radians
    }

    /// Value in degrees.
    #[inline]
    pub fn degrees(self) -> F {
        self.radians.to_degrees()
    }

    /// Returns `true` if the stored value is `>= 0`.
    #[inline]
    pub fn is_non_negative(self) -> bool {
        self.radians >= F::zero()
    }

    /// Returns the equivalent angle in `[0, 2π)`.
    ///
    /// The value is reduced with a truncating remainder; a negative remainder
    /// is shifted up by a full turn.
    pub fn positive_normalized(self) -> Self {
        let tau = F::TAU();
        let mut radians = self.radians % tau;
        if radians < F::zero() {
            radians = radians + tau;
            // A tiny negative remainder can round up to a full turn.
            if radians >= tau {
                radians = F::zero();
            }
        }
        Self { radians }
    }

    /// Returns the smallest angular separation between `a` and `b`.
    ///
    /// The result is always in `[0, π]`: the distance between 1° and -360° is 1°.
    pub fn distance(a: Self, b: Self) -> Self {
        let difference = (a.positive_normalized().radians - b.positive_normalized().radians).abs();
        let complement = F::TAU() - difference;
        Self {
            radians: difference.min(complement),
        }
    }

    #[inline]
    pub fn cos(self) -> F {
        self.radians.cos()
    }

    #[inline]
    pub fn sin(self) -> F {
        self.radians.sin()
    }

    #[inline]
    pub fn tan(self) -> F {
        self.radians.tan()
    }
}

impl<F: Float + FloatConst> PartialEq for Angle<F> {
    fn eq(&self, other: &Self) -> bool {
        self.positive_normalized().radians == other.positive_normalized().radians
    }
}

impl<F: Float + FloatConst> PartialOrd for Angle<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.positive_normalized()
            .radians
            .partial_cmp(&other.positive_normalized().radians)
    }
}

impl<F: Float + FloatConst> ApproxEq for Angle<F> {
    type Accuracy = Angle<F>;

    /// Compares the angular [`distance`](Angle::distance) against `accuracy`.
    ///
    /// # Panics
    ///
    /// Panics if `accuracy` is not strictly positive.
    fn approx_eq(&self, other: &Self, accuracy: Self) -> bool {
        assert!(
            accuracy.radians > F::zero(),
            "angle accuracy must be strictly positive"
        );
        Self::distance(*self, *other).radians < accuracy.radians
    }
}

impl<F: Float + FloatConst> Default for Angle<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float> Neg for Angle<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            radians: -self.radians,
        }
    }
}

impl<F: Float> Add for Angle<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            radians: self.radians + other.radians,
        }
    }
}

impl<F: Float> Sub for Angle<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            radians: self.radians - other.radians,
        }
    }
}

impl<F: Float> AddAssign for Angle<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: Float> SubAssign for Angle<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: Float> Mul<F> for Angle<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            radians: self.radians * scalar,
        }
    }
}

impl Mul<Angle<f64>> for f64 {
    type Output = Angle<f64>;

    #[inline]
    fn mul(self, angle: Angle<f64>) -> Angle<f64> {
        angle * self
    }
}

impl<F: Float> Div<F> for Angle<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            radians: self.radians / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees() {
        assert_eq!(Angle::ZERO.degrees(), 0.0);
        assert_eq!(Angle::PI.degrees(), 180.0);
        assert_eq!(Angle::TAU.degrees(), 360.0);
        assert_relative_eq!(Angle::from_degrees(90.0).radians(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_degrees_round_trip() {
        for degrees in [-720.0, -45.0, 0.0, 12.5, 270.0, 1080.0] {
            let angle: Angle<f64> = Angle::from_degrees(degrees);
            assert_relative_eq!(angle.degrees(), degrees, epsilon = 1e-9);
            assert_eq!(Angle::from_radians(angle.radians()), angle);
        }
    }

    #[test]
    fn test_is_non_negative() {
        assert!(Angle::PI.is_non_negative());
        assert!(Angle::ZERO.is_non_negative());
        assert!(Angle::from_radians(1e-12).is_non_negative());
        assert!(!Angle::from_radians(-1e-12).is_non_negative());
        assert!(!Angle::from_radians(-1.0).is_non_negative());
    }

    #[test]
    fn test_positive_normalized() {
        assert_eq!(Angle::ZERO.positive_normalized().radians(), 0.0);
        assert_eq!(Angle::PI.positive_normalized().radians(), Angle::PI.radians());
        assert_eq!((-Angle::PI).positive_normalized().radians(), Angle::PI.radians());
        assert_eq!(Angle::TAU.positive_normalized().radians(), 0.0);
        assert_eq!(
            Angle::from_degrees(-40.0 - 360.0).positive_normalized().radians(),
            Angle::from_degrees(360.0 - 40.0).radians()
        );
        assert_relative_eq!(
            Angle::from_degrees(-40.0 - 720.0).positive_normalized().radians(),
            Angle::from_degrees(320.0).radians(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_positive_normalized_range() {
        for k in -20..20 {
            let a = Angle::from_radians(0.37 * k as f64);
            let r = a.positive_normalized().radians();
            assert!((0.0..std::f64::consts::TAU).contains(&r), "{r} out of range");
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Angle::distance(Angle::ZERO, Angle::ZERO), Angle::ZERO);
        assert_eq!(Angle::distance(Angle::ZERO, Angle::TAU), Angle::ZERO);
        assert_eq!(Angle::distance(Angle::ZERO, 2.0 * Angle::TAU), Angle::ZERO);
        assert_eq!(Angle::distance(Angle::ZERO, Angle::PI), Angle::PI);
        assert_eq!(Angle::distance(Angle::ZERO, 3.0 * Angle::PI), Angle::PI);
        assert_eq!(Angle::distance(Angle::ZERO, -Angle::PI), Angle::PI);
        assert_eq!(Angle::distance(Angle::ZERO, -Angle::PI * 0.5), Angle::PI * 0.5);
    }

    #[test]
    fn test_distance_wraps_around() {
        let a = Angle::from_degrees(1.0);
        let b = Angle::from_degrees(-360.0);
        assert_relative_eq!(Angle::distance(a, b).degrees(), 1.0, epsilon = 1e-9);

        let c = Angle::from_degrees(350.0);
        let d = Angle::from_degrees(10.0);
        assert_relative_eq!(Angle::distance(c, d).degrees(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compare() {
        assert!(!(Angle::ZERO < Angle::ZERO));
        assert!(Angle::ZERO < Angle::PI);
        assert!(Angle::ZERO < -Angle::PI);
        assert!(Angle::TAU < Angle::PI);
        assert!(Angle::TAU * 3.0 < Angle::PI);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Angle::ZERO, Angle::ZERO);
        assert_ne!(Angle::ZERO, Angle::PI);
        assert_eq!(Angle::PI, -Angle::PI);
        assert_eq!(Angle::TAU, 2.0 * Angle::PI);
        assert_eq!(Angle::TAU, Angle::ZERO);
    }

    #[test]
    fn test_approx_eq() {
        let tight = Angle::SMALLEST;
        assert!(Angle::ZERO.approx_eq(&Angle::ZERO, tight));
        assert!(Angle::PI.approx_eq(&-Angle::PI, tight));
        assert!(Angle::TAU.approx_eq(&(2.0 * Angle::PI), tight));
        assert!(Angle::TAU.approx_eq(&Angle::ZERO, tight));
        assert!((-Angle::TAU).approx_eq(&Angle::ZERO, tight));
        assert!(Angle::TAU.approx_eq(&(-2.0 * Angle::PI), tight));
        assert!(Angle::TAU.approx_eq(&(66.0 * Angle::PI), Angle::from_radians(1e-14)));
        assert!(!Angle::ZERO.approx_eq(&Angle::from_degrees(1.0), Angle::from_degrees(0.5)));
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_approx_eq_rejects_zero_accuracy() {
        Angle::PI.approx_eq(&Angle::PI, Angle::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Angle::from_radians(1.0);
        a += Angle::from_radians(0.5);
        assert_eq!(a.radians(), 1.5);
        a -= Angle::from_radians(2.0);
        assert_eq!(a.radians(), -0.5);
        assert_eq!((a * 4.0).radians(), -2.0);
        assert_eq!((a / 2.0).radians(), -0.25);
        assert_eq!((-a).radians(), 0.5);
    }

    #[test]
    fn test_trig() {
        let a: Angle<f64> = Angle::from_degrees(60.0);
        assert_relative_eq!(a.cos(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(a.sin(), 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(Angle::<f64>::from_degrees(45.0).tan(), 1.0, epsilon = 1e-12);
    }
}
