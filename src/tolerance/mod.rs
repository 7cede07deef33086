//! Approximate equality and tolerant interval arithmetic.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod range;

pub use range::ClosedRange;

/// Equality within a caller-supplied accuracy.
///
/// Each implementer picks the type its accuracy is measured in: scalars and
/// points use a plain distance, [`Angle`](crate::Angle) uses an angle.
///
/// Implementations are reflexive and symmetric for any fixed positive
/// accuracy. They are not transitive.
///
/// # Example
///
/// ```
/// use planar::{ApproxEq, Point2};
///
/// let a: Point2<f64> = Point2::new(1.0, 1.0);
/// let b = Point2::new(1.0, 1.0 + 1e-9);
/// assert!(a.approx_eq(&b, 1e-6));
/// assert!(!a.approx_eq(&b, 1e-12));
/// ```
pub trait ApproxEq {
    /// Unit the accuracy is expressed in.
    type Accuracy: Copy;

    /// Returns `true` if `self` and `other` differ by less than `accuracy`.
    fn approx_eq(&self, other: &Self, accuracy: Self::Accuracy) -> bool;
}

macro_rules! impl_approx_eq_scalar {
    ($($t:ty),*) => {
        $(
            impl ApproxEq for $t {
                type Accuracy = $t;

                #[inline]
                fn approx_eq(&self, other: &Self, accuracy: $t) -> bool {
                    (self - other).abs() < accuracy
                }
            }
        )*
    };
}

impl_approx_eq_scalar!(f32, f64);

impl<T: ApproxEq> ApproxEq for [T] {
    type Accuracy = T::Accuracy;

    /// Slices must have the same length and agree element-wise.
    fn approx_eq(&self, other: &Self, accuracy: Self::Accuracy) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.approx_eq(b, accuracy))
    }
}

impl<T: ApproxEq> ApproxEq for Vec<T> {
    type Accuracy = T::Accuracy;

    #[inline]
    fn approx_eq(&self, other: &Self, accuracy: Self::Accuracy) -> bool {
        self.as_slice().approx_eq(other.as_slice(), accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_strict() {
        assert!(1.0_f64.approx_eq(&1.05, 0.1));
        assert!(!1.0_f64.approx_eq(&1.1, 0.05));
        // Strict comparison: a zero difference needs a positive accuracy.
        assert!(!0.0_f64.approx_eq(&0.0, 0.0));
        assert!(0.0_f64.approx_eq(&0.0, f64::MIN_POSITIVE));
    }

    #[test]
    fn test_scalar_symmetric() {
        let a = 3.25_f64;
        let b = 3.2500001_f64;
        assert_eq!(a.approx_eq(&b, 1e-6), b.approx_eq(&a, 1e-6));
    }

    #[test]
    fn test_slices() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0_f64, 2.0 + 1e-9, 3.0];
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&b, 1e-12));
    }

    #[test]
    fn test_slices_length_mismatch() {
        let a = vec![1.0_f64, 2.0];
        let b = vec![1.0_f64, 2.0, 3.0];
        assert!(!a.approx_eq(&b, 1.0));
        assert!(!b.approx_eq(&a, 1.0));
    }
}
