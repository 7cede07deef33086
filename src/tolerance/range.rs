//! Closed scalar intervals with tolerant membership tests.

use super::ApproxEq;
use num_traits::Float;

/// A closed interval `[lower, upper]` over a floating-point scalar.
///
/// Always satisfies `lower <= upper` for non-NaN bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedRange<F> {
    lower: F,
    upper: F,
}

impl<F: Float> ClosedRange<F> {
    /// Creates the interval spanned by `a` and `b`, in either order.
    #[inline]
    pub fn new(a: F, b: F) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    /// The interval `[0, 1]`, the parameter domain of segments and curves.
    #[inline]
    pub fn unit() -> Self {
        Self {
            lower: F::zero(),
            upper: F::one(),
        }
    }

    #[inline]
    pub fn lower(self) -> F {
        self.lower
    }

    #[inline]
    pub fn upper(self) -> F {
        self.upper
    }

    #[inline]
    pub fn length(self) -> F {
        self.upper - self.lower
    }

    /// Returns `true` if `x` lies in the interval.
    #[inline]
    pub fn contains(self, x: F) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Returns `true` if `x` lies in `[lower - accuracy, upper + accuracy]`.
    #[inline]
    pub fn contains_approx(self, x: F, accuracy: F) -> bool {
        self.lower - accuracy <= x && x <= self.upper + accuracy
    }

    /// Returns `true` if the two intervals share a point once both are
    /// widened by `accuracy`.
    ///
    /// Unlike an endpoint-containment test this also detects `other`
    /// strictly containing `self`.
    #[inline]
    pub fn overlaps_approx(self, other: Self, accuracy: F) -> bool {
        self.lower - accuracy <= other.upper && other.lower <= self.upper + accuracy
    }

    /// Returns the common sub-interval, or `None` if the intervals are disjoint.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        if lower <= upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// Clamps `x` into the interval.
    #[inline]
    pub fn clamp(self, x: F) -> F {
        x.max(self.lower).min(self.upper)
    }
}

impl<F: Float> ApproxEq for ClosedRange<F> {
    type Accuracy = F;

    fn approx_eq(&self, other: &Self, accuracy: F) -> bool {
        (self.lower - other.lower).abs() < accuracy && (self.upper - other.upper).abs() < accuracy
    }
}
