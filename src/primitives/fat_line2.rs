//! Slab bounded by two lines parallel to a reference line.

use super::{Line2, Point2, Segment2};
use crate::curves::CubicBezier2;
use crate::error::GeomError;
use crate::tolerance::ClosedRange;
use num_traits::{Float, FloatConst};

/// The region between two parallels to a reference line.
///
/// A point belongs to the fat line when its signed distance from `line`
/// falls inside `[d_min, d_max]`. Fat lines are used to bound curves tightly
/// in clipping algorithms.
///
/// # Example
///
/// ```
/// use planar::{Angle, FatLine2, Line2, Point2};
///
/// let line: Line2<f64> = Line2::new(Angle::PI / 2.0, 1.0);
/// let slab = FatLine2::new(line, -1.0, 5.0);
/// assert!(slab.contains(Point2::new(0.0, 3.0), 1e-12));
/// assert!((slab.distance(Point2::new(0.0, -5.0)) - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FatLine2<F> {
    /// Reference line the distance range is measured from.
    pub line: Line2<F>,
    range: ClosedRange<F>,
}

impl<F: Float + FloatConst> FatLine2<F> {
    /// Creates a fat line from its reference line and distance bounds.
    ///
    /// # Panics
    ///
    /// Panics if `d_min > d_max` or either bound is NaN.
    pub fn new(line: Line2<F>, d_min: F, d_max: F) -> Self {
        match Self::try_new(line, d_min, d_max) {
            Ok(fat_line) => fat_line,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a fat line, rejecting an inverted or NaN distance range.
    pub fn try_new(line: Line2<F>, d_min: F, d_max: F) -> Result<Self, GeomError> {
        if d_min <= d_max {
            Ok(Self {
                line,
                range: ClosedRange::new(d_min, d_max),
            })
        } else {
            Err(GeomError::InvalidRange {
                min: d_min.to_f64().unwrap_or(f64::NAN),
                max: d_max.to_f64().unwrap_or(f64::NAN),
            })
        }
    }

    /// Creates a fat line from an already ordered distance range.
    #[inline]
    pub fn from_range(line: Line2<F>, range: ClosedRange<F>) -> Self {
        Self { line, range }
    }

    /// Creates a fat line whose reference line carries `segment`.
    pub fn around_segment(segment: &Segment2<F>, d_min: F, d_max: F) -> Result<Self, GeomError> {
        let line = segment.line().ok_or(GeomError::DegenerateSegment)?;
        Self::try_new(line, d_min, d_max)
    }

    /// Builds the tight fat line bounding a cubic Bézier curve.
    ///
    /// The reference line is the chord `start → end`. With `d1` and `d2`
    /// the signed distances of the inner control points, the range is
    /// `k · [min(0, d1, d2), max(0, d1, d2)]` where `k = 3/4` when both
    /// control points lie on the same side of the chord and `4/9`
    /// otherwise. Returns `None` for a closed curve.
    pub fn bounding_cubic(curve: &CubicBezier2<F>) -> Option<Self> {
        let line = Line2::through_points(curve.start, curve.end)?;
        let d1 = line.signed_distance(curve.c1);
        let d2 = line.signed_distance(curve.c2);

        let three = F::one() + F::one() + F::one();
        let four = three + F::one();
        let factor = if d1 * d2 > F::zero() {
            three / four
        } else {
            four / (three * three)
        };

        let d_min = F::zero().min(d1).min(d2) * factor;
        let d_max = F::zero().max(d1).max(d2) * factor;
        Some(Self::from_range(line, ClosedRange::new(d_min, d_max)))
    }

    /// Lower bound on the signed distance of contained points.
    #[inline]
    pub fn d_min(&self) -> F {
        self.range.lower()
    }

    /// Upper bound on the signed distance of contained points.
    #[inline]
    pub fn d_max(&self) -> F {
        self.range.upper()
    }

    #[inline]
    pub fn d_range(&self) -> ClosedRange<F> {
        self.range
    }

    /// Returns `true` if the signed distance of `point` from the reference
    /// line lies in `[d_min - accuracy, d_max + accuracy]`.
    #[inline]
    pub fn contains(&self, point: Point2<F>, accuracy: F) -> bool {
        self.range
            .contains_approx(self.line.signed_distance(point), accuracy)
    }

    /// Returns the distance from `point` to the slab: zero inside, otherwise
    /// the distance to the nearer boundary.
    pub fn distance(&self, point: Point2<F>) -> F {
        let signed_distance = self.line.signed_distance(point);
        if signed_distance > self.d_max() {
            signed_distance - self.d_max()
        } else if signed_distance < self.d_min() {
            self.d_min() - signed_distance
        } else {
            F::zero()
        }
    }
}

impl<F: Float + FloatConst> PartialEq for FatLine2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.line == other.line && self.range == other.range
    }
}
