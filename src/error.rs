//! Error types for fallible construction of geometric values.

use thiserror::Error;

/// Errors returned by the `try_*` constructors.
///
/// The panicking constructors check the same conditions; these variants are
/// what they report when a caller prefers to recover instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A segment was given the same point for its start and end.
    #[error("degenerate segment: start and end points coincide")]
    DegenerateSegment,

    /// An accuracy parameter was zero, negative or not finite.
    #[error("accuracy must be strictly positive and finite")]
    InvalidTolerance,

    /// A distance range had its lower bound above its upper bound.
    #[error("invalid range: lower bound {min} exceeds upper bound {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GeomError::DegenerateSegment.to_string(),
            "degenerate segment: start and end points coincide"
        );
        assert_eq!(
            GeomError::InvalidRange { min: 2.0, max: 1.0 }.to_string(),
            "invalid range: lower bound 2 exceeds upper bound 1"
        );
    }
}
