//! Conditional trace logging.
//!
//! With the `tracing` feature this re-exports `tracing::trace`. Without it the
//! macro expands to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
