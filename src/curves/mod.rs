//! Parametric curves.

mod bezier;

pub use bezier::CubicBezier2;
