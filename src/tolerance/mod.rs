//! Floating-point tolerance policy.
//!
//! The epsilon used by approximate comparisons is an explicit constant,
//! never an implicit language default.

mod epsilon;

pub use epsilon::{approx_eq, approx_eq_eps, APPROX_EPSILON};
