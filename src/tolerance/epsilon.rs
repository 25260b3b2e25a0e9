//! Fixed-tolerance floating-point comparison.

/// Tolerance used by [`approx_eq`] and [`Vec2::approx_eq`](crate::Vec2::approx_eq).
///
/// Two scalars `a` and `b` compare equal when
/// `|a - b| <= APPROX_EPSILON * max(1, |a|, |b|)`.
/// Below magnitude 1 this is an absolute tolerance, above it a relative one.
pub const APPROX_EPSILON: f32 = 1e-5;

/// Reports whether `a` and `b` are equal within [`APPROX_EPSILON`].
///
/// NaN is never approximately equal to anything, itself included. An
/// infinity only equals the same infinity.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, APPROX_EPSILON)
}

/// Same as [`approx_eq`] with an explicit tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, eps: f32) -> bool {
    if a == b {
        // Covers equal infinities.
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = 1.0f32.max(a.abs()).max(b.abs());
    (a - b).abs() <= eps * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values() {
        assert!(approx_eq(0.0, 0.0));
        assert!(approx_eq(0.0, -0.0));
        assert!(approx_eq(f32::INFINITY, f32::INFINITY));
        assert!(!approx_eq(f32::INFINITY, f32::NEG_INFINITY));
    }

    #[test]
    fn test_infinity_vs_finite() {
        assert!(!approx_eq(f32::INFINITY, 1.0));
        assert!(!approx_eq(f32::MAX, f32::INFINITY));
        assert!(!approx_eq(0.0, f32::NEG_INFINITY));
        assert!(!approx_eq_eps(f32::INFINITY, 1.0, 1.0));
    }

    #[test]
    fn test_absolute_near_zero() {
        assert!(approx_eq(0.0, 5e-6));
        assert!(!approx_eq(0.0, 5e-5));
    }

    #[test]
    fn test_relative_for_large_values() {
        // 1e6 * 1e-5 = 10
        assert!(approx_eq(1_000_000.0, 1_000_008.0));
        assert!(!approx_eq(1_000_000.0, 1_000_020.0));
    }

    #[test]
    fn test_accumulated_rounding() {
        let mut sum = 0.0f32;
        for _ in 0..10 {
            sum += 0.1;
        }
        assert_ne!(sum, 1.0);
        assert!(approx_eq(sum, 1.0));
    }

    #[test]
    fn test_nan() {
        assert!(!approx_eq(f32::NAN, f32::NAN));
        assert!(!approx_eq(f32::NAN, 0.0));
    }

    #[test]
    fn test_custom_eps() {
        assert!(approx_eq_eps(1.0, 1.05, 0.1));
        assert!(!approx_eq_eps(1.0, 1.05, 0.01));
    }
}
