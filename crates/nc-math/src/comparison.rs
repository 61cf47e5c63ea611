//! Floating-point tolerances.

use nc_core::Real;

/// Tolerance below which a pivot of an `n × n` elimination is treated as zero.
///
/// Scales with the dimension and with the largest absolute entry, so the
/// verdict does not change when the whole matrix is rescaled.
#[inline]
pub fn singular_tolerance(n: usize, max_abs_entry: Real) -> Real {
    n as Real * Real::EPSILON * max_abs_entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_tolerance_scales() {
        let t1 = singular_tolerance(3, 1.0);
        let t2 = singular_tolerance(3, 1e6);
        assert!((t2 / t1 - 1e6).abs() < 1e-6);
        assert_eq!(singular_tolerance(4, 0.0), 0.0);
        assert_eq!(singular_tolerance(1, 1.0), Real::EPSILON);
    }
}
