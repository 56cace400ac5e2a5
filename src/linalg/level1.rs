//! Level 1 vector primitives.

use crate::{assert, RealField};

/// Multiplies every element of `x` by `alpha`.
#[inline]
pub fn scale<E: RealField>(x: &mut [E], alpha: E) {
    for x in x {
        *x = alpha * *x;
    }
}

/// Computes `dst += alpha * src`, element by element.
///
/// # Panics
///
/// - Panics if `dst` and `src` don't have the same length.
#[inline]
#[track_caller]
pub fn axpy<E: RealField>(dst: &mut [E], src: &[E], alpha: E) {
    assert!(dst.len() == src.len());
    for (dst, &src) in dst.iter_mut().zip(src) {
        *dst = *dst + alpha * src;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert;

    #[test]
    fn test_scale() {
        let mut x = [1.0, -2.0, 0.5_f64];
        scale(&mut x, -2.0);
        assert_eq!(x, [-2.0, 4.0, -1.0]);

        let mut empty: [f64; 0] = [];
        scale(&mut empty, 3.0);
    }

    #[test]
    fn test_axpy() {
        let mut y = [1.0, 1.0, 1.0_f64];
        axpy(&mut y, &[1.0, 2.0, 3.0], 0.5);
        assert_eq!(y, [1.5, 2.0, 2.5]);

        axpy(&mut y[..0], &[], 7.0);
        assert_eq!(y, [1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_zero_alpha_propagates_non_finite() {
        let mut y = [1.0_f64];
        axpy(&mut y, &[f64::INFINITY], 0.0);
        assert!(y[0].is_nan());
    }

    #[test]
    #[should_panic]
    fn test_axpy_length_mismatch() {
        let mut y = [0.0_f64; 2];
        axpy(&mut y, &[1.0, 2.0, 3.0], 1.0);
    }
}
