use crate::{
    assert,
    linalg::level1::{axpy, scale},
    MatMut, RealField,
};
use reborrow::*;

fn invert_upper_triangular_impl<E: RealField>(mut factor: MatMut<'_, E>) {
    let n = factor.nrows();
    let mut warned = false;

    for k in 0..n {
        let inv = factor.read(k, k).recip();
        if !inv.is_finite() && !warned {
            log::warn!(target: "cholinv", "Singular triangular factor: diagonal entry {k} has no finite reciprocal. The inverse will contain non-finite values.");
            warned = true;
        }
        factor.write(k, k, inv);
        scale(&mut factor.col_mut(k)[..k], -inv);

        for j in k + 1..n {
            let t = factor.read(k, j);
            factor.write(k, j, E::zero());
            let (src, dst) = factor.two_cols_mut(k, j);
            axpy(&mut dst[..k + 1], &src[..k + 1], t);
        }
    }
}

// R^{-1} R^{-T}, upper half, in place
fn mul_by_transpose_impl<E: RealField>(mut factor_inv: MatMut<'_, E>) {
    let n = factor_inv.nrows();

    for j in 0..n {
        for k in 0..j {
            let t = factor_inv.read(k, j);
            let (src, dst) = factor_inv.two_cols_mut(j, k);
            axpy(&mut dst[..k + 1], &src[..k + 1], t);
        }
        let t = factor_inv.read(j, j);
        scale(&mut factor_inv.col_mut(j)[..j + 1], t);
    }
}

/// Computes the inverse of the upper triangular matrix $R$, and stores the result in the upper
/// triangular half of `factor`.
///
/// # Panics
///
/// - Panics if `factor` is not a square matrix.
#[track_caller]
pub fn invert_upper_triangular_in_place<E: RealField>(factor: MatMut<'_, E>) {
    assert!(factor.nrows() == factor.ncols());
    invert_upper_triangular_impl(factor);
}

/// Computes the upper triangular half of the inverse of $A = R^\top R$, given the upper
/// triangular factor $R$, and stores the result in the upper triangular half of `factor`.
///
/// The inverse is formed as $A^{-1} = R^{-1} R^{-\top}$, by first inverting $R$ in place, then
/// multiplying the result by its transpose.
///
/// If a diagonal entry of `factor` is zero, the output contains non-finite values. A warning is
/// logged in that case.
///
/// # Panics
///
/// - Panics if `factor` is not a square matrix.
#[track_caller]
pub fn invert_in_place<E: RealField>(factor: MatMut<'_, E>) {
    assert!(factor.nrows() == factor.ncols());
    let mut factor = factor;
    invert_upper_triangular_impl(factor.rb_mut());
    mul_by_transpose_impl(factor);
}
