use crate::{assert, MatMut, MatRef, RealField};

#[inline]
fn dot<E: RealField>(lhs: &[E], rhs: &[E]) -> E {
    lhs.iter()
        .zip(rhs)
        .fold(E::zero(), |acc, (&lhs, &rhs)| acc + lhs * rhs)
}

/// Computes the upper triangular half of the reconstructed matrix $A = R^\top R$, given the
/// upper triangular factor $R$, and stores the result in `dst`.
///
/// The strictly lower triangular half of `dst` is left untouched.
///
/// # Panics
///
/// - Panics if `factor` is not a square matrix.
/// - Panics if the destination shape doesn't match the shape of the matrix.
#[track_caller]
pub fn reconstruct_upper<E: RealField>(dst: MatMut<'_, E>, factor: MatRef<'_, E>) {
    assert!(all(
        factor.nrows() == factor.ncols(),
        dst.nrows() == factor.nrows(),
        dst.ncols() == factor.ncols(),
    ));
    let mut dst = dst;
    let n = factor.nrows();

    for j in 0..n {
        let col_j = factor.col(j);
        for i in 0..=j {
            let col_i = factor.col(i);
            dst.write(i, j, dot(&col_i[..i + 1], &col_j[..i + 1]));
        }
    }
}

/// Computes the upper triangular half of the reconstructed matrix $A = R^\top R$, given the
/// upper triangular factor $R$, and stores the result in the upper triangular half of
/// `factor`.
///
/// # Panics
///
/// - Panics if `factor` is not a square matrix.
#[track_caller]
pub fn reconstruct_upper_in_place<E: RealField>(factor: MatMut<'_, E>) {
    assert!(factor.nrows() == factor.ncols());
    let mut factor = factor;
    let n = factor.nrows();

    // entry (i, j) only depends on the first i + 1 entries of the columns i and j, which are
    // still intact when the columns are visited right to left, and each column bottom to top
    for j in (0..n).rev() {
        for i in (0..=j).rev() {
            let value = if i == j {
                let col = factor.col_mut(j);
                dot(&col[..i + 1], &col[..i + 1])
            } else {
                let (col_i, col_j) = factor.two_cols_mut(i, j);
                dot(&col_i[..i + 1], &col_j[..i + 1])
            };
            factor.write(i, j, value);
        }
    }
}
