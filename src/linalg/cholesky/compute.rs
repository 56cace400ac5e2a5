use super::{determinant::determinant, inverse::invert_in_place, Determinant, Job};
use crate::{assert, MatMut, RealField};
use reborrow::*;

/// Computes the determinant and/or the upper triangular half of the inverse of $A = R^\top R$,
/// given the upper triangular factor $R$, as selected by `job`.
///
/// The determinant is returned if `job.determinant` is set, otherwise `None` is returned.
/// The inverse is stored in the upper triangular half of `factor` if `job.inverse` is set,
/// otherwise `factor` is left unchanged. The determinant is computed before `factor` is
/// overwritten.
///
/// # Panics
///
/// - Panics if `factor` is not a square matrix.
#[track_caller]
pub fn det_inverse_in_place<E: RealField>(
    factor: MatMut<'_, E>,
    job: Job,
) -> Option<Determinant<E>> {
    assert!(factor.nrows() == factor.ncols());
    let mut factor = factor;

    let det = if job.determinant {
        Some(determinant(factor.rb()))
    } else {
        None
    };

    if job.inverse {
        invert_in_place(factor.rb_mut());
    }

    det
}
