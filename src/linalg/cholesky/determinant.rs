use super::Determinant;
use crate::{assert, MatRef, RealField};

/// Computes the determinant of $A = R^\top R$, given the upper triangular factor $R$.
///
/// The determinant is the product of the squared diagonal entries of $R$. It is accumulated
/// in the scaled form described in [`Determinant`], so that the running product does not
/// overflow. The accumulation stops as soon as the product becomes exactly zero, which also
/// happens when a nonzero squared entry underflows.
///
/// Only the diagonal of `factor` is read.
///
/// # Panics
///
/// - Panics if `factor` is not a square matrix.
#[track_caller]
pub fn determinant<E: RealField>(factor: MatRef<'_, E>) -> Determinant<E> {
    assert!(factor.nrows() == factor.ncols());

    let mut det = Determinant::one();
    for i in 0..factor.nrows() {
        let d = factor.read(i, i);
        let mantissa = d * d * det.mantissa;

        if d.is_finite() && mantissa.is_infinite() {
            // d * d is out of range, square the scaled form of |d| instead
            let radix = E::radix();
            let mut d = d.abs();
            let mut shift = E::zero();
            while d >= radix {
                d = d / radix;
                shift = shift + E::one();
            }
            det.mantissa = d * d * det.mantissa;
            det.exponent = det.exponent + shift + shift;
        } else {
            det.mantissa = mantissa;
        }

        if det.mantissa == E::zero() || !det.mantissa.is_finite() {
            break;
        }
        det.normalize();
    }
    det
}
