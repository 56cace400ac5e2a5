//! Given an upper triangular factor $R$ of a symmetric positive definite matrix $A$ such that
//! $$A = R^\top R,$$
//! the routines in this module compute the determinant of $A$ and the upper triangular half of
//! $A^{-1}$.
//!
//! $R$ is typically the transpose of the Cholesky factor of $A$, or the $R$ factor of a QR
//! decomposition of a matrix $X$, in which case $A = X^\top X$.
//!
//! Only the upper triangular half (including the diagonal) of the input is read or written.
//! The strictly lower triangular half belongs to the caller and is left untouched.
//!
//! # Singular factors
//! The inverse is computed by dividing by the diagonal entries of $R$, which must be nonzero.
//! This is guaranteed when the factorization that produced $R$ succeeded. A zero on the
//! diagonal is not reported as an error: the division produces infinite values, which then
//! propagate through the rest of the output as infinities or NaNs.

/// Computing the determinant and the inverse in a single call.
pub mod compute;
/// Computing the determinant from the factor.
pub mod determinant;
/// Computing the inverse from the factor.
pub mod inverse;
/// Reconstructing the original matrix from the factor.
pub mod reconstruct;

pub use compute::det_inverse_in_place;
pub use determinant::determinant;
pub use inverse::{invert_in_place, invert_upper_triangular_in_place};
pub use reconstruct::{reconstruct_upper, reconstruct_upper_in_place};

use crate::RealField;

/// Selects the quantities computed by [`det_inverse_in_place`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Job {
    /// Compute the determinant of $A$.
    pub determinant: bool,
    /// Overwrite the upper triangular half of the factor with that of $A^{-1}$.
    pub inverse: bool,
}

impl Job {
    /// Determinant only.
    pub const DETERMINANT: Self = Self {
        determinant: true,
        inverse: false,
    };
    /// Inverse only.
    pub const INVERSE: Self = Self {
        determinant: false,
        inverse: true,
    };
    /// Both the determinant and the inverse.
    pub const BOTH: Self = Self {
        determinant: true,
        inverse: true,
    };
}

/// Decodes a two digit LINPACK style job code, where a nonzero tens digit requests the
/// determinant, and a nonzero units digit requests the inverse.
///
/// `11` requests both, `10` the determinant only, `1` the inverse only, and `0` neither.
impl TryFrom<u32> for Job {
    type Error = InvalidJobCode;

    #[inline]
    fn try_from(code: u32) -> Result<Self, Self::Error> {
        if code > 99 {
            return Err(InvalidJobCode { code });
        }
        Ok(Self {
            determinant: code / 10 != 0,
            inverse: code % 10 != 0,
        })
    }
}

/// This error signifies that a job code has more than two decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidJobCode {
    /// The rejected code.
    pub code: u32,
}

impl core::fmt::Display for InvalidJobCode {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for InvalidJobCode {}

/// Determinant in scaled scientific notation, equal to
/// $$\text{mantissa} \times 10^{\text{exponent}}.$$
///
/// Either `1.0 <= mantissa < 10.0`, or `mantissa == 0.0`, in which case the determinant is zero
/// and `exponent` carries no meaning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Determinant<E: RealField> {
    /// Significand of the determinant.
    pub mantissa: E,
    /// Base 10 exponent of the determinant. This is an integer, stored as a floating point
    /// value.
    pub exponent: E,
}

impl<E: RealField> Determinant<E> {
    /// Returns the determinant of the empty matrix, `1.0 * 10^0`.
    #[inline]
    pub fn one() -> Self {
        Self {
            mantissa: E::one(),
            exponent: E::zero(),
        }
    }

    /// Returns `true` if the determinant is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa == E::zero()
    }

    /// Returns the value of the determinant as a plain floating point number.
    ///
    /// The result overflows to infinity or underflows to zero when the determinant is outside
    /// the range of `E`.
    #[inline]
    pub fn value(&self) -> E {
        if self.is_zero() {
            return E::zero();
        }
        self.mantissa * E::radix().powf(self.exponent)
    }

    /// Returns the base 10 logarithm of the determinant, or negative infinity if it is zero.
    #[inline]
    pub fn log10(&self) -> E {
        if self.is_zero() {
            return E::neg_infinity();
        }
        self.mantissa.log10() + self.exponent
    }

    /// Brings the mantissa back into `[1, radix)`, adjusting the exponent accordingly.
    ///
    /// The mantissa must be positive. Non-finite mantissas are left as is.
    #[inline]
    fn normalize(&mut self) {
        if !self.mantissa.is_finite() {
            return;
        }
        let radix = E::radix();
        while self.mantissa < E::one() {
            self.mantissa = radix * self.mantissa;
            self.exponent = self.exponent - E::one();
        }
        while self.mantissa >= radix {
            self.mantissa = self.mantissa / radix;
            self.exponent = self.exponent + E::one();
        }
    }
}
