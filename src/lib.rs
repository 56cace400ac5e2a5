//! `cholinv` computes the determinant and the inverse of a symmetric positive definite matrix
//! $A$, given an upper triangular factor $R$ such that
//! $$A = R^\top R.$$
//!
//! The factor is usually the output of a Cholesky decomposition, but the $R$ factor of a QR
//! decomposition of some matrix $X$ can be used as well, in which case the results are those of
//! $X^\top X$.
//!
//! All the routines operate in place on caller-owned, column-major storage, described by the
//! views [`MatRef`] and [`MatMut`], and never allocate.
//!
//! # Example
//! ```
//! use cholinv::{linalg::cholesky::{det_inverse_in_place, Job}, mat};
//!
//! // column-major storage of R = [[2, 1], [0, 3]]
//! let mut data = [2.0, 0.0, 1.0, 3.0_f64];
//! let factor = mat::from_column_major_slice_mut(&mut data, 2, 2);
//!
//! let det = det_inverse_in_place(factor, Job::BOTH).unwrap();
//! assert!((det.mantissa - 3.6).abs() < 1e-12);
//! assert!(det.exponent == 1.0);
//! assert!((data[0] - 10.0 / 36.0).abs() < 1e-12);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt::Debug;
use equator::assert;
use num_traits::Float;

pub mod linalg;
pub mod mat;

pub use mat::{MatMut, MatRef};
pub use reborrow;

/// Real floating point type that the routines of this crate can operate on.
pub trait RealField: Float + Debug + Send + Sync + 'static {
    /// Base of the exponent of scaled results, such as
    /// [`Determinant`](linalg::cholesky::Determinant).
    fn radix() -> Self;
}

impl RealField for f32 {
    #[inline(always)]
    fn radix() -> Self {
        10.0
    }
}

impl RealField for f64 {
    #[inline(always)]
    fn radix() -> Self {
        10.0
    }
}
