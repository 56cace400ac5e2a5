//! Linear algebra module.
//!
//! Contains the level 1 vector primitives used as building blocks, and the routines computing
//! the determinant and the inverse of a symmetric positive definite matrix from its triangular
//! factor.
//!
//! # Memory allocation
//! None of the routines in this module allocate. They operate on views over memory owned by
//! the caller ([`MatRef`](crate::MatRef), [`MatMut`](crate::MatMut), or plain slices), and
//! results that do not fit in the input storage are returned by value.

pub mod cholesky;
pub mod level1;
