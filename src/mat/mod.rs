//! Views over column-major matrix storage owned by the caller.
//!
//! A matrix with `nrows` rows and `ncols` columns is stored column by column, where the
//! beginnings of two consecutive columns are separated by `col_stride` elements (the leading
//! dimension). Entry `(i, j)` lives at offset `j * col_stride + i`. Elements between the end of
//! a column and the beginning of the next one are never read or written.

use crate::assert;

mod matmut;
mod matref;

pub use matmut::MatMut;
pub use matref::MatRef;

#[track_caller]
#[inline]
fn from_slice_assert(nrows: usize, ncols: usize, len: usize) {
    let size = usize::checked_mul(nrows, ncols).unwrap_or(usize::MAX);
    assert!(size == len);
}

#[track_caller]
#[inline]
fn from_strided_column_major_slice_assert(
    nrows: usize,
    ncols: usize,
    col_stride: usize,
    len: usize,
) {
    assert!(col_stride >= nrows);
    if nrows == 0 || ncols == 0 {
        return;
    }
    let last = usize::checked_mul(col_stride, ncols - 1)
        .and_then(|last_col| last_col.checked_add(nrows - 1))
        .unwrap_or(usize::MAX);
    assert!(last < len);
}

/// Creates a `MatRef` from a slice view over the matrix data, and the matrix dimensions.
/// The data is interpreted in a column-major format, so that the first chunk of `nrows`
/// values from the slice goes in the first column of the matrix, the second chunk of `nrows`
/// values goes in the second column, and so on.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `nrows * ncols == slice.len()`
#[track_caller]
#[inline]
pub fn from_column_major_slice<E>(slice: &[E], nrows: usize, ncols: usize) -> MatRef<'_, E> {
    from_slice_assert(nrows, ncols, slice.len());
    MatRef::__from_parts(slice, nrows, ncols, nrows)
}

/// Creates a `MatRef` from a slice view over the matrix data, and the matrix dimensions.
/// The data is interpreted in a column-major format, where the beginnings of two consecutive
/// columns are separated by `col_stride` elements.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `col_stride >= nrows`
/// * the last element of the matrix, at offset `(ncols - 1) * col_stride + nrows - 1`, is in
///   bounds of `slice`.
#[track_caller]
#[inline]
pub fn from_column_major_slice_with_stride<E>(
    slice: &[E],
    nrows: usize,
    ncols: usize,
    col_stride: usize,
) -> MatRef<'_, E> {
    from_strided_column_major_slice_assert(nrows, ncols, col_stride, slice.len());
    MatRef::__from_parts(slice, nrows, ncols, col_stride)
}

/// Creates a `MatMut` from a slice view over the matrix data, and the matrix dimensions.
/// The data is interpreted in a column-major format, so that the first chunk of `nrows`
/// values from the slice goes in the first column of the matrix, the second chunk of `nrows`
/// values goes in the second column, and so on.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `nrows * ncols == slice.len()`
///
/// # Example
/// ```
/// use cholinv::mat;
///
/// let mut slice = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0_f64];
/// let view = mat::from_column_major_slice_mut(&mut slice, 3, 2);
///
/// assert!(view.read(2, 0) == 3.0);
/// assert!(view.read(0, 1) == 4.0);
/// ```
#[track_caller]
#[inline]
pub fn from_column_major_slice_mut<E>(
    slice: &mut [E],
    nrows: usize,
    ncols: usize,
) -> MatMut<'_, E> {
    from_slice_assert(nrows, ncols, slice.len());
    MatMut::__from_parts(slice, nrows, ncols, nrows)
}

/// Creates a `MatMut` from a slice view over the matrix data, and the matrix dimensions.
/// The data is interpreted in a column-major format, where the beginnings of two consecutive
/// columns are separated by `col_stride` elements.
///
/// # Panics
/// The function panics if any of the following conditions are violated:
/// * `col_stride >= nrows`
/// * the last element of the matrix, at offset `(ncols - 1) * col_stride + nrows - 1`, is in
///   bounds of `slice`.
///
/// # Example
/// ```
/// use cholinv::mat;
///
/// // 2x2 matrix with a leading dimension of 3, the padding rows are left alone
/// let mut slice = [1.0, 2.0, -1.0, 3.0, 4.0_f64];
/// let view = mat::from_column_major_slice_with_stride_mut(&mut slice, 2, 2, 3);
///
/// assert!(view.read(1, 0) == 2.0);
/// assert!(view.read(0, 1) == 3.0);
/// ```
#[track_caller]
#[inline]
pub fn from_column_major_slice_with_stride_mut<E>(
    slice: &mut [E],
    nrows: usize,
    ncols: usize,
    col_stride: usize,
) -> MatMut<'_, E> {
    from_strided_column_major_slice_assert(nrows, ncols, col_stride, slice.len());
    MatMut::__from_parts(slice, nrows, ncols, col_stride)
}
