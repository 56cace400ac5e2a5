use crate::assert;

/// Immutable view over a column-major matrix, similar to an immutable reference to a strided
/// [prim@slice].
///
/// See [`MatMut`](super::MatMut) for the storage layout.
pub struct MatRef<'a, E> {
    data: &'a [E],
    nrows: usize,
    ncols: usize,
    col_stride: usize,
}

impl<E> Copy for MatRef<'_, E> {}
impl<E> Clone for MatRef<'_, E> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> MatRef<'a, E> {
    #[inline]
    pub(super) fn __from_parts(
        data: &'a [E],
        nrows: usize,
        ncols: usize,
        col_stride: usize,
    ) -> Self {
        Self {
            data,
            nrows,
            ncols,
            col_stride,
        }
    }

    /// Returns the number of rows of the matrix.
    #[inline(always)]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns of the matrix.
    #[inline(always)]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the offset between the first elements of two successive columns in the matrix.
    #[inline(always)]
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    /// Returns a view over the column at the given index, as a contiguous slice of length
    /// `self.nrows()`.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `col < self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn col(self, col: usize) -> &'a [E] {
        assert!(col < self.ncols());
        if self.nrows == 0 {
            return &[];
        }
        let start = col * self.col_stride;
        &self.data[start..start + self.nrows]
    }

    /// Reads the value of the element at the given indices.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn read(&self, row: usize, col: usize) -> E
    where
        E: Copy,
    {
        assert!(all(row < self.nrows(), col < self.ncols()));
        self.data[col * self.col_stride + row]
    }
}
