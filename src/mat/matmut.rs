use super::MatRef;
use crate::assert;
use reborrow::*;

/// Mutable view over a column-major matrix, similar to a mutable reference to a strided
/// [prim@slice].
///
/// Column `j` occupies the `nrows` contiguous elements starting at offset `j * col_stride`.
/// Elements of the underlying slice that fall between two columns are never accessed.
///
/// # Move semantics
/// Since `MatMut` mutably borrows data, it cannot be [`Copy`]. This means that if we pass a
/// `MatMut` to a function that takes it by value, it is moved and can no longer be used. To
/// pass it without giving up ownership, use [`ReborrowMut::rb_mut`] to create a view with a
/// shorter lifetime, or [`Reborrow::rb`] to get a [`MatRef`].
pub struct MatMut<'a, E> {
    data: &'a mut [E],
    nrows: usize,
    ncols: usize,
    col_stride: usize,
}

impl<'short, E> Reborrow<'short> for MatMut<'_, E> {
    type Target = MatRef<'short, E>;

    #[inline]
    fn rb(&'short self) -> Self::Target {
        MatRef::__from_parts(&*self.data, self.nrows, self.ncols, self.col_stride)
    }
}

impl<'short, E> ReborrowMut<'short> for MatMut<'_, E> {
    type Target = MatMut<'short, E>;

    #[inline]
    fn rb_mut(&'short mut self) -> Self::Target {
        MatMut {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            col_stride: self.col_stride,
        }
    }
}

impl<'a, E> MatMut<'a, E> {
    #[inline]
    pub(super) fn __from_parts(
        data: &'a mut [E],
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

    /// Returns a mutable view over the column at the given index, as a contiguous slice of
    /// length `self.nrows()`.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `col < self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn col_mut(&mut self, col: usize) -> &mut [E] {
        assert!(col < self.ncols());
        if self.nrows == 0 {
            return &mut [];
        }
        let start = col * self.col_stride;
        &mut self.data[start..start + self.nrows]
    }

    /// Returns a view over the column `src`, and a mutable view over the column `dst`.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `src < self.ncols()`.
    /// * `dst < self.ncols()`.
    /// * `src != dst`.
    #[inline]
    #[track_caller]
    pub fn two_cols_mut(&mut self, src: usize, dst: usize) -> (&[E], &mut [E]) {
        assert!(all(src < self.ncols(), dst < self.ncols(), src != dst));
        let nrows = self.nrows;
        let col_stride = self.col_stride;
        if nrows == 0 {
            return (&[], &mut []);
        }

        if src < dst {
            let (head, tail) = self.data.split_at_mut(dst * col_stride);
            let src_start = src * col_stride;
            (&head[src_start..src_start + nrows], &mut tail[..nrows])
        } else {
            let (head, tail) = self.data.split_at_mut(src * col_stride);
            let dst_start = dst * col_stride;
            (&tail[..nrows], &mut head[dst_start..dst_start + nrows])
        }
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
        self.rb().read(row, col)
    }

    /// Writes the value to the element at the given indices.
    ///
    /// # Panics
    /// The function panics if any of the following conditions are violated:
    /// * `row < self.nrows()`.
    /// * `col < self.ncols()`.
    #[inline]
    #[track_caller]
    pub fn write(&mut self, row: usize, col: usize, value: E) {
        assert!(all(row < self.nrows(), col < self.ncols()));
        self.data[col * self.col_stride + row] = value;
    }
}
