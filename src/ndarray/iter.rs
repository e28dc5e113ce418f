//! Iteration: row-major and column-major iterators plus random-access cursors

use super::{NdArray, Shape};
use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// Traversal order of a cursor or iterator
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Rows left to right, top to bottom (the storage order)
    RowMajor,
    /// Columns top to bottom, left to right
    ColumnMajor,
}

/// Maps a logical traversal position to a storage offset
#[derive(Copy, Clone, Debug)]
struct Traversal {
    shape: Shape,
    order: Order,
    reversed: bool,
}

impl Traversal {
    #[inline]
    fn len(&self) -> usize {
        self.shape.size()
    }

    /// Storage offset of logical position `pos`, if in range
    #[inline]
    fn offset(&self, pos: isize) -> Result<usize> {
        let len = self.len();
        if pos < 0 || pos as usize >= len {
            return Err(Error::index_out_of_range(pos, len));
        }
        let k = if self.reversed {
            len - 1 - pos as usize
        } else {
            pos as usize
        };
        Ok(match self.order {
            Order::RowMajor => k,
            Order::ColumnMajor => {
                let row = k % self.shape.rows;
                let col = k / self.shape.rows;
                row * self.shape.cols + col
            }
        })
    }
}

/// Column-major iterator over an array
///
/// Double-ended and exact-size, so `.rev()` walks columns backwards.
#[derive(Clone, Debug)]
pub struct ColumnIter<'a, T> {
    data: &'a [T],
    traversal: Traversal,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for ColumnIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let i = self.traversal.offset(self.front as isize).ok()?;
        self.front += 1;
        Some(&self.data[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for ColumnIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let i = self.traversal.offset(self.back as isize).ok()?;
        Some(&self.data[i])
    }
}

impl<T> ExactSizeIterator for ColumnIter<'_, T> {}
impl<T> FusedIterator for ColumnIter<'_, T> {}

/// Read-only random-access cursor
///
/// A cursor sits at a logical position in a traversal (row-major or
/// column-major, forwards or reversed). It can move by arbitrary offsets and
/// reports `is_end()` once it runs past the last element. Dereferencing an
/// out-of-range position returns `IndexOutOfRange`.
///
/// `Cursor` is also an [`Iterator`] yielding the elements from its current
/// position to the end.
#[derive(Clone, Debug)]
pub struct Cursor<'a, T> {
    data: &'a [T],
    traversal: Traversal,
    pos: isize,
}

/// Mutable random-access cursor
///
/// Same movement API as [`Cursor`], plus write access to the current element.
#[derive(Debug)]
pub struct CursorMut<'a, T> {
    data: &'a mut [T],
    traversal: Traversal,
    pos: isize,
}

/// Movement and inspection shared by both cursor kinds
macro_rules! impl_cursor_common {
    ($name:ident) => {
        impl<'a, T> $name<'a, T> {
            /// Move forward by `n` positions
            #[inline]
            pub fn advance(&mut self, n: isize) -> &mut Self {
                self.pos += n;
                self
            }

            /// Move backward by `n` positions
            #[inline]
            pub fn retreat(&mut self, n: isize) -> &mut Self {
                self.pos -= n;
                self
            }

            /// Logical position in the traversal
            #[inline]
            pub fn position(&self) -> isize {
                self.pos
            }

            /// True once the cursor has moved past the last element
            #[inline]
            pub fn is_end(&self) -> bool {
                self.pos >= self.traversal.len() as isize
            }

            /// Signed number of positions from `self` to `other`
            #[inline]
            pub fn distance_to(&self, other: &Self) -> isize {
                other.pos - self.pos
            }

            /// Element at the current position
            pub fn value(&self) -> Result<&T> {
                let i = self.traversal.offset(self.pos)?;
                Ok(&self.data[i])
            }

            /// Element `offset` positions away without moving
            pub fn at(&self, offset: isize) -> Result<&T> {
                let i = self.traversal.offset(self.pos + offset)?;
                Ok(&self.data[i])
            }
        }
    };
}

impl_cursor_common!(Cursor);
impl_cursor_common!(CursorMut);

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.traversal.offset(self.pos).ok()?;
        self.pos += 1;
        Some(&self.data[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.traversal.len() as isize - self.pos.max(0)).max(0) as usize;
        (n, Some(n))
    }
}

impl<T> CursorMut<'_, T> {
    /// Mutable element at the current position
    pub fn value_mut(&mut self) -> Result<&mut T> {
        let i = self.traversal.offset(self.pos)?;
        Ok(&mut self.data[i])
    }

    /// Mutable element `offset` positions away without moving
    pub fn at_mut(&mut self, offset: isize) -> Result<&mut T> {
        let i = self.traversal.offset(self.pos + offset)?;
        Ok(&mut self.data[i])
    }

    /// Overwrite the element at the current position
    pub fn set(&mut self, value: T) -> Result<()> {
        *self.value_mut()? = value;
        Ok(())
    }
}

impl<T> NdArray<T> {
    fn traversal(&self, order: Order, reversed: bool) -> Traversal {
        Traversal {
            shape: self.shape(),
            order,
            reversed,
        }
    }

    fn cursor(&self, order: Order, reversed: bool) -> Cursor<'_, T> {
        Cursor {
            traversal: self.traversal(order, reversed),
            data: self.as_slice(),
            pos: 0,
        }
    }

    fn cursor_mut(&mut self, order: Order, reversed: bool) -> CursorMut<'_, T> {
        let traversal = self.traversal(order, reversed);
        CursorMut {
            traversal,
            data: self.as_mut_slice(),
            pos: 0,
        }
    }

    /// Row-major iterator
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable row-major iterator
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Column-major iterator
    pub fn column_iter(&self) -> ColumnIter<'_, T> {
        ColumnIter {
            data: self.as_slice(),
            traversal: self.traversal(Order::ColumnMajor, false),
            front: 0,
            back: self.size(),
        }
    }

    /// Cursor at the first element in row-major order
    pub fn begin(&self) -> Cursor<'_, T> {
        self.cursor(Order::RowMajor, false)
    }

    /// Cursor at the last element, moving backwards in row-major order
    pub fn rbegin(&self) -> Cursor<'_, T> {
        self.cursor(Order::RowMajor, true)
    }

    /// Cursor at the first element in column-major order
    pub fn col_begin(&self) -> Cursor<'_, T> {
        self.cursor(Order::ColumnMajor, false)
    }

    /// Cursor at the last element, moving backwards in column-major order
    pub fn rcol_begin(&self) -> Cursor<'_, T> {
        self.cursor(Order::ColumnMajor, true)
    }

    /// Mutable cursor at the first element in row-major order
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut(Order::RowMajor, false)
    }

    /// Mutable reverse row-major cursor
    pub fn rbegin_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut(Order::RowMajor, true)
    }

    /// Mutable column-major cursor
    pub fn col_begin_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut(Order::ColumnMajor, false)
    }

    /// Mutable reverse column-major cursor
    pub fn rcol_begin_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut(Order::ColumnMajor, true)
    }
}

impl<'a, T> IntoIterator for &'a NdArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut NdArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
