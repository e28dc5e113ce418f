//! The NdArray type and its building blocks
//!
//! - [`Shape`]: `rows x cols` dimensions
//! - [`Slice`]: `start:stop:step` axis selection
//! - [`Storage`]: owned row-major buffer with a byte order tag
//! - [`NdArray`]: the array itself, plus iterators and cursors
//!
//! Arithmetic, reductions, sorting and shape manipulation live in
//! [`crate::ops`] as further inherent methods on [`NdArray`].

mod core;
mod io;
mod iter;
mod shape;
mod slice;
mod storage;

pub use self::core::NdArray;
pub(crate) use self::core::wrap_index;
pub use iter::{ColumnIter, Cursor, CursorMut, Order};
pub use shape::Shape;
pub use slice::Slice;
pub use storage::{Endian, Storage};
