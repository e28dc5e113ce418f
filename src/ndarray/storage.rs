//! Storage: exclusively owned contiguous element buffer

use bytemuck::Pod;

/// Byte order tag carried by every array buffer
///
/// `Native` means "whatever the host uses". [`NdArray::byteswap`] toggles the
/// tag, so a swapped native buffer reports the opposite of the host order.
///
/// [`NdArray::byteswap`]: super::NdArray::byteswap
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Host byte order
    #[default]
    Native,
    /// Little endian
    Little,
    /// Big endian
    Big,
}

impl Endian {
    /// The concrete byte order of the host
    #[inline]
    pub const fn host() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Resolve `Native` to the host order
    #[inline]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Native => Self::host(),
            other => other,
        }
    }

    /// The tag after reversing the bytes of every element
    #[inline]
    pub const fn swapped(self) -> Self {
        match self.resolve() {
            Self::Little => Self::Big,
            _ => Self::Little,
        }
    }
}

/// Row-major element buffer owned by exactly one array
///
/// Cloning deep-copies the elements. There is no sharing between arrays, so
/// mutating one array never affects another.
#[derive(Clone, Debug, Default)]
pub struct Storage<T> {
    data: Vec<T>,
    endian: Endian,
}

impl<T> Storage<T> {
    /// Wrap an existing vector (native byte order)
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            endian: Endian::Native,
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the storage and return the elements
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Current byte order tag
    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Overwrite the byte order tag without touching the bytes
    #[inline]
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }
}

impl<T: Copy + Default> Storage<T> {
    /// Buffer of `len` default (zero) elements
    #[inline]
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![T::default(); len])
    }
}

impl<T: Pod> Storage<T> {
    /// Raw bytes of the buffer in its current byte order
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Mutable raw bytes of the buffer
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endian_swapped() {
        assert_eq!(Endian::Little.swapped(), Endian::Big);
        assert_eq!(Endian::Big.swapped(), Endian::Little);
        assert_ne!(Endian::Native.swapped(), Endian::host());
        assert_eq!(Endian::Native.resolve(), Endian::host());
    }

    #[test]
    fn test_storage_clone_is_deep() {
        let a = Storage::from_vec(vec![1.0f64, 2.0]);
        let mut b = a.clone();
        b.as_mut_slice()[0] = 9.0;
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
        assert_eq!(b.as_slice(), &[9.0, 2.0]);
    }

    #[test]
    fn test_storage_bytes() {
        let s = Storage::from_vec(vec![1u32, 2, 3]);
        assert_eq!(s.as_bytes().len(), 12);
        let z: Storage<i16> = Storage::zeroed(4);
        assert_eq!(z.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(z.endian(), Endian::Native);
    }
}
