//! Binary and text serialization, byte order handling

use super::{Endian, NdArray, Shape};
use crate::dtype::Element;
use crate::error::{Error, Result};
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// `path` with a `.bin` extension appended when it has none
fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("bin")
    }
}

/// Reverse the bytes of each scalar component in `bytes`
///
/// Complex elements are swapped per component, matching NumPy.
fn swap_components<T: Element>(bytes: &mut [u8]) {
    let width = T::DTYPE
        .complex_component_dtype()
        .map_or(std::mem::size_of::<T>(), |c| c.size_in_bytes());
    if width > 1 {
        bytes.chunks_exact_mut(width).for_each(|c| c.reverse());
    }
}

impl<T: Element> NdArray<T> {
    /// Write the raw element buffer to `path`
    ///
    /// No header is written and bytes stay in the buffer's current order. A
    /// `.bin` extension is appended when `path` has none. Returns the path
    /// actually written.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = with_default_extension(path.as_ref());
        let bytes = self.storage().as_bytes();
        fs::write(&path, bytes)?;
        trace!("dump: wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }

    /// Read a raw dump back as a `1 x k` array
    ///
    /// The file length must be a multiple of the element size.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let width = std::mem::size_of::<T>();
        if bytes.len() % width != 0 {
            return Err(Error::shape_mismatch(
                Shape::new(1, bytes.len() / width * width),
                Shape::new(1, bytes.len()),
            ));
        }
        let count = bytes.len() / width;
        let mut out = Self::with_shape(1, count);
        out.storage_mut().as_bytes_mut().copy_from_slice(&bytes);
        trace!("load: read {} bytes from {}", bytes.len(), path.display());
        Ok(out)
    }

    /// Write the elements as text separated by `sep`
    ///
    /// An empty separator writes the raw binary dump instead (to `path`
    /// verbatim, no extension is added).
    pub fn tofile(&self, path: impl AsRef<Path>, sep: &str) -> Result<()> {
        let path = path.as_ref();
        if sep.is_empty() {
            let bytes = self.storage().as_bytes();
            fs::write(path, bytes)?;
            trace!("tofile: wrote {} raw bytes to {}", bytes.len(), path.display());
            return Ok(());
        }

        let mut text = String::new();
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                text.push_str(sep);
            }
            text.push_str(&v.to_string());
        }
        fs::write(path, text.as_bytes())?;
        trace!("tofile: wrote {} bytes of text to {}", text.len(), path.display());
        Ok(())
    }

    /// Reverse the bytes of every element in place and toggle the byte order tag
    ///
    /// `Native` becomes the opposite of the host order; `Little` and `Big`
    /// swap with each other.
    pub fn byteswap(&mut self) -> &mut Self {
        let storage = self.storage_mut();
        swap_components::<T>(storage.as_bytes_mut());
        let swapped = storage.endian().swapped();
        storage.set_endian(swapped);
        self
    }

    /// Copy of the array converted to byte order `endian`
    ///
    /// Bytes are swapped only when the resolved orders differ.
    pub fn newbyteorder(&self, endian: Endian) -> Self {
        let mut out = self.clone();
        if self.endianess().resolve() != endian.resolve() {
            swap_components::<T>(out.storage_mut().as_bytes_mut());
        }
        out.storage_mut().set_endian(endian);
        out
    }
}

impl<T: Element + FromStr> NdArray<T> {
    /// Read text written by [`NdArray::tofile`] back as a `1 x k` array
    ///
    /// Whitespace around values is ignored. An empty separator reads a raw
    /// binary file like [`NdArray::load`].
    pub fn fromfile(path: impl AsRef<Path>, sep: &str) -> Result<Self> {
        let path = path.as_ref();
        if sep.is_empty() {
            return Self::load(path);
        }
        let text = fs::read_to_string(path)?;
        trace!("fromfile: read {} bytes of text from {}", text.len(), path.display());
        let data = text
            .split(sep)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<T>()
                    .map_err(|_| Error::invalid_argument("path", format!("cannot parse '{s}'")))
            })
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::from_parts(Shape::new(1, data.len()), data))
    }
}
