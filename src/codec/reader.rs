use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::level::Vertex;

/// Largest element count accepted from a float-encoded count field.
const MAX_COUNT: f64 = i32::MAX as f64;

/// Bounds-checked little-endian reader over a level buffer
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Start reading at `pos`, failing if it lies past the end of `data`.
    pub fn at(data: &'a [u8], pos: usize) -> Result<Self> {
        let mut reader = Self::new(data);
        reader.skip(pos)?;
        Ok(reader)
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn truncated(&self, need: usize) -> Error {
        Error::TruncatedBuffer {
            offset: self.pos,
            need,
            have: self.remaining(),
        }
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.read_bytes(8)?))
    }

    /// Read a 32-bit flag; any non-zero value is true
    pub fn read_flag(&mut self) -> Result<bool> {
        Ok(self.read_i32_le()? != 0)
    }

    /// Read a null-padded fixed-width text field.
    ///
    /// Every NUL byte is dropped, not just the trailing padding, and the rest
    /// is decoded as Latin-1 so that no byte sequence can fail.
    pub fn read_fixed_string(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_bytes(len)?;
        Ok(bytes
            .iter()
            .filter(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect())
    }

    /// Read an element count stored as `f64` with `magic` added to it.
    ///
    /// The stored value must be exactly what `count as f64 + magic` yields.
    pub fn read_count(&mut self, magic: f64) -> Result<usize> {
        let offset = self.pos;
        let value = self.read_f64_le()?;
        let rounded = (value - magic).round();
        if !rounded.is_finite()
            || rounded < 0.0
            || rounded > MAX_COUNT
            || rounded + magic != value
        {
            return Err(Error::MalformedCount { offset, value });
        }
        Ok(rounded as usize)
    }

    /// Read a vertex count stored as a plain `i32`
    pub fn read_len_i32(&mut self) -> Result<usize> {
        let offset = self.pos;
        let len = self.read_i32_le()?;
        usize::try_from(len).map_err(|_| Error::MalformedCount {
            offset,
            value: f64::from(len),
        })
    }

    /// Read a vertex (two f64 values)
    pub fn read_vertex(&mut self) -> Result<Vertex> {
        Ok(Vertex {
            x: self.read_f64_le()?,
            y: self.read_f64_le()?,
        })
    }

    /// Read an `i32` code and map it through `from_code`
    pub fn read_enum<T>(&mut self, field: &'static str, from_code: fn(i32) -> Option<T>) -> Result<T> {
        let offset = self.pos;
        let value = self.read_i32_le()?;
        from_code(value).ok_or(Error::InvalidEnum { offset, field, value })
    }

    /// Read an `i32` and require it to equal `expected`
    pub fn expect_marker(&mut self, expected: u32) -> Result<()> {
        let offset = self.pos;
        let actual = self.read_u32_le()?;
        if actual != expected {
            return Err(Error::IntegrityMarkerMismatch { offset, expected, actual });
        }
        Ok(())
    }
}
