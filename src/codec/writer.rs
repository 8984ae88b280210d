//! Little-endian byte writer used to assemble level fixtures in tests.

pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Zero-fill up to `pos`
    pub fn pad_to(&mut self, pos: usize) {
        if self.data.len() < pos {
            self.data.resize(pos, 0);
        }
    }

    pub fn write_u32_le(&mut self, v: u32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i32_le(&mut self, v: i32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_f64_le(&mut self, v: f64) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    /// Write `s` into a NUL-padded field of `len` bytes
    pub fn write_fixed_string(&mut self, s: &str, len: usize) {
        let bytes = s.as_bytes();
        let n = bytes.len().min(len);
        self.data.extend_from_slice(&bytes[..n]);
        self.data.resize(self.data.len() + (len - n), 0);
    }

    pub fn write_count(&mut self, count: usize, magic: f64) {
        self.write_f64_le(count as f64 + magic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fixed_string() {
        let mut writer = BinaryWriter::new();
        writer.write_fixed_string("abc", 5);
        writer.write_fixed_string("toolong", 3);
        assert_eq!(writer.into_vec(), b"abc\0\0too");
    }

    #[test]
    fn test_pad_to() {
        let mut writer = BinaryWriter::new();
        writer.write_bytes(b"POT06");
        writer.pad_to(8);
        assert_eq!(writer.len(), 8);
        writer.pad_to(4);
        assert_eq!(writer.len(), 8);
    }
}
