//! Auto-growing little-endian binary writer.

/// A binary buffer writer backed by a growable `Vec<u8>`.
///
/// Every `u*`/`i*`/`f*` method appends the little-endian representation of
/// its argument. [`Writer::flush`] hands out the accumulated bytes and leaves
/// the writer empty, so one writer can serve many encode calls.
///
/// # Example
///
/// ```
/// use near_lite_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u32(1);
/// assert_eq!(writer.flush(), vec![1, 0, 0, 0]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Discards everything written so far.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Number of bytes written since the last reset.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Borrows the bytes written so far without resetting.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Appends raw bytes.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.uint8.push(val as u8);
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn u128(&mut self, val: u128) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn i128(&mut self, val: i128) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.buf(&val.to_le_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.buf(&val.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_layout() {
        let mut writer = Writer::new();
        writer.u16(0x0102);
        writer.u32(0x0304_0506);
        assert_eq!(writer.flush(), vec![0x02, 0x01, 0x06, 0x05, 0x04, 0x03]);
    }

    #[test]
    fn test_flush_resets() {
        let mut writer = Writer::with_capacity(4);
        writer.u8(7);
        assert_eq!(writer.len(), 1);
        assert_eq!(writer.flush(), vec![7]);
        assert!(writer.is_empty());
        writer.u8(8);
        assert_eq!(writer.flush(), vec![8]);
    }

    #[test]
    fn test_reset_discards() {
        let mut writer = Writer::new();
        writer.buf(&[1, 2, 3]);
        writer.reset();
        writer.i8(-1);
        assert_eq!(writer.as_slice(), &[0xff]);
    }
}
