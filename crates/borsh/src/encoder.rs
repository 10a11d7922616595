//! Borsh binary encoder.

use near_lite_buffers::Writer;

use crate::tagged::checked_tag;
use crate::{BorshEncode, BorshError};

/// Borsh binary encoder.
///
/// All integers and floats are little-endian. Dynamic containers carry a
/// `u32` element count; fixed arrays, structs and tuples carry nothing but
/// their fields.
pub struct BorshEncoder {
    pub writer: Writer,
}

impl Default for BorshEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BorshEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `value` and returns the encoded bytes.
    ///
    /// On error the partially written output is discarded.
    pub fn encode<T: BorshEncode + ?Sized>(&mut self, value: &T) -> Result<Vec<u8>, BorshError> {
        self.writer.reset();
        if let Err(err) = value.encode(self) {
            self.writer.reset();
            return Err(err);
        }
        Ok(self.writer.flush())
    }

    // ---------------------------------------------------------------- primitives

    pub fn write_u8(&mut self, n: u8) {
        self.writer.u8(n);
    }

    pub fn write_u16(&mut self, n: u16) {
        self.writer.u16(n);
    }

    pub fn write_u32(&mut self, n: u32) {
        self.writer.u32(n);
    }

    pub fn write_u64(&mut self, n: u64) {
        self.writer.u64(n);
    }

    pub fn write_u128(&mut self, n: u128) {
        self.writer.u128(n);
    }

    pub fn write_i8(&mut self, n: i8) {
        self.writer.i8(n);
    }

    pub fn write_i16(&mut self, n: i16) {
        self.writer.i16(n);
    }

    pub fn write_i32(&mut self, n: i32) {
        self.writer.i32(n);
    }

    pub fn write_i64(&mut self, n: i64) {
        self.writer.i64(n);
    }

    pub fn write_i128(&mut self, n: i128) {
        self.writer.i128(n);
    }

    /// Writes a boolean as a single `0`/`1` byte.
    pub fn write_bool(&mut self, b: bool) {
        self.writer.u8(b as u8);
    }

    pub fn write_f32(&mut self, f: f32) -> Result<(), BorshError> {
        if f.is_nan() {
            return Err(BorshError::NanFloat);
        }
        self.writer.f32(f);
        Ok(())
    }

    pub fn write_f64(&mut self, f: f64) -> Result<(), BorshError> {
        if f.is_nan() {
            return Err(BorshError::NanFloat);
        }
        self.writer.f64(f);
        Ok(())
    }

    // ---------------------------------------------------------------- containers

    /// Writes a `u32` length/count prefix.
    pub fn write_len(&mut self, len: usize) -> Result<(), BorshError> {
        let len = u32::try_from(len).map_err(|_| BorshError::LengthOverflow(len))?;
        self.writer.u32(len);
        Ok(())
    }

    /// Writes raw bytes with no prefix (fixed-size arrays).
    pub fn write_fixed(&mut self, data: &[u8]) {
        self.writer.buf(data);
    }

    /// Writes a byte sequence: `[len: u32][bytes]`.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), BorshError> {
        self.write_len(data.len())?;
        self.writer.buf(data);
        Ok(())
    }

    /// Writes a string: `[len: u32][utf8 bytes]`.
    pub fn write_str(&mut self, s: &str) -> Result<(), BorshError> {
        self.write_bytes(s.as_bytes())
    }

    /// Writes the `Option` presence byte.
    pub fn write_option_tag(&mut self, present: bool) {
        self.writer.u8(present as u8);
    }

    /// Writes the tag byte of an enum value.
    ///
    /// Fails with [`BorshError::InvalidVariant`] unless `ordinal < count`.
    pub fn write_tag(
        &mut self,
        name: &'static str,
        ordinal: usize,
        count: usize,
    ) -> Result<(), BorshError> {
        let tag = checked_tag(name, ordinal, count)?;
        self.writer.u8(tag);
        Ok(())
    }
}
