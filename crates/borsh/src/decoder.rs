//! Borsh binary decoder.

use near_lite_buffers::Reader;
use tracing::debug;

use crate::{BorshError, MAX_VARIANTS};

/// Decoder limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Largest length/count prefix accepted for strings, byte sequences and
    /// vectors.
    pub max_len: usize,
    /// Accept input that still has bytes left after the top-level value.
    pub allow_trailing: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_len: u32::MAX as usize,
            allow_trailing: false,
        }
    }
}

/// Borsh binary decoder.
///
/// Wraps a [`Reader`] and exposes typed read methods mirroring
/// [`BorshEncoder`](crate::BorshEncoder). Borsh is schema-driven, so there is
/// no `read_any()`; callers (usually [`BorshDecode`](crate::BorshDecode)
/// impls) know what comes next.
pub struct BorshDecoder<'a> {
    pub reader: Reader<'a>,
    options: DecoderOptions,
}

impl<'a> BorshDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, DecoderOptions::default())
    }

    pub fn with_options(data: &'a [u8], options: DecoderOptions) -> Self {
        Self {
            reader: Reader::new(data),
            options,
        }
    }

    /// Resets the decoder with a new byte slice to decode from.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.reader.reset(data);
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Checks that the whole input was consumed, unless
    /// [`DecoderOptions::allow_trailing`] is set.
    pub fn finish(&self) -> Result<(), BorshError> {
        let remaining = self.reader.size();
        if remaining == 0 || self.options.allow_trailing {
            return Ok(());
        }
        debug!(
            consumed = self.reader.position(),
            remaining, "rejecting trailing bytes"
        );
        Err(BorshError::TrailingBytes {
            consumed: self.reader.position(),
            remaining,
        })
    }

    // ---------------------------------------------------------------- primitives

    pub fn read_u8(&mut self) -> Result<u8, BorshError> {
        Ok(self.reader.u8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16, BorshError> {
        Ok(self.reader.u16()?)
    }

    pub fn read_u32(&mut self) -> Result<u32, BorshError> {
        Ok(self.reader.u32()?)
    }

    pub fn read_u64(&mut self) -> Result<u64, BorshError> {
        Ok(self.reader.u64()?)
    }

    pub fn read_u128(&mut self) -> Result<u128, BorshError> {
        Ok(self.reader.u128()?)
    }

    pub fn read_i8(&mut self) -> Result<i8, BorshError> {
        Ok(self.reader.i8()?)
    }

    pub fn read_i16(&mut self) -> Result<i16, BorshError> {
        Ok(self.reader.i16()?)
    }

    pub fn read_i32(&mut self) -> Result<i32, BorshError> {
        Ok(self.reader.i32()?)
    }

    pub fn read_i64(&mut self) -> Result<i64, BorshError> {
        Ok(self.reader.i64()?)
    }

    pub fn read_i128(&mut self) -> Result<i128, BorshError> {
        Ok(self.reader.i128()?)
    }

    /// Reads a boolean; only `0` and `1` are valid.
    pub fn read_bool(&mut self) -> Result<bool, BorshError> {
        match self.reader.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => {
                debug!(byte, "rejecting bool byte");
                Err(BorshError::InvalidBool(byte))
            }
        }
    }

    pub fn read_f32(&mut self) -> Result<f32, BorshError> {
        let f = self.reader.f32()?;
        if f.is_nan() {
            return Err(BorshError::NanFloat);
        }
        Ok(f)
    }

    pub fn read_f64(&mut self) -> Result<f64, BorshError> {
        let f = self.reader.f64()?;
        if f.is_nan() {
            return Err(BorshError::NanFloat);
        }
        Ok(f)
    }

    // ---------------------------------------------------------------- containers

    /// Reads a `u32` length/count prefix and checks it against
    /// [`DecoderOptions::max_len`].
    pub fn read_len(&mut self) -> Result<usize, BorshError> {
        let len = self.reader.u32()? as usize;
        if len > self.options.max_len {
            debug!(len, max = self.options.max_len, "length prefix over limit");
            return Err(BorshError::LengthLimit {
                len,
                max: self.options.max_len,
            });
        }
        Ok(len)
    }

    /// Reads `len` raw bytes with no prefix.
    pub fn read_fixed(&mut self, len: usize) -> Result<&'a [u8], BorshError> {
        Ok(self.reader.buf(len)?)
    }

    /// Reads a byte sequence: `[len: u32][bytes]`.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], BorshError> {
        let len = self.read_len()?;
        self.read_fixed(len)
    }

    /// Reads a string: `[len: u32][utf8 bytes]`.
    pub fn read_str(&mut self) -> Result<&'a str, BorshError> {
        let bytes = self.read_bytes()?;
        std::str::from_utf8(bytes).map_err(|_| BorshError::InvalidUtf8)
    }

    /// Reads the `Option` presence byte.
    pub fn read_option_tag(&mut self) -> Result<bool, BorshError> {
        match self.reader.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => {
                debug!(byte, "rejecting option tag");
                Err(BorshError::InvalidOption(byte))
            }
        }
    }

    /// Reads an enum tag byte and checks it addresses one of `count`
    /// variants.
    pub fn read_tag(&mut self, name: &'static str, count: usize) -> Result<u8, BorshError> {
        if count > MAX_VARIANTS {
            return Err(BorshError::TooManyVariants { name, count });
        }
        let tag = self.reader.u8()?;
        if (tag as usize) >= count {
            debug!(name, tag, count, "rejecting enum tag");
            return Err(BorshError::InvalidVariant {
                name,
                ordinal: tag as usize,
                count,
            });
        }
        Ok(tag)
    }

    /// Remaining undecoded bytes.
    pub fn remaining(&self) -> usize {
        self.reader.size()
    }
}
