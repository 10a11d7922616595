//! Borsh encoder/decoder error type.

use near_lite_buffers::BufferError;
use thiserror::Error;

/// Error type for Borsh encoding and decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BorshError {
    /// An enum ordinal outside the declared variant set.
    #[error("invalid variant ordinal {ordinal} for enum `{name}` with {count} variants")]
    InvalidVariant {
        name: &'static str,
        ordinal: usize,
        count: usize,
    },
    #[error("enum `{name}` declares {count} variants, more than a tag byte can address")]
    TooManyVariants { name: &'static str, count: usize },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("{remaining} trailing bytes after {consumed} consumed")]
    TrailingBytes { consumed: usize, remaining: usize },
    #[error("invalid bool byte 0x{0:02x}")]
    InvalidBool(u8),
    #[error("invalid option tag 0x{0:02x}")]
    InvalidOption(u8),
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
    #[error("NaN is not encodable")]
    NanFloat,
    #[error("length {0} does not fit a u32 prefix")]
    LengthOverflow(usize),
    #[error("length {len} exceeds limit {max}")]
    LengthLimit { len: usize, max: usize },
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A non-empty collection of zero-sized elements. Decoding one would
    /// spin on the length prefix without consuming input.
    #[error("collections of zero-sized types are not allowed")]
    ZeroSizedCollection,
    #[error("block height {0} overflows the approval target height")]
    HeightOverflow(u64),
}

impl From<BufferError> for BorshError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { .. } => BorshError::UnexpectedEof,
        }
    }
}
