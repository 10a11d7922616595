//! Binary buffer utilities for near-lite-borsh.
//!
//! All multi-byte quantities are little-endian, which is the byte order Borsh
//! mandates for every integer and float it writes.
//!
//! # Overview
//!
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//!
//! # Example
//!
//! ```
//! use near_lite_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.buf(b"hello");
//! let data = writer.flush();
//! assert_eq!(&data[..3], &[0x01, 0x03, 0x02]);
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.u16().unwrap(), 0x0203);
//! assert_eq!(reader.buf(5).unwrap(), b"hello");
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: wanted {wanted} bytes, {remaining} remaining")]
    EndOfBuffer { wanted: usize, remaining: usize },
}
