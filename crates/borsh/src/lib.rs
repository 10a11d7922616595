//! Borsh wire encoding for NEAR light-client types.
//!
//! Output is byte-compatible with the `borsh` crate used by `near-primitives`.
//! The centrepiece is the tagged enumeration: a closed set of unit variants
//! encodes to exactly one byte holding the variant's zero-based ordinal, with
//! no length prefix and no padding.
//!
//! ```
//! use near_lite_borsh::{from_slice, to_vec, Direction};
//!
//! assert_eq!(to_vec(&Direction::Left).unwrap(), vec![0]);
//! assert_eq!(to_vec(&Direction::Right).unwrap(), vec![1]);
//! assert_eq!(from_slice::<Direction>(&[1]).unwrap(), Direction::Right);
//! ```

mod decoder;
mod encoder;
mod error;
mod tagged;
mod traits;

pub mod block;
pub mod merkle;
pub mod types;

pub use decoder::{BorshDecoder, DecoderOptions};
pub use encoder::BorshEncoder;
pub use error::BorshError;
pub use tagged::{
    decode_variant, encode_ordinal, encode_variant, read_variant, write_variant, TaggedEnum,
    MAX_VARIANTS,
};
pub use traits::{BorshDecode, BorshEncode};
pub use types::{ApprovalInner, BlockHeight, CryptoHash, Direction, MerklePath, MerklePathItem};

/// Encodes `value` into a fresh byte vector.
pub fn to_vec<T: BorshEncode + ?Sized>(value: &T) -> Result<Vec<u8>, BorshError> {
    BorshEncoder::new().encode(value)
}

/// Decodes a `T` that must span all of `data`.
pub fn from_slice<T: BorshDecode>(data: &[u8]) -> Result<T, BorshError> {
    from_slice_with_options(data, DecoderOptions::default())
}

pub fn from_slice_with_options<T: BorshDecode>(
    data: &[u8],
    options: DecoderOptions,
) -> Result<T, BorshError> {
    let mut decoder = BorshDecoder::with_options(data, options);
    let value = T::decode(&mut decoder)?;
    decoder.finish()?;
    Ok(value)
}
