//! Light-client wire types.
//!
//! These mirror the `near-primitives` definitions field for field, so their
//! Borsh bytes match what a NEAR node produces.

use std::fmt;

use crate::{tagged_enum, BorshDecode, BorshDecoder, BorshEncode, BorshEncoder, BorshError};

pub type BlockHeight = u64;

/// A 32-byte hash, encoded as a raw fixed array.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CryptoHash(pub [u8; 32]);

pub type MerkleHash = CryptoHash;

impl CryptoHash {
    pub const LENGTH: usize = 32;

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for CryptoHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for CryptoHash {
    type Error = BorshError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 32]>::try_from(bytes)
            .map(Self)
            .map_err(|_| BorshError::LengthMismatch {
                expected: Self::LENGTH,
                actual: bytes.len(),
            })
    }
}

impl AsRef<[u8]> for CryptoHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl BorshEncode for CryptoHash {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_fixed(&self.0);
        Ok(())
    }
}

impl BorshDecode for CryptoHash {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        CryptoHash::try_from(decoder.read_fixed(Self::LENGTH)?)
    }
}

tagged_enum! {
    /// Side on which a merkle path sibling sits.
    #[derive(Debug, PartialEq, Eq, Hash)]
    pub enum Direction {
        Left = 0,
        Right = 1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerklePathItem {
    pub hash: MerkleHash,
    pub direction: Direction,
}

impl BorshEncode for MerklePathItem {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.hash.encode(encoder)?;
        self.direction.encode(encoder)
    }
}

impl BorshDecode for MerklePathItem {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Ok(Self {
            hash: CryptoHash::decode(decoder)?,
            direction: Direction::decode(decoder)?,
        })
    }
}

/// Sibling hashes from a leaf up to the root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MerklePath(pub Vec<MerklePathItem>);

impl MerklePath {
    pub fn iter(&self) -> std::slice::Iter<'_, MerklePathItem> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<MerklePathItem>> for MerklePath {
    fn from(items: Vec<MerklePathItem>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a MerklePath {
    type Item = &'a MerklePathItem;
    type IntoIter = std::slice::Iter<'a, MerklePathItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BorshEncode for MerklePath {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.0.encode(encoder)
    }
}

impl BorshDecode for MerklePath {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Vec::decode(decoder).map(Self)
    }
}

/// What a block producer signs: endorse a block hash, or skip to a height.
///
/// Tag byte first, then the payload of that variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalInner {
    Endorsement(CryptoHash),
    Skip(BlockHeight),
}

impl ApprovalInner {
    const NAME: &'static str = "ApprovalInner";
    const VARIANT_COUNT: usize = 2;

    pub fn ordinal(&self) -> u8 {
        match self {
            ApprovalInner::Endorsement(_) => 0,
            ApprovalInner::Skip(_) => 1,
        }
    }
}

impl BorshEncode for ApprovalInner {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_tag(Self::NAME, self.ordinal() as usize, Self::VARIANT_COUNT)?;
        match self {
            ApprovalInner::Endorsement(hash) => hash.encode(encoder),
            ApprovalInner::Skip(height) => height.encode(encoder),
        }
    }
}

impl BorshDecode for ApprovalInner {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        match decoder.read_tag(Self::NAME, Self::VARIANT_COUNT)? {
            0 => Ok(ApprovalInner::Endorsement(CryptoHash::decode(decoder)?)),
            1 => Ok(ApprovalInner::Skip(BlockHeight::decode(decoder)?)),
            ordinal => Err(BorshError::InvalidVariant {
                name: Self::NAME,
                ordinal: ordinal as usize,
                count: Self::VARIANT_COUNT,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_slice, to_vec};

    #[test]
    fn test_crypto_hash_display() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let text = CryptoHash(bytes).to_string();
        assert_eq!(text.len(), 64);
        assert!(text.starts_with("ab00"));
        assert!(text.ends_with("01"));
    }

    #[test]
    fn test_crypto_hash_from_slice_length() {
        assert_eq!(CryptoHash::try_from(&[7u8; 32][..]), Ok(CryptoHash([7; 32])));
        assert_eq!(
            CryptoHash::try_from(&[0u8; 33][..]),
            Err(BorshError::LengthMismatch {
                expected: 32,
                actual: 33
            })
        );
        assert_eq!(
            CryptoHash::try_from(&[0u8; 5][..]),
            Err(BorshError::LengthMismatch {
                expected: 32,
                actual: 5
            })
        );
    }

    #[test]
    fn test_approval_inner_layout() {
        let skip = ApprovalInner::Skip(5);
        assert_eq!(to_vec(&skip).unwrap(), vec![1, 5, 0, 0, 0, 0, 0, 0, 0]);

        let endorse = ApprovalInner::Endorsement(CryptoHash([9; 32]));
        let bytes = to_vec(&endorse).unwrap();
        assert_eq!(bytes.len(), 33);
        assert_eq!(bytes[0], 0);
        assert_eq!(from_slice::<ApprovalInner>(&bytes).unwrap(), endorse);
    }

    #[test]
    fn test_approval_inner_unknown_tag() {
        assert_eq!(
            from_slice::<ApprovalInner>(&[2]),
            Err(BorshError::InvalidVariant {
                name: "ApprovalInner",
                ordinal: 2,
                count: 2
            })
        );
    }
}
