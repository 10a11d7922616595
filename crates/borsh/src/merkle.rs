//! Merkle path verification over Borsh-encoded hash pairs.

use sha2::digest::consts::U32;
use sha2::Digest;
use tracing::trace;

use crate::types::{CryptoHash, Direction, MerkleHash, MerklePath};
use crate::{to_vec, BorshError};

/// Hashes the Borsh encoding of `(left, right)`, i.e. the 64 concatenated
/// bytes.
pub fn combine_hash<D>(left: &MerkleHash, right: &MerkleHash) -> Result<MerkleHash, BorshError>
where
    D: Digest<OutputSize = U32>,
{
    let bytes = to_vec(&(left, right))?;
    let digest: [u8; 32] = D::digest(&bytes).into();
    Ok(CryptoHash(digest))
}

/// Folds `path` over `item_hash` and returns the resulting root.
///
/// A `Left` sibling is hashed before the running value, a `Right` sibling
/// after it.
pub fn compute_root_from_path<D>(
    path: &MerklePath,
    item_hash: MerkleHash,
) -> Result<MerkleHash, BorshError>
where
    D: Digest<OutputSize = U32>,
{
    let mut res = item_hash;
    for (level, item) in path.iter().enumerate() {
        res = match item.direction {
            Direction::Left => combine_hash::<D>(&item.hash, &res)?,
            Direction::Right => combine_hash::<D>(&res, &item.hash)?,
        };
        trace!(level, direction = ?item.direction, node = %res, "merkle step");
    }
    Ok(res)
}

/// Returns whether `path` leads from `item_hash` to `expected_root`.
pub fn verify_path<D>(
    path: &MerklePath,
    item_hash: MerkleHash,
    expected_root: &MerkleHash,
) -> Result<bool, BorshError>
where
    D: Digest<OutputSize = U32>,
{
    Ok(compute_root_from_path::<D>(path, item_hash)? == *expected_root)
}
