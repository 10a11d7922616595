//! Light-client block views and the hashes a relayer recomputes from them.
//!
//! A light client never sees a full header. It rebuilds the block hash from
//! the lite part of the inner header plus the hashes of the parts it skips,
//! then checks producer approvals over the next block's hash. Signature
//! checking itself is left to the caller.

use sha2::digest::consts::U32;
use sha2::Digest;
use tracing::{debug, trace};

use crate::merkle::combine_hash;
use crate::types::{ApprovalInner, BlockHeight, CryptoHash};
use crate::{to_vec, BorshDecode, BorshDecoder, BorshEncode, BorshEncoder, BorshError};

fn hash_encoded<D, T>(value: &T) -> Result<CryptoHash, BorshError>
where
    D: Digest<OutputSize = U32>,
    T: BorshEncode + ?Sized,
{
    let bytes = to_vec(value)?;
    Ok(CryptoHash(D::digest(&bytes).into()))
}

// ----------------------------------------------------------------- keys

/// Validator public key, tagged by curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Ed25519([u8; 32]),
    Secp256k1([u8; 64]),
}

impl PublicKey {
    const NAME: &'static str = "PublicKey";
    const VARIANT_COUNT: usize = 2;

    pub fn ordinal(&self) -> u8 {
        match self {
            PublicKey::Ed25519(_) => 0,
            PublicKey::Secp256k1(_) => 1,
        }
    }
}

impl BorshEncode for PublicKey {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_tag(Self::NAME, self.ordinal() as usize, Self::VARIANT_COUNT)?;
        match self {
            PublicKey::Ed25519(key) => encoder.write_fixed(key),
            PublicKey::Secp256k1(key) => encoder.write_fixed(key),
        }
        Ok(())
    }
}

impl BorshDecode for PublicKey {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        match decoder.read_tag(Self::NAME, Self::VARIANT_COUNT)? {
            0 => Ok(PublicKey::Ed25519(<[u8; 32]>::decode(decoder)?)),
            1 => Ok(PublicKey::Secp256k1(<[u8; 64]>::decode(decoder)?)),
            ordinal => Err(BorshError::InvalidVariant {
                name: Self::NAME,
                ordinal: ordinal as usize,
                count: Self::VARIANT_COUNT,
            }),
        }
    }
}

/// Approval signature, tagged by curve. Carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    Ed25519([u8; 64]),
    Secp256k1([u8; 65]),
}

impl Signature {
    const NAME: &'static str = "Signature";
    const VARIANT_COUNT: usize = 2;

    pub fn ordinal(&self) -> u8 {
        match self {
            Signature::Ed25519(_) => 0,
            Signature::Secp256k1(_) => 1,
        }
    }
}

impl BorshEncode for Signature {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_tag(Self::NAME, self.ordinal() as usize, Self::VARIANT_COUNT)?;
        match self {
            Signature::Ed25519(sig) => encoder.write_fixed(sig),
            Signature::Secp256k1(sig) => encoder.write_fixed(sig),
        }
        Ok(())
    }
}

impl BorshDecode for Signature {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        match decoder.read_tag(Self::NAME, Self::VARIANT_COUNT)? {
            0 => Ok(Signature::Ed25519(<[u8; 64]>::decode(decoder)?)),
            1 => Ok(Signature::Secp256k1(<[u8; 65]>::decode(decoder)?)),
            ordinal => Err(BorshError::InvalidVariant {
                name: Self::NAME,
                ordinal: ordinal as usize,
                count: Self::VARIANT_COUNT,
            }),
        }
    }
}

// ----------------------------------------------------------- validators

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorStakeViewV1 {
    pub account_id: String,
    pub public_key: PublicKey,
    pub stake: u128,
}

impl BorshEncode for ValidatorStakeViewV1 {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.account_id.encode(encoder)?;
        self.public_key.encode(encoder)?;
        self.stake.encode(encoder)
    }
}

impl BorshDecode for ValidatorStakeViewV1 {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Ok(Self {
            account_id: String::decode(decoder)?,
            public_key: PublicKey::decode(decoder)?,
            stake: u128::decode(decoder)?,
        })
    }
}

/// Versioned block producer entry. Only `V1` exists on the wire today, but
/// it still carries its tag byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorStakeView {
    V1(ValidatorStakeViewV1),
}

impl ValidatorStakeView {
    const NAME: &'static str = "ValidatorStakeView";
    const VARIANT_COUNT: usize = 1;

    pub fn into_validator_stake(self) -> ValidatorStakeViewV1 {
        match self {
            ValidatorStakeView::V1(stake) => stake,
        }
    }
}

impl BorshEncode for ValidatorStakeView {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        match self {
            ValidatorStakeView::V1(stake) => {
                encoder.write_tag(Self::NAME, 0, Self::VARIANT_COUNT)?;
                stake.encode(encoder)
            }
        }
    }
}

impl BorshDecode for ValidatorStakeView {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        decoder.read_tag(Self::NAME, Self::VARIANT_COUNT)?;
        Ok(ValidatorStakeView::V1(ValidatorStakeViewV1::decode(decoder)?))
    }
}

// --------------------------------------------------------------- headers

/// Lite part of the inner block header as served by RPC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeaderInnerLiteView {
    pub height: BlockHeight,
    pub epoch_id: CryptoHash,
    pub next_epoch_id: CryptoHash,
    pub prev_state_root: CryptoHash,
    pub outcome_root: CryptoHash,
    pub timestamp: u64,
    pub timestamp_nanosec: u64,
    pub next_bp_hash: CryptoHash,
    pub block_merkle_root: CryptoHash,
}

/// The hashed form of [`BlockHeaderInnerLiteView`], without
/// `timestamp_nanosec`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeaderInnerLiteViewFinal {
    pub height: BlockHeight,
    pub epoch_id: CryptoHash,
    pub next_epoch_id: CryptoHash,
    pub prev_state_root: CryptoHash,
    pub outcome_root: CryptoHash,
    pub timestamp: u64,
    pub next_bp_hash: CryptoHash,
    pub block_merkle_root: CryptoHash,
}

impl From<BlockHeaderInnerLiteView> for BlockHeaderInnerLiteViewFinal {
    fn from(view: BlockHeaderInnerLiteView) -> Self {
        Self {
            height: view.height,
            epoch_id: view.epoch_id,
            next_epoch_id: view.next_epoch_id,
            prev_state_root: view.prev_state_root,
            outcome_root: view.outcome_root,
            timestamp: view.timestamp,
            next_bp_hash: view.next_bp_hash,
            block_merkle_root: view.block_merkle_root,
        }
    }
}

impl BorshEncode for BlockHeaderInnerLiteView {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.height.encode(encoder)?;
        self.epoch_id.encode(encoder)?;
        self.next_epoch_id.encode(encoder)?;
        self.prev_state_root.encode(encoder)?;
        self.outcome_root.encode(encoder)?;
        self.timestamp.encode(encoder)?;
        self.timestamp_nanosec.encode(encoder)?;
        self.next_bp_hash.encode(encoder)?;
        self.block_merkle_root.encode(encoder)
    }
}

impl BorshDecode for BlockHeaderInnerLiteView {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Ok(Self {
            height: BlockHeight::decode(decoder)?,
            epoch_id: CryptoHash::decode(decoder)?,
            next_epoch_id: CryptoHash::decode(decoder)?,
            prev_state_root: CryptoHash::decode(decoder)?,
            outcome_root: CryptoHash::decode(decoder)?,
            timestamp: u64::decode(decoder)?,
            timestamp_nanosec: u64::decode(decoder)?,
            next_bp_hash: CryptoHash::decode(decoder)?,
            block_merkle_root: CryptoHash::decode(decoder)?,
        })
    }
}

impl BorshEncode for BlockHeaderInnerLiteViewFinal {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.height.encode(encoder)?;
        self.epoch_id.encode(encoder)?;
        self.next_epoch_id.encode(encoder)?;
        self.prev_state_root.encode(encoder)?;
        self.outcome_root.encode(encoder)?;
        self.timestamp.encode(encoder)?;
        self.next_bp_hash.encode(encoder)?;
        self.block_merkle_root.encode(encoder)
    }
}

impl BorshDecode for BlockHeaderInnerLiteViewFinal {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Ok(Self {
            height: BlockHeight::decode(decoder)?,
            epoch_id: CryptoHash::decode(decoder)?,
            next_epoch_id: CryptoHash::decode(decoder)?,
            prev_state_root: CryptoHash::decode(decoder)?,
            outcome_root: CryptoHash::decode(decoder)?,
            timestamp: u64::decode(decoder)?,
            next_bp_hash: CryptoHash::decode(decoder)?,
            block_merkle_root: CryptoHash::decode(decoder)?,
        })
    }
}

// ------------------------------------------------------------ block view

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightClientBlockView {
    pub prev_block_hash: CryptoHash,
    pub next_block_inner_hash: CryptoHash,
    pub inner_lite: BlockHeaderInnerLiteView,
    pub inner_rest_hash: CryptoHash,
    pub next_bps: Option<Vec<ValidatorStakeView>>,
    pub approvals_after_next: Vec<Option<Signature>>,
}

impl BorshEncode for LightClientBlockView {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.prev_block_hash.encode(encoder)?;
        self.next_block_inner_hash.encode(encoder)?;
        self.inner_lite.encode(encoder)?;
        self.inner_rest_hash.encode(encoder)?;
        self.next_bps.encode(encoder)?;
        self.approvals_after_next.encode(encoder)
    }
}

impl BorshDecode for LightClientBlockView {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Ok(Self {
            prev_block_hash: CryptoHash::decode(decoder)?,
            next_block_inner_hash: CryptoHash::decode(decoder)?,
            inner_lite: BlockHeaderInnerLiteView::decode(decoder)?,
            inner_rest_hash: CryptoHash::decode(decoder)?,
            next_bps: Option::decode(decoder)?,
            approvals_after_next: Vec::decode(decoder)?,
        })
    }
}

/// Hashes recomputed from a [`LightClientBlockView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockViewHashes {
    pub current_block_hash: CryptoHash,
    pub next_block_hash: CryptoHash,
    /// Bytes every approval in `approvals_after_next` signs.
    pub approval_message: Vec<u8>,
}

impl LightClientBlockView {
    pub fn current_block_hash<D>(&self) -> Result<CryptoHash, BorshError>
    where
        D: Digest<OutputSize = U32>,
    {
        current_block_hash::<D>(&self.inner_lite, &self.inner_rest_hash, &self.prev_block_hash)
    }

    /// Recomputes the current and next block hashes and the approval
    /// message for this view.
    pub fn reconstruct_hashes<D>(&self) -> Result<BlockViewHashes, BorshError>
    where
        D: Digest<OutputSize = U32>,
    {
        let current = self.current_block_hash::<D>()?;
        let next = next_block_hash::<D>(&self.next_block_inner_hash, &current)?;
        let message = approval_message(&next, self.inner_lite.height)?;
        debug!(
            height = self.inner_lite.height,
            current = %current,
            next = %next,
            "reconstructed light client block hashes"
        );
        Ok(BlockViewHashes {
            current_block_hash: current,
            next_block_hash: next,
            approval_message: message,
        })
    }

    /// Hash of the announced next block producers, if the view carries them.
    pub fn next_bps_hash<D>(&self) -> Result<Option<CryptoHash>, BorshError>
    where
        D: Digest<OutputSize = U32>,
    {
        self.next_bps
            .as_ref()
            .map(|bps| hash_encoded::<D, _>(bps))
            .transpose()
    }

    /// Whether `next_bps` hashes to `inner_lite.next_bp_hash`. `false` when
    /// the view carries no producer set.
    pub fn next_bps_match<D>(&self) -> Result<bool, BorshError>
    where
        D: Digest<OutputSize = U32>,
    {
        Ok(self.next_bps_hash::<D>()? == Some(self.inner_lite.next_bp_hash))
    }
}

/// Hash of the lite header in its final (hashed) layout.
pub fn inner_lite_hash<D>(inner_lite: &BlockHeaderInnerLiteView) -> Result<CryptoHash, BorshError>
where
    D: Digest<OutputSize = U32>,
{
    hash_encoded::<D, _>(&BlockHeaderInnerLiteViewFinal::from(*inner_lite))
}

/// `D(D(inner_lite_hash ++ inner_rest_hash) ++ prev_block_hash)`.
pub fn current_block_hash<D>(
    inner_lite: &BlockHeaderInnerLiteView,
    inner_rest_hash: &CryptoHash,
    prev_block_hash: &CryptoHash,
) -> Result<CryptoHash, BorshError>
where
    D: Digest<OutputSize = U32>,
{
    let lite = inner_lite_hash::<D>(inner_lite)?;
    let inner = combine_hash::<D>(&lite, inner_rest_hash)?;
    let hash = combine_hash::<D>(&inner, prev_block_hash)?;
    trace!(height = inner_lite.height, inner = %inner, hash = %hash, "current block hash");
    Ok(hash)
}

/// `D(next_block_inner_hash ++ current_block_hash)`.
pub fn next_block_hash<D>(
    next_block_inner_hash: &CryptoHash,
    current_block_hash: &CryptoHash,
) -> Result<CryptoHash, BorshError>
where
    D: Digest<OutputSize = U32>,
{
    combine_hash::<D>(next_block_inner_hash, current_block_hash)
}

/// What producers sign two blocks ahead: the endorsement of `next_block_hash`
/// followed by the target height `height + 2`.
pub fn approval_message(
    next_block_hash: &CryptoHash,
    height: BlockHeight,
) -> Result<Vec<u8>, BorshError> {
    let target = height
        .checked_add(2)
        .ok_or(BorshError::HeightOverflow(height))?;
    to_vec(&(ApprovalInner::Endorsement(*next_block_hash), target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_slice;
    use sha2::Sha256;

    fn header() -> BlockHeaderInnerLiteView {
        BlockHeaderInnerLiteView {
            height: 10,
            epoch_id: CryptoHash([1; 32]),
            next_epoch_id: CryptoHash([2; 32]),
            prev_state_root: CryptoHash([3; 32]),
            outcome_root: CryptoHash([4; 32]),
            timestamp: 1_700_000_000_000_000_000,
            timestamp_nanosec: 1_700_000_000_000_000_123,
            next_bp_hash: CryptoHash([5; 32]),
            block_merkle_root: CryptoHash([6; 32]),
        }
    }

    #[test]
    fn test_final_header_drops_nanosec_field() {
        let view = header();
        let fin = BlockHeaderInnerLiteViewFinal::from(view);
        assert_eq!(fin.timestamp, view.timestamp);
        assert_eq!(fin.block_merkle_root, view.block_merkle_root);
        assert_eq!(to_vec(&view).unwrap().len(), 8 + 32 * 4 + 8 + 8 + 32 * 2);
        assert_eq!(to_vec(&fin).unwrap().len(), 8 + 32 * 4 + 8 + 32 * 2);
    }

    #[test]
    fn test_approval_message_layout() {
        let next = CryptoHash([7; 32]);
        let message = approval_message(&next, 10).unwrap();
        assert_eq!(message.len(), 1 + 32 + 8);
        assert_eq!(message[0], 0);
        assert_eq!(&message[1..33], next.as_ref());
        assert_eq!(&message[33..], &12u64.to_le_bytes());
    }

    #[test]
    fn test_approval_message_height_overflow() {
        assert_eq!(
            approval_message(&CryptoHash::default(), u64::MAX - 1),
            Err(BorshError::HeightOverflow(u64::MAX - 1))
        );
    }

    #[test]
    fn test_block_view_decodes_its_own_encoding() {
        let view = LightClientBlockView {
            prev_block_hash: CryptoHash([8; 32]),
            next_block_inner_hash: CryptoHash([9; 32]),
            inner_lite: header(),
            inner_rest_hash: CryptoHash([10; 32]),
            next_bps: Some(vec![ValidatorStakeView::V1(ValidatorStakeViewV1 {
                account_id: "alice.near".to_owned(),
                public_key: PublicKey::Ed25519([11; 32]),
                stake: 42,
            })]),
            approvals_after_next: vec![None, Some(Signature::Ed25519([12; 64]))],
        };
        let bytes = to_vec(&view).unwrap();
        assert_eq!(from_slice::<LightClientBlockView>(&bytes).unwrap(), view);
        assert!(view.reconstruct_hashes::<Sha256>().is_ok());
    }

    #[test]
    fn test_unknown_key_curve() {
        assert_eq!(
            from_slice::<PublicKey>(&[2]),
            Err(BorshError::InvalidVariant {
                name: "PublicKey",
                ordinal: 2,
                count: 2
            })
        );
    }
}
