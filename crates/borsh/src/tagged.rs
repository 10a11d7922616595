//! Tagged enumerations: a closed variant set encoded as one ordinal byte.
//!
//! Each variant's ordinal is its zero-based declaration position. The
//! ordinal table is part of the wire format; consumers decode by ordinal
//! alone, so a table must never be reordered once published.

use tracing::debug;

use crate::{BorshDecoder, BorshEncoder, BorshError};

/// Largest variant set a single tag byte can address.
pub const MAX_VARIANTS: usize = 256;

/// A closed enumeration with a frozen ordinal table.
///
/// Implement this with [`tagged_enum!`](crate::tagged_enum), which declares
/// the ordinals explicitly and checks at compile time that they are exactly
/// `0..N` in declaration order.
pub trait TaggedEnum: Copy + Sized + 'static {
    /// Type name used in error reports.
    const NAME: &'static str;
    /// Every variant, indexed by ordinal.
    const VARIANTS: &'static [Self];

    fn ordinal(self) -> u8;

    fn from_ordinal(ordinal: u8) -> Option<Self>;
}

pub(crate) fn checked_tag(
    name: &'static str,
    ordinal: usize,
    count: usize,
) -> Result<u8, BorshError> {
    if count > MAX_VARIANTS {
        return Err(BorshError::TooManyVariants { name, count });
    }
    if ordinal >= count {
        debug!(name, ordinal, count, "refusing to encode out-of-range ordinal");
        return Err(BorshError::InvalidVariant {
            name,
            ordinal,
            count,
        });
    }
    Ok(ordinal as u8)
}

/// Encodes an enum value as its single tag byte.
///
/// ```
/// use near_lite_borsh::{encode_variant, Direction};
///
/// assert_eq!(encode_variant(&Direction::Left).unwrap(), vec![0]);
/// assert_eq!(encode_variant(&Direction::Right).unwrap(), vec![1]);
/// ```
pub fn encode_variant<E: TaggedEnum>(value: &E) -> Result<Vec<u8>, BorshError> {
    let tag = checked_tag(E::NAME, value.ordinal() as usize, E::VARIANTS.len())?;
    Ok(vec![tag])
}

/// Encodes a raw ordinal received from outside the type system, rejecting
/// anything that does not name a variant of `E`.
pub fn encode_ordinal<E: TaggedEnum>(ordinal: u8) -> Result<Vec<u8>, BorshError> {
    let tag = checked_tag(E::NAME, ordinal as usize, E::VARIANTS.len())?;
    Ok(vec![tag])
}

/// Decodes a value encoded by [`encode_variant`]. The input must be exactly
/// one byte.
pub fn decode_variant<E: TaggedEnum>(data: &[u8]) -> Result<E, BorshError> {
    let mut decoder = BorshDecoder::new(data);
    let value = read_variant(&mut decoder)?;
    decoder.finish()?;
    Ok(value)
}

/// Writes the tag byte of `value` into `encoder`.
pub fn write_variant<E: TaggedEnum>(encoder: &mut BorshEncoder, value: E) -> Result<(), BorshError> {
    encoder.write_tag(E::NAME, value.ordinal() as usize, E::VARIANTS.len())
}

/// Reads one tag byte from `decoder` and maps it back to a variant of `E`.
pub fn read_variant<E: TaggedEnum>(decoder: &mut BorshDecoder<'_>) -> Result<E, BorshError> {
    let count = E::VARIANTS.len();
    let tag = decoder.read_tag(E::NAME, count)?;
    E::from_ordinal(tag).ok_or(BorshError::InvalidVariant {
        name: E::NAME,
        ordinal: tag as usize,
        count,
    })
}

/// Declares a unit-only enum with an explicit, frozen ordinal table.
///
/// The generated type derives `Clone` and `Copy`, is `#[repr(u8)]`, and
/// implements [`TaggedEnum`](crate::TaggedEnum),
/// [`BorshEncode`](crate::BorshEncode) and
/// [`BorshDecode`](crate::BorshDecode). Every variant must carry `= N`, and
/// the `N`s must count up from zero in declaration order or the crate fails
/// to compile.
///
/// ```
/// use near_lite_borsh::{tagged_enum, to_vec, TaggedEnum};
///
/// tagged_enum! {
///     #[derive(Debug, PartialEq, Eq)]
///     pub enum Signal {
///         Stop = 0,
///         Go = 1,
///         Wait = 2,
///     }
/// }
///
/// assert_eq!(to_vec(&Signal::Wait).unwrap(), vec![2]);
/// assert_eq!(Signal::from_ordinal(1), Some(Signal::Go));
/// assert_eq!(Signal::VARIANTS.len(), 3);
/// ```
///
/// A gap in the table is a compile error:
///
/// ```compile_fail
/// near_lite_borsh::tagged_enum! {
///     pub enum Gappy {
///         A = 0,
///         B = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $ordinal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $ordinal ),+
        }

        impl $crate::TaggedEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$( $name::$variant ),+];

            fn ordinal(self) -> u8 {
                self as u8
            }

            fn from_ordinal(ordinal: u8) -> ::core::option::Option<Self> {
                match ordinal {
                    $( $ordinal => ::core::option::Option::Some($name::$variant), )+
                    _ => ::core::option::Option::None,
                }
            }
        }

        const _: () = {
            let variants = <$name as $crate::TaggedEnum>::VARIANTS;
            let mut i = 0;
            while i < variants.len() {
                assert!(
                    variants[i] as usize == i,
                    "tagged enum ordinals must be 0..N in declaration order"
                );
                i += 1;
            }
        };

        impl $crate::BorshEncode for $name {
            fn encode(
                &self,
                encoder: &mut $crate::BorshEncoder,
            ) -> ::core::result::Result<(), $crate::BorshError> {
                $crate::write_variant(encoder, *self)
            }
        }

        impl $crate::BorshDecode for $name {
            fn decode(
                decoder: &mut $crate::BorshDecoder<'_>,
            ) -> ::core::result::Result<Self, $crate::BorshError> {
                $crate::read_variant(decoder)
            }
        }
    };
}
