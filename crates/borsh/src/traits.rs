//! `BorshEncode`/`BorshDecode` and their impls for std types.

use tracing::debug;

use crate::{BorshDecoder, BorshEncoder, BorshError};

fn is_zero_sized<T>() -> bool {
    std::mem::size_of::<T>() == 0
}

/// A value with a Borsh wire representation.
pub trait BorshEncode {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError>;
}

/// A value that can be read back from its Borsh wire representation.
pub trait BorshDecode: Sized {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError>;
}

macro_rules! impl_int {
    ($($ty:ty => $write:ident, $read:ident;)*) => {
        $(
            impl BorshEncode for $ty {
                fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
                    encoder.$write(*self);
                    Ok(())
                }
            }

            impl BorshDecode for $ty {
                fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
                    decoder.$read()
                }
            }
        )*
    };
}

impl_int! {
    u8 => write_u8, read_u8;
    u16 => write_u16, read_u16;
    u32 => write_u32, read_u32;
    u64 => write_u64, read_u64;
    u128 => write_u128, read_u128;
    i8 => write_i8, read_i8;
    i16 => write_i16, read_i16;
    i32 => write_i32, read_i32;
    i64 => write_i64, read_i64;
    i128 => write_i128, read_i128;
    bool => write_bool, read_bool;
}

impl BorshEncode for f32 {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_f32(*self)
    }
}

impl BorshDecode for f32 {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        decoder.read_f32()
    }
}

impl BorshEncode for f64 {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_f64(*self)
    }
}

impl BorshDecode for f64 {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        decoder.read_f64()
    }
}

impl BorshEncode for () {
    fn encode(&self, _encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        Ok(())
    }
}

impl BorshDecode for () {
    fn decode(_decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        Ok(())
    }
}

impl BorshEncode for str {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_str(self)
    }
}

impl BorshEncode for String {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        encoder.write_str(self)
    }
}

impl BorshDecode for String {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        decoder.read_str().map(str::to_owned)
    }
}

impl<T: BorshEncode + ?Sized> BorshEncode for &T {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        (**self).encode(encoder)
    }
}

impl<T: BorshEncode> BorshEncode for [T] {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        if is_zero_sized::<T>() && !self.is_empty() {
            return Err(BorshError::ZeroSizedCollection);
        }
        encoder.write_len(self.len())?;
        for item in self {
            item.encode(encoder)?;
        }
        Ok(())
    }
}

impl<T: BorshEncode> BorshEncode for Vec<T> {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        self.as_slice().encode(encoder)
    }
}

impl<T: BorshDecode> BorshDecode for Vec<T> {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        let len = decoder.read_len()?;
        if is_zero_sized::<T>() && len > 0 {
            debug!(len, "rejecting collection of zero-sized elements");
            return Err(BorshError::ZeroSizedCollection);
        }
        // A hostile prefix must not drive the allocation.
        let mut items = Vec::with_capacity(len.min(decoder.remaining()));
        for _ in 0..len {
            items.push(T::decode(decoder)?);
        }
        Ok(items)
    }
}

impl<T: BorshEncode, const N: usize> BorshEncode for [T; N] {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        for item in self {
            item.encode(encoder)?;
        }
        Ok(())
    }
}

impl<T: BorshDecode, const N: usize> BorshDecode for [T; N] {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode(decoder)?);
        }
        items
            .try_into()
            .map_err(|items: Vec<T>| BorshError::LengthLimit {
                len: items.len(),
                max: N,
            })
    }
}

impl<T: BorshEncode> BorshEncode for Option<T> {
    fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
        match self {
            None => {
                encoder.write_option_tag(false);
                Ok(())
            }
            Some(value) => {
                encoder.write_option_tag(true);
                value.encode(encoder)
            }
        }
    }
}

impl<T: BorshDecode> BorshDecode for Option<T> {
    fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
        if decoder.read_option_tag()? {
            Ok(Some(T::decode(decoder)?))
        } else {
            Ok(None)
        }
    }
}

macro_rules! impl_tuple {
    ($($name:ident)+) => {
        impl<$($name: BorshEncode),+> BorshEncode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode(&self, encoder: &mut BorshEncoder) -> Result<(), BorshError> {
                let ($($name,)+) = self;
                $($name.encode(encoder)?;)+
                Ok(())
            }
        }

        impl<$($name: BorshDecode),+> BorshDecode for ($($name,)+) {
            fn decode(decoder: &mut BorshDecoder<'_>) -> Result<Self, BorshError> {
                Ok(($($name::decode(decoder)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
