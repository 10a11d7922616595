//! Decoder limits and malformed-input rejection.

use near_lite_borsh::{
    from_slice, from_slice_with_options, to_vec, BorshDecoder, BorshEncoder, BorshError,
    DecoderOptions,
};

#[test]
fn default_options() {
    let options = DecoderOptions::default();
    assert_eq!(options.max_len, u32::MAX as usize);
    assert!(!options.allow_trailing);
}

#[test]
fn trailing_bytes_matrix() {
    let data = [5u8, 0, 0, 0, 0xff];
    assert_eq!(
        from_slice::<u32>(&data),
        Err(BorshError::TrailingBytes {
            consumed: 4,
            remaining: 1
        })
    );
    let lenient = DecoderOptions {
        allow_trailing: true,
        ..DecoderOptions::default()
    };
    assert_eq!(from_slice_with_options::<u32>(&data, lenient), Ok(5));
}

#[test]
fn max_len_matrix() {
    let bytes = to_vec(&vec![1u8, 2, 3, 4]).unwrap();
    let tight = DecoderOptions {
        max_len: 3,
        ..DecoderOptions::default()
    };
    assert_eq!(
        from_slice_with_options::<Vec<u8>>(&bytes, tight),
        Err(BorshError::LengthLimit { len: 4, max: 3 })
    );
    let exact = DecoderOptions {
        max_len: 4,
        ..DecoderOptions::default()
    };
    assert_eq!(
        from_slice_with_options::<Vec<u8>>(&bytes, exact),
        Ok(vec![1, 2, 3, 4])
    );
}

#[test]
fn hostile_length_prefix_fails_without_allocating() {
    let data = [0xff, 0xff, 0xff, 0xff, 1];
    assert_eq!(from_slice::<Vec<u64>>(&data), Err(BorshError::UnexpectedEof));
    assert_eq!(from_slice::<String>(&data), Err(BorshError::UnexpectedEof));
}

#[test]
fn malformed_scalar_matrix() {
    assert_eq!(from_slice::<bool>(&[2]), Err(BorshError::InvalidBool(2)));
    assert_eq!(
        from_slice::<Option<u8>>(&[3, 0]),
        Err(BorshError::InvalidOption(3))
    );
    assert_eq!(
        from_slice::<String>(&[2, 0, 0, 0, 0xc3, 0x28]),
        Err(BorshError::InvalidUtf8)
    );
    assert_eq!(
        from_slice::<f64>(&f64::NAN.to_le_bytes()),
        Err(BorshError::NanFloat)
    );
    assert_eq!(to_vec(&f32::NAN), Err(BorshError::NanFloat));
}

#[test]
fn failed_encode_leaves_encoder_reusable() {
    let mut encoder = BorshEncoder::new();
    assert!(encoder.encode(&(1u8, f64::NAN)).is_err());
    assert!(encoder.writer.is_empty());
    assert_eq!(encoder.encode(&2u8).unwrap(), vec![2]);
}

#[test]
fn decoder_reads_in_sequence() {
    let mut encoder = BorshEncoder::new();
    encoder.write_u8(9);
    encoder.write_str("abc").unwrap();
    encoder.write_bytes(&[7, 7]).unwrap();
    encoder.write_tag("Pair", 1, 2).unwrap();
    let data = encoder.writer.flush();

    let mut decoder = BorshDecoder::new(&data);
    assert_eq!(decoder.read_u8(), Ok(9));
    assert_eq!(decoder.read_str(), Ok("abc"));
    assert_eq!(decoder.read_bytes(), Ok(&[7u8, 7][..]));
    assert_eq!(decoder.read_tag("Pair", 2), Ok(1));
    assert_eq!(decoder.remaining(), 0);
    assert_eq!(decoder.finish(), Ok(()));
}

#[test]
fn write_tag_rejects_out_of_range() {
    let mut encoder = BorshEncoder::new();
    assert_eq!(
        encoder.write_tag("Pair", 2, 2),
        Err(BorshError::InvalidVariant {
            name: "Pair",
            ordinal: 2,
            count: 2
        })
    );
    assert!(encoder.writer.is_empty());
}

#[test]
fn zero_sized_collection_prefix_is_rejected() {
    // Four input bytes claiming 268 million elements.
    let data = [0xff, 0xff, 0xff, 0x0f];
    assert_eq!(
        from_slice::<Vec<()>>(&data),
        Err(BorshError::ZeroSizedCollection)
    );
    assert_eq!(from_slice::<Vec<()>>(&[0, 0, 0, 0]), Ok(Vec::new()));
}

#[test]
fn read_tag_rejects_oversized_variant_set() {
    let data = [0u8];
    let mut decoder = BorshDecoder::new(&data);
    assert_eq!(
        decoder.read_tag("Wide", 257),
        Err(BorshError::TooManyVariants {
            name: "Wide",
            count: 257
        })
    );
    assert_eq!(decoder.read_tag("Byte", 256), Ok(0));
}
