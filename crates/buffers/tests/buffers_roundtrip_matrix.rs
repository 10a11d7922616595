//! Writer/Reader roundtrip matrix for the little-endian buffers crate.

use near_lite_buffers::{BufferError, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8_i8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0xFF);
    w.i8(i8::MIN);
    w.i8(-1);
    let data = w.flush();
    assert_eq!(data, vec![0x00, 0xFF, 0x80, 0xFF]);
    let mut r = Reader::new(&data);
    assert_eq!(r.u8(), Ok(0x00));
    assert_eq!(r.u8(), Ok(0xFF));
    assert_eq!(r.i8(), Ok(i8::MIN));
    assert_eq!(r.i8(), Ok(-1));
}

#[test]
fn roundtrip_16_and_32_bit() {
    let mut w = Writer::new();
    w.u16(u16::MAX);
    w.i16(-1000);
    w.u32(0x0102_0304);
    w.i32(i32::MIN);
    let data = w.flush();
    assert_eq!(&data[4..8], &[0x04, 0x03, 0x02, 0x01]);
    let mut r = Reader::new(&data);
    assert_eq!(r.u16(), Ok(u16::MAX));
    assert_eq!(r.i16(), Ok(-1000));
    assert_eq!(r.u32(), Ok(0x0102_0304));
    assert_eq!(r.i32(), Ok(i32::MIN));
    assert_eq!(r.size(), 0);
}

#[test]
fn roundtrip_64_and_128_bit() {
    let mut w = Writer::new();
    w.u64(0x0102_0304_0506_0708);
    w.i64(-9_999_999_999);
    w.u128(u128::MAX - 1);
    w.i128(i128::MIN);
    let data = w.flush();
    assert_eq!(data.len(), 8 + 8 + 16 + 16);
    assert_eq!(data[0], 0x08);
    let mut r = Reader::new(&data);
    assert_eq!(r.u64(), Ok(0x0102_0304_0506_0708));
    assert_eq!(r.i64(), Ok(-9_999_999_999));
    assert_eq!(r.u128(), Ok(u128::MAX - 1));
    assert_eq!(r.i128(), Ok(i128::MIN));
}

#[test]
fn roundtrip_floats() {
    let mut w = Writer::new();
    w.f32(1.5);
    w.f64(-0.25);
    let data = w.flush();
    assert_eq!(&data[..4], &1.5f32.to_le_bytes());
    let mut r = Reader::new(&data);
    assert_eq!(r.f32(), Ok(1.5));
    assert_eq!(r.f64(), Ok(-0.25));
}

#[test]
fn reader_reports_end_of_buffer() {
    let data = [1u8, 2, 3];
    let mut r = Reader::new(&data);
    assert_eq!(
        r.u64(),
        Err(BufferError::EndOfBuffer {
            wanted: 8,
            remaining: 3
        })
    );
    assert_eq!(r.buf(3), Ok(&data[..]));
    assert_eq!(
        r.buf(1),
        Err(BufferError::EndOfBuffer {
            wanted: 1,
            remaining: 0
        })
    );
}
