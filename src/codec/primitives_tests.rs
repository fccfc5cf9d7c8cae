use super::{CodecError, Endian, Reader, Writer};

#[test]
fn test_reader_little_endian() {
    let mut r = Reader::new(&[0x01, 0x02, 0x03, 0x04], Endian::Little);
    assert_eq!(r.read_u16().unwrap(), 0x0201);
    assert_eq!(r.read_u16().unwrap(), 0x0403);
    assert!(r.is_empty());
}

#[test]
fn test_reader_big_endian() {
    let mut r = Reader::new(&[0x01, 0x02, 0x03, 0x04], Endian::Big);
    assert_eq!(r.read_u32().unwrap(), 0x0102_0304);
}

#[test]
fn test_reader_truncated() {
    let mut r = Reader::new(&[0x01, 0x02], Endian::Little);
    let err = r.read_u32().unwrap_err();
    assert_eq!(err, CodecError::Truncated { needed: 4, have: 2 });
    // Failed read consumes nothing.
    assert_eq!(r.remaining(), 2);
}

#[test]
fn test_reader_signed() {
    let mut r = Reader::new(&[0xFF, 0xFF, 0xFF], Endian::Little);
    assert_eq!(r.read_i8().unwrap(), -1);
    assert_eq!(r.read_i16().unwrap(), -1);
}

#[test]
fn test_reader_128_bit() {
    let mut bytes = [0u8; 16];
    bytes[0] = 0x2A;
    let mut r = Reader::new(&bytes, Endian::Little);
    assert_eq!(r.read_u128().unwrap(), 42);

    let mut r = Reader::new(&bytes, Endian::Big);
    assert_eq!(r.read_u128().unwrap(), 42u128 << 120);
}

#[test]
fn test_reader_rest() {
    let mut r = Reader::new(&[0x01, 0x02, 0x03], Endian::Little);
    r.read_u8().unwrap();
    assert_eq!(r.rest(), &[0x02, 0x03]);
    assert!(r.is_empty());
    assert_eq!(r.rest(), &[] as &[u8]);
}

#[test]
fn test_writer_round_trip_all_widths() {
    for endian in [Endian::Little, Endian::Big, Endian::Native] {
        let mut w = Writer::new(endian);
        w.put_u8(0x12);
        w.put_i8(-3);
        w.put_u16(0xBEEF);
        w.put_i16(-1234);
        w.put_u32(0xDEAD_BEEF);
        w.put_i32(-123_456);
        w.put_u64(0x0123_4567_89AB_CDEF);
        w.put_i64(-1_234_567_890_123);
        w.put_u128(u128::MAX - 7);
        w.put_i128(i128::MIN + 11);
        let bytes = w.into_bytes();

        let mut r = Reader::new(&bytes, endian);
        assert_eq!(r.read_u8().unwrap(), 0x12);
        assert_eq!(r.read_i8().unwrap(), -3);
        assert_eq!(r.read_u16().unwrap(), 0xBEEF);
        assert_eq!(r.read_i16().unwrap(), -1234);
        assert_eq!(r.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(r.read_i32().unwrap(), -123_456);
        assert_eq!(r.read_u64().unwrap(), 0x0123_4567_89AB_CDEF);
        assert_eq!(r.read_i64().unwrap(), -1_234_567_890_123);
        assert_eq!(r.read_u128().unwrap(), u128::MAX - 7);
        assert_eq!(r.read_i128().unwrap(), i128::MIN + 11);
        assert!(r.is_empty());
    }
}

#[test]
fn test_writer_endianness_differs() {
    let mut le = Writer::new(Endian::Little);
    le.put_u16(0x1234);
    let mut be = Writer::new(Endian::Big);
    be.put_u16(0x1234);
    assert_eq!(&le.into_bytes()[..], &[0x34, 0x12]);
    assert_eq!(&be.into_bytes()[..], &[0x12, 0x34]);
}
