//! The `DataType` tagged-union codec and its string/array building blocks.
//!
//! A bare property value payload carries no type tag; the discriminant is
//! the `DataTypeCode` read earlier from the property descriptor (or cached
//! from one). It is passed into [`PtpValue::decode`] explicitly.

use bytes::Bytes;

use super::{CodecError, Reader, Writer};
use crate::registry::codes::datatypes as dt;
use crate::types::DataTypeCode;

/// One decoded PTP value, discriminated by its [`DataTypeCode`].
///
/// `Undefined` is the opaque passthrough for type codes this client does
/// not recognize; it decodes to nothing and encodes its bytes verbatim,
/// so unrecognized vendor payloads still round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PtpValue {
    /// 8-bit signed scalar
    Int8(i8),
    /// 8-bit unsigned scalar
    UInt8(u8),
    /// 16-bit signed scalar
    Int16(i16),
    /// 16-bit unsigned scalar
    UInt16(u16),
    /// 32-bit signed scalar
    Int32(i32),
    /// 32-bit unsigned scalar
    UInt32(u32),
    /// 64-bit signed scalar
    Int64(i64),
    /// 64-bit unsigned scalar
    UInt64(u64),
    /// 128-bit signed scalar
    Int128(i128),
    /// 128-bit unsigned scalar
    UInt128(u128),
    /// Array of 8-bit signed
    Int8Array(Vec<i8>),
    /// Array of 8-bit unsigned
    UInt8Array(Vec<u8>),
    /// Array of 16-bit signed
    Int16Array(Vec<i16>),
    /// Array of 16-bit unsigned
    UInt16Array(Vec<u16>),
    /// Array of 32-bit signed
    Int32Array(Vec<i32>),
    /// Array of 32-bit unsigned
    UInt32Array(Vec<u32>),
    /// Array of 64-bit signed
    Int64Array(Vec<i64>),
    /// Array of 64-bit unsigned
    UInt64Array(Vec<u64>),
    /// Array of 128-bit signed
    Int128Array(Vec<i128>),
    /// Array of 128-bit unsigned
    UInt128Array(Vec<u128>),
    /// Length-prefixed UTF-16 string
    String(String),
    /// Opaque bytes for an unrecognized type code
    Undefined(Bytes),
}

impl PtpValue {
    /// The type code this value encodes as.
    #[must_use]
    pub fn data_type(&self) -> DataTypeCode {
        match self {
            PtpValue::Int8(_) => dt::INT8,
            PtpValue::UInt8(_) => dt::UINT8,
            PtpValue::Int16(_) => dt::INT16,
            PtpValue::UInt16(_) => dt::UINT16,
            PtpValue::Int32(_) => dt::INT32,
            PtpValue::UInt32(_) => dt::UINT32,
            PtpValue::Int64(_) => dt::INT64,
            PtpValue::UInt64(_) => dt::UINT64,
            PtpValue::Int128(_) => dt::INT128,
            PtpValue::UInt128(_) => dt::UINT128,
            PtpValue::Int8Array(_) => dt::INT8_ARRAY,
            PtpValue::UInt8Array(_) => dt::UINT8_ARRAY,
            PtpValue::Int16Array(_) => dt::INT16_ARRAY,
            PtpValue::UInt16Array(_) => dt::UINT16_ARRAY,
            PtpValue::Int32Array(_) => dt::INT32_ARRAY,
            PtpValue::UInt32Array(_) => dt::UINT32_ARRAY,
            PtpValue::Int64Array(_) => dt::INT64_ARRAY,
            PtpValue::UInt64Array(_) => dt::UINT64_ARRAY,
            PtpValue::Int128Array(_) => dt::INT128_ARRAY,
            PtpValue::UInt128Array(_) => dt::UINT128_ARRAY,
            PtpValue::String(_) => dt::STRING,
            PtpValue::Undefined(_) => dt::UNDEFINED,
        }
    }

    /// Whether `ty` selects one of the 21 codecs this client implements.
    #[must_use]
    pub fn is_known_type(ty: DataTypeCode) -> bool {
        matches!(
            ty,
            dt::INT8
                | dt::UINT8
                | dt::INT16
                | dt::UINT16
                | dt::INT32
                | dt::UINT32
                | dt::INT64
                | dt::UINT64
                | dt::INT128
                | dt::UINT128
                | dt::INT8_ARRAY
                | dt::UINT8_ARRAY
                | dt::INT16_ARRAY
                | dt::UINT16_ARRAY
                | dt::INT32_ARRAY
                | dt::UINT32_ARRAY
                | dt::INT64_ARRAY
                | dt::UINT64_ARRAY
                | dt::INT128_ARRAY
                | dt::UINT128_ARRAY
                | dt::STRING
        )
    }

    /// Decode one value of type `ty`.
    ///
    /// An unrecognized type code consumes nothing and yields an empty
    /// `Undefined`, leaving the reader where it was; callers that know the
    /// payload boundary should check [`PtpValue::is_known_type`] first and
    /// take the raw bytes themselves.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or malformed input.
    pub fn decode(r: &mut Reader<'_>, ty: DataTypeCode) -> Result<Self, CodecError> {
        Ok(match ty {
            dt::INT8 => PtpValue::Int8(r.read_i8()?),
            dt::UINT8 => PtpValue::UInt8(r.read_u8()?),
            dt::INT16 => PtpValue::Int16(r.read_i16()?),
            dt::UINT16 => PtpValue::UInt16(r.read_u16()?),
            dt::INT32 => PtpValue::Int32(r.read_i32()?),
            dt::UINT32 => PtpValue::UInt32(r.read_u32()?),
            dt::INT64 => PtpValue::Int64(r.read_i64()?),
            dt::UINT64 => PtpValue::UInt64(r.read_u64()?),
            dt::INT128 => PtpValue::Int128(r.read_i128()?),
            dt::UINT128 => PtpValue::UInt128(r.read_u128()?),
            dt::INT8_ARRAY => PtpValue::Int8Array(read_array(r, 1, |rr| rr.read_i8())?),
            dt::UINT8_ARRAY => PtpValue::UInt8Array(read_array(r, 1, |rr| rr.read_u8())?),
            dt::INT16_ARRAY => PtpValue::Int16Array(read_array(r, 2, |rr| rr.read_i16())?),
            dt::UINT16_ARRAY => PtpValue::UInt16Array(read_array(r, 2, |rr| rr.read_u16())?),
            dt::INT32_ARRAY => PtpValue::Int32Array(read_array(r, 4, |rr| rr.read_i32())?),
            dt::UINT32_ARRAY => PtpValue::UInt32Array(read_array(r, 4, |rr| rr.read_u32())?),
            dt::INT64_ARRAY => PtpValue::Int64Array(read_array(r, 8, |rr| rr.read_i64())?),
            dt::UINT64_ARRAY => PtpValue::UInt64Array(read_array(r, 8, |rr| rr.read_u64())?),
            dt::INT128_ARRAY => PtpValue::Int128Array(read_array(r, 16, |rr| rr.read_i128())?),
            dt::UINT128_ARRAY => PtpValue::UInt128Array(read_array(r, 16, |rr| rr.read_u128())?),
            dt::STRING => PtpValue::String(read_string(r)?),
            _ => PtpValue::Undefined(Bytes::new()),
        })
    }

    /// Encode this value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::StringTooLong`] for strings exceeding the
    /// wire limit.
    pub fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        match self {
            PtpValue::Int8(v) => w.put_i8(*v),
            PtpValue::UInt8(v) => w.put_u8(*v),
            PtpValue::Int16(v) => w.put_i16(*v),
            PtpValue::UInt16(v) => w.put_u16(*v),
            PtpValue::Int32(v) => w.put_i32(*v),
            PtpValue::UInt32(v) => w.put_u32(*v),
            PtpValue::Int64(v) => w.put_i64(*v),
            PtpValue::UInt64(v) => w.put_u64(*v),
            PtpValue::Int128(v) => w.put_i128(*v),
            PtpValue::UInt128(v) => w.put_u128(*v),
            PtpValue::Int8Array(v) => write_array(w, v, |w, e| w.put_i8(*e)),
            PtpValue::UInt8Array(v) => write_array(w, v, |w, e| w.put_u8(*e)),
            PtpValue::Int16Array(v) => write_array(w, v, |w, e| w.put_i16(*e)),
            PtpValue::UInt16Array(v) => write_array(w, v, |w, e| w.put_u16(*e)),
            PtpValue::Int32Array(v) => write_array(w, v, |w, e| w.put_i32(*e)),
            PtpValue::UInt32Array(v) => write_array(w, v, |w, e| w.put_u32(*e)),
            PtpValue::Int64Array(v) => write_array(w, v, |w, e| w.put_i64(*e)),
            PtpValue::UInt64Array(v) => write_array(w, v, |w, e| w.put_u64(*e)),
            PtpValue::Int128Array(v) => write_array(w, v, |w, e| w.put_i128(*e)),
            PtpValue::UInt128Array(v) => write_array(w, v, |w, e| w.put_u128(*e)),
            PtpValue::String(s) => write_string(w, s)?,
            PtpValue::Undefined(bytes) => w.put_slice(bytes),
        }
        Ok(())
    }
}

/// Read a u32-count-prefixed homogeneous array.
///
/// The count is validated against the bytes actually remaining before any
/// allocation, so a hostile length prefix cannot balloon memory.
pub(crate) fn read_array<T>(
    r: &mut Reader<'_>,
    elem_size: usize,
    read_elem: impl Fn(&mut Reader<'_>) -> Result<T, CodecError>,
) -> Result<Vec<T>, CodecError> {
    let count = r.read_u32()? as usize;
    let needed = count.saturating_mul(elem_size);
    if needed > r.remaining() {
        return Err(CodecError::Truncated {
            needed,
            have: r.remaining(),
        });
    }
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(read_elem(&mut *r)?);
    }
    Ok(out)
}

/// Write a u32-count-prefixed homogeneous array.
pub(crate) fn write_array<T>(w: &mut Writer, items: &[T], put_elem: impl Fn(&mut Writer, &T)) {
    #[allow(clippy::cast_possible_truncation)]
    w.put_u32(items.len() as u32);
    for item in items {
        put_elem(w, item);
    }
}

/// Read a PTP string: u8 element count, UTF-16 code units, terminated by
/// and trimmed at the first NUL. A zero count is the empty string.
pub(crate) fn read_string(r: &mut Reader<'_>) -> Result<String, CodecError> {
    let count = r.read_u8()? as usize;
    let mut units = Vec::with_capacity(count);
    for _ in 0..count {
        units.push(r.read_u16()?);
    }
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16(&units[..end]).map_err(|_| CodecError::InvalidString)
}

/// Write a PTP string: the empty string is a bare zero count; anything
/// else gets an implicit NUL terminator included in the count.
pub(crate) fn write_string(w: &mut Writer, s: &str) -> Result<(), CodecError> {
    if s.is_empty() {
        w.put_u8(0);
        return Ok(());
    }
    let units: Vec<u16> = s.encode_utf16().chain(std::iter::once(0)).collect();
    if units.len() > usize::from(u8::MAX) {
        return Err(CodecError::StringTooLong { len: units.len() });
    }
    #[allow(clippy::cast_possible_truncation)]
    w.put_u8(units.len() as u8);
    for unit in units {
        w.put_u16(unit);
    }
    Ok(())
}
