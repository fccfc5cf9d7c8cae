//! Endianness-parameterized primitive readers and writers.

use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use bytes::{BufMut, Bytes, BytesMut};

use super::CodecError;

/// Byte order for all wire integers.
///
/// Fixed once per engine instance; every reader and writer closes over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least significant byte first (USB, PTP/IP).
    Little,
    /// Most significant byte first.
    Big,
    /// Whatever the host uses. Only useful for in-process loopbacks.
    Native,
}

macro_rules! read_multi {
    ($(#[$meta:meta])* $fn:ident, $ty:ty, $n:expr, $bo:ident) => {
        $(#[$meta])*
        ///
        /// # Errors
        ///
        /// Returns [`CodecError::Truncated`] if fewer bytes remain.
        pub fn $fn(&mut self) -> Result<$ty, CodecError> {
            let endian = self.endian;
            let bytes = self.take($n)?;
            Ok(match endian {
                Endian::Little => LittleEndian::$bo(bytes),
                Endian::Big => BigEndian::$bo(bytes),
                Endian::Native => NativeEndian::$bo(bytes),
            })
        }
    };
}

macro_rules! put_multi {
    ($(#[$meta:meta])* $fn:ident, $ty:ty, $le:ident, $be:ident, $ne:ident) => {
        $(#[$meta])*
        pub fn $fn(&mut self, value: $ty) {
            match self.endian {
                Endian::Little => self.buf.$le(value),
                Endian::Big => self.buf.$be(value),
                Endian::Native => self.buf.$ne(value),
            }
        }
    };
}

/// Sequential reader over a byte slice with a fixed endianness.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    endian: Endian,
}

impl<'a> Reader<'a> {
    /// Create a reader over `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8], endian: Endian) -> Self {
        Self {
            buf,
            pos: 0,
            endian,
        }
    }

    /// The endianness this reader decodes with.
    #[must_use]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether all input has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Current offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Consume exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if fewer than `n` bytes remain.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::Truncated {
                needed: n,
                have: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Consume everything left.
    pub fn rest(&mut self) -> &'a [u8] {
        let slice = &self.buf[self.pos..];
        self.pos = self.buf.len();
        slice
    }

    /// Read one unsigned byte.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if the input is exhausted.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    /// Read one signed byte.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Truncated`] if the input is exhausted.
    #[allow(clippy::cast_possible_wrap)]
    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        Ok(self.take(1)?[0] as i8)
    }

    read_multi!(
        /// Read a 16-bit unsigned integer.
        read_u16, u16, 2, read_u16
    );
    read_multi!(
        /// Read a 16-bit signed integer.
        read_i16, i16, 2, read_i16
    );
    read_multi!(
        /// Read a 32-bit unsigned integer.
        read_u32, u32, 4, read_u32
    );
    read_multi!(
        /// Read a 32-bit signed integer.
        read_i32, i32, 4, read_i32
    );
    read_multi!(
        /// Read a 64-bit unsigned integer.
        read_u64, u64, 8, read_u64
    );
    read_multi!(
        /// Read a 64-bit signed integer.
        read_i64, i64, 8, read_i64
    );
    read_multi!(
        /// Read a 128-bit unsigned integer.
        read_u128, u128, 16, read_u128
    );
    read_multi!(
        /// Read a 128-bit signed integer.
        read_i128, i128, 16, read_i128
    );
}

/// Growable output buffer with a fixed endianness.
#[derive(Debug)]
pub struct Writer {
    buf: BytesMut,
    endian: Endian,
}

impl Writer {
    /// Create an empty writer.
    #[must_use]
    pub fn new(endian: Endian) -> Self {
        Self {
            buf: BytesMut::with_capacity(64),
            endian,
        }
    }

    /// The endianness this writer encodes with.
    #[must_use]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish and return the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// Append raw bytes verbatim.
    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Append one unsigned byte.
    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Append one signed byte.
    pub fn put_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    put_multi!(
        /// Append a 16-bit unsigned integer.
        put_u16, u16, put_u16_le, put_u16, put_u16_ne
    );
    put_multi!(
        /// Append a 16-bit signed integer.
        put_i16, i16, put_i16_le, put_i16, put_i16_ne
    );
    put_multi!(
        /// Append a 32-bit unsigned integer.
        put_u32, u32, put_u32_le, put_u32, put_u32_ne
    );
    put_multi!(
        /// Append a 32-bit signed integer.
        put_i32, i32, put_i32_le, put_i32, put_i32_ne
    );
    put_multi!(
        /// Append a 64-bit unsigned integer.
        put_u64, u64, put_u64_le, put_u64, put_u64_ne
    );
    put_multi!(
        /// Append a 64-bit signed integer.
        put_i64, i64, put_i64_le, put_i64, put_i64_ne
    );
    put_multi!(
        /// Append a 128-bit unsigned integer.
        put_u128, u128, put_u128_le, put_u128, put_u128_ne
    );
    put_multi!(
        /// Append a 128-bit signed integer.
        put_i128, i128, put_i128_le, put_i128, put_i128_ne
    );
}
