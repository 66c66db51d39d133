//! Variable-length integers made of fixed-width chunks.
//!
//! An integer is split into digits of [`ChunkBits`] bits each, which are written most-significant
//! first, one digit per byte. Every byte except the last carries a continuation flag in the bit
//! right above the digit:
//!
//! ```text
//! chunk width = 7, value = 300 (0b10_0101100)
//!
//!   1 0000010    0 0101100
//!   ^ flag       ^ last byte, no flag
//! ```
//!
//! A chunk width of `0` selects the fixed mode, in which every integer occupies exactly one byte
//! and no continuation flag exists.

use super::{Error, Result};
use bytes::BufMut;


/// Maximum number of bytes an encoded integer can occupy.
///
/// This is reached by [`u64::MAX`] with a chunk width of one bit.
pub const MAX_ENCODED_LEN: usize = u64::BITS as usize;

/// Width of the digits of a variable-length integer, in bits.
///
/// The width is limited to [`ChunkBits::MAX`] so that the digit and the continuation flag fit in a
/// single byte. A width of `0` represents the fixed single-byte mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkBits(u8);

impl ChunkBits {
    /// Fixed single-byte mode, without continuation.
    pub const FIXED: Self = Self(0);

    /// Largest supported chunk width.
    pub const MAX: u8 = 7;

    /// Creates a new [`ChunkBits`] with the given width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChunkBits`] if `bits` exceeds [`ChunkBits::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{ChunkBits, Error};
    ///
    /// assert_eq!(ChunkBits::new(7).map(ChunkBits::as_u8), Ok(7));
    /// assert_eq!(ChunkBits::new(8), Err(Error::UnsupportedChunkBits(8)));
    /// ```
    pub fn new(bits: u8) -> Result<Self> {
        if bits > Self::MAX {
            return Err(Error::UnsupportedChunkBits(bits));
        }
        Ok(Self(bits))
    }

    /// Returns the width in bits.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Returns whether this is the fixed single-byte mode.
    #[inline]
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        self.0 == 0
    }

    /// Bit which marks a byte as being followed by another one.
    ///
    /// In fixed mode this lies outside of the byte, so it is never set.
    const fn flag(self) -> u16 {
        if self.is_fixed() {
            1 << u8::BITS
        } else {
            1 << self.0
        }
    }
}

impl TryFrom<u8> for ChunkBits {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ChunkBits> for u8 {
    fn from(value: ChunkBits) -> Self {
        value.0
    }
}

impl std::fmt::Display for ChunkBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An encoded integer.
///
/// Stores the bytes inline, so that the type and length fields of a record can be encoded before
/// anything is written to the output buffer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    bytes: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl Encoded {
    /// Returns the encoded bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl std::ops::Deref for Encoded {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for Encoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x?}", self.as_slice())
    }
}

/// Returns the largest integer that can be encoded with the given chunk width.
///
/// # Examples
///
/// ```rust
/// use rtlv::{varint, ChunkBits};
///
/// assert_eq!(varint::max_value(ChunkBits::FIXED), 255);
/// assert_eq!(varint::max_value(ChunkBits::new(7)?), u64::MAX);
/// # Ok::<(), rtlv::Error>(())
/// ```
#[must_use]
pub fn max_value(bits: ChunkBits) -> u64 {
    if bits.is_fixed() {
        u64::from(u8::MAX)
    } else {
        u64::MAX
    }
}

/// Returns the number of bytes needed to encode `value` with the given chunk width.
///
/// The result is only meaningful for values up to [`max_value`].
///
/// # Examples
///
/// ```rust
/// use rtlv::{varint, ChunkBits};
///
/// let bits = ChunkBits::new(7)?;
/// assert_eq!(varint::encoded_len(0, bits), 1);
/// assert_eq!(varint::encoded_len(127, bits), 1);
/// assert_eq!(varint::encoded_len(128, bits), 2);
/// # Ok::<(), rtlv::Error>(())
/// ```
#[must_use]
pub fn encoded_len(value: u64, bits: ChunkBits) -> usize {
    if bits.is_fixed() {
        return 1;
    }
    let significant = u64::BITS - value.leading_zeros();
    significant.div_ceil(u32::from(bits.as_u8())).max(1) as usize
}

/// Encodes `value` into a sequence of chunks of the given width.
///
/// # Errors
///
/// Returns [`Error::IntegerTooLarge`] if `value` exceeds [`max_value`], which only happens in
/// fixed mode.
///
/// # Examples
///
/// ```rust
/// use rtlv::{varint, ChunkBits, Error};
///
/// let bits = ChunkBits::new(7)?;
/// assert_eq!(varint::encode(300, bits)?.as_slice(), &[0x82, 0x2c]);
///
/// assert_eq!(varint::encode(255, ChunkBits::FIXED)?.as_slice(), &[0xff]);
/// assert_eq!(
///     varint::encode(256, ChunkBits::FIXED),
///     Err(Error::IntegerTooLarge { value: 256, max: 255 })
/// );
/// # Ok::<(), rtlv::Error>(())
/// ```
pub fn encode(value: u64, bits: ChunkBits) -> Result<Encoded> {
    let mut bytes = [0u8; MAX_ENCODED_LEN];
    if bits.is_fixed() {
        bytes[0] = u8::try_from(value).map_err(|_| Error::IntegerTooLarge {
            value,
            max: max_value(bits),
        })?;
        return Ok(Encoded { bytes, len: 1 });
    }
    let width = bits.as_u8();
    let mask = (1u64 << width) - 1;
    let len = encoded_len(value, bits);
    let mut rest = value;
    for (index, byte) in bytes[..len].iter_mut().enumerate().rev() {
        let digit = (rest & mask) as u8;
        *byte = if index + 1 == len {
            digit
        } else {
            digit | (1 << width)
        };
        rest >>= width;
    }
    Ok(Encoded { bytes, len })
}

/// Encodes `value` directly into the buffer.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::IntegerTooLarge`] if `value` exceeds [`max_value`], in which case nothing is
/// written to the buffer.
///
/// # Examples
///
/// ```rust
/// use rtlv::{varint, ChunkBits};
/// use rtlv::BytesMut;
///
/// let mut buffer = BytesMut::new();
/// assert_eq!(varint::encode_into(16, ChunkBits::new(3)?, &mut buffer), Ok(2));
/// assert_eq!(&buffer[..], &[0x0a, 0x00]);
/// # Ok::<(), rtlv::Error>(())
/// ```
pub fn encode_into(value: u64, bits: ChunkBits, buffer: &mut impl BufMut) -> Result<usize> {
    let encoded = encode(value, bits)?;
    buffer.put_slice(&encoded);
    Ok(encoded.len())
}

/// Decodes an integer from `buffer`, starting at `offset`.
///
/// Returns the integer and the number of bytes it occupied.
///
/// The last byte of an integer is added to it as a whole, without masking any of its bits.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if the buffer ends before the last byte of the integer,
/// and [`Error::IntegerOverflow`] if the integer does not fit in a [`u64`].
///
/// # Examples
///
/// ```rust
/// use rtlv::{varint, ChunkBits, Error};
///
/// let bits = ChunkBits::new(7)?;
/// assert_eq!(varint::decode(&[0x82, 0x2c], 0, bits), Ok((300, 2)));
/// assert_eq!(varint::decode(&[0x01, 0x82], 1, bits), Err(Error::InsufficientData { offset: 2 }));
/// # Ok::<(), rtlv::Error>(())
/// ```
pub fn decode(buffer: &[u8], offset: usize, bits: ChunkBits) -> Result<(u64, usize)> {
    let flag = bits.flag();
    let base = 1u64 << bits.as_u8();
    let mut value = 0u64;
    let mut position = offset;
    loop {
        let byte = *buffer
            .get(position)
            .ok_or(Error::InsufficientData { offset: position })?;
        position += 1;
        if u16::from(byte) & flag == 0 {
            value = value
                .checked_add(u64::from(byte))
                .ok_or(Error::IntegerOverflow { offset })?;
            return Ok((value, position - offset));
        }
        let digit = u16::from(byte) & (flag - 1);
        value = value
            .checked_add(u64::from(digit))
            .and_then(|value| value.checked_mul(base))
            .ok_or(Error::IntegerOverflow { offset })?;
    }
}
