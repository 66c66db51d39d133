//! `rtlv` error types.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// A specialized result type for `rtlv` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error associated with encoding or decoding TLV records.
///
/// Every error is local to a single operation: a failed [`Builder::add`] leaves the buffer as it
/// was, and a failed parsing step ends the record sequence without affecting the records that were
/// already returned.
///
/// [`Builder::add`]: crate::Builder::add
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested chunk width does not fit a flag and a digit in a single byte.
    #[error(
        "unsupported chunk width: {0} bits (expected at most {max})",
        max = crate::ChunkBits::MAX
    )]
    UnsupportedChunkBits(u8),
    /// The integer cannot be represented with the given chunk width.
    #[error("integer exceeds maximum value: value={value} max={max}")]
    IntegerTooLarge { value: u64, max: u64 },
    /// The type of a record cannot be represented with the configured chunk width.
    #[error("type exceeds the capacity of the type field: {0}")]
    TypeOverflow(u64),
    /// The length of a record cannot be represented with the configured chunk width.
    #[error("length exceeds the capacity of the length field: {0}")]
    LengthOverflow(u64),
    /// The buffer ended in the middle of an integer.
    #[error("not enough data to decode integer at offset {offset}")]
    InsufficientData { offset: usize },
    /// The integer on the wire does not fit in 64 bits.
    #[error("integer at offset {offset} overflows 64 bits")]
    IntegerOverflow { offset: usize },
    /// The declared length of a value extends past the end of the buffer.
    #[error("value exceeds end of buffer: offset={offset} length={length} remaining={remaining}")]
    TruncatedValue {
        offset: usize,
        length: u64,
        remaining: usize,
    },
}
