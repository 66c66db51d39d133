//! Configuration shared by [`Builder`] and [`Parser`].
//!
//! [`Builder`]: crate::Builder
//! [`Parser`]: crate::Parser

use super::ChunkBits;


/// Layout of the type and length fields of a TLV stream.
///
/// The configuration is not part of the stream itself, so both ends of an exchange must agree on
/// it out of band.
///
/// # Examples
///
/// ```rust
/// use rtlv::{ChunkBits, Config};
///
/// let config = Config::new()
///     .with_type_bits(ChunkBits::new(7)?)
///     .with_length_bits(ChunkBits::new(3)?);
/// assert_eq!(config.type_bits().as_u8(), 7);
/// assert_eq!(config.length_bits().as_u8(), 3);
/// assert!(!config.length_includes_type_width());
/// # Ok::<(), rtlv::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    type_bits: ChunkBits,
    length_bits: ChunkBits,
    length_includes_type_width: bool,
}

impl Config {
    /// Creates a new [`Config`] where both fields occupy a single fixed byte.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            type_bits: ChunkBits::FIXED,
            length_bits: ChunkBits::FIXED,
            length_includes_type_width: false,
        }
    }

    /// Creates a new [`Config`] where both fields use the same chunk width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{ChunkBits, Config};
    ///
    /// let bits = ChunkBits::new(7)?;
    /// let config = Config::new().with_type_bits(bits).with_length_bits(bits);
    /// assert_eq!(Config::extended(bits), config);
    /// # Ok::<(), rtlv::Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub const fn extended(bits: ChunkBits) -> Self {
        Self::new().with_type_bits(bits).with_length_bits(bits)
    }

    /// Returns a copy of `self` with the given chunk width for the type field.
    #[inline]
    #[must_use]
    pub const fn with_type_bits(mut self, bits: ChunkBits) -> Self {
        self.type_bits = bits;
        self
    }

    /// Returns a copy of `self` with the given chunk width for the length field.
    #[inline]
    #[must_use]
    pub const fn with_length_bits(mut self, bits: ChunkBits) -> Self {
        self.length_bits = bits;
        self
    }

    /// Returns a copy of `self` which adds the width of the encoded type field to the length of
    /// every record written by a [`Builder`].
    ///
    /// This is meant for formats in which the length covers more than the value. A [`Parser`]
    /// ignores this setting and always reads as many value bytes as the length field says.
    ///
    /// [`Builder`]: crate::Builder
    /// [`Parser`]: crate::Parser
    #[inline]
    #[must_use]
    pub const fn with_length_includes_type_width(mut self, value: bool) -> Self {
        self.length_includes_type_width = value;
        self
    }

    /// Chunk width of the type field.
    #[inline]
    #[must_use]
    pub const fn type_bits(&self) -> ChunkBits {
        self.type_bits
    }

    /// Chunk width of the length field.
    #[inline]
    #[must_use]
    pub const fn length_bits(&self) -> ChunkBits {
        self.length_bits
    }

    /// Whether the width of the type field is added to the length of each record.
    #[inline]
    #[must_use]
    pub const fn length_includes_type_width(&self) -> bool {
        self.length_includes_type_width
    }
}
