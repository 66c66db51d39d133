//! TLV records.
//!
//! Provides the [`Record`] produced by a [`Parser`] and accepted by [`Builder::add_record`].
//!
//! [`Parser`]: crate::Parser
//! [`Builder::add_record`]: crate::Builder::add_record

use super::{varint, Bytes, Config};


/// A single Type-Length-Value record.
///
/// The value is opaque to this crate, and is stored as a [`Bytes`] so that records produced by a
/// [`Parser`] share the memory of the parsed buffer.
///
/// [`Parser`]: crate::Parser
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Record {
    /// Type of the record.
    pub tag: u64,
    /// Length of the value, in bytes.
    pub length: usize,
    /// Contents of the record.
    pub value: Bytes,
}

impl Record {
    /// Creates a new [`Record`], taking its length from the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::Record;
    ///
    /// let record = Record::new(10, "Foobar");
    /// assert_eq!(record.length, 6);
    /// assert_eq!(&record.value[..], b"Foobar");
    /// ```
    #[must_use]
    pub fn new(tag: u64, value: impl Into<Bytes>) -> Self {
        let value = value.into();
        Self {
            tag,
            length: value.len(),
            value,
        }
    }

    /// Returns the number of bytes a [`Builder`] with the given configuration writes for this
    /// record.
    ///
    /// Records whose fields cannot be encoded with the configuration are not taken into account.
    ///
    /// [`Builder`]: crate::Builder
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{ChunkBits, Config, Record};
    ///
    /// let record = Record::new(300, vec![0u8; 200]);
    /// let config = Config::extended(ChunkBits::new(7)?);
    /// assert_eq!(record.encoded_len(&config), 2 + 2 + 200);
    /// # Ok::<(), rtlv::Error>(())
    /// ```
    #[must_use]
    pub fn encoded_len(&self, config: &Config) -> usize {
        let type_width = varint::encoded_len(self.tag, config.type_bits());
        let mut length = self.value.len() as u64;
        if config.length_includes_type_width() {
            length = length.saturating_add(type_width as u64);
        }
        type_width + varint::encoded_len(length, config.length_bits()) + self.value.len()
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("tag", &self.tag)
            .field("length", &self.length)
            .field("value", &format_args!("{:02x?}", &self.value[..]))
            .finish()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}): {:02x?}", self.tag, self.length, &self.value[..])
    }
}
