//! Encoding of TLV records.
//!
//! Provides the [`Builder`], which appends records to a growable byte buffer.

use super::{varint, BufMut, Bytes, BytesMut, Config, Error, Parser, Record, Result};

#[cfg(test)]
mod tests;

/// Writes TLV records into a byte buffer.
///
/// Each call to [`Builder::add`] appends one record, made of the encoded type, the encoded length
/// and the value itself. Records are never separated by anything other than their own framing.
///
/// Appending is atomic: both fields are encoded before anything is written, so a failed call leaves
/// the buffer exactly as it was.
///
/// # Examples
///
/// ```rust
/// use rtlv::{Builder, ChunkBits, Config};
///
/// let mut builder = Builder::new(Config::extended(ChunkBits::new(7)?));
/// builder.add(10, "Foobar")?;
/// builder.add(300, "Bladibla")?;
/// assert_eq!(&builder.as_bytes()[..8], &[10, 6, b'F', b'o', b'o', b'b', b'a', b'r']);
/// assert_eq!(&builder.as_bytes()[8..11], &[0x82, 0x2c, 8]);
/// # Ok::<(), rtlv::Error>(())
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Builder {
    buffer: BytesMut,
    config: Config,
}

impl Builder {
    /// Creates a new [`Builder`] with an empty buffer.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            buffer: BytesMut::new(),
            config,
        }
    }

    /// Creates a new [`Builder`] with room for at least `capacity` bytes.
    #[must_use]
    pub fn with_capacity(config: Config, capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            config,
        }
    }

    /// Appends a record, taking its length from the value.
    ///
    /// Returns the number of bytes appended to the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeOverflow`] if `tag` cannot be encoded, or [`Error::LengthOverflow`] if
    /// the length cannot be encoded, with the configured chunk widths. In both cases, nothing is
    /// written to the buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{Builder, Config, Error};
    ///
    /// let mut builder = Builder::new(Config::new());
    /// assert_eq!(builder.add(255, [1u8, 2, 3]), Ok(5));
    /// assert_eq!(builder.add(256, [1u8, 2, 3]), Err(Error::TypeOverflow(256)));
    /// assert_eq!(builder.add(1, vec![0u8; 256]), Err(Error::LengthOverflow(256)));
    /// assert_eq!(builder.len(), 5);
    /// ```
    pub fn add(&mut self, tag: u64, value: impl AsRef<[u8]>) -> Result<usize> {
        self.append(tag, value.as_ref(), None)
    }

    /// Appends a record with an explicit length.
    ///
    /// The length is written as given, regardless of the size of `value`, which is appended as a
    /// whole. This allows for writing records whose value is completed by later additions.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Builder::add`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{Builder, Config};
    ///
    /// let mut builder = Builder::new(Config::new());
    /// assert_eq!(builder.add_with_length(7, b"", 2), Ok(2));
    /// assert_eq!(builder.as_bytes(), &[7, 2]);
    /// ```
    pub fn add_with_length(
        &mut self,
        tag: u64,
        value: impl AsRef<[u8]>,
        length: u64,
    ) -> Result<usize> {
        self.append(tag, value.as_ref(), Some(length))
    }

    /// Appends the type and value of an existing record.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Builder::add`].
    pub fn add_record(&mut self, record: &Record) -> Result<usize> {
        self.append(record.tag, &record.value, None)
    }

    fn append(&mut self, tag: u64, value: &[u8], length: Option<u64>) -> Result<usize> {
        let result = self.encode_fields(tag, value, length).map(|(tag_field, length_field)| {
            let size = tag_field.len() + length_field.len() + value.len();
            self.buffer.reserve(size);
            self.buffer.put_slice(&tag_field);
            self.buffer.put_slice(&length_field);
            self.buffer.put_slice(value);
            size
        });
        match &result {
            Ok(size) => {
                tracing::trace!(tag, size, offset = self.buffer.len() - size, "appended record");
            }
            Err(error) => tracing::debug!(tag, %error, "failed to append record"),
        }
        result
    }

    /// Encodes the type and length fields of a record, without touching the buffer.
    fn encode_fields(
        &self,
        tag: u64,
        value: &[u8],
        length: Option<u64>,
    ) -> Result<(varint::Encoded, varint::Encoded)> {
        let tag_field =
            varint::encode(tag, self.config.type_bits()).map_err(|_| Error::TypeOverflow(tag))?;
        let mut length = match length {
            Some(length) => length,
            None => u64::try_from(value.len()).map_err(|_| Error::LengthOverflow(u64::MAX))?,
        };
        if self.config.length_includes_type_width() {
            length = length
                .checked_add(tag_field.len() as u64)
                .ok_or(Error::LengthOverflow(length))?;
        }
        let length_field = varint::encode(length, self.config.length_bits())
            .map_err(|_| Error::LengthOverflow(length))?;
        Ok((tag_field, length_field))
    }

    /// Returns the number of bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if no records were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the configuration of this [`Builder`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a read-only view of the encoded records.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Removes every record from the buffer, keeping its capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns a [`Parser`] over a copy of the current buffer, with the same configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{Builder, Config, Record};
    ///
    /// let mut builder = Builder::new(Config::new());
    /// builder.add(1, "one")?;
    /// let records = builder.parser().collect_records()?;
    /// assert_eq!(records, vec![Record::new(1, "one")]);
    /// # Ok::<(), rtlv::Error>(())
    /// ```
    #[must_use]
    pub fn parser(&self) -> Parser {
        Parser::new(Bytes::copy_from_slice(&self.buffer), self.config)
    }

    /// Converts this [`Builder`] into an immutable buffer.
    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }

    /// Converts this [`Builder`] into its underlying buffer.
    #[must_use]
    pub fn into_bytes(self) -> BytesMut {
        self.buffer
    }
}

impl AsRef<[u8]> for Builder {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("config", &self.config)
            .field("buffer", &format_args!("{:02x?}", &self.buffer[..]))
            .finish()
    }
}
