//! Decoding of TLV records.
//!
//! Provides the [`Parser`], which iterates over the records of a byte buffer.

use super::{varint, Bytes, Config, Error, Record, Result};


/// Reads TLV records from a byte buffer in sequential order.
///
/// Records are produced lazily, one per call to [`Parser::next_record`] or [`Iterator::next`].
/// The values of the records are slices of the parsed buffer, so no data is copied.
///
/// The sequence ends without an error when the whole buffer has been consumed. If a record cannot
/// be decoded, the error is returned once and the sequence ends; records returned before the error
/// remain valid. [`Parser::reset`] starts over from the beginning of the buffer, after which
/// records are returned again, so the iterator is not fused.
///
/// # Examples
///
/// ```rust
/// use rtlv::{Builder, ChunkBits, Config, Parser};
///
/// let config = Config::extended(ChunkBits::new(7)?);
/// let mut builder = Builder::new(config);
/// builder.add(10, "Foobar")?;
/// builder.add(16, "Bladibla")?;
///
/// let mut parser = Parser::new(builder.freeze(), config);
/// let record = parser.next().transpose()?.expect("should have a record");
/// assert_eq!((record.tag, record.length, &record.value[..]), (10, 6, &b"Foobar"[..]));
/// let record = parser.next().transpose()?.expect("should have a record");
/// assert_eq!((record.tag, record.length, &record.value[..]), (16, 8, &b"Bladibla"[..]));
/// assert!(parser.next().is_none());
/// # Ok::<(), rtlv::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    buffer: Bytes,
    cursor: usize,
    config: Config,
    failed: bool,
}

impl Parser {
    /// Creates a new [`Parser`] positioned at the start of `buffer`.
    ///
    /// Only the chunk widths of `config` are used.
    pub fn new(buffer: impl Into<Bytes>, config: Config) -> Self {
        Self {
            buffer: buffer.into(),
            cursor: 0,
            config,
            failed: false,
        }
    }

    /// Decodes the next record from the buffer.
    ///
    /// Returns `None` once the whole buffer was consumed, or after an error was returned, until
    /// [`Parser::reset`] is called.
    ///
    /// The read position only moves past complete records, so after an error
    /// [`Parser::position`] points at the start of the record which could not be decoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{Bytes, Config, Error, Parser};
    ///
    /// let buffer = Bytes::from_static(&[1u8, 1, 0xaa, 2, 4, 0xbb]);
    /// let mut parser = Parser::new(buffer, Config::new());
    /// assert!(matches!(parser.next_record(), Some(Ok(record)) if record.tag == 1));
    /// assert_eq!(
    ///     parser.next_record(),
    ///     Some(Err(Error::TruncatedValue { offset: 5, length: 4, remaining: 1 }))
    /// );
    /// assert_eq!(parser.next_record(), None);
    /// assert_eq!(parser.position(), 3);
    /// ```
    pub fn next_record(&mut self) -> Option<Result<Record>> {
        if self.failed || self.is_exhausted() {
            return None;
        }
        match self.decode_record() {
            Ok((record, end)) => {
                tracing::trace!(
                    tag = record.tag,
                    length = record.length,
                    offset = self.cursor,
                    "parsed record"
                );
                self.cursor = end;
                Some(Ok(record))
            }
            Err(error) => {
                tracing::debug!(offset = self.cursor, %error, "failed to parse record");
                self.failed = true;
                Some(Err(error))
            }
        }
    }

    /// Decodes the record at the cursor, returning it with the position right after it.
    fn decode_record(&self) -> Result<(Record, usize)> {
        let mut position = self.cursor;
        let (tag, size) = varint::decode(&self.buffer, position, self.config.type_bits())?;
        position += size;
        let (length, size) = varint::decode(&self.buffer, position, self.config.length_bits())?;
        position += size;
        let remaining = self.buffer.len() - position;
        let truncated = Error::TruncatedValue {
            offset: position,
            length,
            remaining,
        };
        let length = usize::try_from(length)
            .ok()
            .filter(|&length| length <= remaining)
            .ok_or(truncated)?;
        let value = self.buffer.slice(position..position + length);
        Ok((Record { tag, length, value }, position + length))
    }

    /// Decodes every remaining record.
    ///
    /// # Errors
    ///
    /// Returns the first error found while decoding, discarding the records decoded before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rtlv::{Bytes, Config, Error, Parser, Record};
    ///
    /// let mut parser = Parser::new(Bytes::from_static(&[1u8, 0, 2, 1, 0xff]), Config::new());
    /// assert_eq!(
    ///     parser.collect_records(),
    ///     Ok(vec![Record::new(1, ""), Record::new(2, vec![0xffu8])])
    /// );
    ///
    /// let mut parser = Parser::new(Bytes::from_static(&[1u8, 0, 2]), Config::new());
    /// assert_eq!(parser.collect_records(), Err(Error::InsufficientData { offset: 3 }));
    /// ```
    pub fn collect_records(&mut self) -> Result<Vec<Record>> {
        self.by_ref().collect()
    }

    /// Returns the current read position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the number of bytes which were not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Returns `true` if the whole buffer was consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.buffer.len()
    }

    /// Moves the read position back to the start of the buffer.
    ///
    /// This also clears any previous error, so that the records can be read again.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.failed = false;
    }

    /// Returns the configuration of this [`Parser`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Converts this [`Parser`] into the buffer it reads from.
    #[must_use]
    pub fn into_inner(self) -> Bytes {
        self.buffer
    }
}

impl Iterator for Parser {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}
