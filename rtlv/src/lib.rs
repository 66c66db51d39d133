//! A Type-Length-Value (TLV) codec with variable-length type and length fields.
//!
//! ## Overview
//!
//! A TLV stream is a plain concatenation of records, each made of a type, the length of its value,
//! and the value itself. The type and length fields are either a single fixed byte, or a
//! variable-length integer split into chunks of a configurable width (see [`varint`]), so that
//! large types and lengths can be represented without widening every record.
//!
//! - [`Builder`] appends records to a growable buffer.
//! - [`Parser`] iterates over the records of a buffer.
//! - [`Config`] describes the layout of the type and length fields. It is not part of the stream,
//!   so both ends must use the same one.
//!
//! ## Example
//!
//! ```rust
//! use rtlv::{Builder, ChunkBits, Config, Parser, Record};
//!
//! let config = Config::extended(ChunkBits::new(7)?);
//!
//! let mut builder = Builder::new(config);
//! builder.add(10, "Foobar")?;
//! builder.add(16, "Bladibla")?;
//!
//! let records: Vec<Record> = Parser::new(builder.freeze(), config).collect::<Result<_, _>>()?;
//! assert_eq!(records, vec![Record::new(10, "Foobar"), Record::new(16, "Bladibla")]);
//! # Ok::<(), rtlv::Error>(())
//! ```

#![warn(
    clippy::nursery,
    clippy::pedantic,
    clippy::expect_used,
    clippy::unwrap_used
)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

// Re-export for convenience.
pub use bytes::{Buf, BufMut, Bytes, BytesMut};

pub mod varint;
pub use varint::ChunkBits;

mod config;
pub use config::Config;

mod record;
pub use record::Record;

mod builder;
pub use builder::Builder;

mod parser;
pub use parser::Parser;

mod error;
pub use error::{Error, Result};

pub(crate) mod testing;
