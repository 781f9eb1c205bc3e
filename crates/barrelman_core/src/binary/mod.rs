//! Tagged little-endian record codec.
//!
//! # Responsibility
//! - Serialize scalar values, each prefixed by a one-byte `data_type` tag.
//! - Decode such streams back into `Value`s, including result set framing.
//!
//! # Invariants
//! - Multi-byte payloads are little-endian.
//! - Absent nullable values are written as the `NULL` tag alone.
//! - A result set is `(true, record)*` followed by a single `false`.

use crate::model::{DateTime, Guid, TimeSpan};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod data_type;
mod reader;
mod writer;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug)]
pub enum CodecError {
    Io(std::io::Error),
    UnknownDataType(u8),
    InvalidUtf8,
    UnexpectedDataType { expected: &'static str, found: u8 },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::UnknownDataType(tag) => write!(f, "unknown data type tag {tag:#04x}"),
            Self::InvalidUtf8 => write!(f, "string payload is not valid UTF-8"),
            Self::UnexpectedDataType { expected, found } => write!(
                f,
                "expected {expected} but found {} (tag {found:#04x})",
                data_type::name(*found)
            ),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::UnknownDataType(_) | Self::InvalidUtf8 | Self::UnexpectedDataType { .. } => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Decoded value of a single tagged field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Char(u16),
    Byte(u8),
    SByte(i8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    /// Raw amount scaled by `data_type::CURRENCY_SCALE`.
    Currency(i64),
    DateTime(DateTime),
    TimeSpan(TimeSpan),
    Guid(Guid),
    String(String),
    Bytes(Vec<u8>),
}
