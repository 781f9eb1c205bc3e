//! Forward-only complex data readers.
//!
//! # Responsibility
//! - Wrap an open `rusqlite::Rows` cursor over a family's base query.
//! - Decode the current row into the family's closed variant set.
//! - Serialize rows as records, or drain the cursor as a framed result set.
//!
//! # Invariants
//! - A row is decoded completely before any byte of its record is written, so
//!   an unknown discriminator never leaves a partial record in the sink.
//! - Unknown discriminators are reported to the `ErrorSink` before the error
//!   is returned. Every other fault propagates unreported.
//! - Every decoded object is tagged `ObjectState::Stored`.

use crate::binary::{BinaryWriter, CodecError, CodecResult};
use crate::db::DbError;
use crate::model::{Kind, ObjectState};
use log::{error, info};
use rusqlite::{Row, Rows};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::marker::PhantomData;
use std::time::Instant;

pub mod columns;

/// Ordinal of the `EntityType` column in every base query.
pub const ENTITY_TYPE_FIELD_ID: usize = 1;

pub type ReaderResult<T> = Result<T, ReaderError>;

#[derive(Debug)]
pub enum ReaderError {
    Sqlite(rusqlite::Error),
    Db(DbError),
    Codec(CodecError),
    UnknownKind { family: &'static str, kind: i32 },
    InvalidData(String),
}

impl Display for ReaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
            Self::UnknownKind { family, kind } => {
                write!(f, "{family} reader cannot handle kind={kind}")
            }
            Self::InvalidData(message) => write!(f, "invalid row data: {message}"),
        }
    }
}

impl Error for ReaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::UnknownKind { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for ReaderError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<DbError> for ReaderError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<CodecError> for ReaderError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// Receives unknown-discriminator errors before they are returned.
pub trait ErrorSink {
    fn report(&self, error: &ReaderError);
}

/// Default sink: forwards reports to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, error: &ReaderError) {
        match error {
            ReaderError::UnknownKind { family, kind } => error!(
                "event=unknown_kind module=reader status=error family={family} kind={kind}"
            ),
            other => error!("event=reader_error module=reader status=error error={other}"),
        }
    }
}

impl<T: ErrorSink + ?Sized> ErrorSink for &T {
    fn report(&self, error: &ReaderError) {
        (**self).report(error);
    }
}

/// An object reconstructed from one row of a family's base query.
pub trait DataObject {
    fn kind(&self) -> Kind;

    fn object_state(&self) -> ObjectState;

    /// Writes `(kind, state, base fields..., variant fields...)`.
    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()>;
}

/// Static description of one table-per-hierarchy entity family.
pub trait ComplexFamily {
    /// Short family name used in errors and logs.
    const FAMILY: &'static str;
    /// Base view LEFT JOINed with every subtype table.
    const BASE_QUERY: &'static str;
    const BASE_VIEW_NAME: &'static str;
    const VIEW_ALIAS_NAME: &'static str;

    type Object: DataObject + Serialize;

    /// Builds the object for the row's discriminator.
    ///
    /// # Errors
    /// - `ReaderError::UnknownKind` when the discriminator is not handled.
    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object>;

    /// Number of values in a record of `kind`, discriminator included.
    /// Returns `None` for kinds the family does not handle.
    fn record_len(kind: Kind) -> Option<usize>;
}

/// Forward-only reader bound to one family's result set.
///
/// Owns the cursor; dropping the reader releases it. Use `into_inner` to
/// take the cursor back.
pub struct ComplexDataReader<'stmt, F: ComplexFamily, S: ErrorSink = LogErrorSink> {
    rows: Rows<'stmt>,
    error_sink: S,
    family: PhantomData<F>,
}

impl<'stmt, F: ComplexFamily> ComplexDataReader<'stmt, F, LogErrorSink> {
    pub fn new(rows: Rows<'stmt>) -> Self {
        Self {
            rows,
            error_sink: LogErrorSink,
            family: PhantomData,
        }
    }
}

impl<'stmt, F: ComplexFamily, S: ErrorSink> ComplexDataReader<'stmt, F, S> {
    /// Replaces the sink that receives unknown-discriminator reports.
    pub fn with_error_sink<T: ErrorSink>(self, error_sink: T) -> ComplexDataReader<'stmt, F, T> {
        ComplexDataReader {
            rows: self.rows,
            error_sink,
            family: PhantomData,
        }
    }

    /// Advances the cursor. Returns `None` once the result set is exhausted.
    pub fn read(&mut self) -> ReaderResult<Option<ComplexRow<'_, 'stmt, F, S>>> {
        let error_sink = &self.error_sink;
        match self.rows.next()? {
            Some(row) => Ok(Some(ComplexRow {
                row,
                error_sink,
                family: PhantomData,
            })),
            None => Ok(None),
        }
    }

    /// Drains the cursor as `(true, record)* false` and returns the record count.
    ///
    /// Stops at the first failing row; records already written stay written
    /// and the failing row contributes no bytes.
    pub fn write_result_set_to<W: Write>(
        &mut self,
        writer: &mut BinaryWriter<W>,
    ) -> ReaderResult<usize> {
        let started_at = Instant::now();
        let mut count = 0usize;
        loop {
            let Some(current) = self.read()? else {
                break;
            };
            let object = current.decode()?;
            writer.write_bool(true)?;
            object.write_to(writer)?;
            count += 1;
        }
        writer.write_bool(false)?;
        info!(
            "event=reader_drain module=reader status=ok family={} records={} duration_ms={}",
            F::FAMILY,
            count,
            started_at.elapsed().as_millis()
        );
        Ok(count)
    }

    /// Decodes every remaining row.
    pub fn read_all(&mut self) -> ReaderResult<Vec<F::Object>> {
        let mut objects = Vec::new();
        while let Some(current) = self.read()? {
            objects.push(current.get_data_object()?);
        }
        Ok(objects)
    }

    pub fn into_inner(self) -> Rows<'stmt> {
        self.rows
    }
}

/// The reader's current row.
pub struct ComplexRow<'a, 'stmt, F: ComplexFamily, S: ErrorSink> {
    row: &'a Row<'stmt>,
    error_sink: &'a S,
    family: PhantomData<F>,
}

impl<'a, 'stmt, F: ComplexFamily, S: ErrorSink> ComplexRow<'a, 'stmt, F, S> {
    pub fn row(&self) -> &'a Row<'stmt> {
        self.row
    }

    /// Raw discriminator value.
    pub fn entity_type(&self) -> ReaderResult<i32> {
        Ok(self.row.get(ENTITY_TYPE_FIELD_ID)?)
    }

    /// Discriminator mapped onto `Kind`; `None` for unknown integers.
    pub fn kind(&self) -> ReaderResult<Option<Kind>> {
        Ok(Kind::from_i32(self.entity_type()?))
    }

    /// Serializes the row as one record.
    pub fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> ReaderResult<()> {
        let object = self.decode()?;
        object.write_to(writer)?;
        Ok(())
    }

    pub fn get_data_object(&self) -> ReaderResult<F::Object> {
        self.decode()
    }

    fn decode(&self) -> ReaderResult<F::Object> {
        match F::decode(self.row) {
            Ok(object) => Ok(object),
            Err(err @ ReaderError::UnknownKind { .. }) => {
                self.error_sink.report(&err);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

/// Shared tail of every family's `decode`.
pub(crate) fn unknown_kind(family: &'static str, kind: i32) -> ReaderError {
    ReaderError::UnknownKind { family, kind }
}
