//! Family-generic queries over an open connection.
//!
//! # Responsibility
//! - Prepare a family's base query and hand the cursor to its complex reader.
//!
//! # Invariants
//! - Every read goes through `ComplexDataReader`, so objects and records share
//!   one decode path and one unknown-kind report path.
//! - Lookups by id match stored Guid text regardless of letter case.

use crate::binary::BinaryWriter;
use crate::model::Guid;
use crate::reader::{ComplexDataReader, ComplexFamily, ErrorSink, LogErrorSink, ReaderResult};
use log::debug;
use rusqlite::Connection;
use std::io::Write;

/// Read-only entry point for every family stored behind `conn`.
pub struct ObjectStore<'conn, S: ErrorSink = LogErrorSink> {
    conn: &'conn Connection,
    error_sink: S,
}

impl<'conn> ObjectStore<'conn, LogErrorSink> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            error_sink: LogErrorSink,
        }
    }
}

impl<'conn, S: ErrorSink> ObjectStore<'conn, S> {
    pub fn with_error_sink<T: ErrorSink>(self, error_sink: T) -> ObjectStore<'conn, T> {
        ObjectStore {
            conn: self.conn,
            error_sink,
        }
    }

    pub fn connection(&self) -> &'conn Connection {
        self.conn
    }

    /// Decodes every row of the family's base view.
    pub fn list<F: ComplexFamily>(&self) -> ReaderResult<Vec<F::Object>> {
        let mut stmt = self.conn.prepare(F::BASE_QUERY)?;
        let rows = stmt.query([])?;
        let objects = ComplexDataReader::<F>::new(rows)
            .with_error_sink(&self.error_sink)
            .read_all()?;
        debug!(
            "event=store_list module=store status=ok family={} count={}",
            F::FAMILY,
            objects.len()
        );
        Ok(objects)
    }

    /// Fetches one object by primary key. Returns `None` when no row matches.
    ///
    /// Stored Guid text is matched without regard to letter case.
    pub fn get<F: ComplexFamily>(&self, id: Guid) -> ReaderResult<Option<F::Object>> {
        let sql = format!(
            "{} WHERE {}.[Id] = ?1 COLLATE NOCASE",
            F::BASE_QUERY,
            F::VIEW_ALIAS_NAME
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query([id.to_string()])?;
        let mut reader = ComplexDataReader::<F>::new(rows).with_error_sink(&self.error_sink);
        let object = match reader.read()? {
            Some(current) => Some(current.get_data_object()?),
            None => None,
        };
        Ok(object)
    }

    /// Streams the family's whole base view as `(true, record)* false`.
    pub fn write_all<F: ComplexFamily, W: Write>(
        &self,
        writer: &mut BinaryWriter<W>,
    ) -> ReaderResult<usize> {
        let mut stmt = self.conn.prepare(F::BASE_QUERY)?;
        let rows = stmt.query([])?;
        let count = ComplexDataReader::<F>::new(rows)
            .with_error_sink(&self.error_sink)
            .write_result_set_to(writer)?;
        Ok(count)
    }
}
