//! Complex data readers for table-per-hierarchy entity families.
//!
//! A complex reader wraps a forward-only SQLite cursor over a family's base
//! query, decodes each row into one variant of the family's closed object
//! model, and either returns that object or serializes it into the tagged
//! binary record format.

pub mod binary;
pub mod db;
pub mod families;
pub mod logging;
pub mod model;
pub mod reader;
pub mod store;

pub use binary::{BinaryReader, BinaryWriter, CodecError, CodecResult, Value};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use families::FamilyName;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{DateTime, Guid, Kind, ObjectState, TimeSpan};
pub use reader::{
    ComplexDataReader, ComplexFamily, ComplexRow, DataObject, ErrorSink, LogErrorSink,
    ReaderError, ReaderResult,
};
pub use store::ObjectStore;
