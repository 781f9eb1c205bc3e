//! Typed cell helpers shared by every family's column accessors.
//!
//! # Invariants
//! - Non-nullable Guid accessors map SQL NULL to the nil Guid.
//! - Non-nullable tick and binary accessors map SQL NULL to zero / empty.
//! - Malformed Guid text and unmapped enum integers are `InvalidData`.

use super::{ReaderError, ReaderResult};
use crate::model::{DateTime, Guid, TimeSpan};
use rusqlite::Row;

pub fn get_guid(row: &Row<'_>, ordinal: usize) -> ReaderResult<Guid> {
    Ok(get_nullable_guid(row, ordinal)?.unwrap_or_else(Guid::nil))
}

pub fn get_nullable_guid(row: &Row<'_>, ordinal: usize) -> ReaderResult<Option<Guid>> {
    let Some(text) = row.get::<_, Option<String>>(ordinal)? else {
        return Ok(None);
    };
    Guid::parse_str(&text).map(Some).map_err(|_| {
        ReaderError::InvalidData(format!(
            "invalid guid value `{text}` in column {}",
            column_label(row, ordinal)
        ))
    })
}

pub fn get_date_time(row: &Row<'_>, ordinal: usize) -> ReaderResult<DateTime> {
    Ok(get_nullable_date_time(row, ordinal)?.unwrap_or(DateTime::ZERO))
}

pub fn get_nullable_date_time(row: &Row<'_>, ordinal: usize) -> ReaderResult<Option<DateTime>> {
    Ok(row.get::<_, Option<i64>>(ordinal)?.map(DateTime::from_ticks))
}

pub fn get_time_span(row: &Row<'_>, ordinal: usize) -> ReaderResult<TimeSpan> {
    Ok(get_nullable_time_span(row, ordinal)?.unwrap_or(TimeSpan::ZERO))
}

pub fn get_nullable_time_span(row: &Row<'_>, ordinal: usize) -> ReaderResult<Option<TimeSpan>> {
    Ok(row.get::<_, Option<i64>>(ordinal)?.map(TimeSpan::from_ticks))
}

pub fn get_binary(row: &Row<'_>, ordinal: usize) -> ReaderResult<Vec<u8>> {
    Ok(row.get::<_, Option<Vec<u8>>>(ordinal)?.unwrap_or_default())
}

/// Reads a 64-bit column and reinterprets its bits as unsigned.
pub fn get_u64(row: &Row<'_>, ordinal: usize) -> ReaderResult<u64> {
    Ok(row.get::<_, i64>(ordinal)? as u64)
}

/// Reinterprets an integer column as one of the model enums.
pub fn get_enum<T>(row: &Row<'_>, ordinal: usize) -> ReaderResult<T>
where
    T: TryFrom<i32, Error = i32>,
{
    let raw: i32 = row.get(ordinal)?;
    T::try_from(raw).map_err(|value| {
        ReaderError::InvalidData(format!(
            "unmapped {} value {value} in column {}",
            std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("enum"),
            column_label(row, ordinal)
        ))
    })
}

fn column_label(row: &Row<'_>, ordinal: usize) -> String {
    match row.as_ref().column_name(ordinal) {
        Ok(name) => format!("{ordinal} ({name})"),
        Err(_) => ordinal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_binary, get_date_time, get_enum, get_guid, get_nullable_guid, get_u64};
    use crate::model::{CameraPanTiltMode, DateTime, Guid};
    use crate::reader::ReaderError;
    use rusqlite::Connection;

    fn with_row<T>(sql: &str, f: impl FnOnce(&rusqlite::Row<'_>) -> T) -> T {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare(sql).unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();
        f(row)
    }

    #[test]
    fn null_guid_reads_as_nil_or_none() {
        with_row("SELECT NULL", |row| {
            assert_eq!(get_guid(row, 0).unwrap(), Guid::nil());
            assert_eq!(get_nullable_guid(row, 0).unwrap(), None);
        });
    }

    #[test]
    fn malformed_guid_is_invalid_data() {
        with_row("SELECT 'not-a-guid' AS Camera", |row| {
            let err = get_guid(row, 0).unwrap_err();
            match err {
                ReaderError::InvalidData(message) => assert!(message.contains("Camera")),
                other => panic!("unexpected error: {other}"),
            }
        });
    }

    #[test]
    fn null_ticks_and_binary_read_as_zero_and_empty() {
        with_row("SELECT NULL, NULL", |row| {
            assert_eq!(get_date_time(row, 0).unwrap(), DateTime::ZERO);
            assert!(get_binary(row, 1).unwrap().is_empty());
        });
    }

    #[test]
    fn u64_reinterprets_negative_storage() {
        with_row("SELECT -1", |row| {
            assert_eq!(get_u64(row, 0).unwrap(), u64::MAX);
        });
    }

    #[test]
    fn enum_columns_map_or_fail() {
        with_row("SELECT 2, 7", |row| {
            assert_eq!(
                get_enum::<CameraPanTiltMode>(row, 0).unwrap(),
                CameraPanTiltMode::Angular
            );
            let err = get_enum::<CameraPanTiltMode>(row, 1).unwrap_err();
            assert!(err.to_string().contains("CameraPanTiltMode value 7"));
        });
    }
}
