//! Family schema registry.
//!
//! # Responsibility
//! - Hold one schema script per entity family, in the order they were added.
//! - Bring a connection up to the newest family schema in one transaction.
//!
//! # Invariants
//! - A family's schema version is its position in `FAMILY_SCHEMAS`, counted
//!   from 1. Entries are only ever appended.
//! - After each script the family's base view must exist; otherwise the
//!   transaction is rolled back with `MissingBaseView`.
//! - The applied version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use crate::families::FamilyName;
use log::info;
use rusqlite::{Connection, OptionalExtension};

struct FamilySchema {
    family: FamilyName,
    sql: &'static str,
}

const FAMILY_SCHEMAS: &[FamilySchema] = &[
    FamilySchema {
        family: FamilyName::BooleanTimeseries,
        sql: include_str!("0001_boolean_timeseries.sql"),
    },
    FamilySchema {
        family: FamilyName::CameraCommand,
        sql: include_str!("0002_camera_commands.sql"),
    },
    FamilySchema {
        family: FamilyName::Device,
        sql: include_str!("0003_devices.sql"),
    },
    FamilySchema {
        family: FamilyName::Property,
        sql: include_str!("0004_properties.sql"),
    },
    FamilySchema {
        family: FamilyName::AisMessage,
        sql: include_str!("0005_ais_messages.sql"),
    },
    FamilySchema {
        family: FamilyName::Timeseries,
        sql: include_str!("0006_timeseries.sql"),
    },
];

/// Schema version that creates every family known to this binary.
pub fn latest_version() -> u32 {
    FAMILY_SCHEMAS.len() as u32
}

/// Schema version at which `family` becomes readable.
pub fn schema_version(family: FamilyName) -> Option<u32> {
    FAMILY_SCHEMAS
        .iter()
        .position(|schema| schema.family == family)
        .map(|index| index as u32 + 1)
}

/// Creates the schemas of every family the database does not have yet.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    let tx = conn.transaction()?;
    for (schema, version) in FAMILY_SCHEMAS.iter().zip(1u32..) {
        if version <= current_version {
            continue;
        }

        tx.execute_batch(schema.sql)?;
        ensure_base_view(&tx, schema.family)?;
        tx.pragma_update(None, "user_version", version)?;
        info!(
            "event=db_migrate module=db status=ok version={version} family={} view={}",
            schema.family,
            schema.family.base_view_name()
        );
    }
    tx.commit()?;

    Ok(())
}

fn ensure_base_view(conn: &Connection, family: FamilyName) -> DbResult<()> {
    let view = family.base_view_name();
    let found = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'view' AND name = ?1",
            [view],
            |_| Ok(()),
        )
        .optional()?;
    match found {
        Some(()) => Ok(()),
        None => Err(DbError::MissingBaseView { family, view }),
    }
}
