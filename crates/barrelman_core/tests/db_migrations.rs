use barrelman_core::db::migrations::latest_version;
use barrelman_core::db::{open_db, open_db_in_memory, DbError};
use barrelman_core::FamilyName;
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "BooleanTimeseries");
    assert_table_exists(&conn, "DeviceEnabledTimeseries");
    assert_table_exists(&conn, "CameraCommandAbsoluteMove");
    assert_table_exists(&conn, "TrackerDevice");
    assert_table_exists(&conn, "RadarDevice");
    assert_table_exists(&conn, "TimeseriesProperty");
    assert_table_exists(&conn, "UInt64Property");
    assert_table_exists(&conn, "AisPositionReportClassAMessageBase");
    assert_table_exists(&conn, "AisStaticDataReportPartBMessage");
    assert_table_exists(&conn, "Timeseries");
    assert_table_exists(&conn, "GNSSLatitudeTimeseries");
    for family in FamilyName::ALL {
        assert_view_exists(&conn, family.base_view_name());
    }
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("barrelman.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_view_exists(&conn_second, "DeviceView");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn deleting_a_base_row_cascades_through_intermediate_tables() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Device (Id, EntityType, RowVersion, Host, Name)
           VALUES ('r1', 20000, 1, 'h1', 'radar');
         INSERT INTO TrackerDevice (Id) VALUES ('r1');
         INSERT INTO RadarDevice (Id) VALUES ('r1');",
    )
    .unwrap();

    conn.execute("DELETE FROM Device WHERE Id = 'r1'", []).unwrap();
    assert_eq!(row_count(&conn, "TrackerDevice"), 0);
    assert_eq!(row_count(&conn, "RadarDevice"), 0);
}

#[test]
fn timeseries_view_includes_boolean_timeseries_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Timeseries (Id, EntityType, RowVersion, Name)
           VALUES ('d1', 36100, 1, 'double');
         INSERT INTO BooleanTimeseries (Id, EntityType, RowVersion, Name)
           VALUES ('b1', 34500, 1, 'boolean');",
    )
    .unwrap();

    assert_eq!(row_count(&conn, "TimeseriesView"), 2);
    assert_eq!(row_count(&conn, "BooleanTimeseriesView"), 1);
}

#[test]
fn class_a_position_reports_cascade_from_the_message() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO AisMessage
           (Id, EntityType, RowVersion, AisDevice, ReceivedTimestamp, MessageSequenceNumber)
           VALUES ('m1', 11800, 1, 'dev', 0, 1);
         INSERT INTO AisPositionReportClassAMessageBase
           (Id, NavigationStatus, SpeedOverGround, PositionAccuracy, Longitude, Latitude,
            CourseOverGround, Timestamp, ManeuverIndicator, Spare, Raim, RadioStatus)
           VALUES ('m1', 0, 12.5, 1, 5.3, 60.1, 90.0, 30, 0, 0, 0, 0);
         INSERT INTO AisPositionReportClassAMessage (Id) VALUES ('m1');",
    )
    .unwrap();

    conn.execute("DELETE FROM AisMessage WHERE Id = 'm1'", []).unwrap();
    assert_eq!(row_count(&conn, "AisPositionReportClassAMessageBase"), 0);
    assert_eq!(row_count(&conn, "AisPositionReportClassAMessage"), 0);
}

#[test]
fn subtype_rows_require_their_parent() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute("INSERT INTO GNSSDevice (Id) VALUES ('orphan')", []);
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn row_count(conn: &Connection, table_name: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table_name}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    assert_master_entry(conn, "table", table_name);
}

fn assert_view_exists(conn: &Connection, view_name: &str) {
    assert_master_entry(conn, "view", view_name);
}

fn assert_master_entry(conn: &Connection, entry_type: &str, name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = ?1 AND name = ?2
            );",
            [entry_type, name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "{entry_type} {name} does not exist");
}
