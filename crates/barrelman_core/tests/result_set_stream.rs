mod common;

use barrelman_core::families::boolean_timeseries::{
    BooleanTimeseriesFamily, ComplexBooleanTimeseriesDataReader, BASE_QUERY,
};
use barrelman_core::{open_db_in_memory, BinaryWriter, Kind, ReaderError, Value};
use common::{insert_boolean_timeseries, new_guid, read_records, RecordingSink};
use rusqlite::Connection;

const UNKNOWN_KIND: i32 = 99_999;

fn ordered_query() -> String {
    format!("{BASE_QUERY} ORDER BY bots.[Name]")
}

fn insert_unknown_kind(conn: &Connection, name: &str) {
    conn.execute(
        "INSERT INTO BooleanTimeseries (Id, EntityType, RowVersion, Catalog, Name, MaxRetention)
         VALUES (?1, ?2, 1, NULL, ?3, 0)",
        (new_guid().to_string(), UNKNOWN_KIND, name),
    )
    .unwrap();
}

#[test]
fn empty_result_set_is_a_single_false() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());

    let mut writer = BinaryWriter::new(Vec::new());
    assert_eq!(reader.write_result_set_to(&mut writer).unwrap(), 0);
    assert_eq!(writer.into_inner(), vec![4u8]);
}

#[test]
fn result_set_frames_every_row_in_cursor_order() {
    let conn = open_db_in_memory().unwrap();
    insert_boolean_timeseries(&conn, Kind::DeviceEnabledTimeseries, "a", Some(new_guid()));
    insert_boolean_timeseries(&conn, Kind::BooleanTimeseries, "b", None);
    insert_boolean_timeseries(&conn, Kind::RadarPowerOnTimeseries, "c", None);

    let sql = ordered_query();
    let mut stmt = conn.prepare(&sql).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    let mut writer = BinaryWriter::new(Vec::new());
    assert_eq!(reader.write_result_set_to(&mut writer).unwrap(), 3);

    let bytes = writer.into_inner();
    assert_eq!(bytes.first(), Some(&3u8));
    assert_eq!(bytes.last(), Some(&4u8));

    let records = read_records::<BooleanTimeseriesFamily>(&bytes);
    let kinds: Vec<Value> = records.iter().map(|record| record[0].clone()).collect();
    assert_eq!(
        kinds,
        vec![
            Value::Int32(Kind::DeviceEnabledTimeseries.as_i32()),
            Value::Int32(Kind::BooleanTimeseries.as_i32()),
            Value::Int32(Kind::RadarPowerOnTimeseries.as_i32()),
        ]
    );
}

#[test]
fn unknown_kind_stops_the_stream_after_complete_records() {
    let conn = open_db_in_memory().unwrap();
    insert_boolean_timeseries(&conn, Kind::BooleanTimeseries, "a", None);
    insert_boolean_timeseries(&conn, Kind::DeviceEnabledTimeseries, "b", Some(new_guid()));
    insert_unknown_kind(&conn, "c");
    insert_boolean_timeseries(&conn, Kind::BooleanTimeseries, "d", None);

    let sink = RecordingSink::default();
    let sql = ordered_query();
    let mut stmt = conn.prepare(&sql).unwrap();
    let mut reader =
        ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap()).with_error_sink(&sink);

    let mut writer = BinaryWriter::new(Vec::new());
    let err = reader.write_result_set_to(&mut writer).unwrap_err();
    assert!(matches!(
        err,
        ReaderError::UnknownKind {
            kind: UNKNOWN_KIND,
            ..
        }
    ));

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains(&format!("cannot handle kind={UNKNOWN_KIND}")));

    // Two framed records and no terminator: the failing row added nothing.
    let bytes = writer.into_inner();
    let mut expected = BinaryWriter::new(Vec::new());
    {
        let prefix_sql = format!("{BASE_QUERY} WHERE bots.[Name] IN ('a', 'b') ORDER BY bots.[Name]");
        let mut stmt = conn.prepare(&prefix_sql).unwrap();
        let mut prefix = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
        while let Some(row) = prefix.read().unwrap() {
            expected.write_bool(true).unwrap();
            row.write_to(&mut expected).unwrap();
        }
    }
    assert_eq!(bytes, expected.into_inner());
}

#[test]
fn write_to_on_unknown_kind_writes_nothing() {
    let conn = open_db_in_memory().unwrap();
    insert_unknown_kind(&conn, "only");

    let sink = RecordingSink::default();
    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader =
        ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap()).with_error_sink(&sink);
    let row = reader.read().unwrap().unwrap();
    assert_eq!(row.entity_type().unwrap(), UNKNOWN_KIND);
    assert_eq!(row.kind().unwrap(), None);

    let mut writer = BinaryWriter::new(Vec::new());
    writer.write_bool(true).unwrap();
    assert!(row.write_to(&mut writer).is_err());
    assert_eq!(writer.into_inner(), vec![3u8]);
    assert!(row.get_data_object().is_err());
    assert_eq!(sink.reports().len(), 2);
}

#[test]
fn reader_stops_cleanly_after_exhaustion() {
    let conn = open_db_in_memory().unwrap();
    insert_boolean_timeseries(&conn, Kind::BooleanTimeseries, "only", None);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    assert!(reader.read().unwrap().is_some());
    assert!(reader.read().unwrap().is_none());

    let mut writer = BinaryWriter::new(Vec::new());
    assert_eq!(reader.write_result_set_to(&mut writer).unwrap(), 0);
    assert_eq!(writer.into_inner(), vec![4u8]);
}

#[test]
fn into_inner_hands_back_the_cursor_at_its_position() {
    let conn = open_db_in_memory().unwrap();
    insert_boolean_timeseries(&conn, Kind::BooleanTimeseries, "a", None);
    insert_boolean_timeseries(&conn, Kind::BooleanTimeseries, "b", None);

    let sql = ordered_query();
    let mut stmt = conn.prepare(&sql).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    assert!(reader.read().unwrap().is_some());

    let mut rows = reader.into_inner();
    let name: String = rows.next().unwrap().unwrap().get(4).unwrap();
    assert_eq!(name, "b");
    assert!(rows.next().unwrap().is_none());
}
