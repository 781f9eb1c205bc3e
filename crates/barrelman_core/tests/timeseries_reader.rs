mod common;

use barrelman_core::families::timeseries::{
    owner_column, ComplexTimeseriesDataReader, OwnerRole, TimeseriesFamily, TimeseriesOwner,
    BASE_QUERY,
};
use barrelman_core::{
    open_db_in_memory, BinaryWriter, ComplexFamily, DataObject, Kind, ObjectState, ReaderError,
    TimeSpan, Value,
};
use common::{
    insert_boolean_timeseries, insert_timeseries, new_guid, read_record, read_records,
    record_kind, RecordingSink,
};

fn concrete_kinds() -> Vec<Kind> {
    Kind::ALL
        .iter()
        .copied()
        .filter(|kind| {
            kind.as_i32() >= Kind::BinaryTimeseries.as_i32()
                && kind.as_i32() <= Kind::UInt64Timeseries.as_i32()
        })
        .collect()
}

fn is_boolean_kind(kind: Kind) -> bool {
    kind == Kind::BooleanTimeseries || common::boolean_timeseries_owner_column(kind).is_some()
}

#[test]
fn every_concrete_kind_is_read_with_its_owner() {
    let kinds = concrete_kinds();
    assert_eq!(kinds.len(), 74);

    let conn = open_db_in_memory().unwrap();
    let owner = new_guid();
    for kind in &kinds {
        let name = kind.to_string();
        if is_boolean_kind(*kind) {
            insert_boolean_timeseries(&conn, *kind, &name, Some(owner));
        } else {
            insert_timeseries(&conn, *kind, &name, Some(owner));
        }
    }

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexTimeseriesDataReader::new(stmt.query([]).unwrap());
    let objects = reader.read_all().unwrap();
    assert_eq!(objects.len(), kinds.len());
    for object in &objects {
        assert_eq!(object.object_state, ObjectState::Stored);
        assert_eq!(object.name, object.kind().to_string());
        let expected = owner_column(object.kind).map(|(role, _)| TimeseriesOwner {
            role,
            id: Some(owner),
        });
        assert_eq!(object.owner, expected, "kind {}", object.kind);
    }
}

#[test]
fn result_set_frames_every_kind_with_its_record_length() {
    let conn = open_db_in_memory().unwrap();
    for kind in concrete_kinds() {
        if is_boolean_kind(kind) {
            insert_boolean_timeseries(&conn, kind, "b", None);
        } else {
            insert_timeseries(&conn, kind, "t", None);
        }
    }

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexTimeseriesDataReader::new(stmt.query([]).unwrap());
    let mut writer = BinaryWriter::new(Vec::new());
    assert_eq!(reader.write_result_set_to(&mut writer).unwrap(), 74);

    let records = read_records::<TimeseriesFamily>(&writer.into_inner());
    assert_eq!(records.len(), 74);
    for record in &records {
        let kind = record_kind(&record[0]);
        match owner_column(kind) {
            Some(_) => {
                assert_eq!(record.len(), 8);
                assert_eq!(record[7], Value::Null);
            }
            None => assert_eq!(record.len(), 7),
        }
    }
}

#[test]
fn write_to_emits_base_fields_then_owner() {
    let conn = open_db_in_memory().unwrap();
    let gnss = new_guid();
    let id = insert_timeseries(&conn, Kind::GnssLatitudeTimeseries, "lat", Some(gnss));

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexTimeseriesDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();

    let record = read_record::<TimeseriesFamily>(&writer.into_inner());
    assert_eq!(
        record,
        vec![
            Value::Int32(Kind::GnssLatitudeTimeseries.as_i32()),
            Value::Byte(ObjectState::Stored.as_u8()),
            Value::Guid(id),
            Value::Int64(4),
            Value::Null,
            Value::String("lat".to_string()),
            Value::TimeSpan(TimeSpan::ZERO),
            Value::Guid(gnss),
        ]
    );
}

#[test]
fn value_type_kinds_write_only_the_base() {
    let conn = open_db_in_memory().unwrap();
    let id = new_guid();
    let catalog = new_guid();
    let retention = TimeSpan::from_seconds(86_400);
    conn.execute(
        "INSERT INTO Timeseries (Id, EntityType, RowVersion, Catalog, Name, MaxRetention)
         VALUES (?1, ?2, 7, ?3, 'speed', ?4)",
        (
            id.to_string(),
            Kind::DoubleTimeseries.as_i32(),
            catalog.to_string(),
            retention.ticks(),
        ),
    )
    .unwrap();

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexTimeseriesDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let columns = row.columns();
    assert_eq!(columns.catalog().unwrap(), Some(catalog));
    assert_eq!(columns.owner(Kind::DoubleTimeseries).unwrap(), None);

    let object = row.get_data_object().unwrap();
    assert_eq!(object.kind, Kind::DoubleTimeseries);
    assert_eq!(object.max_retention, retention);
    assert_eq!(object.owner, None);

    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();
    let record = read_record::<TimeseriesFamily>(&writer.into_inner());
    assert_eq!(record.len(), 7);
    assert_eq!(record[4], Value::Guid(catalog));
    assert_eq!(record[6], Value::TimeSpan(retention));
}

#[test]
fn boolean_rows_are_read_through_the_shared_view() {
    let conn = open_db_in_memory().unwrap();
    let radar = new_guid();
    let id = insert_boolean_timeseries(&conn, Kind::RadarPowerOnTimeseries, "power", Some(radar));

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexTimeseriesDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();
    assert_eq!(object.id, id);
    assert_eq!(object.row_version, 3);
    assert_eq!(
        object.owner,
        Some(TimeseriesOwner {
            role: OwnerRole::Radar,
            id: Some(radar),
        })
    );
}

#[test]
fn abstract_timeseries_kind_is_reported_and_rejected() {
    let conn = open_db_in_memory().unwrap();
    insert_timeseries(&conn, Kind::Timeseries, "abstract", None);

    let sink = RecordingSink::default();
    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader =
        ComplexTimeseriesDataReader::new(stmt.query([]).unwrap()).with_error_sink(&sink);
    let row = reader.read().unwrap().unwrap();

    let mut writer = BinaryWriter::new(Vec::new());
    let err = row.write_to(&mut writer).unwrap_err();
    match err {
        ReaderError::UnknownKind { family, kind } => {
            assert_eq!(family, "Timeseries");
            assert_eq!(kind, Kind::Timeseries.as_i32());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(writer.into_inner().is_empty());
    assert_eq!(sink.reports().len(), 1);
    assert_eq!(TimeseriesFamily::record_len(Kind::Timeseries), None);
}

#[test]
fn data_object_serializes_kind_and_owner_role() {
    let conn = open_db_in_memory().unwrap();
    let view = new_guid();
    insert_timeseries(&conn, Kind::ViewZoomLevelTimeseries, "zoom", Some(view));

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexTimeseriesDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();
    let json = serde_json::to_value(&object).unwrap();
    assert_eq!(json["kind"], "ViewZoomLevelTimeseries");
    assert_eq!(json["owner"]["role"], "View");
    assert_eq!(json["owner"]["id"], view.to_string());
    assert_eq!(json["object_state"], "Stored");
}
