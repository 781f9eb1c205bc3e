mod common;

use barrelman_core::families::device::{
    ComplexDeviceDataReader, DeviceFamily, DeviceVariant, RadarDeviceFields, BASE_QUERY,
};
use barrelman_core::{
    open_db_in_memory, BinaryWriter, ComplexFamily, DataObject, Guid, Kind, ObjectState,
    ReaderError, Value,
};
use common::{
    insert_device_base, new_guid, read_record, read_records, record_kind, RecordingSink,
};
use rusqlite::Connection;

const HANDLED_KINDS: [Kind; 10] = [
    Kind::CameraDevice,
    Kind::GnssDevice,
    Kind::GyroDevice,
    Kind::LineInputDevice,
    Kind::OilSpillDetectorDevice,
    Kind::RadioDevice,
    Kind::RadomeDevice,
    Kind::AisDevice,
    Kind::RadarDevice,
    Kind::WeatherStationDevice,
];

fn subtype_table(kind: Kind) -> &'static str {
    match kind {
        Kind::CameraDevice => "CameraDevice",
        Kind::GnssDevice => "GNSSDevice",
        Kind::GyroDevice => "GyroDevice",
        Kind::LineInputDevice => "LineInputDevice",
        Kind::OilSpillDetectorDevice => "OilSpillDetectorDevice",
        Kind::RadioDevice => "RadioDevice",
        Kind::RadomeDevice => "RadomeDevice",
        Kind::AisDevice => "AisDevice",
        Kind::RadarDevice => "RadarDevice",
        Kind::WeatherStationDevice => "WeatherStationDevice",
        other => panic!("not a concrete device kind: {other}"),
    }
}

fn insert_device(conn: &Connection, kind: Kind, name: &str) -> Guid {
    let id = insert_device_base(conn, kind, new_guid(), name);
    conn.execute(
        &format!("INSERT INTO {} (Id) VALUES (?1)", subtype_table(kind)),
        [id.to_string()],
    )
    .unwrap();
    id
}

fn set_reference(conn: &Connection, table: &str, column: &str, id: Guid) -> Guid {
    let reference = new_guid();
    conn.execute(
        &format!("UPDATE {table} SET {column} = ?2 WHERE Id = ?1"),
        (id.to_string(), reference.to_string()),
    )
    .unwrap();
    reference
}

#[test]
fn gnss_device_reconstructs_base_and_references() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_device(&conn, Kind::GnssDevice, "gps");
    let latitude = set_reference(&conn, "GNSSDevice", "LatitudeTimeseries", id);
    let enabled = set_reference(&conn, "Device", "EnabledTimeseries", id);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexDeviceDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();

    assert_eq!(object.object_state, ObjectState::Stored);
    assert_eq!(object.id, id);
    assert_eq!(object.row_version, 5);
    assert_eq!(object.name, "gps");
    assert_eq!(object.description, "gps description");
    assert_eq!(object.enabled_timeseries, Some(enabled));
    assert_eq!(
        object.variant,
        DeviceVariant::Gnss {
            latitude_timeseries: Some(latitude),
            longitude_timeseries: None,
            altitude_timeseries: None,
        }
    );
}

#[test]
fn radar_device_reads_through_tracker_join() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_device(&conn, Kind::RadarDevice, "radar");
    let radome = set_reference(&conn, "RadarDevice", "Radome", id);
    let power_on = set_reference(&conn, "RadarDevice", "PowerOnTimeseries", id);
    let gnss = set_reference(&conn, "RadarDevice", "GNSSDevice", id);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexDeviceDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let object = row.get_data_object().unwrap();
    assert_eq!(
        object.variant,
        DeviceVariant::Radar(Box::new(RadarDeviceFields {
            power_on_timeseries: Some(power_on),
            radome: Some(radome),
            gnss_device: Some(gnss),
            ..RadarDeviceFields::default()
        }))
    );

    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();
    let record = read_record::<DeviceFamily>(&writer.into_inner());
    assert_eq!(record.len(), 31);
    // base: kind, state, id, row version, host, name, description, enabled
    assert_eq!(record[7], Value::Null);
    assert_eq!(record[8], Value::Null);
    assert_eq!(record[9], Value::Guid(power_on));
    assert_eq!(record[29], Value::Guid(radome));
    assert_eq!(record[30], Value::Guid(gnss));
}

#[test]
fn weather_station_record_has_documented_field_sequence() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_device(&conn, Kind::WeatherStationDevice, "met");
    let gyro = set_reference(&conn, "WeatherStationDevice", "Gyro", id);
    let wind = set_reference(&conn, "WeatherStationDevice", "WindSpeedTimeseries", id);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexDeviceDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let host = row.columns().host().unwrap();
    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();

    let record = read_record::<DeviceFamily>(&writer.into_inner());
    let mut expected = vec![
        Value::Int32(Kind::WeatherStationDevice.as_i32()),
        Value::Byte(ObjectState::Stored.as_u8()),
        Value::Guid(id),
        Value::Int64(5),
        Value::Guid(host),
        Value::String("met".to_string()),
        Value::String("met description".to_string()),
        Value::Null,
    ];
    expected.extend(std::iter::repeat(Value::Null).take(7));
    expected.push(Value::Guid(wind));
    expected.push(Value::Guid(gyro));
    assert_eq!(record, expected);
}

#[test]
fn every_handled_kind_round_trips_through_result_set() {
    let conn = open_db_in_memory().unwrap();
    for kind in HANDLED_KINDS {
        insert_device(&conn, kind, &kind.to_string());
    }

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexDeviceDataReader::new(stmt.query([]).unwrap());
    let mut writer = BinaryWriter::new(Vec::new());
    assert_eq!(
        reader.write_result_set_to(&mut writer).unwrap(),
        HANDLED_KINDS.len()
    );

    let records = read_records::<DeviceFamily>(&writer.into_inner());
    for record in &records {
        let kind = record_kind(&record[0]);
        assert!(HANDLED_KINDS.contains(&kind));
        assert_eq!(record.len(), DeviceFamily::record_len(kind).unwrap());
        assert_eq!(record[5], Value::String(kind.to_string()));
    }
}

#[test]
fn tracker_device_kind_is_unknown_to_the_reader() {
    let conn = open_db_in_memory().unwrap();
    insert_device_base(&conn, Kind::TrackerDevice, new_guid(), "tracker");

    let sink = RecordingSink::default();
    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexDeviceDataReader::new(stmt.query([]).unwrap()).with_error_sink(&sink);
    let row = reader.read().unwrap().unwrap();

    let mut writer = BinaryWriter::new(Vec::new());
    let err = row.write_to(&mut writer).unwrap_err();
    match err {
        ReaderError::UnknownKind { family, kind } => {
            assert_eq!(family, "Device");
            assert_eq!(kind, Kind::TrackerDevice.as_i32());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(writer.into_inner().is_empty());
    assert_eq!(sink.reports().len(), 1);
    assert!(DeviceFamily::record_len(Kind::Device).is_none());
}

#[test]
fn camera_device_has_no_variant_fields() {
    let conn = open_db_in_memory().unwrap();
    insert_device(&conn, Kind::CameraDevice, "ptz");

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexDeviceDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let columns = row.columns();
    assert_eq!(columns.gyro_gnss_device().unwrap(), None);
    assert_eq!(columns.radome_radar().unwrap(), None);

    let object = row.get_data_object().unwrap();
    assert_eq!(object.kind(), Kind::CameraDevice);
    assert_eq!(object.variant, DeviceVariant::Camera);
}
