mod common;

use barrelman_core::families::boolean_timeseries::{
    BooleanTimeseriesFamily, BooleanTimeseriesVariant, ComplexBooleanTimeseriesDataReader,
    BASE_QUERY,
};
use barrelman_core::{
    open_db_in_memory, BinaryWriter, ComplexFamily, DataObject, Kind, ObjectState, TimeSpan,
    Value,
};
use common::{insert_boolean_timeseries, new_guid, read_record};

const HANDLED_KINDS: [Kind; 14] = [
    Kind::BooleanTimeseries,
    Kind::AisAidToNavigationOffPositionTimeseries,
    Kind::DeviceEnabledTimeseries,
    Kind::MediaProxySessionEnabledTimeseries,
    Kind::MediaServiceEnabledTimeseries,
    Kind::RadarAutomaticSensitivityTimeControlTimeseries,
    Kind::RadarBlankSector1Timeseries,
    Kind::RadarBlankSector2Timeseries,
    Kind::RadarEnableAutomaticFrequencyControlTimeseries,
    Kind::RadarEnableFastTimeConstantTimeseries,
    Kind::RadarEnableSensitivityTimeControlTimeseries,
    Kind::RadarPowerOnTimeseries,
    Kind::RadarSaveSettingsTimeseries,
    Kind::RadarTrackingTimeseries,
];

#[test]
fn every_handled_kind_reconstructs_its_owner_reference() {
    for kind in HANDLED_KINDS {
        let conn = open_db_in_memory().unwrap();
        let owner = new_guid();
        let id = insert_boolean_timeseries(&conn, kind, "enabled", Some(owner));

        let mut stmt = conn.prepare(BASE_QUERY).unwrap();
        let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
        let row = reader.read().unwrap().unwrap();
        assert_eq!(row.kind().unwrap(), Some(kind));

        let object = row.get_data_object().unwrap();
        assert_eq!(object.object_state, ObjectState::Stored);
        assert_eq!(object.kind(), kind);
        assert_eq!(object.id, id);
        assert_eq!(object.row_version, 3);
        assert_eq!(object.catalog, None);
        assert_eq!(object.name, "enabled");
        assert_eq!(object.max_retention, TimeSpan::ZERO);
        let expected_owner = (kind != Kind::BooleanTimeseries).then_some(Some(owner));
        assert_eq!(object.variant.owner(), expected_owner, "kind {kind}");
    }
}

#[test]
fn write_to_emits_fixed_field_sequence() {
    let conn = open_db_in_memory().unwrap();
    let device = new_guid();
    let id = insert_boolean_timeseries(&conn, Kind::DeviceEnabledTimeseries, "dev", Some(device));

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();

    let record = read_record::<BooleanTimeseriesFamily>(&writer.into_inner());
    assert_eq!(
        record,
        vec![
            Value::Int32(Kind::DeviceEnabledTimeseries.as_i32()),
            Value::Byte(ObjectState::Stored.as_u8()),
            Value::Guid(id),
            Value::Int64(3),
            Value::Null,
            Value::String("dev".to_string()),
            Value::TimeSpan(TimeSpan::ZERO),
            Value::Guid(device),
        ]
    );
}

#[test]
fn absent_owner_is_written_as_null_and_record_length_is_unchanged() {
    let conn = open_db_in_memory().unwrap();
    insert_boolean_timeseries(&conn, Kind::RadarPowerOnTimeseries, "power", None);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    assert_eq!(
        row.get_data_object().unwrap().variant,
        BooleanTimeseriesVariant::RadarPowerOn { radar: None }
    );

    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();
    let record = read_record::<BooleanTimeseriesFamily>(&writer.into_inner());
    assert_eq!(
        record.len(),
        BooleanTimeseriesFamily::record_len(Kind::RadarPowerOnTimeseries).unwrap()
    );
    assert_eq!(record.last(), Some(&Value::Null));
}

#[test]
fn columns_of_other_subtypes_read_as_none() {
    let conn = open_db_in_memory().unwrap();
    let radar = new_guid();
    insert_boolean_timeseries(&conn, Kind::RadarTrackingTimeseries, "tracking", Some(radar));

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let columns = row.columns();
    assert_eq!(columns.radar_tracking_radar().unwrap(), Some(radar));
    assert_eq!(columns.device_enabled_device().unwrap(), None);
    assert_eq!(columns.radar_power_on_radar().unwrap(), None);
    assert_eq!(columns.media_service_enabled_service().unwrap(), None);
}

#[test]
fn catalog_and_retention_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let id = new_guid();
    let catalog = new_guid();
    let retention = TimeSpan::from_seconds(3_600);
    conn.execute(
        "INSERT INTO BooleanTimeseries (Id, EntityType, RowVersion, Catalog, Name, MaxRetention)
         VALUES (?1, ?2, 11, ?3, 'root', ?4)",
        (
            id.to_string(),
            Kind::BooleanTimeseries.as_i32(),
            catalog.to_string(),
            retention.ticks(),
        ),
    )
    .unwrap();

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    let objects = reader.read_all().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].catalog, Some(catalog));
    assert_eq!(objects[0].max_retention, retention);
    assert_eq!(objects[0].row_version, 11);
    assert_eq!(
        objects[0].variant,
        BooleanTimeseriesVariant::BooleanTimeseries
    );
}

#[test]
fn data_object_serializes_variant_tag() {
    let conn = open_db_in_memory().unwrap();
    insert_boolean_timeseries(&conn, Kind::MediaServiceEnabledTimeseries, "svc", None);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexBooleanTimeseriesDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();
    let json = serde_json::to_value(&object).unwrap();
    assert_eq!(json["variant"]["type"], "MediaServiceEnabled");
    assert_eq!(json["object_state"], "Stored");
    assert_eq!(json["name"], "svc");
}
