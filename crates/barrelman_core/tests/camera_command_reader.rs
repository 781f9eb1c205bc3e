mod common;

use barrelman_core::families::camera_command::{
    CameraCommandFamily, CameraCommandVariant, ComplexCameraCommandDataReader, BASE_QUERY,
};
use barrelman_core::model::{
    CameraFocalLengthMode, CameraFollowReason, CameraPanTiltMode, DeviceCommandSourceType,
};
use barrelman_core::{
    open_db_in_memory, BinaryWriter, ComplexFamily, DataObject, DateTime, Kind, ObjectState,
    ReaderError, TimeSpan, Value,
};
use common::{
    insert_camera_command_base, new_guid, read_record, read_records, record_kind, RecordingSink,
};
use rusqlite::Connection;

const TIMESTAMP_TICKS: i64 = 638_000_000_000_000_000;

fn insert_subtype(conn: &Connection, kind: Kind, id: &str) {
    let sql = match kind {
        Kind::CameraCommand => return,
        Kind::CameraCommandAbsoluteMove => {
            "INSERT INTO CameraCommandAbsoluteMove
               (Id, PositionPanTiltMode, PanAngle, TiltAngle, PositionFocalLengthMode,
                FocalLength, SpeedPanTiltMode, PanSpeed, TiltSpeed, SpeedFocalLengthMode,
                ZoomSpeed)
             VALUES (?1, 2, 45.5, -10.25, 2, 35.0, 1, 0.5, NULL, 1, 0.75)"
        }
        Kind::CameraCommandAdjustPanTiltZoom => {
            "INSERT INTO CameraCommandAdjustPanTiltZoom (Id, X, Y, Z) VALUES (?1, 0.1, NULL, 0.3)"
        }
        Kind::CameraCommandContinuousMove => {
            "INSERT INTO CameraCommandContinuousMove
               (Id, Normalized, PanVelocity, TiltVelocity, ZoomVelocity, Duration)
             VALUES (?1, 1, 0.25, -0.25, NULL, NULL)"
        }
        Kind::CameraCommandGeoMove => {
            "INSERT INTO CameraCommandGeoMove
               (Id, Latitude, Longitude, Altitude, ViewportWidth, ViewportHeight)
             VALUES (?1, 59.91, 10.75, 12.5, NULL, NULL)"
        }
        Kind::CameraCommandRelativeMove => {
            "INSERT INTO CameraCommandRelativeMove
               (Id, Normalized, PanAngle, TiltAngle, FocalLength, PanSpeed, TiltSpeed, ZoomSpeed)
             VALUES (?1, 0, 5.0, NULL, NULL, 0.5, 0.5, NULL)"
        }
        Kind::CameraCommandReleasePtzOwnership => {
            "INSERT INTO CameraCommandReleasePTZOwnership (Id) VALUES (?1)"
        }
        Kind::CameraCommandRequestPtzOwnership => {
            "INSERT INTO CameraCommandRequestPTZOwnership (Id) VALUES (?1)"
        }
        Kind::CameraCommandSetAutoFocus => {
            "INSERT INTO CameraCommandSetAutoFocus (Id, Enabled) VALUES (?1, 1)"
        }
        Kind::CameraCommandSetBlackAndWhite => {
            "INSERT INTO CameraCommandSetBlackAndWhite (Id, Enabled) VALUES (?1, 0)"
        }
        Kind::CameraCommandSetFollowed => {
            "INSERT INTO CameraCommandSetFollowed (Id, TrackId, Reason)
             VALUES (?1, '00000000-0000-0000-0000-0000000000aa', 1)"
        }
        Kind::CameraCommandSetInfraRedLamp => {
            "INSERT INTO CameraCommandSetInfraRedLamp (Id, Enabled) VALUES (?1, 1)"
        }
        Kind::CameraCommandSetWasher => {
            "INSERT INTO CameraCommandSetWasher (Id, Enabled) VALUES (?1, 1)"
        }
        Kind::CameraCommandSetWiper => {
            "INSERT INTO CameraCommandSetWiper (Id, Enabled) VALUES (?1, 0)"
        }
        Kind::CameraCommandStop => {
            "INSERT INTO CameraCommandStop (Id, PanTilt, Zoom) VALUES (?1, 1, 0)"
        }
        other => panic!("not a camera command kind: {other}"),
    };
    conn.execute(sql, [id]).unwrap();
}

fn insert_command(conn: &Connection, kind: Kind) -> barrelman_core::Guid {
    let camera = new_guid();
    let id = insert_camera_command_base(conn, kind, camera, TIMESTAMP_TICKS);
    insert_subtype(conn, kind, &id.to_string());
    id
}

const HANDLED_KINDS: [Kind; 15] = [
    Kind::CameraCommand,
    Kind::CameraCommandAbsoluteMove,
    Kind::CameraCommandAdjustPanTiltZoom,
    Kind::CameraCommandContinuousMove,
    Kind::CameraCommandGeoMove,
    Kind::CameraCommandRelativeMove,
    Kind::CameraCommandReleasePtzOwnership,
    Kind::CameraCommandRequestPtzOwnership,
    Kind::CameraCommandSetAutoFocus,
    Kind::CameraCommandSetBlackAndWhite,
    Kind::CameraCommandSetFollowed,
    Kind::CameraCommandSetInfraRedLamp,
    Kind::CameraCommandSetWasher,
    Kind::CameraCommandSetWiper,
    Kind::CameraCommandStop,
];

#[test]
fn absolute_move_reconstructs_every_column() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_command(&conn, Kind::CameraCommandAbsoluteMove);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();

    assert_eq!(object.object_state, ObjectState::Stored);
    assert_eq!(object.id, id);
    assert_eq!(object.timestamp, DateTime::from_ticks(TIMESTAMP_TICKS));
    assert_eq!(
        object.device_command_source_type,
        DeviceCommandSourceType::Device
    );
    assert_eq!(object.device_command_source_id, object.camera);
    assert_eq!(object.reply, None);
    assert_eq!(
        object.variant,
        CameraCommandVariant::AbsoluteMove {
            position_pan_tilt_mode: CameraPanTiltMode::Angular,
            pan_angle: Some(45.5),
            tilt_angle: Some(-10.25),
            position_focal_length_mode: CameraFocalLengthMode::Millimeter,
            focal_length: Some(35.0),
            speed_pan_tilt_mode: CameraPanTiltMode::Normalized,
            pan_speed: Some(0.5),
            tilt_speed: None,
            speed_focal_length_mode: CameraFocalLengthMode::Normalized,
            zoom_speed: Some(0.75),
        }
    );
}

#[test]
fn stop_record_has_documented_field_sequence() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_command(&conn, Kind::CameraCommandStop);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    let camera = row.columns().camera().unwrap();
    let mut writer = BinaryWriter::new(Vec::new());
    row.write_to(&mut writer).unwrap();

    let record = read_record::<CameraCommandFamily>(&writer.into_inner());
    assert_eq!(
        record,
        vec![
            Value::Int32(Kind::CameraCommandStop.as_i32()),
            Value::Byte(ObjectState::Stored.as_u8()),
            Value::Guid(id),
            Value::Int64(1),
            Value::Guid(camera),
            Value::DateTime(DateTime::from_ticks(TIMESTAMP_TICKS)),
            Value::Int32(DeviceCommandSourceType::Device.into()),
            Value::Guid(camera),
            Value::Null,
            Value::Boolean(true),
            Value::Boolean(false),
        ]
    );
}

#[test]
fn nullable_subtype_columns_surface_as_none() {
    let conn = open_db_in_memory().unwrap();
    insert_command(&conn, Kind::CameraCommandContinuousMove);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    let row = reader.read().unwrap().unwrap();
    assert_eq!(
        row.get_data_object().unwrap().variant,
        CameraCommandVariant::ContinuousMove {
            normalized: true,
            pan_velocity: Some(0.25),
            tilt_velocity: Some(-0.25),
            zoom_velocity: None,
            duration: None,
        }
    );

    let columns = row.columns();
    assert_eq!(columns.geo_move_altitude().unwrap(), None);
    assert_eq!(columns.adjust_pan_tilt_zoom_x().unwrap(), None);
    assert_eq!(columns.relative_move_zoom_speed().unwrap(), None);
}

#[test]
fn set_followed_maps_reason_enum() {
    let conn = open_db_in_memory().unwrap();
    insert_command(&conn, Kind::CameraCommandSetFollowed);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();
    match object.variant {
        CameraCommandVariant::SetFollowed { track_id, reason } => {
            assert_eq!(
                track_id.to_string(),
                "00000000-0000-0000-0000-0000000000aa"
            );
            assert_eq!(reason, CameraFollowReason::User);
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn every_handled_kind_writes_a_record_of_its_declared_length() {
    let conn = open_db_in_memory().unwrap();
    for kind in HANDLED_KINDS {
        insert_command(&conn, kind);
    }

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    let mut writer = BinaryWriter::new(Vec::new());
    let count = reader.write_result_set_to(&mut writer).unwrap();
    assert_eq!(count, HANDLED_KINDS.len());

    let records = read_records::<CameraCommandFamily>(&writer.into_inner());
    let mut kinds = records
        .iter()
        .map(|record| {
            let kind = record_kind(&record[0]);
            assert_eq!(record.len(), CameraCommandFamily::record_len(kind).unwrap());
            kind
        })
        .collect::<Vec<_>>();
    kinds.sort_by_key(|kind| kind.as_i32());
    assert_eq!(kinds, HANDLED_KINDS.to_vec());
}

#[test]
fn geo_move_and_duration_ticks_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_command(&conn, Kind::CameraCommandGeoMove);
    let continuous = insert_command(&conn, Kind::CameraCommandContinuousMove);
    conn.execute(
        "UPDATE CameraCommandContinuousMove SET Duration = ?2 WHERE Id = ?1",
        (continuous.to_string(), TimeSpan::from_seconds(2).ticks()),
    )
    .unwrap();

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    for object in reader.read_all().unwrap() {
        match object.variant {
            CameraCommandVariant::GeoMove {
                latitude,
                longitude,
                altitude,
                ..
            } => {
                assert_eq!(object.id, id);
                assert_eq!((latitude, longitude, altitude), (59.91, 10.75, Some(12.5)));
            }
            CameraCommandVariant::ContinuousMove { duration, .. } => {
                assert_eq!(duration, Some(TimeSpan::from_seconds(2)));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}

#[test]
fn unmapped_mode_is_invalid_data_and_not_reported() {
    let conn = open_db_in_memory().unwrap();
    let id = insert_command(&conn, Kind::CameraCommandAbsoluteMove);
    conn.execute(
        "UPDATE CameraCommandAbsoluteMove SET PositionPanTiltMode = 9 WHERE Id = ?1",
        [id.to_string()],
    )
    .unwrap();

    let sink = RecordingSink::default();
    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader =
        ComplexCameraCommandDataReader::new(stmt.query([]).unwrap()).with_error_sink(&sink);
    let row = reader.read().unwrap().unwrap();
    let err = row.get_data_object().unwrap_err();
    assert!(matches!(err, ReaderError::InvalidData(_)), "{err}");
    assert!(sink.reports().is_empty());
}

#[test]
fn object_kind_matches_discriminator() {
    let conn = open_db_in_memory().unwrap();
    insert_command(&conn, Kind::CameraCommandRequestPtzOwnership);

    let mut stmt = conn.prepare(BASE_QUERY).unwrap();
    let mut reader = ComplexCameraCommandDataReader::new(stmt.query([]).unwrap());
    let object = reader.read().unwrap().unwrap().get_data_object().unwrap();
    assert_eq!(object.kind(), Kind::CameraCommandRequestPtzOwnership);
    assert_eq!(object.variant, CameraCommandVariant::RequestPtzOwnership);
}
