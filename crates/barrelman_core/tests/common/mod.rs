//! Fixture helpers shared by the reader integration tests.
#![allow(dead_code)]

use barrelman_core::families::timeseries::owner_column;
use barrelman_core::families::OwnerRole;
use barrelman_core::{BinaryReader, ComplexFamily, ErrorSink, Guid, Kind, ReaderError, Value};
use rusqlite::Connection;
use std::cell::RefCell;
use uuid::Uuid;

pub fn new_guid() -> Guid {
    Uuid::new_v4()
}

pub fn guid_text(value: Option<Guid>) -> Option<String> {
    value.map(|guid| guid.to_string())
}

/// Error sink that keeps every report for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    reports: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, error: &ReaderError) {
        self.reports.borrow_mut().push(error.to_string());
    }
}

/// Kind carried by the leading field of a written record.
pub fn record_kind(first: &Value) -> Kind {
    match first {
        Value::Int32(raw) => Kind::from_i32(*raw).unwrap(),
        other => panic!("record does not start with a kind: {other:?}"),
    }
}

/// Decodes a `(true, record)* false` stream written by family `F`.
pub fn read_records<F: ComplexFamily>(bytes: &[u8]) -> Vec<Vec<Value>> {
    let mut reader = BinaryReader::new(bytes);
    let records = reader
        .read_result_set(|first| {
            Ok(F::record_len(record_kind(first)).unwrap())
        })
        .unwrap();
    assert!(
        reader.into_inner().is_empty(),
        "trailing bytes after result set terminator"
    );
    records
}

/// Decodes one bare record (no framing) written by family `F`.
pub fn read_record<F: ComplexFamily>(bytes: &[u8]) -> Vec<Value> {
    let mut reader = BinaryReader::new(bytes);
    let first = reader.read_value().unwrap();
    let kind = record_kind(&first);
    let mut record = vec![first];
    for _ in 1..F::record_len(kind).unwrap() {
        record.push(reader.read_value().unwrap());
    }
    assert!(reader.into_inner().is_empty(), "trailing bytes after record");
    record
}

pub fn insert_boolean_timeseries(
    conn: &Connection,
    kind: Kind,
    name: &str,
    owner: Option<Guid>,
) -> Guid {
    let id = new_guid();
    conn.execute(
        "INSERT INTO BooleanTimeseries (Id, EntityType, RowVersion, Catalog, Name, MaxRetention)
         VALUES (?1, ?2, 3, NULL, ?3, 0)",
        (id.to_string(), kind.as_i32(), name),
    )
    .unwrap();
    if let Some((table, column)) = boolean_timeseries_owner_column(kind) {
        conn.execute(
            &format!("INSERT INTO {table} (Id, {column}) VALUES (?1, ?2)"),
            (id.to_string(), guid_text(owner)),
        )
        .unwrap();
    }
    id
}

pub fn boolean_timeseries_owner_column(kind: Kind) -> Option<(&'static str, &'static str)> {
    let pair = match kind {
        Kind::AisAidToNavigationOffPositionTimeseries => {
            ("AisAidToNavigationOffPositionTimeseries", "AidToNavigation")
        }
        Kind::DeviceEnabledTimeseries => ("DeviceEnabledTimeseries", "Device"),
        Kind::MediaProxySessionEnabledTimeseries => {
            ("MediaProxySessionEnabledTimeseries", "ProxySession")
        }
        Kind::MediaServiceEnabledTimeseries => ("MediaServiceEnabledTimeseries", "Service"),
        Kind::RadarAutomaticSensitivityTimeControlTimeseries => {
            ("RadarAutomaticSensitivityTimeControlTimeseries", "Radar")
        }
        Kind::RadarBlankSector1Timeseries => ("RadarBlankSector1Timeseries", "Radar"),
        Kind::RadarBlankSector2Timeseries => ("RadarBlankSector2Timeseries", "Radar"),
        Kind::RadarEnableAutomaticFrequencyControlTimeseries => {
            ("RadarEnableAutomaticFrequencyControlTimeseries", "Radar")
        }
        Kind::RadarEnableFastTimeConstantTimeseries => {
            ("RadarEnableFastTimeConstantTimeseries", "Radar")
        }
        Kind::RadarEnableSensitivityTimeControlTimeseries => {
            ("RadarEnableSensitivityTimeControlTimeseries", "Radar")
        }
        Kind::RadarPowerOnTimeseries => ("RadarPowerOnTimeseries", "Radar"),
        Kind::RadarSaveSettingsTimeseries => ("RadarSaveSettingsTimeseries", "Radar"),
        Kind::RadarTrackingTimeseries => ("RadarTrackingTimeseries", "Radar"),
        _ => return None,
    };
    Some(pair)
}

/// Inserts a camera command base row with fixed source fields.
pub fn insert_camera_command_base(
    conn: &Connection,
    kind: Kind,
    camera: Guid,
    timestamp_ticks: i64,
) -> Guid {
    let id = new_guid();
    conn.execute(
        "INSERT INTO CameraCommand
           (Id, EntityType, RowVersion, Camera, Timestamp, DeviceCommandSourceType,
            DeviceCommandSourceId, Reply)
         VALUES (?1, ?2, 1, ?3, ?4, 2, ?5, NULL)",
        (
            id.to_string(),
            kind.as_i32(),
            camera.to_string(),
            timestamp_ticks,
            camera.to_string(),
        ),
    )
    .unwrap();
    id
}

/// Inserts a device base row; tracker subtypes also get their intermediate row.
pub fn insert_device_base(conn: &Connection, kind: Kind, host: Guid, name: &str) -> Guid {
    let id = new_guid();
    conn.execute(
        "INSERT INTO Device (Id, EntityType, RowVersion, Host, Name, Description, EnabledTimeseries)
         VALUES (?1, ?2, 5, ?3, ?4, ?5, NULL)",
        (
            id.to_string(),
            kind.as_i32(),
            host.to_string(),
            name,
            format!("{name} description"),
        ),
    )
    .unwrap();
    if matches!(kind, Kind::AisDevice | Kind::RadarDevice) {
        conn.execute(
            "INSERT INTO TrackerDevice (Id) VALUES (?1)",
            [id.to_string()],
        )
        .unwrap();
    }
    id
}

/// Inserts a property base row; timeseries subtypes also get their intermediate row.
pub fn insert_property_base(conn: &Connection, kind: Kind, element: Guid, definition: Guid) -> Guid {
    let id = new_guid();
    conn.execute(
        "INSERT INTO Property (Id, EntityType, RowVersion, Element, Definition)
         VALUES (?1, ?2, 9, ?3, ?4)",
        (
            id.to_string(),
            kind.as_i32(),
            element.to_string(),
            definition.to_string(),
        ),
    )
    .unwrap();
    if kind.as_i32() > Kind::TimeseriesProperty.as_i32()
        && kind.as_i32() < Kind::TimeSpanProperty.as_i32()
    {
        conn.execute(
            "INSERT INTO TimeseriesProperty (Id) VALUES (?1)",
            [id.to_string()],
        )
        .unwrap();
    }
    id
}

/// Inserts an AIS message base row received at `received_ticks`.
pub fn insert_ais_message_base(
    conn: &Connection,
    kind: Kind,
    ais_device: Guid,
    received_ticks: i64,
    mmsi: Option<Guid>,
) -> Guid {
    let id = new_guid();
    conn.execute(
        "INSERT INTO AisMessage
           (Id, EntityType, RowVersion, AisDevice, ReceivedTimestamp, MessageSequenceNumber,
            Repeat, Mmsi)
         VALUES (?1, ?2, 2, ?3, ?4, 42, 0, ?5)",
        (
            id.to_string(),
            kind.as_i32(),
            ais_device.to_string(),
            received_ticks,
            guid_text(mmsi),
        ),
    )
    .unwrap();
    id
}

/// Inserts a non-boolean timeseries; owner-bearing kinds also get their owner row.
pub fn insert_timeseries(conn: &Connection, kind: Kind, name: &str, owner: Option<Guid>) -> Guid {
    let id = new_guid();
    conn.execute(
        "INSERT INTO Timeseries (Id, EntityType, RowVersion, Catalog, Name, MaxRetention)
         VALUES (?1, ?2, 4, NULL, ?3, 0)",
        (id.to_string(), kind.as_i32(), name),
    )
    .unwrap();
    if let Some((role, _)) = owner_column(kind) {
        let table = kind.to_string().replace("Gnss", "GNSS");
        let column = owner_role_column(role);
        conn.execute(
            &format!("INSERT INTO {table} (Id, {column}) VALUES (?1, ?2)"),
            (id.to_string(), guid_text(owner)),
        )
        .unwrap();
    }
    id
}

pub fn owner_role_column(role: OwnerRole) -> &'static str {
    match role {
        OwnerRole::AidToNavigation => "AidToNavigation",
        OwnerRole::Device => "Device",
        OwnerRole::ProxySession => "ProxySession",
        OwnerRole::Service => "Service",
        OwnerRole::Radar => "Radar",
        OwnerRole::GnssDevice => "GNSSDevice",
        OwnerRole::GyroDevice => "GyroDevice",
        OwnerRole::Radome => "Radome",
        OwnerRole::Vessel => "Vessel",
        OwnerRole::View => "View",
        OwnerRole::WeatherStation => "WeatherStation",
    }
}

/// Inserts a row for `table` keyed by `id`, filling every NOT NULL column
/// with zero or the empty string and leaving nullable columns NULL.
pub fn insert_zeroed_row(conn: &Connection, table: &str, id: Guid) {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .unwrap();
    let columns: Vec<(String, String)> = stmt
        .query_map([], |row| {
            let name: String = row.get(1)?;
            let decl: String = row.get(2)?;
            let not_null: bool = row.get(3)?;
            Ok((name, decl, not_null))
        })
        .unwrap()
        .map(Result::unwrap)
        .filter(|(name, _, not_null)| *not_null && name != "Id")
        .map(|(name, decl, _)| {
            let value = if decl == "TEXT" { "''" } else { "0" };
            (name, value.to_string())
        })
        .collect();

    let mut names = vec!["Id".to_string()];
    let mut values = vec!["?1".to_string()];
    for (name, value) in columns {
        names.push(name);
        values.push(value);
    }
    conn.execute(
        &format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            names.join(", "),
            values.join(", ")
        ),
        [id.to_string()],
    )
    .unwrap();
}

/// Subtype tables an AIS message of `kind` is stored in, parent first.
pub fn ais_message_tables(kind: Kind) -> Vec<String> {
    let mut tables = Vec::new();
    match kind {
        Kind::AisPositionReportClassAAssignedScheduleMessage
        | Kind::AisPositionReportClassAMessage
        | Kind::AisPositionReportClassAResponseToInterrogationMessage => {
            tables.push("AisPositionReportClassAMessageBase".to_string());
        }
        Kind::AisStaticDataReportPartAMessage | Kind::AisStaticDataReportPartBMessage => {
            tables.push("AisStaticDataReportMessage".to_string());
        }
        _ => {}
    }
    tables.push(kind.to_string());
    tables
}
