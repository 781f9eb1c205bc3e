//! Timeseries family.
//!
//! # Responsibility
//! - Project `TimeseriesView` rows onto every concrete timeseries kind.
//!
//! # Invariants
//! - Concrete kinds are the range `BinaryTimeseries..=UInt64Timeseries`; the
//!   abstract `Timeseries` kind has no projection and fails with `UnknownKind`.
//! - A kind carries at most one owner reference, read from the column listed
//!   for it in `OWNER_COLUMNS`. Kinds without an entry write only the base.
//! - The base query joins only owner tables. Value-type tables such as
//!   `DoubleTimeseries` contribute no columns and are left out.

use crate::binary::{BinaryWriter, CodecResult};
use crate::model::{Guid, Kind, ObjectState, TimeSpan};
use crate::reader::columns::{get_guid, get_nullable_guid, get_time_span};
use crate::reader::{
    unknown_kind, ComplexDataReader, ComplexFamily, ComplexRow, DataObject, ErrorSink,
    LogErrorSink, ReaderResult, ENTITY_TYPE_FIELD_ID,
};
use rusqlite::Row;
use serde::Serialize;
use std::io::Write;

pub const BASE_QUERY: &str = "SELECT
  t.[Id],
  t.[EntityType],
  t.[RowVersion],
  t.[Catalog],
  t.[Name],
  t.[MaxRetention],
  aatnopt.[AidToNavigation],
  det.[Device],
  mpset.[ProxySession],
  mset.[Service],
  rastct.[Radar],
  rbs1t.[Radar],
  rbs2t.[Radar],
  reafct.[Radar],
  reftct.[Radar],
  restct.[Radar],
  rpot.[Radar],
  rsst.[Radar],
  rtt.[Radar],
  gats.[GNSSDevice],
  glats.[GNSSDevice],
  glots.[GNSSDevice],
  gct.[GyroDevice],
  ghmnt.[GyroDevice],
  ghtnt.[GyroDevice],
  gpt.[GyroDevice],
  grott.[GyroDevice],
  grt.[GyroDevice],
  gst.[GyroDevice],
  rlats.[Radar],
  rlots.[Radar],
  rdpt.[Radome],
  rpt.[Radome],
  rtets.[Radome],
  vdt.[Vessel],
  vlats.[View],
  vlots.[View],
  vzlt.[View],
  wsaht.[WeatherStation],
  wsatt.[WeatherStation],
  wsbpt.[WeatherStation],
  wsdpt.[WeatherStation],
  wsrht.[WeatherStation],
  wswtt.[WeatherStation],
  wswdt.[WeatherStation],
  wswst.[WeatherStation],
  aatnpt.[AidToNavigation],
  raot.[Radar],
  rftclt.[Radar],
  rftcmt.[Radar],
  rapts.[Radar],
  rs1et.[Radar],
  rs1st.[Radar],
  rs2et.[Radar],
  rs2st.[Radar],
  rstclt.[Radar],
  ratuts.[Radar],
  vpobt.[Vessel],
  rst.[Radome]
FROM [TimeseriesView] t
  LEFT JOIN [AisAidToNavigationOffPositionTimeseries] aatnopt ON(t.[Id] = aatnopt.[Id] )
  LEFT JOIN [DeviceEnabledTimeseries] det ON(t.[Id] = det.[Id] )
  LEFT JOIN [MediaProxySessionEnabledTimeseries] mpset ON(t.[Id] = mpset.[Id] )
  LEFT JOIN [MediaServiceEnabledTimeseries] mset ON(t.[Id] = mset.[Id] )
  LEFT JOIN [RadarAutomaticSensitivityTimeControlTimeseries] rastct ON(t.[Id] = rastct.[Id] )
  LEFT JOIN [RadarBlankSector1Timeseries] rbs1t ON(t.[Id] = rbs1t.[Id] )
  LEFT JOIN [RadarBlankSector2Timeseries] rbs2t ON(t.[Id] = rbs2t.[Id] )
  LEFT JOIN [RadarEnableAutomaticFrequencyControlTimeseries] reafct ON(t.[Id] = reafct.[Id] )
  LEFT JOIN [RadarEnableFastTimeConstantTimeseries] reftct ON(t.[Id] = reftct.[Id] )
  LEFT JOIN [RadarEnableSensitivityTimeControlTimeseries] restct ON(t.[Id] = restct.[Id] )
  LEFT JOIN [RadarPowerOnTimeseries] rpot ON(t.[Id] = rpot.[Id] )
  LEFT JOIN [RadarSaveSettingsTimeseries] rsst ON(t.[Id] = rsst.[Id] )
  LEFT JOIN [RadarTrackingTimeseries] rtt ON(t.[Id] = rtt.[Id] )
  LEFT JOIN [GNSSAltitudeTimeseries] gats ON(t.[Id] = gats.[Id] )
  LEFT JOIN [GNSSLatitudeTimeseries] glats ON(t.[Id] = glats.[Id] )
  LEFT JOIN [GNSSLongitudeTimeseries] glots ON(t.[Id] = glots.[Id] )
  LEFT JOIN [GyroCourseTimeseries] gct ON(t.[Id] = gct.[Id] )
  LEFT JOIN [GyroHeadingMagneticNorthTimeseries] ghmnt ON(t.[Id] = ghmnt.[Id] )
  LEFT JOIN [GyroHeadingTrueNorthTimeseries] ghtnt ON(t.[Id] = ghtnt.[Id] )
  LEFT JOIN [GyroPitchTimeseries] gpt ON(t.[Id] = gpt.[Id] )
  LEFT JOIN [GyroRateOfTurnTimeseries] grott ON(t.[Id] = grott.[Id] )
  LEFT JOIN [GyroRollTimeseries] grt ON(t.[Id] = grt.[Id] )
  LEFT JOIN [GyroSpeedTimeseries] gst ON(t.[Id] = gst.[Id] )
  LEFT JOIN [RadarLatitudeTimeseries] rlats ON(t.[Id] = rlats.[Id] )
  LEFT JOIN [RadarLongitudeTimeseries] rlots ON(t.[Id] = rlots.[Id] )
  LEFT JOIN [RadomeDewPointTimeseries] rdpt ON(t.[Id] = rdpt.[Id] )
  LEFT JOIN [RadomePressureTimeseries] rpt ON(t.[Id] = rpt.[Id] )
  LEFT JOIN [RadomeTemperatureTimeseries] rtets ON(t.[Id] = rtets.[Id] )
  LEFT JOIN [VesselDraughtTimeseries] vdt ON(t.[Id] = vdt.[Id] )
  LEFT JOIN [ViewLatitudeTimeseries] vlats ON(t.[Id] = vlats.[Id] )
  LEFT JOIN [ViewLongitudeTimeseries] vlots ON(t.[Id] = vlots.[Id] )
  LEFT JOIN [ViewZoomLevelTimeseries] vzlt ON(t.[Id] = vzlt.[Id] )
  LEFT JOIN [WeatherStationAbsoluteHumidityTimeseries] wsaht ON(t.[Id] = wsaht.[Id] )
  LEFT JOIN [WeatherStationAirTemperatureTimeseries] wsatt ON(t.[Id] = wsatt.[Id] )
  LEFT JOIN [WeatherStationBarometricPressureTimeseries] wsbpt ON(t.[Id] = wsbpt.[Id] )
  LEFT JOIN [WeatherStationDewPointTimeseries] wsdpt ON(t.[Id] = wsdpt.[Id] )
  LEFT JOIN [WeatherStationRelativeHumidityTimeseries] wsrht ON(t.[Id] = wsrht.[Id] )
  LEFT JOIN [WeatherStationWaterTemperatureTimeseries] wswtt ON(t.[Id] = wswtt.[Id] )
  LEFT JOIN [WeatherStationWindDirectionTimeseries] wswdt ON(t.[Id] = wswdt.[Id] )
  LEFT JOIN [WeatherStationWindSpeedTimeseries] wswst ON(t.[Id] = wswst.[Id] )
  LEFT JOIN [AisAidToNavigationPositionTimeseries] aatnpt ON(t.[Id] = aatnpt.[Id] )
  LEFT JOIN [RadarAzimuthOffsetTimeseries] raot ON(t.[Id] = raot.[Id] )
  LEFT JOIN [RadarFastTimeConstantLevelTimeseries] rftclt ON(t.[Id] = rftclt.[Id] )
  LEFT JOIN [RadarFastTimeConstantModeTimeseries] rftcmt ON(t.[Id] = rftcmt.[Id] )
  LEFT JOIN [RadarPulseTimeseries] rapts ON(t.[Id] = rapts.[Id] )
  LEFT JOIN [RadarSector1EndTimeseries] rs1et ON(t.[Id] = rs1et.[Id] )
  LEFT JOIN [RadarSector1StartTimeseries] rs1st ON(t.[Id] = rs1st.[Id] )
  LEFT JOIN [RadarSector2EndTimeseries] rs2et ON(t.[Id] = rs2et.[Id] )
  LEFT JOIN [RadarSector2StartTimeseries] rs2st ON(t.[Id] = rs2st.[Id] )
  LEFT JOIN [RadarSensitivityTimeControlLevelTimeseries] rstclt ON(t.[Id] = rstclt.[Id] )
  LEFT JOIN [RadarTuningTimeseries] ratuts ON(t.[Id] = ratuts.[Id] )
  LEFT JOIN [VesselPersonsOnBoardTimeseries] vpobt ON(t.[Id] = vpobt.[Id] )
  LEFT JOIN [RadomeStatusTimeseries] rst ON(t.[Id] = rst.[Id] )
";

pub const BASE_VIEW_NAME: &str = "TimeseriesView";
pub const VIEW_ALIAS_NAME: &str = "t";

pub const T_ID_FIELD_ID: usize = 0;
pub const T_KIND_FIELD_ID: usize = ENTITY_TYPE_FIELD_ID;
pub const T_ROWVERSION_FIELD_ID: usize = 2;
pub const T_CATALOG_FIELD_ID: usize = 3;
pub const T_NAME_FIELD_ID: usize = 4;
pub const T_MAXRETENTION_FIELD_ID: usize = 5;
pub const AATNOPT_AIDTONAVIGATION_FIELD_ID: usize = 6;
pub const DET_DEVICE_FIELD_ID: usize = 7;
pub const MPSET_PROXYSESSION_FIELD_ID: usize = 8;
pub const MSET_SERVICE_FIELD_ID: usize = 9;
pub const RASTCT_RADAR_FIELD_ID: usize = 10;
pub const RBS1T_RADAR_FIELD_ID: usize = 11;
pub const RBS2T_RADAR_FIELD_ID: usize = 12;
pub const REAFCT_RADAR_FIELD_ID: usize = 13;
pub const REFTCT_RADAR_FIELD_ID: usize = 14;
pub const RESTCT_RADAR_FIELD_ID: usize = 15;
pub const RPOT_RADAR_FIELD_ID: usize = 16;
pub const RSST_RADAR_FIELD_ID: usize = 17;
pub const RTT_RADAR_FIELD_ID: usize = 18;
pub const GATS_GNSSDEVICE_FIELD_ID: usize = 19;
pub const GLATS_GNSSDEVICE_FIELD_ID: usize = 20;
pub const GLOTS_GNSSDEVICE_FIELD_ID: usize = 21;
pub const GCT_GYRODEVICE_FIELD_ID: usize = 22;
pub const GHMNT_GYRODEVICE_FIELD_ID: usize = 23;
pub const GHTNT_GYRODEVICE_FIELD_ID: usize = 24;
pub const GPT_GYRODEVICE_FIELD_ID: usize = 25;
pub const GROTT_GYRODEVICE_FIELD_ID: usize = 26;
pub const GRT_GYRODEVICE_FIELD_ID: usize = 27;
pub const GST_GYRODEVICE_FIELD_ID: usize = 28;
pub const RLATS_RADAR_FIELD_ID: usize = 29;
pub const RLOTS_RADAR_FIELD_ID: usize = 30;
pub const RDPT_RADOME_FIELD_ID: usize = 31;
pub const RPT_RADOME_FIELD_ID: usize = 32;
pub const RTETS_RADOME_FIELD_ID: usize = 33;
pub const VDT_VESSEL_FIELD_ID: usize = 34;
pub const VLATS_VIEW_FIELD_ID: usize = 35;
pub const VLOTS_VIEW_FIELD_ID: usize = 36;
pub const VZLT_VIEW_FIELD_ID: usize = 37;
pub const WSAHT_WEATHERSTATION_FIELD_ID: usize = 38;
pub const WSATT_WEATHERSTATION_FIELD_ID: usize = 39;
pub const WSBPT_WEATHERSTATION_FIELD_ID: usize = 40;
pub const WSDPT_WEATHERSTATION_FIELD_ID: usize = 41;
pub const WSRHT_WEATHERSTATION_FIELD_ID: usize = 42;
pub const WSWTT_WEATHERSTATION_FIELD_ID: usize = 43;
pub const WSWDT_WEATHERSTATION_FIELD_ID: usize = 44;
pub const WSWST_WEATHERSTATION_FIELD_ID: usize = 45;
pub const AATNPT_AIDTONAVIGATION_FIELD_ID: usize = 46;
pub const RAOT_RADAR_FIELD_ID: usize = 47;
pub const RFTCLT_RADAR_FIELD_ID: usize = 48;
pub const RFTCMT_RADAR_FIELD_ID: usize = 49;
pub const RAPTS_RADAR_FIELD_ID: usize = 50;
pub const RS1ET_RADAR_FIELD_ID: usize = 51;
pub const RS1ST_RADAR_FIELD_ID: usize = 52;
pub const RS2ET_RADAR_FIELD_ID: usize = 53;
pub const RS2ST_RADAR_FIELD_ID: usize = 54;
pub const RSTCLT_RADAR_FIELD_ID: usize = 55;
pub const RATUTS_RADAR_FIELD_ID: usize = 56;
pub const VPOBT_VESSEL_FIELD_ID: usize = 57;
pub const RST_RADOME_FIELD_ID: usize = 58;

/// Fields written before the owner: kind, state and the base columns.
const BASE_RECORD_LEN: usize = 7;

/// What an owner reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OwnerRole {
    AidToNavigation,
    Device,
    ProxySession,
    Service,
    Radar,
    GnssDevice,
    GyroDevice,
    Radome,
    Vessel,
    View,
    WeatherStation,
}

/// Owner-bearing kinds with the role and ordinal of their owner column.
const OWNER_COLUMNS: &[(Kind, OwnerRole, usize)] = &[
    (
        Kind::AisAidToNavigationOffPositionTimeseries,
        OwnerRole::AidToNavigation,
        AATNOPT_AIDTONAVIGATION_FIELD_ID,
    ),
    (Kind::DeviceEnabledTimeseries, OwnerRole::Device, DET_DEVICE_FIELD_ID),
    (
        Kind::MediaProxySessionEnabledTimeseries,
        OwnerRole::ProxySession,
        MPSET_PROXYSESSION_FIELD_ID,
    ),
    (Kind::MediaServiceEnabledTimeseries, OwnerRole::Service, MSET_SERVICE_FIELD_ID),
    (Kind::RadarAutomaticSensitivityTimeControlTimeseries, OwnerRole::Radar, RASTCT_RADAR_FIELD_ID),
    (Kind::RadarBlankSector1Timeseries, OwnerRole::Radar, RBS1T_RADAR_FIELD_ID),
    (Kind::RadarBlankSector2Timeseries, OwnerRole::Radar, RBS2T_RADAR_FIELD_ID),
    (Kind::RadarEnableAutomaticFrequencyControlTimeseries, OwnerRole::Radar, REAFCT_RADAR_FIELD_ID),
    (Kind::RadarEnableFastTimeConstantTimeseries, OwnerRole::Radar, REFTCT_RADAR_FIELD_ID),
    (Kind::RadarEnableSensitivityTimeControlTimeseries, OwnerRole::Radar, RESTCT_RADAR_FIELD_ID),
    (Kind::RadarPowerOnTimeseries, OwnerRole::Radar, RPOT_RADAR_FIELD_ID),
    (Kind::RadarSaveSettingsTimeseries, OwnerRole::Radar, RSST_RADAR_FIELD_ID),
    (Kind::RadarTrackingTimeseries, OwnerRole::Radar, RTT_RADAR_FIELD_ID),
    (Kind::GnssAltitudeTimeseries, OwnerRole::GnssDevice, GATS_GNSSDEVICE_FIELD_ID),
    (Kind::GnssLatitudeTimeseries, OwnerRole::GnssDevice, GLATS_GNSSDEVICE_FIELD_ID),
    (Kind::GnssLongitudeTimeseries, OwnerRole::GnssDevice, GLOTS_GNSSDEVICE_FIELD_ID),
    (Kind::GyroCourseTimeseries, OwnerRole::GyroDevice, GCT_GYRODEVICE_FIELD_ID),
    (Kind::GyroHeadingMagneticNorthTimeseries, OwnerRole::GyroDevice, GHMNT_GYRODEVICE_FIELD_ID),
    (Kind::GyroHeadingTrueNorthTimeseries, OwnerRole::GyroDevice, GHTNT_GYRODEVICE_FIELD_ID),
    (Kind::GyroPitchTimeseries, OwnerRole::GyroDevice, GPT_GYRODEVICE_FIELD_ID),
    (Kind::GyroRateOfTurnTimeseries, OwnerRole::GyroDevice, GROTT_GYRODEVICE_FIELD_ID),
    (Kind::GyroRollTimeseries, OwnerRole::GyroDevice, GRT_GYRODEVICE_FIELD_ID),
    (Kind::GyroSpeedTimeseries, OwnerRole::GyroDevice, GST_GYRODEVICE_FIELD_ID),
    (Kind::RadarLatitudeTimeseries, OwnerRole::Radar, RLATS_RADAR_FIELD_ID),
    (Kind::RadarLongitudeTimeseries, OwnerRole::Radar, RLOTS_RADAR_FIELD_ID),
    (Kind::RadomeDewPointTimeseries, OwnerRole::Radome, RDPT_RADOME_FIELD_ID),
    (Kind::RadomePressureTimeseries, OwnerRole::Radome, RPT_RADOME_FIELD_ID),
    (Kind::RadomeTemperatureTimeseries, OwnerRole::Radome, RTETS_RADOME_FIELD_ID),
    (Kind::VesselDraughtTimeseries, OwnerRole::Vessel, VDT_VESSEL_FIELD_ID),
    (Kind::ViewLatitudeTimeseries, OwnerRole::View, VLATS_VIEW_FIELD_ID),
    (Kind::ViewLongitudeTimeseries, OwnerRole::View, VLOTS_VIEW_FIELD_ID),
    (Kind::ViewZoomLevelTimeseries, OwnerRole::View, VZLT_VIEW_FIELD_ID),
    (
        Kind::WeatherStationAbsoluteHumidityTimeseries,
        OwnerRole::WeatherStation,
        WSAHT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationAirTemperatureTimeseries,
        OwnerRole::WeatherStation,
        WSATT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationBarometricPressureTimeseries,
        OwnerRole::WeatherStation,
        WSBPT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationDewPointTimeseries,
        OwnerRole::WeatherStation,
        WSDPT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationRelativeHumidityTimeseries,
        OwnerRole::WeatherStation,
        WSRHT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationWaterTemperatureTimeseries,
        OwnerRole::WeatherStation,
        WSWTT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationWindDirectionTimeseries,
        OwnerRole::WeatherStation,
        WSWDT_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::WeatherStationWindSpeedTimeseries,
        OwnerRole::WeatherStation,
        WSWST_WEATHERSTATION_FIELD_ID,
    ),
    (
        Kind::AisAidToNavigationPositionTimeseries,
        OwnerRole::AidToNavigation,
        AATNPT_AIDTONAVIGATION_FIELD_ID,
    ),
    (Kind::RadarAzimuthOffsetTimeseries, OwnerRole::Radar, RAOT_RADAR_FIELD_ID),
    (Kind::RadarFastTimeConstantLevelTimeseries, OwnerRole::Radar, RFTCLT_RADAR_FIELD_ID),
    (Kind::RadarFastTimeConstantModeTimeseries, OwnerRole::Radar, RFTCMT_RADAR_FIELD_ID),
    (Kind::RadarPulseTimeseries, OwnerRole::Radar, RAPTS_RADAR_FIELD_ID),
    (Kind::RadarSector1EndTimeseries, OwnerRole::Radar, RS1ET_RADAR_FIELD_ID),
    (Kind::RadarSector1StartTimeseries, OwnerRole::Radar, RS1ST_RADAR_FIELD_ID),
    (Kind::RadarSector2EndTimeseries, OwnerRole::Radar, RS2ET_RADAR_FIELD_ID),
    (Kind::RadarSector2StartTimeseries, OwnerRole::Radar, RS2ST_RADAR_FIELD_ID),
    (Kind::RadarSensitivityTimeControlLevelTimeseries, OwnerRole::Radar, RSTCLT_RADAR_FIELD_ID),
    (Kind::RadarTuningTimeseries, OwnerRole::Radar, RATUTS_RADAR_FIELD_ID),
    (Kind::VesselPersonsOnBoardTimeseries, OwnerRole::Vessel, VPOBT_VESSEL_FIELD_ID),
    (Kind::RadomeStatusTimeseries, OwnerRole::Radome, RST_RADOME_FIELD_ID),
];

/// Returns the owner role and column ordinal for `kind`, if it has an owner.
pub fn owner_column(kind: Kind) -> Option<(OwnerRole, usize)> {
    OWNER_COLUMNS
        .iter()
        .find(|(owner_kind, _, _)| *owner_kind == kind)
        .map(|(_, role, ordinal)| (*role, *ordinal))
}

fn is_concrete(kind: Kind) -> bool {
    (Kind::BinaryTimeseries.as_i32()..=Kind::UInt64Timeseries.as_i32()).contains(&kind.as_i32())
}

/// Marker type binding the timeseries query to the generic reader.
#[derive(Debug, Clone, Copy)]
pub struct TimeseriesFamily;

pub type ComplexTimeseriesDataReader<'stmt, S = LogErrorSink> =
    ComplexDataReader<'stmt, TimeseriesFamily, S>;

/// Typed accessors over one row of `BASE_QUERY`.
#[derive(Clone, Copy)]
pub struct TimeseriesColumns<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> TimeseriesColumns<'a, 'stmt> {
    pub fn new(row: &'a Row<'stmt>) -> Self {
        Self { row }
    }

    pub fn id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, T_ID_FIELD_ID)
    }

    pub fn entity_type(&self) -> ReaderResult<i32> {
        Ok(self.row.get(T_KIND_FIELD_ID)?)
    }

    pub fn row_version(&self) -> ReaderResult<i64> {
        Ok(self.row.get(T_ROWVERSION_FIELD_ID)?)
    }

    pub fn catalog(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, T_CATALOG_FIELD_ID)
    }

    pub fn name(&self) -> ReaderResult<String> {
        Ok(self.row.get(T_NAME_FIELD_ID)?)
    }

    pub fn max_retention(&self) -> ReaderResult<TimeSpan> {
        get_time_span(self.row, T_MAXRETENTION_FIELD_ID)
    }

    /// Reads the owner column of `kind`. `None` when the kind has no owner.
    pub fn owner(&self, kind: Kind) -> ReaderResult<Option<TimeseriesOwner>> {
        owner_column(kind)
            .map(|(role, ordinal)| {
                get_nullable_guid(self.row, ordinal).map(|id| TimeseriesOwner { role, id })
            })
            .transpose()
    }
}

impl<'a, 'stmt, S: ErrorSink> ComplexRow<'a, 'stmt, TimeseriesFamily, S> {
    pub fn columns(&self) -> TimeseriesColumns<'a, 'stmt> {
        TimeseriesColumns::new(self.row())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeseriesOwner {
    pub role: OwnerRole,
    pub id: Option<Guid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeseriesObject {
    pub object_state: ObjectState,
    pub kind: Kind,
    pub id: Guid,
    pub row_version: i64,
    pub catalog: Option<Guid>,
    pub name: String,
    pub max_retention: TimeSpan,
    pub owner: Option<TimeseriesOwner>,
}

impl DataObject for TimeseriesObject {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn object_state(&self) -> ObjectState {
        self.object_state
    }

    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        writer.write_i32(self.kind.as_i32())?;
        writer.write_u8(self.object_state.as_u8())?;
        writer.write_guid(self.id)?;
        writer.write_i64(self.row_version)?;
        writer.write_nullable_guid(self.catalog)?;
        writer.write_str(&self.name)?;
        writer.write_time_span(self.max_retention)?;
        if let Some(owner) = self.owner {
            writer.write_nullable_guid(owner.id)?;
        }
        Ok(())
    }
}

impl ComplexFamily for TimeseriesFamily {
    const FAMILY: &'static str = "Timeseries";
    const BASE_QUERY: &'static str = BASE_QUERY;
    const BASE_VIEW_NAME: &'static str = BASE_VIEW_NAME;
    const VIEW_ALIAS_NAME: &'static str = VIEW_ALIAS_NAME;

    type Object = TimeseriesObject;

    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object> {
        let columns = TimeseriesColumns::new(row);
        let entity_type = columns.entity_type()?;
        let kind = match Kind::from_i32(entity_type) {
            Some(kind) if is_concrete(kind) => kind,
            _ => return Err(unknown_kind(Self::FAMILY, entity_type)),
        };

        Ok(TimeseriesObject {
            object_state: ObjectState::Stored,
            kind,
            id: columns.id()?,
            row_version: columns.row_version()?,
            catalog: columns.catalog()?,
            name: columns.name()?,
            max_retention: columns.max_retention()?,
            owner: columns.owner(kind)?,
        })
    }

    fn record_len(kind: Kind) -> Option<usize> {
        if !is_concrete(kind) {
            return None;
        }
        match owner_column(kind) {
            Some(_) => Some(BASE_RECORD_LEN + 1),
            None => Some(BASE_RECORD_LEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{owner_column, OwnerRole, TimeseriesFamily, OWNER_COLUMNS, RST_RADOME_FIELD_ID};
    use crate::model::Kind;
    use crate::reader::ComplexFamily;

    #[test]
    fn owner_ordinals_are_dense_after_the_base_columns() {
        for (index, (_, _, ordinal)) in OWNER_COLUMNS.iter().enumerate() {
            assert_eq!(*ordinal, index + 6);
        }
        assert_eq!(RST_RADOME_FIELD_ID, 58);
    }

    #[test]
    fn owner_column_maps_kinds_to_roles() {
        assert_eq!(
            owner_column(Kind::GnssLatitudeTimeseries),
            Some((OwnerRole::GnssDevice, 20))
        );
        assert_eq!(
            owner_column(Kind::RadomeStatusTimeseries),
            Some((OwnerRole::Radome, 58))
        );
        assert_eq!(owner_column(Kind::DoubleTimeseries), None);
    }

    #[test]
    fn record_len_covers_every_concrete_kind() {
        assert_eq!(TimeseriesFamily::record_len(Kind::Timeseries), None);
        assert_eq!(TimeseriesFamily::record_len(Kind::CameraCommand), None);
        assert_eq!(TimeseriesFamily::record_len(Kind::BinaryTimeseries), Some(7));
        assert_eq!(TimeseriesFamily::record_len(Kind::ViewZoomLevelTimeseries), Some(8));
        assert_eq!(TimeseriesFamily::record_len(Kind::UInt64Timeseries), Some(7));
    }
}
