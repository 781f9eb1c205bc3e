//! Boolean timeseries family.
//!
//! # Responsibility
//! - Project `BooleanTimeseriesView` rows onto the boolean timeseries variants.
//!
//! # Invariants
//! - Every variant carries at most one owner reference; all of them are nullable.

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
  bots.[Id],
  bots.[EntityType],
  bots.[RowVersion],
  bots.[Catalog],
  bots.[Name],
  bots.[MaxRetention],
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
  rtt.[Radar]
FROM [BooleanTimeseriesView] bots
  LEFT JOIN [AisAidToNavigationOffPositionTimeseries] aatnopt ON(bots.[Id] = aatnopt.[Id] )
  LEFT JOIN [DeviceEnabledTimeseries] det ON(bots.[Id] = det.[Id] )
  LEFT JOIN [MediaProxySessionEnabledTimeseries] mpset ON(bots.[Id] = mpset.[Id] )
  LEFT JOIN [MediaServiceEnabledTimeseries] mset ON(bots.[Id] = mset.[Id] )
  LEFT JOIN [RadarAutomaticSensitivityTimeControlTimeseries] rastct ON(bots.[Id] = rastct.[Id] )
  LEFT JOIN [RadarBlankSector1Timeseries] rbs1t ON(bots.[Id] = rbs1t.[Id] )
  LEFT JOIN [RadarBlankSector2Timeseries] rbs2t ON(bots.[Id] = rbs2t.[Id] )
  LEFT JOIN [RadarEnableAutomaticFrequencyControlTimeseries] reafct ON(bots.[Id] = reafct.[Id] )
  LEFT JOIN [RadarEnableFastTimeConstantTimeseries] reftct ON(bots.[Id] = reftct.[Id] )
  LEFT JOIN [RadarEnableSensitivityTimeControlTimeseries] restct ON(bots.[Id] = restct.[Id] )
  LEFT JOIN [RadarPowerOnTimeseries] rpot ON(bots.[Id] = rpot.[Id] )
  LEFT JOIN [RadarSaveSettingsTimeseries] rsst ON(bots.[Id] = rsst.[Id] )
  LEFT JOIN [RadarTrackingTimeseries] rtt ON(bots.[Id] = rtt.[Id] )
";

pub const BASE_VIEW_NAME: &str = "BooleanTimeseriesView";
pub const VIEW_ALIAS_NAME: &str = "bots";

pub const BOTS_ID_FIELD_ID: usize = 0;
pub const BOTS_KIND_FIELD_ID: usize = ENTITY_TYPE_FIELD_ID;
pub const BOTS_ROWVERSION_FIELD_ID: usize = 2;
pub const BOTS_CATALOG_FIELD_ID: usize = 3;
pub const BOTS_NAME_FIELD_ID: usize = 4;
pub const BOTS_MAXRETENTION_FIELD_ID: usize = 5;
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

/// Fields written before the variant fields: kind, state and the base columns.
const BASE_RECORD_LEN: usize = 7;

/// Marker type binding the boolean timeseries query to the generic reader.
#[derive(Debug, Clone, Copy)]
pub struct BooleanTimeseriesFamily;

pub type ComplexBooleanTimeseriesDataReader<'stmt, S = LogErrorSink> =
    ComplexDataReader<'stmt, BooleanTimeseriesFamily, S>;

/// Typed accessors over one row of `BASE_QUERY`.
#[derive(Clone, Copy)]
pub struct BooleanTimeseriesColumns<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> BooleanTimeseriesColumns<'a, 'stmt> {
    pub fn new(row: &'a Row<'stmt>) -> Self {
        Self { row }
    }

    pub fn id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, BOTS_ID_FIELD_ID)
    }

    pub fn entity_type(&self) -> ReaderResult<i32> {
        Ok(self.row.get(BOTS_KIND_FIELD_ID)?)
    }

    pub fn row_version(&self) -> ReaderResult<i64> {
        Ok(self.row.get(BOTS_ROWVERSION_FIELD_ID)?)
    }

    pub fn catalog(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, BOTS_CATALOG_FIELD_ID)
    }

    pub fn name(&self) -> ReaderResult<String> {
        Ok(self.row.get(BOTS_NAME_FIELD_ID)?)
    }

    pub fn max_retention(&self) -> ReaderResult<TimeSpan> {
        get_time_span(self.row, BOTS_MAXRETENTION_FIELD_ID)
    }

    pub fn ais_aid_to_navigation_off_position_aid_to_navigation(
        &self,
    ) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, AATNOPT_AIDTONAVIGATION_FIELD_ID)
    }

    pub fn device_enabled_device(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, DET_DEVICE_FIELD_ID)
    }

    pub fn media_proxy_session_enabled_proxy_session(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, MPSET_PROXYSESSION_FIELD_ID)
    }

    pub fn media_service_enabled_service(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, MSET_SERVICE_FIELD_ID)
    }

    pub fn radar_automatic_sensitivity_time_control_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RASTCT_RADAR_FIELD_ID)
    }

    pub fn radar_blank_sector1_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RBS1T_RADAR_FIELD_ID)
    }

    pub fn radar_blank_sector2_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RBS2T_RADAR_FIELD_ID)
    }

    pub fn radar_enable_automatic_frequency_control_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, REAFCT_RADAR_FIELD_ID)
    }

    pub fn radar_enable_fast_time_constant_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, REFTCT_RADAR_FIELD_ID)
    }

    pub fn radar_enable_sensitivity_time_control_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RESTCT_RADAR_FIELD_ID)
    }

    pub fn radar_power_on_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RPOT_RADAR_FIELD_ID)
    }

    pub fn radar_save_settings_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RSST_RADAR_FIELD_ID)
    }

    pub fn radar_tracking_radar(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RTT_RADAR_FIELD_ID)
    }
}

impl<'a, 'stmt, S: ErrorSink> ComplexRow<'a, 'stmt, BooleanTimeseriesFamily, S> {
    pub fn columns(&self) -> BooleanTimeseriesColumns<'a, 'stmt> {
        BooleanTimeseriesColumns::new(self.row())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanTimeseriesObject {
    pub object_state: ObjectState,
    pub id: Guid,
    pub row_version: i64,
    pub catalog: Option<Guid>,
    pub name: String,
    pub max_retention: TimeSpan,
    pub variant: BooleanTimeseriesVariant,
}

/// Subtype-specific part of a boolean timeseries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BooleanTimeseriesVariant {
    BooleanTimeseries,
    AisAidToNavigationOffPosition { aid_to_navigation: Option<Guid> },
    DeviceEnabled { device: Option<Guid> },
    MediaProxySessionEnabled { proxy_session: Option<Guid> },
    MediaServiceEnabled { service: Option<Guid> },
    RadarAutomaticSensitivityTimeControl { radar: Option<Guid> },
    RadarBlankSector1 { radar: Option<Guid> },
    RadarBlankSector2 { radar: Option<Guid> },
    RadarEnableAutomaticFrequencyControl { radar: Option<Guid> },
    RadarEnableFastTimeConstant { radar: Option<Guid> },
    RadarEnableSensitivityTimeControl { radar: Option<Guid> },
    RadarPowerOn { radar: Option<Guid> },
    RadarSaveSettings { radar: Option<Guid> },
    RadarTracking { radar: Option<Guid> },
}

impl BooleanTimeseriesVariant {
    pub fn kind(&self) -> Kind {
        match self {
            Self::BooleanTimeseries => Kind::BooleanTimeseries,
            Self::AisAidToNavigationOffPosition { .. } => {
                Kind::AisAidToNavigationOffPositionTimeseries
            }
            Self::DeviceEnabled { .. } => Kind::DeviceEnabledTimeseries,
            Self::MediaProxySessionEnabled { .. } => Kind::MediaProxySessionEnabledTimeseries,
            Self::MediaServiceEnabled { .. } => Kind::MediaServiceEnabledTimeseries,
            Self::RadarAutomaticSensitivityTimeControl { .. } => {
                Kind::RadarAutomaticSensitivityTimeControlTimeseries
            }
            Self::RadarBlankSector1 { .. } => Kind::RadarBlankSector1Timeseries,
            Self::RadarBlankSector2 { .. } => Kind::RadarBlankSector2Timeseries,
            Self::RadarEnableAutomaticFrequencyControl { .. } => {
                Kind::RadarEnableAutomaticFrequencyControlTimeseries
            }
            Self::RadarEnableFastTimeConstant { .. } => Kind::RadarEnableFastTimeConstantTimeseries,
            Self::RadarEnableSensitivityTimeControl { .. } => {
                Kind::RadarEnableSensitivityTimeControlTimeseries
            }
            Self::RadarPowerOn { .. } => Kind::RadarPowerOnTimeseries,
            Self::RadarSaveSettings { .. } => Kind::RadarSaveSettingsTimeseries,
            Self::RadarTracking { .. } => Kind::RadarTrackingTimeseries,
        }
    }

    /// The single owner reference, if the variant has one.
    pub fn owner(&self) -> Option<Option<Guid>> {
        match self {
            Self::BooleanTimeseries => None,
            Self::AisAidToNavigationOffPosition { aid_to_navigation } => Some(*aid_to_navigation),
            Self::DeviceEnabled { device } => Some(*device),
            Self::MediaProxySessionEnabled { proxy_session } => Some(*proxy_session),
            Self::MediaServiceEnabled { service } => Some(*service),
            Self::RadarAutomaticSensitivityTimeControl { radar }
            | Self::RadarBlankSector1 { radar }
            | Self::RadarBlankSector2 { radar }
            | Self::RadarEnableAutomaticFrequencyControl { radar }
            | Self::RadarEnableFastTimeConstant { radar }
            | Self::RadarEnableSensitivityTimeControl { radar }
            | Self::RadarPowerOn { radar }
            | Self::RadarSaveSettings { radar }
            | Self::RadarTracking { radar } => Some(*radar),
        }
    }
}

impl DataObject for BooleanTimeseriesObject {
    fn kind(&self) -> Kind {
        self.variant.kind()
    }

    fn object_state(&self) -> ObjectState {
        self.object_state
    }

    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        writer.write_i32(self.kind().as_i32())?;
        writer.write_u8(self.object_state.as_u8())?;
        writer.write_guid(self.id)?;
        writer.write_i64(self.row_version)?;
        writer.write_nullable_guid(self.catalog)?;
        writer.write_str(&self.name)?;
        writer.write_time_span(self.max_retention)?;
        if let Some(owner) = self.variant.owner() {
            writer.write_nullable_guid(owner)?;
        }
        Ok(())
    }
}

impl ComplexFamily for BooleanTimeseriesFamily {
    const FAMILY: &'static str = "BooleanTimeseries";
    const BASE_QUERY: &'static str = BASE_QUERY;
    const BASE_VIEW_NAME: &'static str = BASE_VIEW_NAME;
    const VIEW_ALIAS_NAME: &'static str = VIEW_ALIAS_NAME;

    type Object = BooleanTimeseriesObject;

    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object> {
        let columns = BooleanTimeseriesColumns::new(row);
        let entity_type = columns.entity_type()?;
        let variant = match Kind::from_i32(entity_type) {
            Some(Kind::BooleanTimeseries) => BooleanTimeseriesVariant::BooleanTimeseries,
            Some(Kind::AisAidToNavigationOffPositionTimeseries) => {
                BooleanTimeseriesVariant::AisAidToNavigationOffPosition {
                    aid_to_navigation: columns
                        .ais_aid_to_navigation_off_position_aid_to_navigation()?,
                }
            }
            Some(Kind::DeviceEnabledTimeseries) => BooleanTimeseriesVariant::DeviceEnabled {
                device: columns.device_enabled_device()?,
            },
            Some(Kind::MediaProxySessionEnabledTimeseries) => {
                BooleanTimeseriesVariant::MediaProxySessionEnabled {
                    proxy_session: columns.media_proxy_session_enabled_proxy_session()?,
                }
            }
            Some(Kind::MediaServiceEnabledTimeseries) => {
                BooleanTimeseriesVariant::MediaServiceEnabled {
                    service: columns.media_service_enabled_service()?,
                }
            }
            Some(Kind::RadarAutomaticSensitivityTimeControlTimeseries) => {
                BooleanTimeseriesVariant::RadarAutomaticSensitivityTimeControl {
                    radar: columns.radar_automatic_sensitivity_time_control_radar()?,
                }
            }
            Some(Kind::RadarBlankSector1Timeseries) => BooleanTimeseriesVariant::RadarBlankSector1 {
                radar: columns.radar_blank_sector1_radar()?,
            },
            Some(Kind::RadarBlankSector2Timeseries) => BooleanTimeseriesVariant::RadarBlankSector2 {
                radar: columns.radar_blank_sector2_radar()?,
            },
            Some(Kind::RadarEnableAutomaticFrequencyControlTimeseries) => {
                BooleanTimeseriesVariant::RadarEnableAutomaticFrequencyControl {
                    radar: columns.radar_enable_automatic_frequency_control_radar()?,
                }
            }
            Some(Kind::RadarEnableFastTimeConstantTimeseries) => {
                BooleanTimeseriesVariant::RadarEnableFastTimeConstant {
                    radar: columns.radar_enable_fast_time_constant_radar()?,
                }
            }
            Some(Kind::RadarEnableSensitivityTimeControlTimeseries) => {
                BooleanTimeseriesVariant::RadarEnableSensitivityTimeControl {
                    radar: columns.radar_enable_sensitivity_time_control_radar()?,
                }
            }
            Some(Kind::RadarPowerOnTimeseries) => BooleanTimeseriesVariant::RadarPowerOn {
                radar: columns.radar_power_on_radar()?,
            },
            Some(Kind::RadarSaveSettingsTimeseries) => BooleanTimeseriesVariant::RadarSaveSettings {
                radar: columns.radar_save_settings_radar()?,
            },
            Some(Kind::RadarTrackingTimeseries) => BooleanTimeseriesVariant::RadarTracking {
                radar: columns.radar_tracking_radar()?,
            },
            _ => return Err(unknown_kind(Self::FAMILY, entity_type)),
        };

        Ok(BooleanTimeseriesObject {
            object_state: ObjectState::Stored,
            id: columns.id()?,
            row_version: columns.row_version()?,
            catalog: columns.catalog()?,
            name: columns.name()?,
            max_retention: columns.max_retention()?,
            variant,
        })
    }

    fn record_len(kind: Kind) -> Option<usize> {
        match kind {
            Kind::BooleanTimeseries => Some(BASE_RECORD_LEN),
            Kind::AisAidToNavigationOffPositionTimeseries
            | Kind::DeviceEnabledTimeseries
            | Kind::MediaProxySessionEnabledTimeseries
            | Kind::MediaServiceEnabledTimeseries
            | Kind::RadarAutomaticSensitivityTimeControlTimeseries
            | Kind::RadarBlankSector1Timeseries
            | Kind::RadarBlankSector2Timeseries
            | Kind::RadarEnableAutomaticFrequencyControlTimeseries
            | Kind::RadarEnableFastTimeConstantTimeseries
            | Kind::RadarEnableSensitivityTimeControlTimeseries
            | Kind::RadarPowerOnTimeseries
            | Kind::RadarSaveSettingsTimeseries
            | Kind::RadarTrackingTimeseries => Some(BASE_RECORD_LEN + 1),
            _ => None,
        }
    }
}
