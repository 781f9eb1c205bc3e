//! Camera command family.
//!
//! # Responsibility
//! - Project `CameraCommandView` rows onto the camera command variants.
//! - Reinterpret the integer mode/reason columns as model enums.
//!
//! # Invariants
//! - Enum columns holding an unmapped integer fail the row with `InvalidData`.

use crate::binary::{BinaryWriter, CodecResult};
use crate::model::{
    CameraFocalLengthMode, CameraFollowReason, CameraPanTiltMode, DateTime,
    DeviceCommandSourceType, Guid, Kind, ObjectState, TimeSpan,
};
use crate::reader::columns::{
    get_date_time, get_enum, get_guid, get_nullable_guid, get_nullable_time_span,
};
use crate::reader::{
    unknown_kind, ComplexDataReader, ComplexFamily, ComplexRow, DataObject, ErrorSink,
    LogErrorSink, ReaderResult, ENTITY_TYPE_FIELD_ID,
};
use rusqlite::Row;
use serde::Serialize;
use std::io::Write;

pub const BASE_QUERY: &str = "SELECT
  cc.[Id],
  cc.[EntityType],
  cc.[RowVersion],
  cc.[Camera],
  cc.[Timestamp],
  cc.[DeviceCommandSourceType],
  cc.[DeviceCommandSourceId],
  cc.[Reply],
  ccam.[PositionPanTiltMode],
  ccam.[PanAngle],
  ccam.[TiltAngle],
  ccam.[PositionFocalLengthMode],
  ccam.[FocalLength],
  ccam.[SpeedPanTiltMode],
  ccam.[PanSpeed],
  ccam.[TiltSpeed],
  ccam.[SpeedFocalLengthMode],
  ccam.[ZoomSpeed],
  ccaptz.[X],
  ccaptz.[Y],
  ccaptz.[Z],
  cccm.[Normalized],
  cccm.[PanVelocity],
  cccm.[TiltVelocity],
  cccm.[ZoomVelocity],
  cccm.[Duration],
  ccgm.[Latitude],
  ccgm.[Longitude],
  ccgm.[Altitude],
  ccgm.[ViewportWidth],
  ccgm.[ViewportHeight],
  ccrm.[Normalized],
  ccrm.[PanAngle],
  ccrm.[TiltAngle],
  ccrm.[FocalLength],
  ccrm.[PanSpeed],
  ccrm.[TiltSpeed],
  ccrm.[ZoomSpeed],
  ccsaf.[Enabled],
  ccsbaw.[Enabled],
  ccsf.[TrackId],
  ccsf.[Reason],
  ccsirl.[Enabled],
  cwa.[Enabled],
  cwi.[Enabled],
  ccs.[PanTilt],
  ccs.[Zoom]
FROM [CameraCommandView] cc
  LEFT JOIN [CameraCommandAbsoluteMove] ccam ON(cc.[Id] = ccam.[Id] )
  LEFT JOIN [CameraCommandAdjustPanTiltZoom] ccaptz ON(cc.[Id] = ccaptz.[Id] )
  LEFT JOIN [CameraCommandContinuousMove] cccm ON(cc.[Id] = cccm.[Id] )
  LEFT JOIN [CameraCommandGeoMove] ccgm ON(cc.[Id] = ccgm.[Id] )
  LEFT JOIN [CameraCommandRelativeMove] ccrm ON(cc.[Id] = ccrm.[Id] )
  LEFT JOIN [CameraCommandReleasePTZOwnership] crlp ON(cc.[Id] = crlp.[Id] )
  LEFT JOIN [CameraCommandRequestPTZOwnership] crqp ON(cc.[Id] = crqp.[Id] )
  LEFT JOIN [CameraCommandSetAutoFocus] ccsaf ON(cc.[Id] = ccsaf.[Id] )
  LEFT JOIN [CameraCommandSetBlackAndWhite] ccsbaw ON(cc.[Id] = ccsbaw.[Id] )
  LEFT JOIN [CameraCommandSetFollowed] ccsf ON(cc.[Id] = ccsf.[Id] )
  LEFT JOIN [CameraCommandSetInfraRedLamp] ccsirl ON(cc.[Id] = ccsirl.[Id] )
  LEFT JOIN [CameraCommandSetWasher] cwa ON(cc.[Id] = cwa.[Id] )
  LEFT JOIN [CameraCommandSetWiper] cwi ON(cc.[Id] = cwi.[Id] )
  LEFT JOIN [CameraCommandStop] ccs ON(cc.[Id] = ccs.[Id] )
";

pub const BASE_VIEW_NAME: &str = "CameraCommandView";
pub const VIEW_ALIAS_NAME: &str = "cc";

pub const CC_ID_FIELD_ID: usize = 0;
pub const CC_KIND_FIELD_ID: usize = ENTITY_TYPE_FIELD_ID;
pub const CC_ROWVERSION_FIELD_ID: usize = 2;
pub const CC_CAMERA_FIELD_ID: usize = 3;
pub const CC_TIMESTAMP_FIELD_ID: usize = 4;
pub const CC_DEVICECOMMANDSOURCETYPE_FIELD_ID: usize = 5;
pub const CC_DEVICECOMMANDSOURCEID_FIELD_ID: usize = 6;
pub const CC_REPLY_FIELD_ID: usize = 7;
pub const CCAM_POSITIONPANTILTMODE_FIELD_ID: usize = 8;
pub const CCAM_PANANGLE_FIELD_ID: usize = 9;
pub const CCAM_TILTANGLE_FIELD_ID: usize = 10;
pub const CCAM_POSITIONFOCALLENGTHMODE_FIELD_ID: usize = 11;
pub const CCAM_FOCALLENGTH_FIELD_ID: usize = 12;
pub const CCAM_SPEEDPANTILTMODE_FIELD_ID: usize = 13;
pub const CCAM_PANSPEED_FIELD_ID: usize = 14;
pub const CCAM_TILTSPEED_FIELD_ID: usize = 15;
pub const CCAM_SPEEDFOCALLENGTHMODE_FIELD_ID: usize = 16;
pub const CCAM_ZOOMSPEED_FIELD_ID: usize = 17;
pub const CCAPTZ_X_FIELD_ID: usize = 18;
pub const CCAPTZ_Y_FIELD_ID: usize = 19;
pub const CCAPTZ_Z_FIELD_ID: usize = 20;
pub const CCCM_NORMALIZED_FIELD_ID: usize = 21;
pub const CCCM_PANVELOCITY_FIELD_ID: usize = 22;
pub const CCCM_TILTVELOCITY_FIELD_ID: usize = 23;
pub const CCCM_ZOOMVELOCITY_FIELD_ID: usize = 24;
pub const CCCM_DURATION_FIELD_ID: usize = 25;
pub const CCGM_LATITUDE_FIELD_ID: usize = 26;
pub const CCGM_LONGITUDE_FIELD_ID: usize = 27;
pub const CCGM_ALTITUDE_FIELD_ID: usize = 28;
pub const CCGM_VIEWPORTWIDTH_FIELD_ID: usize = 29;
pub const CCGM_VIEWPORTHEIGHT_FIELD_ID: usize = 30;
pub const CCRM_NORMALIZED_FIELD_ID: usize = 31;
pub const CCRM_PANANGLE_FIELD_ID: usize = 32;
pub const CCRM_TILTANGLE_FIELD_ID: usize = 33;
pub const CCRM_FOCALLENGTH_FIELD_ID: usize = 34;
pub const CCRM_PANSPEED_FIELD_ID: usize = 35;
pub const CCRM_TILTSPEED_FIELD_ID: usize = 36;
pub const CCRM_ZOOMSPEED_FIELD_ID: usize = 37;
pub const CCSAF_ENABLED_FIELD_ID: usize = 38;
pub const CCSBAW_ENABLED_FIELD_ID: usize = 39;
pub const CCSF_TRACKID_FIELD_ID: usize = 40;
pub const CCSF_REASON_FIELD_ID: usize = 41;
pub const CCSIRL_ENABLED_FIELD_ID: usize = 42;
pub const CWA_ENABLED_FIELD_ID: usize = 43;
pub const CWI_ENABLED_FIELD_ID: usize = 44;
pub const CCS_PANTILT_FIELD_ID: usize = 45;
pub const CCS_ZOOM_FIELD_ID: usize = 46;

const BASE_RECORD_LEN: usize = 9;

#[derive(Debug, Clone, Copy)]
pub struct CameraCommandFamily;

pub type ComplexCameraCommandDataReader<'stmt, S = LogErrorSink> =
    ComplexDataReader<'stmt, CameraCommandFamily, S>;

#[derive(Clone, Copy)]
pub struct CameraCommandColumns<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> CameraCommandColumns<'a, 'stmt> {
    pub fn new(row: &'a Row<'stmt>) -> Self {
        Self { row }
    }

    fn double(&self, ordinal: usize) -> ReaderResult<f64> {
        Ok(self.row.get(ordinal)?)
    }

    fn nullable_double(&self, ordinal: usize) -> ReaderResult<Option<f64>> {
        Ok(self.row.get(ordinal)?)
    }

    fn boolean(&self, ordinal: usize) -> ReaderResult<bool> {
        Ok(self.row.get(ordinal)?)
    }

    pub fn id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, CC_ID_FIELD_ID)
    }

    pub fn entity_type(&self) -> ReaderResult<i32> {
        Ok(self.row.get(CC_KIND_FIELD_ID)?)
    }

    pub fn row_version(&self) -> ReaderResult<i64> {
        Ok(self.row.get(CC_ROWVERSION_FIELD_ID)?)
    }

    pub fn camera(&self) -> ReaderResult<Guid> {
        get_guid(self.row, CC_CAMERA_FIELD_ID)
    }

    pub fn timestamp(&self) -> ReaderResult<DateTime> {
        get_date_time(self.row, CC_TIMESTAMP_FIELD_ID)
    }

    pub fn device_command_source_type(&self) -> ReaderResult<DeviceCommandSourceType> {
        get_enum(self.row, CC_DEVICECOMMANDSOURCETYPE_FIELD_ID)
    }

    pub fn device_command_source_id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, CC_DEVICECOMMANDSOURCEID_FIELD_ID)
    }

    pub fn reply(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, CC_REPLY_FIELD_ID)
    }

    pub fn absolute_move_position_pan_tilt_mode(&self) -> ReaderResult<CameraPanTiltMode> {
        get_enum(self.row, CCAM_POSITIONPANTILTMODE_FIELD_ID)
    }

    pub fn absolute_move_pan_angle(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAM_PANANGLE_FIELD_ID)
    }

    pub fn absolute_move_tilt_angle(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAM_TILTANGLE_FIELD_ID)
    }

    pub fn absolute_move_position_focal_length_mode(
        &self,
    ) -> ReaderResult<CameraFocalLengthMode> {
        get_enum(self.row, CCAM_POSITIONFOCALLENGTHMODE_FIELD_ID)
    }

    pub fn absolute_move_focal_length(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAM_FOCALLENGTH_FIELD_ID)
    }

    pub fn absolute_move_speed_pan_tilt_mode(&self) -> ReaderResult<CameraPanTiltMode> {
        get_enum(self.row, CCAM_SPEEDPANTILTMODE_FIELD_ID)
    }

    pub fn absolute_move_pan_speed(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAM_PANSPEED_FIELD_ID)
    }

    pub fn absolute_move_tilt_speed(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAM_TILTSPEED_FIELD_ID)
    }

    pub fn absolute_move_speed_focal_length_mode(&self) -> ReaderResult<CameraFocalLengthMode> {
        get_enum(self.row, CCAM_SPEEDFOCALLENGTHMODE_FIELD_ID)
    }

    pub fn absolute_move_zoom_speed(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAM_ZOOMSPEED_FIELD_ID)
    }

    pub fn adjust_pan_tilt_zoom_x(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAPTZ_X_FIELD_ID)
    }

    pub fn adjust_pan_tilt_zoom_y(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAPTZ_Y_FIELD_ID)
    }

    pub fn adjust_pan_tilt_zoom_z(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCAPTZ_Z_FIELD_ID)
    }

    pub fn continuous_move_normalized(&self) -> ReaderResult<bool> {
        self.boolean(CCCM_NORMALIZED_FIELD_ID)
    }

    pub fn continuous_move_pan_velocity(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCCM_PANVELOCITY_FIELD_ID)
    }

    pub fn continuous_move_tilt_velocity(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCCM_TILTVELOCITY_FIELD_ID)
    }

    pub fn continuous_move_zoom_velocity(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCCM_ZOOMVELOCITY_FIELD_ID)
    }

    pub fn continuous_move_duration(&self) -> ReaderResult<Option<TimeSpan>> {
        get_nullable_time_span(self.row, CCCM_DURATION_FIELD_ID)
    }

    pub fn geo_move_latitude(&self) -> ReaderResult<f64> {
        self.double(CCGM_LATITUDE_FIELD_ID)
    }

    pub fn geo_move_longitude(&self) -> ReaderResult<f64> {
        self.double(CCGM_LONGITUDE_FIELD_ID)
    }

    pub fn geo_move_altitude(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCGM_ALTITUDE_FIELD_ID)
    }

    pub fn geo_move_viewport_width(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCGM_VIEWPORTWIDTH_FIELD_ID)
    }

    pub fn geo_move_viewport_height(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCGM_VIEWPORTHEIGHT_FIELD_ID)
    }

    pub fn relative_move_normalized(&self) -> ReaderResult<bool> {
        self.boolean(CCRM_NORMALIZED_FIELD_ID)
    }

    pub fn relative_move_pan_angle(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCRM_PANANGLE_FIELD_ID)
    }

    pub fn relative_move_tilt_angle(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCRM_TILTANGLE_FIELD_ID)
    }

    pub fn relative_move_focal_length(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCRM_FOCALLENGTH_FIELD_ID)
    }

    pub fn relative_move_pan_speed(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCRM_PANSPEED_FIELD_ID)
    }

    pub fn relative_move_tilt_speed(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCRM_TILTSPEED_FIELD_ID)
    }

    pub fn relative_move_zoom_speed(&self) -> ReaderResult<Option<f64>> {
        self.nullable_double(CCRM_ZOOMSPEED_FIELD_ID)
    }

    pub fn set_auto_focus_enabled(&self) -> ReaderResult<bool> {
        self.boolean(CCSAF_ENABLED_FIELD_ID)
    }

    pub fn set_black_and_white_enabled(&self) -> ReaderResult<bool> {
        self.boolean(CCSBAW_ENABLED_FIELD_ID)
    }

    pub fn set_followed_track_id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, CCSF_TRACKID_FIELD_ID)
    }

    pub fn set_followed_reason(&self) -> ReaderResult<CameraFollowReason> {
        get_enum(self.row, CCSF_REASON_FIELD_ID)
    }

    pub fn set_infra_red_lamp_enabled(&self) -> ReaderResult<bool> {
        self.boolean(CCSIRL_ENABLED_FIELD_ID)
    }

    pub fn set_washer_enabled(&self) -> ReaderResult<bool> {
        self.boolean(CWA_ENABLED_FIELD_ID)
    }

    pub fn set_wiper_enabled(&self) -> ReaderResult<bool> {
        self.boolean(CWI_ENABLED_FIELD_ID)
    }

    pub fn stop_pan_tilt(&self) -> ReaderResult<bool> {
        self.boolean(CCS_PANTILT_FIELD_ID)
    }

    pub fn stop_zoom(&self) -> ReaderResult<bool> {
        self.boolean(CCS_ZOOM_FIELD_ID)
    }
}

impl<'a, 'stmt, S: ErrorSink> ComplexRow<'a, 'stmt, CameraCommandFamily, S> {
    pub fn columns(&self) -> CameraCommandColumns<'a, 'stmt> {
        CameraCommandColumns::new(self.row())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraCommandObject {
    pub object_state: ObjectState,
    pub id: Guid,
    pub row_version: i64,
    pub camera: Guid,
    pub timestamp: DateTime,
    pub device_command_source_type: DeviceCommandSourceType,
    pub device_command_source_id: Guid,
    pub reply: Option<Guid>,
    pub variant: CameraCommandVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CameraCommandVariant {
    CameraCommand,
    AbsoluteMove {
        position_pan_tilt_mode: CameraPanTiltMode,
        pan_angle: Option<f64>,
        tilt_angle: Option<f64>,
        position_focal_length_mode: CameraFocalLengthMode,
        focal_length: Option<f64>,
        speed_pan_tilt_mode: CameraPanTiltMode,
        pan_speed: Option<f64>,
        tilt_speed: Option<f64>,
        speed_focal_length_mode: CameraFocalLengthMode,
        zoom_speed: Option<f64>,
    },
    AdjustPanTiltZoom {
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    },
    ContinuousMove {
        normalized: bool,
        pan_velocity: Option<f64>,
        tilt_velocity: Option<f64>,
        zoom_velocity: Option<f64>,
        duration: Option<TimeSpan>,
    },
    GeoMove {
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
        viewport_width: Option<f64>,
        viewport_height: Option<f64>,
    },
    RelativeMove {
        normalized: bool,
        pan_angle: Option<f64>,
        tilt_angle: Option<f64>,
        focal_length: Option<f64>,
        pan_speed: Option<f64>,
        tilt_speed: Option<f64>,
        zoom_speed: Option<f64>,
    },
    ReleasePtzOwnership,
    RequestPtzOwnership,
    SetAutoFocus {
        enabled: bool,
    },
    SetBlackAndWhite {
        enabled: bool,
    },
    SetFollowed {
        track_id: Guid,
        reason: CameraFollowReason,
    },
    SetInfraRedLamp {
        enabled: bool,
    },
    SetWasher {
        enabled: bool,
    },
    SetWiper {
        enabled: bool,
    },
    Stop {
        pan_tilt: bool,
        zoom: bool,
    },
}

impl CameraCommandVariant {
    pub fn kind(&self) -> Kind {
        match self {
            Self::CameraCommand => Kind::CameraCommand,
            Self::AbsoluteMove { .. } => Kind::CameraCommandAbsoluteMove,
            Self::AdjustPanTiltZoom { .. } => Kind::CameraCommandAdjustPanTiltZoom,
            Self::ContinuousMove { .. } => Kind::CameraCommandContinuousMove,
            Self::GeoMove { .. } => Kind::CameraCommandGeoMove,
            Self::RelativeMove { .. } => Kind::CameraCommandRelativeMove,
            Self::ReleasePtzOwnership => Kind::CameraCommandReleasePtzOwnership,
            Self::RequestPtzOwnership => Kind::CameraCommandRequestPtzOwnership,
            Self::SetAutoFocus { .. } => Kind::CameraCommandSetAutoFocus,
            Self::SetBlackAndWhite { .. } => Kind::CameraCommandSetBlackAndWhite,
            Self::SetFollowed { .. } => Kind::CameraCommandSetFollowed,
            Self::SetInfraRedLamp { .. } => Kind::CameraCommandSetInfraRedLamp,
            Self::SetWasher { .. } => Kind::CameraCommandSetWasher,
            Self::SetWiper { .. } => Kind::CameraCommandSetWiper,
            Self::Stop { .. } => Kind::CameraCommandStop,
        }
    }

    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        match self {
            Self::CameraCommand | Self::ReleasePtzOwnership | Self::RequestPtzOwnership => {}
            Self::AbsoluteMove {
                position_pan_tilt_mode,
                pan_angle,
                tilt_angle,
                position_focal_length_mode,
                focal_length,
                speed_pan_tilt_mode,
                pan_speed,
                tilt_speed,
                speed_focal_length_mode,
                zoom_speed,
            } => {
                writer.write_i32((*position_pan_tilt_mode).into())?;
                writer.write_nullable_f64(*pan_angle)?;
                writer.write_nullable_f64(*tilt_angle)?;
                writer.write_i32((*position_focal_length_mode).into())?;
                writer.write_nullable_f64(*focal_length)?;
                writer.write_i32((*speed_pan_tilt_mode).into())?;
                writer.write_nullable_f64(*pan_speed)?;
                writer.write_nullable_f64(*tilt_speed)?;
                writer.write_i32((*speed_focal_length_mode).into())?;
                writer.write_nullable_f64(*zoom_speed)?;
            }
            Self::AdjustPanTiltZoom { x, y, z } => {
                writer.write_nullable_f64(*x)?;
                writer.write_nullable_f64(*y)?;
                writer.write_nullable_f64(*z)?;
            }
            Self::ContinuousMove {
                normalized,
                pan_velocity,
                tilt_velocity,
                zoom_velocity,
                duration,
            } => {
                writer.write_bool(*normalized)?;
                writer.write_nullable_f64(*pan_velocity)?;
                writer.write_nullable_f64(*tilt_velocity)?;
                writer.write_nullable_f64(*zoom_velocity)?;
                writer.write_nullable_time_span(*duration)?;
            }
            Self::GeoMove {
                latitude,
                longitude,
                altitude,
                viewport_width,
                viewport_height,
            } => {
                writer.write_f64(*latitude)?;
                writer.write_f64(*longitude)?;
                writer.write_nullable_f64(*altitude)?;
                writer.write_nullable_f64(*viewport_width)?;
                writer.write_nullable_f64(*viewport_height)?;
            }
            Self::RelativeMove {
                normalized,
                pan_angle,
                tilt_angle,
                focal_length,
                pan_speed,
                tilt_speed,
                zoom_speed,
            } => {
                writer.write_bool(*normalized)?;
                writer.write_nullable_f64(*pan_angle)?;
                writer.write_nullable_f64(*tilt_angle)?;
                writer.write_nullable_f64(*focal_length)?;
                writer.write_nullable_f64(*pan_speed)?;
                writer.write_nullable_f64(*tilt_speed)?;
                writer.write_nullable_f64(*zoom_speed)?;
            }
            Self::SetAutoFocus { enabled }
            | Self::SetBlackAndWhite { enabled }
            | Self::SetInfraRedLamp { enabled }
            | Self::SetWasher { enabled }
            | Self::SetWiper { enabled } => writer.write_bool(*enabled)?,
            Self::SetFollowed { track_id, reason } => {
                writer.write_guid(*track_id)?;
                writer.write_i32((*reason).into())?;
            }
            Self::Stop { pan_tilt, zoom } => {
                writer.write_bool(*pan_tilt)?;
                writer.write_bool(*zoom)?;
            }
        }
        Ok(())
    }
}

impl DataObject for CameraCommandObject {
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
        writer.write_guid(self.camera)?;
        writer.write_date_time(self.timestamp)?;
        writer.write_i32(self.device_command_source_type.into())?;
        writer.write_guid(self.device_command_source_id)?;
        writer.write_nullable_guid(self.reply)?;
        self.variant.write_to(writer)
    }
}

impl ComplexFamily for CameraCommandFamily {
    const FAMILY: &'static str = "CameraCommand";
    const BASE_QUERY: &'static str = BASE_QUERY;
    const BASE_VIEW_NAME: &'static str = BASE_VIEW_NAME;
    const VIEW_ALIAS_NAME: &'static str = VIEW_ALIAS_NAME;

    type Object = CameraCommandObject;

    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object> {
        let c = CameraCommandColumns::new(row);
        let entity_type = c.entity_type()?;
        let variant = match Kind::from_i32(entity_type) {
            Some(Kind::CameraCommand) => CameraCommandVariant::CameraCommand,
            Some(Kind::CameraCommandAbsoluteMove) => CameraCommandVariant::AbsoluteMove {
                position_pan_tilt_mode: c.absolute_move_position_pan_tilt_mode()?,
                pan_angle: c.absolute_move_pan_angle()?,
                tilt_angle: c.absolute_move_tilt_angle()?,
                position_focal_length_mode: c.absolute_move_position_focal_length_mode()?,
                focal_length: c.absolute_move_focal_length()?,
                speed_pan_tilt_mode: c.absolute_move_speed_pan_tilt_mode()?,
                pan_speed: c.absolute_move_pan_speed()?,
                tilt_speed: c.absolute_move_tilt_speed()?,
                speed_focal_length_mode: c.absolute_move_speed_focal_length_mode()?,
                zoom_speed: c.absolute_move_zoom_speed()?,
            },
            Some(Kind::CameraCommandAdjustPanTiltZoom) => CameraCommandVariant::AdjustPanTiltZoom {
                x: c.adjust_pan_tilt_zoom_x()?,
                y: c.adjust_pan_tilt_zoom_y()?,
                z: c.adjust_pan_tilt_zoom_z()?,
            },
            Some(Kind::CameraCommandContinuousMove) => CameraCommandVariant::ContinuousMove {
                normalized: c.continuous_move_normalized()?,
                pan_velocity: c.continuous_move_pan_velocity()?,
                tilt_velocity: c.continuous_move_tilt_velocity()?,
                zoom_velocity: c.continuous_move_zoom_velocity()?,
                duration: c.continuous_move_duration()?,
            },
            Some(Kind::CameraCommandGeoMove) => CameraCommandVariant::GeoMove {
                latitude: c.geo_move_latitude()?,
                longitude: c.geo_move_longitude()?,
                altitude: c.geo_move_altitude()?,
                viewport_width: c.geo_move_viewport_width()?,
                viewport_height: c.geo_move_viewport_height()?,
            },
            Some(Kind::CameraCommandRelativeMove) => CameraCommandVariant::RelativeMove {
                normalized: c.relative_move_normalized()?,
                pan_angle: c.relative_move_pan_angle()?,
                tilt_angle: c.relative_move_tilt_angle()?,
                focal_length: c.relative_move_focal_length()?,
                pan_speed: c.relative_move_pan_speed()?,
                tilt_speed: c.relative_move_tilt_speed()?,
                zoom_speed: c.relative_move_zoom_speed()?,
            },
            Some(Kind::CameraCommandReleasePtzOwnership) => {
                CameraCommandVariant::ReleasePtzOwnership
            }
            Some(Kind::CameraCommandRequestPtzOwnership) => {
                CameraCommandVariant::RequestPtzOwnership
            }
            Some(Kind::CameraCommandSetAutoFocus) => CameraCommandVariant::SetAutoFocus {
                enabled: c.set_auto_focus_enabled()?,
            },
            Some(Kind::CameraCommandSetBlackAndWhite) => CameraCommandVariant::SetBlackAndWhite {
                enabled: c.set_black_and_white_enabled()?,
            },
            Some(Kind::CameraCommandSetFollowed) => CameraCommandVariant::SetFollowed {
                track_id: c.set_followed_track_id()?,
                reason: c.set_followed_reason()?,
            },
            Some(Kind::CameraCommandSetInfraRedLamp) => CameraCommandVariant::SetInfraRedLamp {
                enabled: c.set_infra_red_lamp_enabled()?,
            },
            Some(Kind::CameraCommandSetWasher) => CameraCommandVariant::SetWasher {
                enabled: c.set_washer_enabled()?,
            },
            Some(Kind::CameraCommandSetWiper) => CameraCommandVariant::SetWiper {
                enabled: c.set_wiper_enabled()?,
            },
            Some(Kind::CameraCommandStop) => CameraCommandVariant::Stop {
                pan_tilt: c.stop_pan_tilt()?,
                zoom: c.stop_zoom()?,
            },
            _ => return Err(unknown_kind(Self::FAMILY, entity_type)),
        };

        Ok(CameraCommandObject {
            object_state: ObjectState::Stored,
            id: c.id()?,
            row_version: c.row_version()?,
            camera: c.camera()?,
            timestamp: c.timestamp()?,
            device_command_source_type: c.device_command_source_type()?,
            device_command_source_id: c.device_command_source_id()?,
            reply: c.reply()?,
            variant,
        })
    }

    fn record_len(kind: Kind) -> Option<usize> {
        let variant_len = match kind {
            Kind::CameraCommand
            | Kind::CameraCommandReleasePtzOwnership
            | Kind::CameraCommandRequestPtzOwnership => 0,
            Kind::CameraCommandAbsoluteMove => 10,
            Kind::CameraCommandAdjustPanTiltZoom => 3,
            Kind::CameraCommandContinuousMove | Kind::CameraCommandGeoMove => 5,
            Kind::CameraCommandRelativeMove => 7,
            Kind::CameraCommandSetAutoFocus
            | Kind::CameraCommandSetBlackAndWhite
            | Kind::CameraCommandSetInfraRedLamp
            | Kind::CameraCommandSetWasher
            | Kind::CameraCommandSetWiper => 1,
            Kind::CameraCommandSetFollowed | Kind::CameraCommandStop => 2,
            _ => return None,
        };
        Some(BASE_RECORD_LEN + variant_len)
    }
}
