//! Entity discriminator values.
//!
//! # Responsibility
//! - Map the integer `EntityType` column onto a closed Rust enum.
//!
//! # Invariants
//! - Numeric values are part of the persisted schema and must never change.
//! - Integers with no matching variant do not map to a `Kind`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Discriminator stored in the `EntityType` column of every base view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Kind {
    AisMessage = 10600,
    AidToNavigationReportMessage = 10700,
    AisAddressedSafetyRelatedMessage = 10800,
    AisBaseStationReportMessage = 10900,
    AisBinaryAcknowledgeMessage = 11000,
    AisBinaryAddressedMessage = 11100,
    AisBinaryBroadcastMessage = 11200,
    AisDataLinkManagementMessage = 11300,
    AisExtendedClassBCsPositionReportMessage = 11400,
    AisInterrogationMessage = 11500,
    AisPositionReportClassAMessageBase = 11600,
    AisPositionReportClassAAssignedScheduleMessage = 11700,
    AisPositionReportClassAMessage = 11800,
    AisPositionReportClassAResponseToInterrogationMessage = 11900,
    AisPositionReportForLongRangeApplicationsMessage = 12000,
    AisSafetyRelatedAcknowledgmentMessage = 12100,
    AisStandardClassBCsPositionReportMessage = 12200,
    AisStandardSarAircraftPositionReportMessage = 12300,
    AisStaticAndVoyageRelatedDataMessage = 12400,
    AisStaticDataReportMessage = 12500,
    AisStaticDataReportPartAMessage = 12600,
    AisStaticDataReportPartBMessage = 12700,
    AisUtcAndDateInquiryMessage = 12800,
    AisUtcAndDateResponseMessage = 12900,

    CameraCommand = 13600,
    CameraCommandAbsoluteMove = 13700,
    CameraCommandAdjustPanTiltZoom = 13800,
    CameraCommandContinuousMove = 13900,
    CameraCommandGeoMove = 14000,
    CameraCommandRelativeMove = 14100,
    CameraCommandReleasePtzOwnership = 14200,
    CameraCommandRequestPtzOwnership = 14300,
    CameraCommandSetAutoFocus = 14400,
    CameraCommandSetBlackAndWhite = 14500,
    CameraCommandSetFollowed = 14600,
    CameraCommandSetInfraRedLamp = 14700,
    CameraCommandSetWasher = 14800,
    CameraCommandSetWiper = 14900,
    CameraCommandStop = 15000,

    Device = 19000,
    CameraDevice = 19100,
    GnssDevice = 19200,
    GyroDevice = 19300,
    LineInputDevice = 19400,
    OilSpillDetectorDevice = 19500,
    RadioDevice = 19600,
    RadomeDevice = 19700,
    TrackerDevice = 19800,
    AisDevice = 19900,
    RadarDevice = 20000,
    WeatherStationDevice = 20100,

    Property = 24400,
    BinaryProperty = 24500,
    BooleanProperty = 24600,
    ByteProperty = 24700,
    DateTimeProperty = 24800,
    DoubleProperty = 24900,
    GuidProperty = 25000,
    Int16Property = 25100,
    Int32Property = 25200,
    Int64Property = 25300,
    ReferenceProperty = 25400,
    SByteProperty = 25500,
    SingleProperty = 25600,
    StringProperty = 25700,
    TimeseriesProperty = 25800,
    BinaryTimeseriesProperty = 25900,
    BooleanTimeseriesProperty = 26000,
    ByteTimeseriesProperty = 26100,
    DateTimeTimeseriesProperty = 26200,
    DoubleTimeseriesProperty = 26300,
    GuidTimeseriesProperty = 26400,
    Int16TimeseriesProperty = 26500,
    Int32TimeseriesProperty = 26600,
    Int64TimeseriesProperty = 26700,
    ReferenceTimeseriesProperty = 26800,
    SByteTimeseriesProperty = 26900,
    SingleTimeseriesProperty = 27000,
    StringTimeseriesProperty = 27100,
    TimeSpanTimeseriesProperty = 27200,
    UInt16TimeseriesProperty = 27300,
    UInt32TimeseriesProperty = 27400,
    UInt64TimeseriesProperty = 27500,
    TimeSpanProperty = 27600,
    UInt16Property = 27700,
    UInt32Property = 27800,
    UInt64Property = 27900,

    Timeseries = 34300,
    BinaryTimeseries = 34400,
    BooleanTimeseries = 34500,
    AisAidToNavigationOffPositionTimeseries = 34600,
    DeviceEnabledTimeseries = 34700,
    RadarAutomaticSensitivityTimeControlTimeseries = 34800,
    RadarBlankSector1Timeseries = 34900,
    RadarBlankSector2Timeseries = 35000,
    RadarEnableAutomaticFrequencyControlTimeseries = 35100,
    RadarEnableFastTimeConstantTimeseries = 35200,
    RadarEnableSensitivityTimeControlTimeseries = 35300,
    RadarPowerOnTimeseries = 35400,
    RadarSaveSettingsTimeseries = 35500,
    RadarTrackingTimeseries = 35600,
    MediaProxySessionEnabledTimeseries = 35700,
    MediaServiceEnabledTimeseries = 35800,
    ByteTimeseries = 35900,
    DateTimeTimeseries = 36000,
    DoubleTimeseries = 36100,
    GnssAltitudeTimeseries = 36200,
    GnssLatitudeTimeseries = 36300,
    GnssLongitudeTimeseries = 36400,
    GyroCourseTimeseries = 36500,
    GyroHeadingMagneticNorthTimeseries = 36600,
    GyroHeadingTrueNorthTimeseries = 36700,
    GyroPitchTimeseries = 36800,
    GyroRateOfTurnTimeseries = 36900,
    GyroRollTimeseries = 37000,
    GyroSpeedTimeseries = 37100,
    RadarLatitudeTimeseries = 37200,
    RadarLongitudeTimeseries = 37300,
    RadomeDewPointTimeseries = 37400,
    RadomePressureTimeseries = 37500,
    RadomeTemperatureTimeseries = 37600,
    VesselDraughtTimeseries = 37700,
    ViewLatitudeTimeseries = 37800,
    ViewLongitudeTimeseries = 37900,
    ViewZoomLevelTimeseries = 38000,
    WeatherStationAbsoluteHumidityTimeseries = 38100,
    WeatherStationAirTemperatureTimeseries = 38200,
    WeatherStationBarometricPressureTimeseries = 38300,
    WeatherStationDewPointTimeseries = 38400,
    WeatherStationRelativeHumidityTimeseries = 38500,
    WeatherStationWaterTemperatureTimeseries = 38600,
    WeatherStationWindDirectionTimeseries = 38700,
    WeatherStationWindSpeedTimeseries = 38800,
    GeoPosition2DTimeseries = 38900,
    AisAidToNavigationPositionTimeseries = 39000,
    GeoPosition3DTimeseries = 39100,
    GuidTimeseries = 39200,
    Int16Timeseries = 39300,
    Int32Timeseries = 39400,
    RadarAzimuthOffsetTimeseries = 39500,
    RadarFastTimeConstantLevelTimeseries = 39600,
    RadarFastTimeConstantModeTimeseries = 39700,
    RadarPulseTimeseries = 39800,
    RadarSector1EndTimeseries = 39900,
    RadarSector1StartTimeseries = 40000,
    RadarSector2EndTimeseries = 40100,
    RadarSector2StartTimeseries = 40200,
    RadarSensitivityTimeControlLevelTimeseries = 40300,
    RadarTuningTimeseries = 40400,
    VesselPersonsOnBoardTimeseries = 40500,
    Int64Timeseries = 40600,
    Position2DTimeseries = 40700,
    Position3DTimeseries = 40800,
    ReferenceTimeseries = 40900,
    SByteTimeseries = 41000,
    SingleTimeseries = 41100,
    StringTimeseries = 41200,
    TimeSpanTimeseries = 41300,
    UInt16Timeseries = 41400,
    UInt32Timeseries = 41500,
    RadomeStatusTimeseries = 41600,
    UInt64Timeseries = 41700,
}

impl Kind {
    /// Every known discriminator, in ascending numeric order.
    pub const ALL: &'static [Kind] = &[
        Kind::AisMessage,
        Kind::AidToNavigationReportMessage,
        Kind::AisAddressedSafetyRelatedMessage,
        Kind::AisBaseStationReportMessage,
        Kind::AisBinaryAcknowledgeMessage,
        Kind::AisBinaryAddressedMessage,
        Kind::AisBinaryBroadcastMessage,
        Kind::AisDataLinkManagementMessage,
        Kind::AisExtendedClassBCsPositionReportMessage,
        Kind::AisInterrogationMessage,
        Kind::AisPositionReportClassAMessageBase,
        Kind::AisPositionReportClassAAssignedScheduleMessage,
        Kind::AisPositionReportClassAMessage,
        Kind::AisPositionReportClassAResponseToInterrogationMessage,
        Kind::AisPositionReportForLongRangeApplicationsMessage,
        Kind::AisSafetyRelatedAcknowledgmentMessage,
        Kind::AisStandardClassBCsPositionReportMessage,
        Kind::AisStandardSarAircraftPositionReportMessage,
        Kind::AisStaticAndVoyageRelatedDataMessage,
        Kind::AisStaticDataReportMessage,
        Kind::AisStaticDataReportPartAMessage,
        Kind::AisStaticDataReportPartBMessage,
        Kind::AisUtcAndDateInquiryMessage,
        Kind::AisUtcAndDateResponseMessage,
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
        Kind::Device,
        Kind::CameraDevice,
        Kind::GnssDevice,
        Kind::GyroDevice,
        Kind::LineInputDevice,
        Kind::OilSpillDetectorDevice,
        Kind::RadioDevice,
        Kind::RadomeDevice,
        Kind::TrackerDevice,
        Kind::AisDevice,
        Kind::RadarDevice,
        Kind::WeatherStationDevice,
        Kind::Property,
        Kind::BinaryProperty,
        Kind::BooleanProperty,
        Kind::ByteProperty,
        Kind::DateTimeProperty,
        Kind::DoubleProperty,
        Kind::GuidProperty,
        Kind::Int16Property,
        Kind::Int32Property,
        Kind::Int64Property,
        Kind::ReferenceProperty,
        Kind::SByteProperty,
        Kind::SingleProperty,
        Kind::StringProperty,
        Kind::TimeseriesProperty,
        Kind::BinaryTimeseriesProperty,
        Kind::BooleanTimeseriesProperty,
        Kind::ByteTimeseriesProperty,
        Kind::DateTimeTimeseriesProperty,
        Kind::DoubleTimeseriesProperty,
        Kind::GuidTimeseriesProperty,
        Kind::Int16TimeseriesProperty,
        Kind::Int32TimeseriesProperty,
        Kind::Int64TimeseriesProperty,
        Kind::ReferenceTimeseriesProperty,
        Kind::SByteTimeseriesProperty,
        Kind::SingleTimeseriesProperty,
        Kind::StringTimeseriesProperty,
        Kind::TimeSpanTimeseriesProperty,
        Kind::UInt16TimeseriesProperty,
        Kind::UInt32TimeseriesProperty,
        Kind::UInt64TimeseriesProperty,
        Kind::TimeSpanProperty,
        Kind::UInt16Property,
        Kind::UInt32Property,
        Kind::UInt64Property,
        Kind::Timeseries,
        Kind::BinaryTimeseries,
        Kind::BooleanTimeseries,
        Kind::AisAidToNavigationOffPositionTimeseries,
        Kind::DeviceEnabledTimeseries,
        Kind::RadarAutomaticSensitivityTimeControlTimeseries,
        Kind::RadarBlankSector1Timeseries,
        Kind::RadarBlankSector2Timeseries,
        Kind::RadarEnableAutomaticFrequencyControlTimeseries,
        Kind::RadarEnableFastTimeConstantTimeseries,
        Kind::RadarEnableSensitivityTimeControlTimeseries,
        Kind::RadarPowerOnTimeseries,
        Kind::RadarSaveSettingsTimeseries,
        Kind::RadarTrackingTimeseries,
        Kind::MediaProxySessionEnabledTimeseries,
        Kind::MediaServiceEnabledTimeseries,
        Kind::ByteTimeseries,
        Kind::DateTimeTimeseries,
        Kind::DoubleTimeseries,
        Kind::GnssAltitudeTimeseries,
        Kind::GnssLatitudeTimeseries,
        Kind::GnssLongitudeTimeseries,
        Kind::GyroCourseTimeseries,
        Kind::GyroHeadingMagneticNorthTimeseries,
        Kind::GyroHeadingTrueNorthTimeseries,
        Kind::GyroPitchTimeseries,
        Kind::GyroRateOfTurnTimeseries,
        Kind::GyroRollTimeseries,
        Kind::GyroSpeedTimeseries,
        Kind::RadarLatitudeTimeseries,
        Kind::RadarLongitudeTimeseries,
        Kind::RadomeDewPointTimeseries,
        Kind::RadomePressureTimeseries,
        Kind::RadomeTemperatureTimeseries,
        Kind::VesselDraughtTimeseries,
        Kind::ViewLatitudeTimeseries,
        Kind::ViewLongitudeTimeseries,
        Kind::ViewZoomLevelTimeseries,
        Kind::WeatherStationAbsoluteHumidityTimeseries,
        Kind::WeatherStationAirTemperatureTimeseries,
        Kind::WeatherStationBarometricPressureTimeseries,
        Kind::WeatherStationDewPointTimeseries,
        Kind::WeatherStationRelativeHumidityTimeseries,
        Kind::WeatherStationWaterTemperatureTimeseries,
        Kind::WeatherStationWindDirectionTimeseries,
        Kind::WeatherStationWindSpeedTimeseries,
        Kind::GeoPosition2DTimeseries,
        Kind::AisAidToNavigationPositionTimeseries,
        Kind::GeoPosition3DTimeseries,
        Kind::GuidTimeseries,
        Kind::Int16Timeseries,
        Kind::Int32Timeseries,
        Kind::RadarAzimuthOffsetTimeseries,
        Kind::RadarFastTimeConstantLevelTimeseries,
        Kind::RadarFastTimeConstantModeTimeseries,
        Kind::RadarPulseTimeseries,
        Kind::RadarSector1EndTimeseries,
        Kind::RadarSector1StartTimeseries,
        Kind::RadarSector2EndTimeseries,
        Kind::RadarSector2StartTimeseries,
        Kind::RadarSensitivityTimeControlLevelTimeseries,
        Kind::RadarTuningTimeseries,
        Kind::VesselPersonsOnBoardTimeseries,
        Kind::Int64Timeseries,
        Kind::Position2DTimeseries,
        Kind::Position3DTimeseries,
        Kind::ReferenceTimeseries,
        Kind::SByteTimeseries,
        Kind::SingleTimeseries,
        Kind::StringTimeseries,
        Kind::TimeSpanTimeseries,
        Kind::UInt16Timeseries,
        Kind::UInt32Timeseries,
        Kind::RadomeStatusTimeseries,
        Kind::UInt64Timeseries,
    ];

    /// Maps a raw discriminator onto a known kind.
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::ALL
            .binary_search_by_key(&value, |kind| kind.as_i32())
            .ok()
            .map(|index| Self::ALL[index])
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<Kind> for i32 {
    fn from(value: Kind) -> Self {
        value.as_i32()
    }
}
