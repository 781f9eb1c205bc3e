//! Device family.
//!
//! # Responsibility
//! - Project `DeviceView` rows onto the concrete device variants.
//!
//! # Invariants
//! - The abstract `Device` kind and `TrackerDevice` are joined by the base
//!   query but have no projection; rows of those kinds fail with `UnknownKind`.
//! - Every subtype column is a nullable timeseries or device reference.

use crate::binary::{BinaryWriter, CodecResult};
use crate::model::{Guid, Kind, ObjectState};
use crate::reader::columns::{get_guid, get_nullable_guid};
use crate::reader::{
    unknown_kind, ComplexDataReader, ComplexFamily, ComplexRow, DataObject, ErrorSink,
    LogErrorSink, ReaderResult, ENTITY_TYPE_FIELD_ID,
};
use rusqlite::Row;
use serde::Serialize;
use std::io::Write;

pub const BASE_QUERY: &str = "SELECT
  d.[Id],
  d.[EntityType],
  d.[RowVersion],
  d.[Host],
  d.[Name],
  d.[EnabledTimeseries],
  g.[LatitudeTimeseries],
  g.[LongitudeTimeseries],
  g.[AltitudeTimeseries],
  gd.[HeadingTrueNorthTimeseries],
  gd.[HeadingMagneticNorthTimeseries],
  gd.[PitchTimeseries],
  gd.[RateOfTurnTimeseries],
  gd.[RollTimeseries],
  gd.[CourseTimeseries],
  gd.[SpeedTimeseries],
  gd.[GNSSDevice],
  rdo.[Radar],
  rdo.[PressureTimeseries],
  rdo.[TemperatureTimeseries],
  rdo.[DewPointTimeseries],
  rdo.[StatusTimeseries],
  rd.[SaveSettingsTimeseries],
  rd.[PowerOnTimeseries],
  rd.[TrackingOnTimeseries],
  rd.[RadarPulseTimeseries],
  rd.[TuningTimeseries],
  rd.[BlankSector1Timeseries],
  rd.[Sector1StartTimeseries],
  rd.[Sector1EndTimeseries],
  rd.[BlankSector2Timeseries],
  rd.[Sector2StartTimeseries],
  rd.[Sector2EndTimeseries],
  rd.[EnableAutomaticFrequencyControlTimeseries],
  rd.[AzimuthOffsetTimeseries],
  rd.[EnableSensitivityTimeControlTimeseries],
  rd.[AutomaticSensitivityTimeControlTimeseries],
  rd.[SensitivityTimeControlLevelTimeseries],
  rd.[EnableFastTimeConstantTimeseries],
  rd.[FastTimeConstantLevelTimeseries],
  rd.[FastTimeConstantModeTimeseries],
  rd.[LatitudeTimeseries],
  rd.[LongitudeTimeseries],
  rd.[Radome],
  rd.[GNSSDevice],
  wsd.[BarometricPressureTimeseries],
  wsd.[AirTemperatureTimeseries],
  wsd.[WaterTemperatureTimeseries],
  wsd.[RelativeHumidityTimeseries],
  wsd.[AbsoluteHumidityTimeseries],
  wsd.[DewPointTimeseries],
  wsd.[WindDirectionTimeseries],
  wsd.[WindSpeedTimeseries],
  wsd.[Gyro],
  d.[Description]
FROM [DeviceView] d
  LEFT JOIN [CameraDevice] cd ON(d.[Id] = cd.[Id] )
  LEFT JOIN [GNSSDevice] g ON(d.[Id] = g.[Id] )
  LEFT JOIN [GyroDevice] gd ON(d.[Id] = gd.[Id] )
  LEFT JOIN [LineInputDevice] lid ON(d.[Id] = lid.[Id] )
  LEFT JOIN [OilSpillDetectorDevice] osdd ON(d.[Id] = osdd.[Id] )
  LEFT JOIN [RadioDevice] rdi ON(d.[Id] = rdi.[Id] )
  LEFT JOIN [RadomeDevice] rdo ON(d.[Id] = rdo.[Id] )
  LEFT JOIN [TrackerDevice] td ON(d.[Id] = td.[Id] )
  LEFT JOIN [AisDevice] ad ON(d.[Id] = ad.[Id] )
  LEFT JOIN [RadarDevice] rd ON(d.[Id] = rd.[Id] )
  LEFT JOIN [WeatherStationDevice] wsd ON(d.[Id] = wsd.[Id] )
";

pub const BASE_VIEW_NAME: &str = "DeviceView";
pub const VIEW_ALIAS_NAME: &str = "d";

pub const D_ID_FIELD_ID: usize = 0;
pub const D_KIND_FIELD_ID: usize = ENTITY_TYPE_FIELD_ID;
pub const D_ROWVERSION_FIELD_ID: usize = 2;
pub const D_HOST_FIELD_ID: usize = 3;
pub const D_NAME_FIELD_ID: usize = 4;
pub const D_ENABLEDTIMESERIES_FIELD_ID: usize = 5;
pub const G_LATITUDETIMESERIES_FIELD_ID: usize = 6;
pub const G_LONGITUDETIMESERIES_FIELD_ID: usize = 7;
pub const G_ALTITUDETIMESERIES_FIELD_ID: usize = 8;
pub const GD_HEADINGTRUENORTHTIMESERIES_FIELD_ID: usize = 9;
pub const GD_HEADINGMAGNETICNORTHTIMESERIES_FIELD_ID: usize = 10;
pub const GD_PITCHTIMESERIES_FIELD_ID: usize = 11;
pub const GD_RATEOFTURNTIMESERIES_FIELD_ID: usize = 12;
pub const GD_ROLLTIMESERIES_FIELD_ID: usize = 13;
pub const GD_COURSETIMESERIES_FIELD_ID: usize = 14;
pub const GD_SPEEDTIMESERIES_FIELD_ID: usize = 15;
pub const GD_GNSSDEVICE_FIELD_ID: usize = 16;
pub const RDO_RADAR_FIELD_ID: usize = 17;
pub const RDO_PRESSURETIMESERIES_FIELD_ID: usize = 18;
pub const RDO_TEMPERATURETIMESERIES_FIELD_ID: usize = 19;
pub const RDO_DEWPOINTTIMESERIES_FIELD_ID: usize = 20;
pub const RDO_STATUSTIMESERIES_FIELD_ID: usize = 21;
pub const RD_SAVESETTINGSTIMESERIES_FIELD_ID: usize = 22;
pub const RD_POWERONTIMESERIES_FIELD_ID: usize = 23;
pub const RD_TRACKINGONTIMESERIES_FIELD_ID: usize = 24;
pub const RD_RADARPULSETIMESERIES_FIELD_ID: usize = 25;
pub const RD_TUNINGTIMESERIES_FIELD_ID: usize = 26;
pub const RD_BLANKSECTOR1TIMESERIES_FIELD_ID: usize = 27;
pub const RD_SECTOR1STARTTIMESERIES_FIELD_ID: usize = 28;
pub const RD_SECTOR1ENDTIMESERIES_FIELD_ID: usize = 29;
pub const RD_BLANKSECTOR2TIMESERIES_FIELD_ID: usize = 30;
pub const RD_SECTOR2STARTTIMESERIES_FIELD_ID: usize = 31;
pub const RD_SECTOR2ENDTIMESERIES_FIELD_ID: usize = 32;
pub const RD_ENABLEAUTOMATICFREQUENCYCONTROLTIMESERIES_FIELD_ID: usize = 33;
pub const RD_AZIMUTHOFFSETTIMESERIES_FIELD_ID: usize = 34;
pub const RD_ENABLESENSITIVITYTIMECONTROLTIMESERIES_FIELD_ID: usize = 35;
pub const RD_AUTOMATICSENSITIVITYTIMECONTROLTIMESERIES_FIELD_ID: usize = 36;
pub const RD_SENSITIVITYTIMECONTROLLEVELTIMESERIES_FIELD_ID: usize = 37;
pub const RD_ENABLEFASTTIMECONSTANTTIMESERIES_FIELD_ID: usize = 38;
pub const RD_FASTTIMECONSTANTLEVELTIMESERIES_FIELD_ID: usize = 39;
pub const RD_FASTTIMECONSTANTMODETIMESERIES_FIELD_ID: usize = 40;
pub const RD_LATITUDETIMESERIES_FIELD_ID: usize = 41;
pub const RD_LONGITUDETIMESERIES_FIELD_ID: usize = 42;
pub const RD_RADOME_FIELD_ID: usize = 43;
pub const RD_GNSSDEVICE_FIELD_ID: usize = 44;
pub const WSD_BAROMETRICPRESSURETIMESERIES_FIELD_ID: usize = 45;
pub const WSD_AIRTEMPERATURETIMESERIES_FIELD_ID: usize = 46;
pub const WSD_WATERTEMPERATURETIMESERIES_FIELD_ID: usize = 47;
pub const WSD_RELATIVEHUMIDITYTIMESERIES_FIELD_ID: usize = 48;
pub const WSD_ABSOLUTEHUMIDITYTIMESERIES_FIELD_ID: usize = 49;
pub const WSD_DEWPOINTTIMESERIES_FIELD_ID: usize = 50;
pub const WSD_WINDDIRECTIONTIMESERIES_FIELD_ID: usize = 51;
pub const WSD_WINDSPEEDTIMESERIES_FIELD_ID: usize = 52;
pub const WSD_GYRO_FIELD_ID: usize = 53;
pub const D_DESCRIPTION_FIELD_ID: usize = 54;

const BASE_RECORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct DeviceFamily;

pub type ComplexDeviceDataReader<'stmt, S = LogErrorSink> =
    ComplexDataReader<'stmt, DeviceFamily, S>;

/// Typed accessors over one row of `BASE_QUERY`.
///
/// Subtype accessors are named `<subtype>_<column>` and return `None` on rows
/// of other subtypes.
#[derive(Clone, Copy)]
pub struct DeviceColumns<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> DeviceColumns<'a, 'stmt> {
    pub fn new(row: &'a Row<'stmt>) -> Self {
        Self { row }
    }

    fn reference(&self, ordinal: usize) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, ordinal)
    }

    pub fn id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, D_ID_FIELD_ID)
    }

    pub fn entity_type(&self) -> ReaderResult<i32> {
        Ok(self.row.get(D_KIND_FIELD_ID)?)
    }

    pub fn row_version(&self) -> ReaderResult<i64> {
        Ok(self.row.get(D_ROWVERSION_FIELD_ID)?)
    }

    pub fn host(&self) -> ReaderResult<Guid> {
        get_guid(self.row, D_HOST_FIELD_ID)
    }

    pub fn name(&self) -> ReaderResult<String> {
        Ok(self.row.get(D_NAME_FIELD_ID)?)
    }

    pub fn enabled_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(D_ENABLEDTIMESERIES_FIELD_ID)
    }

    pub fn description(&self) -> ReaderResult<String> {
        Ok(self.row.get(D_DESCRIPTION_FIELD_ID)?)
    }

    pub fn gnss_latitude_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(G_LATITUDETIMESERIES_FIELD_ID)
    }

    pub fn gnss_longitude_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(G_LONGITUDETIMESERIES_FIELD_ID)
    }

    pub fn gnss_altitude_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(G_ALTITUDETIMESERIES_FIELD_ID)
    }

    pub fn gyro_heading_true_north_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_HEADINGTRUENORTHTIMESERIES_FIELD_ID)
    }

    pub fn gyro_heading_magnetic_north_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_HEADINGMAGNETICNORTHTIMESERIES_FIELD_ID)
    }

    pub fn gyro_pitch_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_PITCHTIMESERIES_FIELD_ID)
    }

    pub fn gyro_rate_of_turn_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_RATEOFTURNTIMESERIES_FIELD_ID)
    }

    pub fn gyro_roll_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_ROLLTIMESERIES_FIELD_ID)
    }

    pub fn gyro_course_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_COURSETIMESERIES_FIELD_ID)
    }

    pub fn gyro_speed_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_SPEEDTIMESERIES_FIELD_ID)
    }

    pub fn gyro_gnss_device(&self) -> ReaderResult<Option<Guid>> {
        self.reference(GD_GNSSDEVICE_FIELD_ID)
    }

    pub fn radome_radar(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RDO_RADAR_FIELD_ID)
    }

    pub fn radome_pressure_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RDO_PRESSURETIMESERIES_FIELD_ID)
    }

    pub fn radome_temperature_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RDO_TEMPERATURETIMESERIES_FIELD_ID)
    }

    pub fn radome_dew_point_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RDO_DEWPOINTTIMESERIES_FIELD_ID)
    }

    pub fn radome_status_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RDO_STATUSTIMESERIES_FIELD_ID)
    }

    pub fn radar_save_settings_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_SAVESETTINGSTIMESERIES_FIELD_ID)
    }

    pub fn radar_power_on_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_POWERONTIMESERIES_FIELD_ID)
    }

    pub fn radar_tracking_on_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_TRACKINGONTIMESERIES_FIELD_ID)
    }

    pub fn radar_radar_pulse_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_RADARPULSETIMESERIES_FIELD_ID)
    }

    pub fn radar_tuning_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_TUNINGTIMESERIES_FIELD_ID)
    }

    pub fn radar_blank_sector1_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_BLANKSECTOR1TIMESERIES_FIELD_ID)
    }

    pub fn radar_sector1_start_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_SECTOR1STARTTIMESERIES_FIELD_ID)
    }

    pub fn radar_sector1_end_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_SECTOR1ENDTIMESERIES_FIELD_ID)
    }

    pub fn radar_blank_sector2_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_BLANKSECTOR2TIMESERIES_FIELD_ID)
    }

    pub fn radar_sector2_start_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_SECTOR2STARTTIMESERIES_FIELD_ID)
    }

    pub fn radar_sector2_end_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_SECTOR2ENDTIMESERIES_FIELD_ID)
    }

    pub fn radar_enable_automatic_frequency_control_timeseries(
        &self,
    ) -> ReaderResult<Option<Guid>> {
        self.reference(RD_ENABLEAUTOMATICFREQUENCYCONTROLTIMESERIES_FIELD_ID)
    }

    pub fn radar_azimuth_offset_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_AZIMUTHOFFSETTIMESERIES_FIELD_ID)
    }

    pub fn radar_enable_sensitivity_time_control_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_ENABLESENSITIVITYTIMECONTROLTIMESERIES_FIELD_ID)
    }

    pub fn radar_automatic_sensitivity_time_control_timeseries(
        &self,
    ) -> ReaderResult<Option<Guid>> {
        self.reference(RD_AUTOMATICSENSITIVITYTIMECONTROLTIMESERIES_FIELD_ID)
    }

    pub fn radar_sensitivity_time_control_level_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_SENSITIVITYTIMECONTROLLEVELTIMESERIES_FIELD_ID)
    }

    pub fn radar_enable_fast_time_constant_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_ENABLEFASTTIMECONSTANTTIMESERIES_FIELD_ID)
    }

    pub fn radar_fast_time_constant_level_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_FASTTIMECONSTANTLEVELTIMESERIES_FIELD_ID)
    }

    pub fn radar_fast_time_constant_mode_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_FASTTIMECONSTANTMODETIMESERIES_FIELD_ID)
    }

    pub fn radar_latitude_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_LATITUDETIMESERIES_FIELD_ID)
    }

    pub fn radar_longitude_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_LONGITUDETIMESERIES_FIELD_ID)
    }

    pub fn radar_radome(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_RADOME_FIELD_ID)
    }

    pub fn radar_gnss_device(&self) -> ReaderResult<Option<Guid>> {
        self.reference(RD_GNSSDEVICE_FIELD_ID)
    }

    pub fn weather_station_barometric_pressure_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_BAROMETRICPRESSURETIMESERIES_FIELD_ID)
    }

    pub fn weather_station_air_temperature_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_AIRTEMPERATURETIMESERIES_FIELD_ID)
    }

    pub fn weather_station_water_temperature_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_WATERTEMPERATURETIMESERIES_FIELD_ID)
    }

    pub fn weather_station_relative_humidity_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_RELATIVEHUMIDITYTIMESERIES_FIELD_ID)
    }

    pub fn weather_station_absolute_humidity_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_ABSOLUTEHUMIDITYTIMESERIES_FIELD_ID)
    }

    pub fn weather_station_dew_point_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_DEWPOINTTIMESERIES_FIELD_ID)
    }

    pub fn weather_station_wind_direction_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_WINDDIRECTIONTIMESERIES_FIELD_ID)
    }

    pub fn weather_station_wind_speed_timeseries(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_WINDSPEEDTIMESERIES_FIELD_ID)
    }

    pub fn weather_station_gyro(&self) -> ReaderResult<Option<Guid>> {
        self.reference(WSD_GYRO_FIELD_ID)
    }
}

impl<'a, 'stmt, S: ErrorSink> ComplexRow<'a, 'stmt, DeviceFamily, S> {
    pub fn columns(&self) -> DeviceColumns<'a, 'stmt> {
        DeviceColumns::new(self.row())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceObject {
    pub object_state: ObjectState,
    pub id: Guid,
    pub row_version: i64,
    pub host: Guid,
    pub name: String,
    pub description: String,
    pub enabled_timeseries: Option<Guid>,
    pub variant: DeviceVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum DeviceVariant {
    Camera,
    Gnss {
        latitude_timeseries: Option<Guid>,
        longitude_timeseries: Option<Guid>,
        altitude_timeseries: Option<Guid>,
    },
    Gyro {
        heading_true_north_timeseries: Option<Guid>,
        heading_magnetic_north_timeseries: Option<Guid>,
        pitch_timeseries: Option<Guid>,
        rate_of_turn_timeseries: Option<Guid>,
        roll_timeseries: Option<Guid>,
        course_timeseries: Option<Guid>,
        speed_timeseries: Option<Guid>,
        gnss_device: Option<Guid>,
    },
    LineInput,
    OilSpillDetector,
    Radio,
    Radome {
        radar: Option<Guid>,
        pressure_timeseries: Option<Guid>,
        temperature_timeseries: Option<Guid>,
        dew_point_timeseries: Option<Guid>,
        status_timeseries: Option<Guid>,
    },
    Ais,
    Radar(Box<RadarDeviceFields>),
    WeatherStation {
        barometric_pressure_timeseries: Option<Guid>,
        air_temperature_timeseries: Option<Guid>,
        water_temperature_timeseries: Option<Guid>,
        relative_humidity_timeseries: Option<Guid>,
        absolute_humidity_timeseries: Option<Guid>,
        dew_point_timeseries: Option<Guid>,
        wind_direction_timeseries: Option<Guid>,
        wind_speed_timeseries: Option<Guid>,
        gyro: Option<Guid>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RadarDeviceFields {
    pub save_settings_timeseries: Option<Guid>,
    pub power_on_timeseries: Option<Guid>,
    pub tracking_on_timeseries: Option<Guid>,
    pub radar_pulse_timeseries: Option<Guid>,
    pub tuning_timeseries: Option<Guid>,
    pub blank_sector1_timeseries: Option<Guid>,
    pub sector1_start_timeseries: Option<Guid>,
    pub sector1_end_timeseries: Option<Guid>,
    pub blank_sector2_timeseries: Option<Guid>,
    pub sector2_start_timeseries: Option<Guid>,
    pub sector2_end_timeseries: Option<Guid>,
    pub enable_automatic_frequency_control_timeseries: Option<Guid>,
    pub azimuth_offset_timeseries: Option<Guid>,
    pub enable_sensitivity_time_control_timeseries: Option<Guid>,
    pub automatic_sensitivity_time_control_timeseries: Option<Guid>,
    pub sensitivity_time_control_level_timeseries: Option<Guid>,
    pub enable_fast_time_constant_timeseries: Option<Guid>,
    pub fast_time_constant_level_timeseries: Option<Guid>,
    pub fast_time_constant_mode_timeseries: Option<Guid>,
    pub latitude_timeseries: Option<Guid>,
    pub longitude_timeseries: Option<Guid>,
    pub radome: Option<Guid>,
    pub gnss_device: Option<Guid>,
}

impl RadarDeviceFields {
    fn references(&self) -> [Option<Guid>; 23] {
        [
            self.save_settings_timeseries,
            self.power_on_timeseries,
            self.tracking_on_timeseries,
            self.radar_pulse_timeseries,
            self.tuning_timeseries,
            self.blank_sector1_timeseries,
            self.sector1_start_timeseries,
            self.sector1_end_timeseries,
            self.blank_sector2_timeseries,
            self.sector2_start_timeseries,
            self.sector2_end_timeseries,
            self.enable_automatic_frequency_control_timeseries,
            self.azimuth_offset_timeseries,
            self.enable_sensitivity_time_control_timeseries,
            self.automatic_sensitivity_time_control_timeseries,
            self.sensitivity_time_control_level_timeseries,
            self.enable_fast_time_constant_timeseries,
            self.fast_time_constant_level_timeseries,
            self.fast_time_constant_mode_timeseries,
            self.latitude_timeseries,
            self.longitude_timeseries,
            self.radome,
            self.gnss_device,
        ]
    }
}

impl DeviceVariant {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Camera => Kind::CameraDevice,
            Self::Gnss { .. } => Kind::GnssDevice,
            Self::Gyro { .. } => Kind::GyroDevice,
            Self::LineInput => Kind::LineInputDevice,
            Self::OilSpillDetector => Kind::OilSpillDetectorDevice,
            Self::Radio => Kind::RadioDevice,
            Self::Radome { .. } => Kind::RadomeDevice,
            Self::Ais => Kind::AisDevice,
            Self::Radar(_) => Kind::RadarDevice,
            Self::WeatherStation { .. } => Kind::WeatherStationDevice,
        }
    }

    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        match self {
            Self::Camera | Self::LineInput | Self::OilSpillDetector | Self::Radio | Self::Ais => {
                Ok(())
            }
            Self::Gnss {
                latitude_timeseries,
                longitude_timeseries,
                altitude_timeseries,
            } => write_references(
                writer,
                &[*latitude_timeseries, *longitude_timeseries, *altitude_timeseries],
            ),
            Self::Gyro {
                heading_true_north_timeseries,
                heading_magnetic_north_timeseries,
                pitch_timeseries,
                rate_of_turn_timeseries,
                roll_timeseries,
                course_timeseries,
                speed_timeseries,
                gnss_device,
            } => write_references(
                writer,
                &[
                    *heading_true_north_timeseries,
                    *heading_magnetic_north_timeseries,
                    *pitch_timeseries,
                    *rate_of_turn_timeseries,
                    *roll_timeseries,
                    *course_timeseries,
                    *speed_timeseries,
                    *gnss_device,
                ],
            ),
            Self::Radome {
                radar,
                pressure_timeseries,
                temperature_timeseries,
                dew_point_timeseries,
                status_timeseries,
            } => write_references(
                writer,
                &[
                    *radar,
                    *pressure_timeseries,
                    *temperature_timeseries,
                    *dew_point_timeseries,
                    *status_timeseries,
                ],
            ),
            Self::Radar(fields) => write_references(writer, &fields.references()),
            Self::WeatherStation {
                barometric_pressure_timeseries,
                air_temperature_timeseries,
                water_temperature_timeseries,
                relative_humidity_timeseries,
                absolute_humidity_timeseries,
                dew_point_timeseries,
                wind_direction_timeseries,
                wind_speed_timeseries,
                gyro,
            } => write_references(
                writer,
                &[
                    *barometric_pressure_timeseries,
                    *air_temperature_timeseries,
                    *water_temperature_timeseries,
                    *relative_humidity_timeseries,
                    *absolute_humidity_timeseries,
                    *dew_point_timeseries,
                    *wind_direction_timeseries,
                    *wind_speed_timeseries,
                    *gyro,
                ],
            ),
        }
    }
}

fn write_references<W: Write>(
    writer: &mut BinaryWriter<W>,
    references: &[Option<Guid>],
) -> CodecResult<()> {
    for reference in references {
        writer.write_nullable_guid(*reference)?;
    }
    Ok(())
}

impl DataObject for DeviceObject {
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
        writer.write_guid(self.host)?;
        writer.write_str(&self.name)?;
        writer.write_str(&self.description)?;
        writer.write_nullable_guid(self.enabled_timeseries)?;
        self.variant.write_to(writer)
    }
}

fn decode_radar(c: &DeviceColumns<'_, '_>) -> ReaderResult<RadarDeviceFields> {
    Ok(RadarDeviceFields {
        save_settings_timeseries: c.radar_save_settings_timeseries()?,
        power_on_timeseries: c.radar_power_on_timeseries()?,
        tracking_on_timeseries: c.radar_tracking_on_timeseries()?,
        radar_pulse_timeseries: c.radar_radar_pulse_timeseries()?,
        tuning_timeseries: c.radar_tuning_timeseries()?,
        blank_sector1_timeseries: c.radar_blank_sector1_timeseries()?,
        sector1_start_timeseries: c.radar_sector1_start_timeseries()?,
        sector1_end_timeseries: c.radar_sector1_end_timeseries()?,
        blank_sector2_timeseries: c.radar_blank_sector2_timeseries()?,
        sector2_start_timeseries: c.radar_sector2_start_timeseries()?,
        sector2_end_timeseries: c.radar_sector2_end_timeseries()?,
        enable_automatic_frequency_control_timeseries: c
            .radar_enable_automatic_frequency_control_timeseries()?,
        azimuth_offset_timeseries: c.radar_azimuth_offset_timeseries()?,
        enable_sensitivity_time_control_timeseries: c
            .radar_enable_sensitivity_time_control_timeseries()?,
        automatic_sensitivity_time_control_timeseries: c
            .radar_automatic_sensitivity_time_control_timeseries()?,
        sensitivity_time_control_level_timeseries: c
            .radar_sensitivity_time_control_level_timeseries()?,
        enable_fast_time_constant_timeseries: c.radar_enable_fast_time_constant_timeseries()?,
        fast_time_constant_level_timeseries: c.radar_fast_time_constant_level_timeseries()?,
        fast_time_constant_mode_timeseries: c.radar_fast_time_constant_mode_timeseries()?,
        latitude_timeseries: c.radar_latitude_timeseries()?,
        longitude_timeseries: c.radar_longitude_timeseries()?,
        radome: c.radar_radome()?,
        gnss_device: c.radar_gnss_device()?,
    })
}

impl ComplexFamily for DeviceFamily {
    const FAMILY: &'static str = "Device";
    const BASE_QUERY: &'static str = BASE_QUERY;
    const BASE_VIEW_NAME: &'static str = BASE_VIEW_NAME;
    const VIEW_ALIAS_NAME: &'static str = VIEW_ALIAS_NAME;

    type Object = DeviceObject;

    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object> {
        let c = DeviceColumns::new(row);
        let entity_type = c.entity_type()?;
        let variant = match Kind::from_i32(entity_type) {
            Some(Kind::CameraDevice) => DeviceVariant::Camera,
            Some(Kind::GnssDevice) => DeviceVariant::Gnss {
                latitude_timeseries: c.gnss_latitude_timeseries()?,
                longitude_timeseries: c.gnss_longitude_timeseries()?,
                altitude_timeseries: c.gnss_altitude_timeseries()?,
            },
            Some(Kind::GyroDevice) => DeviceVariant::Gyro {
                heading_true_north_timeseries: c.gyro_heading_true_north_timeseries()?,
                heading_magnetic_north_timeseries: c.gyro_heading_magnetic_north_timeseries()?,
                pitch_timeseries: c.gyro_pitch_timeseries()?,
                rate_of_turn_timeseries: c.gyro_rate_of_turn_timeseries()?,
                roll_timeseries: c.gyro_roll_timeseries()?,
                course_timeseries: c.gyro_course_timeseries()?,
                speed_timeseries: c.gyro_speed_timeseries()?,
                gnss_device: c.gyro_gnss_device()?,
            },
            Some(Kind::LineInputDevice) => DeviceVariant::LineInput,
            Some(Kind::OilSpillDetectorDevice) => DeviceVariant::OilSpillDetector,
            Some(Kind::RadioDevice) => DeviceVariant::Radio,
            Some(Kind::RadomeDevice) => DeviceVariant::Radome {
                radar: c.radome_radar()?,
                pressure_timeseries: c.radome_pressure_timeseries()?,
                temperature_timeseries: c.radome_temperature_timeseries()?,
                dew_point_timeseries: c.radome_dew_point_timeseries()?,
                status_timeseries: c.radome_status_timeseries()?,
            },
            Some(Kind::AisDevice) => DeviceVariant::Ais,
            Some(Kind::RadarDevice) => DeviceVariant::Radar(Box::new(decode_radar(&c)?)),
            Some(Kind::WeatherStationDevice) => DeviceVariant::WeatherStation {
                barometric_pressure_timeseries: c
                    .weather_station_barometric_pressure_timeseries()?,
                air_temperature_timeseries: c.weather_station_air_temperature_timeseries()?,
                water_temperature_timeseries: c.weather_station_water_temperature_timeseries()?,
                relative_humidity_timeseries: c.weather_station_relative_humidity_timeseries()?,
                absolute_humidity_timeseries: c.weather_station_absolute_humidity_timeseries()?,
                dew_point_timeseries: c.weather_station_dew_point_timeseries()?,
                wind_direction_timeseries: c.weather_station_wind_direction_timeseries()?,
                wind_speed_timeseries: c.weather_station_wind_speed_timeseries()?,
                gyro: c.weather_station_gyro()?,
            },
            _ => return Err(unknown_kind(Self::FAMILY, entity_type)),
        };

        Ok(DeviceObject {
            object_state: ObjectState::Stored,
            id: c.id()?,
            row_version: c.row_version()?,
            host: c.host()?,
            name: c.name()?,
            description: c.description()?,
            enabled_timeseries: c.enabled_timeseries()?,
            variant,
        })
    }

    fn record_len(kind: Kind) -> Option<usize> {
        let variant_len = match kind {
            Kind::CameraDevice
            | Kind::LineInputDevice
            | Kind::OilSpillDetectorDevice
            | Kind::RadioDevice
            | Kind::AisDevice => 0,
            Kind::GnssDevice => 3,
            Kind::GyroDevice => 8,
            Kind::RadomeDevice => 5,
            Kind::RadarDevice => 23,
            Kind::WeatherStationDevice => 9,
            _ => return None,
        };
        Some(BASE_RECORD_LEN + variant_len)
    }
}
