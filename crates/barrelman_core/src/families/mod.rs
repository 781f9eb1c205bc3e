//! Concrete entity families served by complex readers.
//!
//! # Responsibility
//! - Expose one module per table-per-hierarchy family.
//! - Map family names used by callers onto the family types.

use std::fmt::{Display, Formatter};

pub mod ais_message;
pub mod boolean_timeseries;
pub mod camera_command;
pub mod device;
pub mod property;
pub mod timeseries;

pub use ais_message::{
    AisMessageFamily, AisMessageObject, AisMessageVariant, ComplexAisMessageDataReader,
};
pub use boolean_timeseries::{
    BooleanTimeseriesFamily, BooleanTimeseriesObject, BooleanTimeseriesVariant,
    ComplexBooleanTimeseriesDataReader,
};
pub use camera_command::{
    CameraCommandFamily, CameraCommandObject, CameraCommandVariant, ComplexCameraCommandDataReader,
};
pub use device::{
    ComplexDeviceDataReader, DeviceFamily, DeviceObject, DeviceVariant, RadarDeviceFields,
};
pub use property::{
    ComplexPropertyDataReader, PropertyFamily, PropertyObject, PropertyValue, PropertyVariant,
    TimeseriesValueType,
};
pub use timeseries::{
    ComplexTimeseriesDataReader, OwnerRole, TimeseriesFamily, TimeseriesObject, TimeseriesOwner,
};

use crate::reader::ComplexFamily;

/// Runtime handle for a family, used where the family is chosen by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyName {
    BooleanTimeseries,
    CameraCommand,
    Device,
    Property,
    AisMessage,
    Timeseries,
}

impl FamilyName {
    pub const ALL: [FamilyName; 6] = [
        FamilyName::BooleanTimeseries,
        FamilyName::CameraCommand,
        FamilyName::Device,
        FamilyName::Property,
        FamilyName::AisMessage,
        FamilyName::Timeseries,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BooleanTimeseries => BooleanTimeseriesFamily::FAMILY,
            Self::CameraCommand => CameraCommandFamily::FAMILY,
            Self::Device => DeviceFamily::FAMILY,
            Self::Property => PropertyFamily::FAMILY,
            Self::AisMessage => AisMessageFamily::FAMILY,
            Self::Timeseries => TimeseriesFamily::FAMILY,
        }
    }

    pub fn base_view_name(self) -> &'static str {
        match self {
            Self::BooleanTimeseries => BooleanTimeseriesFamily::BASE_VIEW_NAME,
            Self::CameraCommand => CameraCommandFamily::BASE_VIEW_NAME,
            Self::Device => DeviceFamily::BASE_VIEW_NAME,
            Self::Property => PropertyFamily::BASE_VIEW_NAME,
            Self::AisMessage => AisMessageFamily::BASE_VIEW_NAME,
            Self::Timeseries => TimeseriesFamily::BASE_VIEW_NAME,
        }
    }

    /// Parses a family name, ignoring ASCII case and `-`/`_` separators.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|family| family.name().to_ascii_lowercase() == normalized)
    }
}

impl Display for FamilyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
