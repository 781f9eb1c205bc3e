//! Integer-backed enums used by camera command rows.
//!
//! Each enum converts from its stored `i32` with `TryFrom`, returning the
//! rejected integer on failure so callers can report the offending value.

use serde::{Deserialize, Serialize};

/// Origin of a device command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum DeviceCommandSourceType {
    Unknown = 0,
    Session = 1,
    Device = 2,
    Source = 3,
}

/// Units of pan/tilt values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CameraPanTiltMode {
    Unknown = 0,
    Normalized = 1,
    Angular = 2,
}

/// Units of focal length values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CameraFocalLengthMode {
    Unknown = 0,
    Normalized = 1,
    Millimeter = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CameraFollowReason {
    Alarm = 0,
    User = 1,
}

impl TryFrom<i32> for DeviceCommandSourceType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Session),
            2 => Ok(Self::Device),
            3 => Ok(Self::Source),
            other => Err(other),
        }
    }
}

impl TryFrom<i32> for CameraPanTiltMode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Normalized),
            2 => Ok(Self::Angular),
            other => Err(other),
        }
    }
}

impl TryFrom<i32> for CameraFocalLengthMode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Normalized),
            2 => Ok(Self::Millimeter),
            other => Err(other),
        }
    }
}

impl TryFrom<i32> for CameraFollowReason {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Alarm),
            1 => Ok(Self::User),
            other => Err(other),
        }
    }
}

impl From<DeviceCommandSourceType> for i32 {
    fn from(value: DeviceCommandSourceType) -> Self {
        value as i32
    }
}

impl From<CameraPanTiltMode> for i32 {
    fn from(value: CameraPanTiltMode) -> Self {
        value as i32
    }
}

impl From<CameraFocalLengthMode> for i32 {
    fn from(value: CameraFocalLengthMode) -> Self {
        value as i32
    }
}

impl From<CameraFollowReason> for i32 {
    fn from(value: CameraFollowReason) -> Self {
        value as i32
    }
}
