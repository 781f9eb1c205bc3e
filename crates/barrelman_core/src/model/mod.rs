//! Domain value types shared by every entity family.
//!
//! # Responsibility
//! - Define discriminators, lifecycle state and tick-based time values.
//! - Define the integer-backed enums carried by command rows.
//!
//! # Invariants
//! - Every object reconstructed from storage is tagged `ObjectState::Stored`.

pub mod camera;
pub mod kind;
pub mod time;

pub use camera::{
    CameraFocalLengthMode, CameraFollowReason, CameraPanTiltMode, DeviceCommandSourceType,
};
pub use kind::Kind;
pub use time::{DateTime, TimeSpan};

use serde::{Deserialize, Serialize};

/// Identifier type used for every entity and reference column.
pub type Guid = uuid::Uuid;

/// Lifecycle tag written after the discriminator of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectState {
    Unknown = 0,
    New = 1,
    /// Loaded from storage and unchanged since.
    Stored = 2,
    Changed = 3,
    Deleted = 4,
}

impl ObjectState {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::New),
            2 => Some(Self::Stored),
            3 => Some(Self::Changed),
            4 => Some(Self::Deleted),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectState;

    #[test]
    fn object_state_roundtrips_through_u8() {
        for state in [
            ObjectState::Unknown,
            ObjectState::New,
            ObjectState::Stored,
            ObjectState::Changed,
            ObjectState::Deleted,
        ] {
            assert_eq!(ObjectState::from_u8(state.as_u8()), Some(state));
        }
        assert_eq!(ObjectState::from_u8(5), None);
    }
}
