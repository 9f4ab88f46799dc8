//! Localization settings and their wire form.
//!
//! Settings arrive over the session transport as opaque bytes; malformed
//! payloads deserialize to `None` rather than failing the session.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Whether a session locates an anchor the device already knows or creates
/// a fresh one at the requested pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalizationMode {
    LocateExistingAnchor,
    CreateAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldAnchorSettings {
    pub mode: LocalizationMode,
    pub anchor_id: String,
    pub anchor_position: Vec3,
    pub anchor_rotation: Quat,
}

impl WorldAnchorSettings {
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode settings from transport bytes; anything malformed is `None`.
    pub fn try_deserialize(bytes: &[u8]) -> Option<Self> {
        bincode::deserialize(bytes).ok()
    }
}
