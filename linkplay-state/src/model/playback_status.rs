//! Playback status enumeration

use serde::{Deserialize, Serialize};

/// Current playback status of a device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Currently playing audio
    Playing,
    /// Paused or stopped; the device's "stop" is reported as paused
    Paused,
    /// Not yet refreshed, or the device reported something unrecognized
    #[default]
    Unknown,
}

impl PlaybackStatus {
    /// Parse from the device's `status` field
    ///
    /// Handles the values LinkPlay firmware reports:
    /// - "play"
    /// - "pause"
    /// - "stop"
    pub fn from_device_code(code: &str) -> Self {
        match code {
            "play" => PlaybackStatus::Playing,
            "pause" | "stop" => PlaybackStatus::Paused,
            _ => PlaybackStatus::Unknown,
        }
    }
}
