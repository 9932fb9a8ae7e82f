//! Host-side service calls
//!
//! Hosts receive commands as named services with a JSON argument record.
//! [`ServiceCall`] is the typed form of every service a LinkPlay device
//! exposes; deserializing picks the variant from the `service` field and
//! checks the arguments, so dispatch is a plain match.

use std::fmt;

use linkplay_api::Transport;
use linkplay_state::Enricher;
use serde::Deserialize;

use crate::{DeviceId, LinkPlayDevice, MediaType, SdkError};

/// One service invocation with its typed arguments
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum ServiceCall {
    TurnOff,
    VolumeSet { volume_level: f64 },
    VolumeMute { is_volume_muted: bool },
    MediaPlay,
    MediaPause,
    MediaNextTrack,
    MediaPreviousTrack,
    /// Position in seconds; fractions are truncated by the device call
    MediaSeek { seek_position: f64 },
    PlayMedia {
        media_content_type: MediaType,
        media_content_id: String,
    },
    SelectSource { source: String },
    SelectSoundMode { sound_mode: String },
    ShuffleSet { shuffle: bool },
    #[serde(rename = "linkplay_preset_button")]
    PresetButton { preset: u32 },
}

/// Service names without arguments, for registration with a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    TurnOff,
    VolumeSet,
    VolumeMute,
    MediaPlay,
    MediaPause,
    MediaNextTrack,
    MediaPreviousTrack,
    MediaSeek,
    PlayMedia,
    SelectSource,
    SelectSoundMode,
    ShuffleSet,
    PresetButton,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 13] = [
        ServiceKind::TurnOff,
        ServiceKind::VolumeSet,
        ServiceKind::VolumeMute,
        ServiceKind::MediaPlay,
        ServiceKind::MediaPause,
        ServiceKind::MediaNextTrack,
        ServiceKind::MediaPreviousTrack,
        ServiceKind::MediaSeek,
        ServiceKind::PlayMedia,
        ServiceKind::SelectSource,
        ServiceKind::SelectSoundMode,
        ServiceKind::ShuffleSet,
        ServiceKind::PresetButton,
    ];

    /// Service name as it appears in the `service` field
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::TurnOff => "turn_off",
            ServiceKind::VolumeSet => "volume_set",
            ServiceKind::VolumeMute => "volume_mute",
            ServiceKind::MediaPlay => "media_play",
            ServiceKind::MediaPause => "media_pause",
            ServiceKind::MediaNextTrack => "media_next_track",
            ServiceKind::MediaPreviousTrack => "media_previous_track",
            ServiceKind::MediaSeek => "media_seek",
            ServiceKind::PlayMedia => "play_media",
            ServiceKind::SelectSource => "select_source",
            ServiceKind::SelectSoundMode => "select_sound_mode",
            ServiceKind::ShuffleSet => "shuffle_set",
            ServiceKind::PresetButton => "linkplay_preset_button",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ServiceCall {
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceCall::TurnOff => ServiceKind::TurnOff,
            ServiceCall::VolumeSet { .. } => ServiceKind::VolumeSet,
            ServiceCall::VolumeMute { .. } => ServiceKind::VolumeMute,
            ServiceCall::MediaPlay => ServiceKind::MediaPlay,
            ServiceCall::MediaPause => ServiceKind::MediaPause,
            ServiceCall::MediaNextTrack => ServiceKind::MediaNextTrack,
            ServiceCall::MediaPreviousTrack => ServiceKind::MediaPreviousTrack,
            ServiceCall::MediaSeek { .. } => ServiceKind::MediaSeek,
            ServiceCall::PlayMedia { .. } => ServiceKind::PlayMedia,
            ServiceCall::SelectSource { .. } => ServiceKind::SelectSource,
            ServiceCall::SelectSoundMode { .. } => ServiceKind::SelectSoundMode,
            ServiceCall::ShuffleSet { .. } => ServiceKind::ShuffleSet,
            ServiceCall::PresetButton { .. } => ServiceKind::PresetButton,
        }
    }

    /// Run this call against one device
    pub fn invoke<T: Transport, E: Enricher>(
        &self,
        device: &LinkPlayDevice<T, E>,
    ) -> Result<(), SdkError> {
        match self {
            ServiceCall::TurnOff => device.turn_off(),
            ServiceCall::VolumeSet { volume_level } => device.set_volume_level(*volume_level),
            ServiceCall::VolumeMute { is_volume_muted } => device.mute_volume(*is_volume_muted),
            ServiceCall::MediaPlay => device.media_play(),
            ServiceCall::MediaPause => device.media_pause(),
            ServiceCall::MediaNextTrack => device.media_next_track(),
            ServiceCall::MediaPreviousTrack => device.media_previous_track(),
            ServiceCall::MediaSeek { seek_position } => device.media_seek(*seek_position),
            ServiceCall::PlayMedia {
                media_content_type,
                media_content_id,
            } => device.play_media(*media_content_type, media_content_id),
            ServiceCall::SelectSource { source } => device.select_source(source),
            ServiceCall::SelectSoundMode { sound_mode } => device.select_sound_mode(sound_mode),
            ServiceCall::ShuffleSet { shuffle } => device.set_shuffle(*shuffle),
            ServiceCall::PresetButton { preset } => device.preset_button(*preset),
        }
    }
}

/// A service call addressed to a set of devices
///
/// Deserializes from the flat record hosts send, e.g.
/// `{"service": "linkplay_preset_button", "entity_id": ["kitchen"], "preset": 3}`.
/// An empty target list addresses no device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceRequest {
    #[serde(rename = "entity_id", default)]
    pub targets: Vec<DeviceId>,

    #[serde(flatten)]
    pub call: ServiceCall,
}

impl ServiceRequest {
    pub fn new(targets: Vec<DeviceId>, call: ServiceCall) -> Self {
        Self { targets, call }
    }
}
