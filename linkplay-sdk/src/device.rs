//! LinkPlayDevice - one polled LinkPlay speaker
//!
//! The device object owns the last known [`PlayerState`]. The host drives
//! it: call [`LinkPlayDevice::refresh`] on its polling schedule and the
//! control methods in response to user actions. Calls on one device must
//! not overlap; separate devices are fully independent.

use std::fmt;

use chrono::{DateTime, Utc};
use linkplay_api::{
    sound_mode_list, source_list, ApiError, Command, HttpClient, LinkPlayClient, Transport,
};
use linkplay_state::{
    DecodeError, Enricher, EnrichmentPipeline, PlaybackStatus, PlayerState, StateReconciler,
    StatusDecoder,
};
use serde::{Deserialize, Serialize};

use crate::{DeviceConfig, SdkError};

/// Content type reported for everything the device plays
pub const MEDIA_CONTENT_TYPE: &str = "music";

/// Result of a refresh that reached the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The status was decoded and the player state reconciled
    Updated,
    /// The device answered, but with something that is not a status
    /// payload; the previous state was kept
    Malformed(DecodeError),
}

/// Media types a host may ask the device to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Music,
    Video,
    Playlist,
    Channel,
    Podcast,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Music => "music",
            MediaType::Video => "video",
            MediaType::Playlist => "playlist",
            MediaType::Channel => "channel",
            MediaType::Podcast => "podcast",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations a LinkPlay device supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    TurnOff,
    VolumeSet,
    VolumeMute,
    Play,
    Pause,
    NextTrack,
    PreviousTrack,
    Seek,
    PlayMedia,
    SelectSource,
    SelectSoundMode,
    ShuffleSet,
}

/// Every feature, in the order hosts usually list them
pub const SUPPORTED_FEATURES: &[Feature] = &[
    Feature::TurnOff,
    Feature::VolumeSet,
    Feature::VolumeMute,
    Feature::Play,
    Feature::Pause,
    Feature::NextTrack,
    Feature::PreviousTrack,
    Feature::Seek,
    Feature::PlayMedia,
    Feature::SelectSource,
    Feature::SelectSoundMode,
    Feature::ShuffleSet,
];

/// A LinkPlay speaker, its control client and its reconciled state
///
/// # Example
///
/// ```rust,no_run
/// use linkplay_sdk::{DeviceConfig, LinkPlayDevice};
///
/// fn main() -> Result<(), linkplay_sdk::SdkError> {
///     let config = DeviceConfig::new("192.168.1.20").with_name("Kitchen");
///     let mut device = LinkPlayDevice::connect(config)?;
///
///     device.set_volume_level(0.35)?;
///     device.refresh()?;
///     println!("{:?} - {:?}", device.media_artist(), device.media_title());
///     Ok(())
/// }
/// ```
pub struct LinkPlayDevice<T = HttpClient, E = EnrichmentPipeline> {
    name: String,
    client: LinkPlayClient<T>,
    reconciler: StateReconciler<E>,
    state: PlayerState,
}

impl LinkPlayDevice<HttpClient, EnrichmentPipeline> {
    /// Create a device from its configuration and perform the first refresh
    ///
    /// Fails with [`SdkError::NotReady`] when the device cannot be reached.
    /// A reachable device that answers with a malformed status still counts
    /// as ready.
    pub fn connect(config: DeviceConfig) -> Result<Self, SdkError> {
        config.validate()?;

        let client = LinkPlayClient::new(config.host);
        let reconciler = StateReconciler::new(EnrichmentPipeline::new(config.lastfm_api_key));

        let mut device = Self::from_parts(config.name, client, reconciler);
        device.start()?;
        Ok(device)
    }
}

impl<T: Transport, E: Enricher> LinkPlayDevice<T, E> {
    /// Assemble a device without contacting it
    pub fn from_parts(
        name: impl Into<String>,
        client: LinkPlayClient<T>,
        reconciler: StateReconciler<E>,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            reconciler,
            state: PlayerState::new(),
        }
    }

    /// First refresh; an unreachable device becomes [`SdkError::NotReady`]
    pub fn start(&mut self) -> Result<RefreshOutcome, SdkError> {
        match self.refresh() {
            Err(SdkError::Api(source)) => Err(SdkError::NotReady {
                host: self.client.host().to_string(),
                source,
            }),
            other => other,
        }
    }

    /// Poll the device and fold its status into the player state
    ///
    /// Only a failed status fetch is an error. A payload that cannot be
    /// decoded is logged and reported as [`RefreshOutcome::Malformed`]; the
    /// previous state is kept in that case.
    pub fn refresh(&mut self) -> Result<RefreshOutcome, SdkError> {
        let raw = self.client.player_status().map_err(|e| {
            tracing::error!("Failed to fetch status of {}: {}", self.name, e);
            e
        })?;

        let status = match StatusDecoder::decode(&raw) {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Status of {} could not be decoded: {}", self.name, e);
                tracing::debug!("Erroneous payload: {}", raw);
                return Ok(RefreshOutcome::Malformed(e));
            }
        };

        self.state = self.reconciler.apply(&self.state, &status);
        Ok(RefreshOutcome::Updated)
    }

    // ========================================================================
    // Controls
    // ========================================================================

    pub fn turn_off(&self) -> Result<(), SdkError> {
        self.send(Command::PowerOff)
    }

    /// Set the volume from a 0..1 fraction
    pub fn set_volume_level(&self, level: f64) -> Result<(), SdkError> {
        let command = Command::set_volume_fraction(level)
            .map_err(|e| self.rejected("set volume", e.into()))?;
        self.send(command)
    }

    pub fn mute_volume(&self, mute: bool) -> Result<(), SdkError> {
        self.send(Command::Mute(mute))
    }

    pub fn media_play(&self) -> Result<(), SdkError> {
        self.send(Command::Play)
    }

    pub fn media_pause(&self) -> Result<(), SdkError> {
        self.send(Command::Pause)
    }

    pub fn media_next_track(&self) -> Result<(), SdkError> {
        self.send(Command::Next)
    }

    pub fn media_previous_track(&self) -> Result<(), SdkError> {
        self.send(Command::Previous)
    }

    /// Seek to `position` seconds into the current track
    ///
    /// Fractional seconds are truncated; negative positions are rejected.
    pub fn media_seek(&self, position: f64) -> Result<(), SdkError> {
        let command =
            Command::seek_seconds(position).map_err(|e| self.rejected("seek", e.into()))?;
        self.send(command)
    }

    /// Play a URL; only [`MediaType::Music`] is supported
    pub fn play_media(&self, media_type: MediaType, media_id: &str) -> Result<(), SdkError> {
        if media_type != MediaType::Music {
            tracing::error!(
                "Invalid media type {}. Only {} is supported",
                media_type,
                MediaType::Music
            );
            return Err(SdkError::UnsupportedMediaType(media_type.to_string()));
        }
        self.send(Command::PlayUri(media_id.to_string()))
    }

    /// Switch input by display name (see [`source_list`](Self::source_list))
    pub fn select_source(&self, source: &str) -> Result<(), SdkError> {
        let command = Command::select_source(source)
            .map_err(|e| self.rejected("select source", e.into()))?;
        self.send(command)
    }

    /// Switch equalizer preset by display name
    pub fn select_sound_mode(&self, sound_mode: &str) -> Result<(), SdkError> {
        let command = Command::select_sound_mode(sound_mode)
            .map_err(|e| self.rejected("set sound mode", e.into()))?;
        self.send(command)
    }

    pub fn set_shuffle(&self, shuffle: bool) -> Result<(), SdkError> {
        self.send(Command::SetShuffle(shuffle))
    }

    /// Simulate pressing physical preset button `preset`
    pub fn preset_button(&self, preset: u32) -> Result<(), SdkError> {
        self.send(Command::PresetButton(preset))
    }

    fn send(&self, command: Command) -> Result<(), SdkError> {
        self.client
            .execute(&command)
            .map_err(|e| self.rejected(command.description(), e))
    }

    fn rejected(&self, operation: &str, error: ApiError) -> SdkError {
        tracing::warn!("Failed to {} on {}: {}", operation, self.name, error);
        SdkError::Api(error)
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        self.client.host()
    }

    /// Full reconciled state
    pub fn player_state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state(&self) -> PlaybackStatus {
        self.state.status()
    }

    /// Volume as a 0..1 fraction
    pub fn volume_level(&self) -> Option<f64> {
        self.state.volume_level()
    }

    pub fn is_volume_muted(&self) -> Option<bool> {
        self.state.is_muted()
    }

    /// Display name of the current input
    pub fn source(&self) -> Option<&'static str> {
        self.state.source().map(|source| source.name())
    }

    pub fn source_list(&self) -> Vec<&'static str> {
        source_list()
    }

    pub fn sound_mode(&self) -> Option<&'static str> {
        self.state.sound_mode().map(|mode| mode.name())
    }

    pub fn sound_mode_list(&self) -> Vec<&'static str> {
        sound_mode_list()
    }

    /// Seconds into the current track
    pub fn media_position(&self) -> Option<u64> {
        self.state.seek_position()
    }

    /// Length of the current track in seconds
    pub fn media_duration(&self) -> Option<u64> {
        self.state.duration()
    }

    pub fn media_position_updated_at(&self) -> Option<DateTime<Utc>> {
        self.state.position_updated_at()
    }

    pub fn shuffle(&self) -> Option<bool> {
        self.state.shuffle()
    }

    pub fn media_title(&self) -> Option<&str> {
        self.state.media_title()
    }

    pub fn media_artist(&self) -> Option<&str> {
        self.state.media_artist()
    }

    pub fn media_album_name(&self) -> Option<&str> {
        self.state.media_album()
    }

    pub fn media_image_url(&self) -> Option<&str> {
        self.state.media_image_url()
    }

    pub fn media_content_type(&self) -> &'static str {
        MEDIA_CONTENT_TYPE
    }

    pub fn supported_features(&self) -> &'static [Feature] {
        SUPPORTED_FEATURES
    }
}

impl<T, E> fmt::Debug for LinkPlayDevice<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkPlayDevice")
            .field("name", &self.name)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
