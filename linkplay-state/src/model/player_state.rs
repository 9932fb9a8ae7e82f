//! Normalized player state

use chrono::{DateTime, Utc};
use linkplay_api::{SoundMode, Source, MAX_VOLUME};
use serde::Serialize;

use super::PlaybackStatus;

/// Stable, normalized view of one device
///
/// Created empty when the device object is constructed and replaced on each
/// successful refresh by [`StateReconciler::apply`](crate::StateReconciler::apply).
/// Fields are only written by the reconciler; hosts read them through the
/// accessors.
///
/// `seek_position <= duration` is not guaranteed: both come straight from
/// independent device fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerState {
    pub(crate) status: PlaybackStatus,
    pub(crate) volume: Option<u8>,
    pub(crate) muted: Option<bool>,
    pub(crate) source: Option<Source>,
    pub(crate) sound_mode: Option<SoundMode>,
    pub(crate) shuffle: Option<bool>,
    pub(crate) seek_position_seconds: Option<u64>,
    pub(crate) duration_seconds: Option<u64>,
    pub(crate) position_updated_at: Option<DateTime<Utc>>,
    pub(crate) media_title: Option<String>,
    pub(crate) media_artist: Option<String>,
    pub(crate) media_album: Option<String>,
    pub(crate) media_image_url: Option<String>,

    /// Raw track URI reported by the device
    #[serde(skip)]
    pub(crate) media_uri: Option<String>,

    /// Title exactly as the device last reported it, before any enrichment;
    /// used for track-change detection
    #[serde(skip)]
    pub(crate) device_title: Option<String>,
}

impl PlayerState {
    /// Create an empty state (nothing known yet)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Volume as an integer percentage
    pub fn volume(&self) -> Option<u8> {
        self.volume
    }

    /// Volume as a 0..1 fraction
    pub fn volume_level(&self) -> Option<f64> {
        self.volume
            .map(|volume| f64::from(volume) / f64::from(MAX_VOLUME))
    }

    pub fn is_muted(&self) -> Option<bool> {
        self.muted
    }

    pub fn source(&self) -> Option<Source> {
        self.source
    }

    pub fn sound_mode(&self) -> Option<SoundMode> {
        self.sound_mode
    }

    pub fn shuffle(&self) -> Option<bool> {
        self.shuffle
    }

    /// Playback position in seconds
    pub fn seek_position(&self) -> Option<u64> {
        self.seek_position_seconds
    }

    /// Track duration in seconds
    pub fn duration(&self) -> Option<u64> {
        self.duration_seconds
    }

    /// When the seek position was last refreshed
    pub fn position_updated_at(&self) -> Option<DateTime<Utc>> {
        self.position_updated_at
    }

    pub fn media_title(&self) -> Option<&str> {
        self.media_title.as_deref()
    }

    pub fn media_artist(&self) -> Option<&str> {
        self.media_artist.as_deref()
    }

    pub fn media_album(&self) -> Option<&str> {
        self.media_album.as_deref()
    }

    pub fn media_image_url(&self) -> Option<&str> {
        self.media_image_url.as_deref()
    }

    pub(crate) fn media_uri(&self) -> Option<&str> {
        self.media_uri.as_deref()
    }
}
