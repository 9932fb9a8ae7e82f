//! State reconciler - folds a decoded status into the player state
//!
//! This is the only stateful decision point in the SDK. Most fields are
//! copied straight across on every refresh. Track metadata is different:
//! it is recomputed only when the track changes, because resolving it may
//! cost a file download and a Last.fm request.

use chrono::{DateTime, Utc};
use linkplay_api::{SoundMode, Source, MAX_VOLUME};

use crate::enrichment::{Enricher, EnrichmentPipeline};
use crate::model::{DeviceStatus, PlaybackStatus, PlayerState};

/// Placeholder the device reports for both title and artist of Spotify streams
pub const SPOTIFY_PLACEHOLDER: &str = "Unknown";

/// Display name used for Spotify streams
pub const SPOTIFY_LABEL: &str = "Spotify";

/// Loop-mode code meaning shuffle
const SHUFFLE_LOOP_CODE: &str = "2";

/// How the metadata of a new track is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Device placeholder title and artist; relabelled, no lookups
    Spotify,
    /// Zero duration; no album and no artwork
    Radio,
    /// An `.mp3` URI; tags are read from the file
    File,
    /// Anything else; device title and artist are used as-is
    Other,
}

impl TrackKind {
    /// Classify a decoded status, first match wins
    pub fn classify(status: &DeviceStatus) -> Self {
        if status.title == SPOTIFY_PLACEHOLDER && status.artist == SPOTIFY_PLACEHOLDER {
            TrackKind::Spotify
        } else if status.duration_ms == "0" {
            TrackKind::Radio
        } else if is_mp3_uri(&status.track_uri) {
            TrackKind::File
        } else {
            TrackKind::Other
        }
    }
}

/// Applies decoded statuses to a [`PlayerState`]
#[derive(Debug, Clone)]
pub struct StateReconciler<E = EnrichmentPipeline> {
    enricher: E,
}

impl<E: Enricher> StateReconciler<E> {
    pub fn new(enricher: E) -> Self {
        Self { enricher }
    }

    pub fn enricher(&self) -> &E {
        &self.enricher
    }

    /// Produce the next state from `previous` and a fresh status
    pub fn apply(&self, previous: &PlayerState, status: &DeviceStatus) -> PlayerState {
        self.apply_at(previous, status, Utc::now())
    }

    /// [`apply`](Self::apply) with an explicit refresh timestamp
    pub fn apply_at(
        &self,
        previous: &PlayerState,
        status: &DeviceStatus,
        now: DateTime<Utc>,
    ) -> PlayerState {
        let mut next = previous.clone();

        next.volume = parse_volume(&status.volume).or(previous.volume);
        next.muted = parse_flag(&status.mute).or(previous.muted);
        next.seek_position_seconds = Some(status.position_seconds());
        next.position_updated_at = Some(now);
        next.duration_seconds = Some(status.duration_seconds());
        next.status = PlaybackStatus::from_device_code(&status.status);
        next.source = Some(Source::from_mode_code(&status.mode));
        next.sound_mode = SoundMode::from_id(&status.eq);
        next.shuffle = Some(status.loop_mode == SHUFFLE_LOOP_CODE);
        next.media_uri = Some(status.track_uri.clone());
        next.device_title = Some(status.title.clone());

        if Self::is_new_track(previous, status) {
            self.resolve_metadata(&mut next, status);
        }

        next.duration_seconds = Some(status.duration_seconds());
        next
    }

    /// Whether `status` describes a different track than `previous`
    ///
    /// Compares against the title as the device reported it, never the
    /// enriched display title, so a tagged file is not re-fetched on every poll.
    pub fn is_new_track(previous: &PlayerState, status: &DeviceStatus) -> bool {
        previous.duration_seconds != Some(status.duration_seconds())
            || previous.device_title.as_deref() != Some(status.title.as_str())
    }

    fn resolve_metadata(&self, next: &mut PlayerState, status: &DeviceStatus) {
        next.media_title = Some(status.title.clone());
        next.media_artist = Some(status.artist.clone());

        let kind = TrackKind::classify(status);
        tracing::debug!("New track '{}' classified as {:?}", status.title, kind);

        match kind {
            TrackKind::Spotify => {
                next.media_title = Some(SPOTIFY_LABEL.to_string());
                next.media_artist = Some(SPOTIFY_LABEL.to_string());
            }
            TrackKind::Radio => {
                next.media_album = Some(String::new());
                next.media_image_url = None;
            }
            TrackKind::File => self.enrich_from_file(next, &status.track_uri),
            TrackKind::Other => {}
        }
    }

    fn enrich_from_file(&self, next: &mut PlayerState, uri: &str) {
        match self.enricher.enrich_from_file(uri) {
            Ok(tags) => {
                next.media_title = tags.title;
                next.media_artist = tags.artist;
                next.media_album = tags.album;

                next.media_image_url = match (&next.media_artist, &next.media_title) {
                    (Some(artist), Some(title)) if self.enricher.cover_art_enabled() => {
                        self.enricher.enrich_cover_art(artist, title)
                    }
                    _ => None,
                };
            }
            Err(e) => {
                tracing::warn!("Failed to read tags from {}: {}", uri, e);
                next.media_title = None;
                next.media_artist = None;
                next.media_album = None;
                next.media_image_url = None;
            }
        }
    }
}

impl Default for StateReconciler<EnrichmentPipeline> {
    fn default() -> Self {
        Self::new(EnrichmentPipeline::new(None))
    }
}

/// Whether the track URI points at an `.mp3` file (case-sensitive)
///
/// The query string is ignored when the URI parses as a URL.
pub fn is_mp3_uri(uri: &str) -> bool {
    match url::Url::parse(uri) {
        Ok(parsed) => parsed.path().ends_with(".mp3"),
        Err(_) => uri.ends_with(".mp3"),
    }
}

fn parse_volume(raw: &str) -> Option<u8> {
    match raw.trim().parse::<i64>() {
        Ok(volume) => Some(volume.clamp(0, i64::from(MAX_VOLUME)) as u8),
        Err(_) => {
            tracing::debug!("Keeping previous volume, device sent '{}'", raw);
            None
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}
