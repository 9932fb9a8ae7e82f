//! Metadata enrichment for file-backed tracks
//!
//! When the device plays an `.mp3` the status payload often carries nothing
//! better than the file name. The pipeline downloads the file, reads its
//! embedded tags and, when a Last.fm key is configured, looks up cover art.

use std::io::Cursor;

use linkplay_api::{HttpClient, LastFmClient, Transport};
use lofty::{config::ParseOptions, prelude::*, probe::Probe};

use crate::error::EnrichmentError;
use crate::model::TrackTags;

/// Extracts title/artist/album from the bytes of an audio file
pub trait TagReader {
    fn read_tags(&self, data: &[u8]) -> Result<TrackTags, EnrichmentError>;
}

/// [`TagReader`] backed by `lofty`
///
/// Uses the primary tag of the file (ID3v2 for MP3), falling back to the
/// first tag found.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, data: &[u8]) -> Result<TrackTags, EnrichmentError> {
        let tagged_file = Probe::new(Cursor::new(data))
            .options(ParseOptions::new())
            .guess_file_type()
            .map_err(|e| EnrichmentError::Tags(e.to_string()))?
            .read()
            .map_err(|e| EnrichmentError::Tags(e.to_string()))?;

        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .ok_or(EnrichmentError::MissingTags)?;

        Ok(TrackTags {
            title: tag.title().map(|s| s.to_string()),
            artist: tag.artist().map(|s| s.to_string()),
            album: tag.album().map(|s| s.to_string()),
        })
    }
}

/// The enrichment operations the reconciler relies on
pub trait Enricher {
    /// Download `uri` and read its embedded tags
    fn enrich_from_file(&self, uri: &str) -> Result<TrackTags, EnrichmentError>;

    /// Whether a metadata-service key is configured
    fn cover_art_enabled(&self) -> bool;

    /// Look up a cover image URL; `None` on any failure
    fn enrich_cover_art(&self, artist: &str, title: &str) -> Option<String>;
}

/// Default [`Enricher`]: HTTP download + tag reader + optional Last.fm
#[derive(Debug, Clone)]
pub struct EnrichmentPipeline<T = HttpClient, R = LoftyTagReader> {
    transport: T,
    tag_reader: R,
    cover_art: Option<LastFmClient<T>>,
}

impl EnrichmentPipeline<HttpClient, LoftyTagReader> {
    /// Pipeline using the default transport and tag reader
    ///
    /// Cover-art lookups are enabled only when `lastfm_api_key` is given.
    pub fn new(lastfm_api_key: Option<String>) -> Self {
        let transport = HttpClient::new();
        let cover_art = lastfm_api_key
            .filter(|key| !key.is_empty())
            .map(|key| LastFmClient::with_transport(key, transport.clone()));

        Self::with_parts(transport, LoftyTagReader, cover_art)
    }
}

impl<T: Transport, R: TagReader> EnrichmentPipeline<T, R> {
    pub fn with_parts(transport: T, tag_reader: R, cover_art: Option<LastFmClient<T>>) -> Self {
        Self {
            transport,
            tag_reader,
            cover_art,
        }
    }
}

impl<T: Transport, R: TagReader> Enricher for EnrichmentPipeline<T, R> {
    fn enrich_from_file(&self, uri: &str) -> Result<TrackTags, EnrichmentError> {
        tracing::debug!("Reading tags from {}", uri);
        let data = self.transport.get_bytes(uri)?;
        self.tag_reader.read_tags(&data)
    }

    fn cover_art_enabled(&self) -> bool {
        self.cover_art.is_some()
    }

    fn enrich_cover_art(&self, artist: &str, title: &str) -> Option<String> {
        self.cover_art
            .as_ref()
            .and_then(|client| client.cover_art(artist, title))
    }
}
