//! Last.fm metadata client used for cover-art lookups

use http_client::{HttpClient, Transport};
use serde_json::Value;
use url::form_urlencoded;

use crate::{ApiError, Result};

/// Base of every Last.fm API request; the method name is appended directly
pub const LASTFM_API_BASE: &str = "http://ws.audioscrobbler.com/2.0/?method=";

/// Position of the cover image in Last.fm's size-ordered `image` array
///
/// Index 2 is the "large" rendition. This is an assumption about the
/// service's ordering, not something the response describes.
pub const COVER_IMAGE_INDEX: usize = 2;

/// Client for the Last.fm REST API
#[derive(Debug, Clone)]
pub struct LastFmClient<T = HttpClient> {
    api_key: String,
    base_url: String,
    transport: T,
}

impl LastFmClient<HttpClient> {
    /// Create a client for `api_key` using the default HTTP transport
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, HttpClient::new())
    }
}

impl<T: Transport> LastFmClient<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: LASTFM_API_BASE.to_string(),
            transport,
        }
    }

    /// Point the client at a different API root (must end in `method=`)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request URL for `track.getInfo`
    pub fn track_info_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}track.getInfo&artist={}&track={}&api_key={}&format=json",
            self.base_url,
            encode(artist),
            encode(title),
            self.api_key
        )
    }

    /// Fetch the raw `track.getInfo` response
    pub fn track_info(&self, artist: &str, title: &str) -> Result<String> {
        let url = self.track_info_url(artist, title);
        Ok(self.transport.get_text(&url)?)
    }

    /// Look up the cover image URL for a track
    ///
    /// Any failure (network, malformed JSON, missing nested fields, empty
    /// URL) yields `None`; cover art is strictly best-effort.
    pub fn cover_art(&self, artist: &str, title: &str) -> Option<String> {
        let body = match self.track_info(artist, title) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Cover art lookup for '{} - {}' failed: {}", artist, title, e);
                return None;
            }
        };

        match parse_cover_art(&body) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("No usable cover art in Last.fm response: {}", e);
                None
            }
        }
    }
}

/// Extract `track.album.image[2].#text` from a `track.getInfo` response
///
/// Returns `Ok(None)` when the path exists but holds an empty string.
pub fn parse_cover_art(body: &str) -> Result<Option<String>> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    let text = json
        .get("track")
        .and_then(|track| track.get("album"))
        .and_then(|album| album.get("image"))
        .and_then(|images| images.get(COVER_IMAGE_INDEX))
        .and_then(|image| image.get("#text"))
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Parse("missing track.album.image[2].#text".to_string()))?;

    Ok(Some(text.to_string()).filter(|url| !url.is_empty()))
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
