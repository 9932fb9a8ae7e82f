//! Error types for linkplay-state

use thiserror::Error;

/// Why a status payload could not be decoded
///
/// A decode failure aborts one refresh cycle; the previous player state is
/// kept unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON
    #[error("Status payload is not JSON: {0}")]
    NotJson(String),

    /// The payload parsed, but the root is not an object
    #[error("Status payload is not a JSON object")]
    NotAnObject,

    /// A field has a type that cannot be read as text (array, object)
    #[error("Status payload has a malformed field: {0}")]
    BadField(String),

    /// A hex-encoded field is not valid hex, or does not decode to UTF-8 text
    #[error("Status field '{0}' is not valid hex-encoded text")]
    BadHexField(&'static str),
}

/// Why metadata enrichment from a track file failed
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// The track file could not be downloaded
    #[error("Failed to fetch track file: {0}")]
    Fetch(#[from] linkplay_api::HttpError),

    /// The downloaded bytes could not be parsed as a tagged audio file
    #[error("Failed to read tags: {0}")]
    Tags(String),

    /// The file parsed but carries no tag block
    #[error("Track file has no tags")]
    MissingTags,
}

/// Result type for status decoding
pub type Result<T> = std::result::Result<T, DecodeError>;
