//! Tags read from a track file

use serde::{Deserialize, Serialize};

/// Title/artist/album as embedded in an audio file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}
