//! Decoded device status record

/// One decoded `getPlayerStatus` payload
///
/// Numeric fields are kept in the textual form the device sent; the
/// reconciler decides how to interpret them. The three hex-encoded fields
/// (`iuri`, `Title`, `Artist`) are already decoded to text here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceStatus {
    /// `vol`, 0..100
    pub volume: String,
    /// `mute`, "0" or "1"
    pub mute: String,
    /// `curpos`, milliseconds
    pub position_ms: String,
    /// `totlen`, milliseconds; "0" for live streams
    pub duration_ms: String,
    /// `status`: "play", "pause" or "stop"
    pub status: String,
    /// `mode`, input source code
    pub mode: String,
    /// `eq`, sound mode code
    pub eq: String,
    /// `loop`, loop mode code ("2" is shuffle)
    pub loop_mode: String,
    /// `iuri`, decoded track URI
    pub track_uri: String,
    /// `Title`, decoded
    pub title: String,
    /// `Artist`, decoded
    pub artist: String,
}

impl DeviceStatus {
    /// Playback position in whole seconds (truncated)
    pub fn position_seconds(&self) -> u64 {
        millis_to_seconds(&self.position_ms)
    }

    /// Track duration in whole seconds (truncated)
    pub fn duration_seconds(&self) -> u64 {
        millis_to_seconds(&self.duration_ms)
    }
}

/// Integer-divide a millisecond count by 1000
///
/// Unparsable or negative values count as zero.
fn millis_to_seconds(millis: &str) -> u64 {
    match millis.trim().parse::<u64>() {
        Ok(ms) => ms / 1000,
        Err(_) => {
            if !millis.is_empty() {
                tracing::debug!("Ignoring non-numeric millisecond value '{}'", millis);
            }
            0
        }
    }
}
