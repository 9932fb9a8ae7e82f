//! Device command encoding
//!
//! LinkPlay devices take a single-line command grammar, `verb:arg1:arg2`,
//! passed as the `command` query parameter of `httpapi.asp`. Each variant of
//! [`Command`] is one operation; [`Command::encode`] is pure formatting.
//! Argument validation happens in the constructors so that an encoded
//! command is always well-formed.

use std::fmt;

use crate::mode::{SoundMode, Source};

/// Highest volume the device accepts
pub const MAX_VOLUME: u8 = 100;

/// Validation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Unknown sound mode '{0}'")]
    UnknownSoundMode(String),

    #[error("Unknown source '{0}'")]
    UnknownSource(String),
}

impl ValidationError {
    pub fn range_error(
        parameter: &str,
        min: impl fmt::Display,
        max: impl fmt::Display,
        value: impl fmt::Display,
    ) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl fmt::Display, reason: &str) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A control operation understood by the device
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Status query; answered with JSON rather than `OK`
    GetPlayerStatus,
    PowerOff,
    /// Absolute volume, 0..=100
    SetVolume(u8),
    Mute(bool),
    Play,
    Pause,
    Next,
    Previous,
    /// Seek to an absolute position in whole seconds
    Seek(u64),
    /// Start playback of a URI
    PlayUri(String),
    /// Switch input
    SelectSource(Source),
    SelectSoundMode(SoundMode),
    SetShuffle(bool),
    /// Simulate a press of a physical preset button
    PresetButton(u32),
}

impl Command {
    /// Build a volume command from a 0..1 fraction
    ///
    /// The fraction is scaled to 0..100 and rounded to the nearest integer.
    /// Values outside the range are clamped; NaN is rejected.
    pub fn set_volume_fraction(level: f64) -> Result<Self, ValidationError> {
        if level.is_nan() {
            return Err(ValidationError::invalid_value(
                "volume",
                level,
                "not a number",
            ));
        }

        let scaled = (level * f64::from(MAX_VOLUME)).round();
        let volume = scaled.clamp(0.0, f64::from(MAX_VOLUME)) as u8;
        if scaled != f64::from(volume) {
            tracing::debug!("Clamped volume {} to {}", level, volume);
        }

        Ok(Command::SetVolume(volume))
    }

    /// Build an absolute volume command, rejecting values above 100
    pub fn set_volume(volume: u8) -> Result<Self, ValidationError> {
        if volume > MAX_VOLUME {
            return Err(ValidationError::range_error("volume", 0, MAX_VOLUME, volume));
        }
        Ok(Command::SetVolume(volume))
    }

    /// Build a seek command from a position in seconds
    ///
    /// Fractional positions are truncated to whole seconds, which is the
    /// resolution the device seeks at. Negative and non-finite positions
    /// are rejected.
    pub fn seek_seconds(position: f64) -> Result<Self, ValidationError> {
        if !position.is_finite() || position < 0.0 {
            return Err(ValidationError::invalid_value(
                "position",
                position,
                "must be a finite, non-negative number of seconds",
            ));
        }
        Ok(Command::Seek(position.trunc() as u64))
    }

    /// Build a source command from a display name or wire token
    pub fn select_source(name: &str) -> Result<Self, ValidationError> {
        Ok(Command::SelectSource(name.parse()?))
    }

    /// Build a sound-mode command from its display name
    pub fn select_sound_mode(name: &str) -> Result<Self, ValidationError> {
        Ok(Command::SelectSoundMode(name.parse()?))
    }

    /// Whether the device answers this command with the literal `OK`
    pub fn expects_acknowledgement(&self) -> bool {
        !matches!(self, Command::GetPlayerStatus)
    }

    /// Short human-readable description used in log messages
    pub fn description(&self) -> &'static str {
        match self {
            Command::GetPlayerStatus => "fetch player status",
            Command::PowerOff => "power off the device",
            Command::SetVolume(_) => "set volume",
            Command::Mute(_) => "mute/unmute volume",
            Command::Play => "start playback",
            Command::Pause => "pause playback",
            Command::Next => "skip to next track",
            Command::Previous => "skip to previous track",
            Command::Seek(_) => "seek",
            Command::PlayUri(_) => "play media",
            Command::SelectSource(_) => "select source",
            Command::SelectSoundMode(_) => "set sound mode",
            Command::SetShuffle(_) => "change shuffle mode",
            Command::PresetButton(_) => "press preset button",
        }
    }

    /// Encode into the device's single-line command grammar
    pub fn encode(&self) -> String {
        match self {
            Command::GetPlayerStatus => "getPlayerStatus".to_string(),
            Command::PowerOff => "getShutdown".to_string(),
            Command::SetVolume(volume) => format!("setPlayerCmd:vol:{}", volume),
            Command::Mute(mute) => format!("setPlayerCmd:mute:{}", u8::from(*mute)),
            Command::Play => "setPlayerCmd:play".to_string(),
            Command::Pause => "setPlayerCmd:pause".to_string(),
            Command::Next => "setPlayerCmd:next".to_string(),
            Command::Previous => "setPlayerCmd:prev".to_string(),
            Command::Seek(position) => format!("setPlayerCmd:seek:{}", position),
            Command::PlayUri(uri) => format!("setPlayerCmd:play:{}", uri),
            Command::SelectSource(source) => {
                format!("setPlayerCmd:switchmode:{}", source.wire_token())
            }
            Command::SelectSoundMode(mode) => format!("setPlayerCmd:equalizer:{}", mode.id()),
            Command::SetShuffle(shuffle) => {
                format!("setPlayerCmd:loopmode:{}", if *shuffle { "2" } else { "0" })
            }
            Command::PresetButton(preset) => format!("IOSimuKeyIn:{:03}", preset),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
