//! Source and sound-mode vocabulary
//!
//! LinkPlay devices report their input channel as a numeric `mode` code and
//! their equalizer preset as a numeric `eq` code. These tables translate both
//! into the display names hosts show to users, and back into wire tokens for
//! commands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::command::ValidationError;

/// Playback input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    WiFi,
    LineIn,
    Bluetooth,
    Optical,
    MicroSD,
}

impl Source {
    /// Every selectable source
    pub const ALL: [Source; 5] = [
        Source::WiFi,
        Source::LineIn,
        Source::Bluetooth,
        Source::Optical,
        Source::MicroSD,
    ];

    /// Map a status `mode` code to a source
    ///
    /// Unrecognized codes fall back to WiFi; the device uses several codes
    /// for network playback and new firmware keeps adding them.
    pub fn from_mode_code(code: &str) -> Self {
        match code {
            "0" | "10" | "31" => Source::WiFi,
            "40" => Source::LineIn,
            "41" => Source::Bluetooth,
            "43" => Source::Optical,
            _ => Source::WiFi,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Source::WiFi => "WiFi",
            Source::LineIn => "Line-in",
            Source::Bluetooth => "Bluetooth",
            Source::Optical => "Optical",
            Source::MicroSD => "MicroSD",
        }
    }

    /// Token used by the `switchmode` command
    pub fn wire_token(&self) -> &'static str {
        match self {
            Source::WiFi => "wifi",
            Source::LineIn => "line-in",
            Source::Bluetooth => "bluetooth",
            Source::Optical => "optical",
            Source::MicroSD => "udisk",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = ValidationError;

    /// Lookup by display name or wire token, ignoring ASCII case
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| {
                source.name().eq_ignore_ascii_case(name)
                    || source.wire_token().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ValidationError::UnknownSource(name.to_string()))
    }
}

/// Equalizer preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundMode {
    Normal,
    Classic,
    Pop,
    Jazz,
    Vocal,
}

impl SoundMode {
    /// Every sound mode the device offers
    pub const ALL: [SoundMode; 5] = [
        SoundMode::Normal,
        SoundMode::Classic,
        SoundMode::Pop,
        SoundMode::Jazz,
        SoundMode::Vocal,
    ];

    /// Map a status `eq` code to a sound mode, `None` when unknown
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "0" => Some(SoundMode::Normal),
            "1" => Some(SoundMode::Classic),
            "2" => Some(SoundMode::Pop),
            "3" => Some(SoundMode::Jazz),
            "4" => Some(SoundMode::Vocal),
            _ => None,
        }
    }

    /// Numeric id used on the wire
    pub fn id(&self) -> &'static str {
        match self {
            SoundMode::Normal => "0",
            SoundMode::Classic => "1",
            SoundMode::Pop => "2",
            SoundMode::Jazz => "3",
            SoundMode::Vocal => "4",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            SoundMode::Normal => "Normal",
            SoundMode::Classic => "Classic",
            SoundMode::Pop => "Pop",
            SoundMode::Jazz => "Jazz",
            SoundMode::Vocal => "Vocal",
        }
    }
}

impl fmt::Display for SoundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoundMode {
    type Err = ValidationError;

    /// Reverse lookup by display name (exact match)
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SoundMode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| ValidationError::UnknownSoundMode(name.to_string()))
    }
}

/// Display names of all sources, sorted alphabetically
pub fn source_list() -> Vec<&'static str> {
    let mut names: Vec<_> = Source::ALL.iter().map(Source::name).collect();
    names.sort_unstable();
    names
}

/// Display names of all sound modes, sorted alphabetically
pub fn sound_mode_list() -> Vec<&'static str> {
    let mut names: Vec<_> = SoundMode::ALL.iter().map(SoundMode::name).collect();
    names.sort_unstable();
    names
}
