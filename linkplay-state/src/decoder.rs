//! Status decoder - converts raw `getPlayerStatus` text into a [`DeviceStatus`]
//!
//! Only structure is checked here: the payload must be a JSON object and
//! the three hex fields must decode to text. Everything else is carried
//! through as text for the reconciler to interpret.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::model::DeviceStatus;

/// Stateless decoder for the device status payload
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusDecoder;

impl StatusDecoder {
    /// Decode one raw status payload
    pub fn decode(raw: &str) -> Result<DeviceStatus> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DecodeError::NotJson(e.to_string()))?;

        if !value.is_object() {
            return Err(DecodeError::NotAnObject);
        }

        let payload =
            RawPlayerStatus::deserialize(value).map_err(|e| DecodeError::BadField(e.to_string()))?;

        Ok(DeviceStatus {
            track_uri: decode_hex_field("iuri", &payload.iuri)?,
            title: decode_hex_field("Title", &payload.title)?,
            artist: decode_hex_field("Artist", &payload.artist)?,
            volume: payload.vol,
            mute: payload.mute,
            position_ms: payload.curpos,
            duration_ms: payload.totlen,
            status: payload.status,
            mode: payload.mode,
            eq: payload.eq,
            loop_mode: payload.loop_mode,
        })
    }
}

/// The fields of the device payload this crate consumes
///
/// Missing fields read as empty strings. Firmware versions disagree on
/// whether numbers are quoted, so every field accepts either form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPlayerStatus {
    #[serde(deserialize_with = "lenient_string")]
    vol: String,
    #[serde(deserialize_with = "lenient_string")]
    mute: String,
    #[serde(deserialize_with = "lenient_string")]
    curpos: String,
    #[serde(deserialize_with = "lenient_string")]
    totlen: String,
    #[serde(deserialize_with = "lenient_string")]
    status: String,
    #[serde(deserialize_with = "lenient_string")]
    mode: String,
    #[serde(deserialize_with = "lenient_string")]
    eq: String,
    #[serde(rename = "loop", deserialize_with = "lenient_string")]
    loop_mode: String,
    #[serde(deserialize_with = "lenient_string")]
    iuri: String,
    #[serde(rename = "Title", deserialize_with = "lenient_string")]
    title: String,
    #[serde(rename = "Artist", deserialize_with = "lenient_string")]
    artist: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Number(number)) => number.to_string(),
        Some(Scalar::Flag(flag)) => u8::from(flag).to_string(),
    })
}

/// Decode a hex-encoded UTF-8 field
fn decode_hex_field(field: &'static str, encoded: &str) -> Result<String> {
    let bytes = hex::decode(encoded.trim()).map_err(|_| DecodeError::BadHexField(field))?;
    String::from_utf8(bytes).map_err(|_| DecodeError::BadHexField(field))
}
