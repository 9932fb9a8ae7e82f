use linkplay_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Device at {host} is not ready: {source}")]
    NotReady {
        host: String,
        #[source]
        source: ApiError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid media type {0}. Only music is supported")]
    UnsupportedMediaType(String),

    #[error("Device not found: {0}")]
    DeviceNotFound(String),
}

impl SdkError {
    /// Whether the device could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        match self {
            SdkError::Api(e) => e.is_transport(),
            SdkError::NotReady { .. } => true,
            _ => false,
        }
    }
}
