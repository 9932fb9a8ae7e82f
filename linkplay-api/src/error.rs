use http_client::HttpError;
use thiserror::Error;

use crate::command::ValidationError;

/// High-level API errors for LinkPlay operations
///
/// Every failure a command or status request can produce falls into one of
/// these buckets. Only [`ApiError::Transport`] means the device could not be
/// reached at all.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// No response was received: connection refused, DNS failure, timeout.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The device replied, but not with the literal `OK` acknowledgement
    #[error("Command '{command}' was not acknowledged, device replied: {response}")]
    NotAcknowledged {
        /// Wire form of the command that was sent
        command: String,
        /// Raw text the device answered with
        response: String,
    },

    /// Invalid parameter value, rejected before anything was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),

    /// Response parsing error
    ///
    /// The remote side answered but the payload had an unexpected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the failure means the remote side was unreachable
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
