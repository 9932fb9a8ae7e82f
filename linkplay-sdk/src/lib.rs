//! # LinkPlay SDK - polling and control for LinkPlay speakers
//!
//! Provides a sync-first API for LinkPlay-based speakers on the local
//! network:
//!
//! ```rust,no_run
//! use linkplay_sdk::{DeviceConfig, LinkPlayDevice, RefreshOutcome};
//!
//! fn main() -> Result<(), linkplay_sdk::SdkError> {
//!     let config = DeviceConfig::new("192.168.1.20")
//!         .with_name("Living Room")
//!         .with_lastfm_api_key("my-api-key");
//!
//!     // First refresh happens here; an unreachable device is an error
//!     let mut device = LinkPlayDevice::connect(config)?;
//!
//!     // Host polling loop body
//!     if let RefreshOutcome::Malformed(e) = device.refresh()? {
//!         eprintln!("Skipping cycle: {}", e);
//!     }
//!     println!("{:?} by {:?}", device.media_title(), device.media_artist());
//!
//!     device.media_pause()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Reconciled state**: each refresh folds the device status into a stable player state
//! - **Cheap polling**: track metadata is only resolved when the track changes
//! - **Enrichment**: `.mp3` tracks get title/artist/album from embedded tags and cover art from Last.fm
//! - **Typed services**: host commands deserialize into [`ServiceCall`] and dispatch without string lookups
//!
//! ## Architecture
//!
//! ```text
//! linkplay-sdk (device facade, registry, services)
//!     ↓
//! linkplay-state (decode, reconcile, enrich)
//!     ↓
//! linkplay-api (commands, device and Last.fm clients)
//!     ↓
//! http-client (blocking transport)
//! ```

mod config;
mod device;
mod error;
mod registry;
mod service;

pub use config::{DeviceConfig, DEFAULT_NAME};
pub use device::{
    Feature, LinkPlayDevice, MediaType, RefreshOutcome, MEDIA_CONTENT_TYPE, SUPPORTED_FEATURES,
};
pub use error::SdkError;
pub use registry::{BatchResults, DeviceId, DeviceRegistry};
pub use service::{ServiceCall, ServiceKind, ServiceRequest};

// Re-export commonly used types from the lower layers
pub use linkplay_api::{HttpClient, LinkPlayClient, SoundMode, Source, Transport};
pub use linkplay_state::{
    logging, Enricher, EnrichmentPipeline, PlaybackStatus, PlayerState, StateReconciler,
};
