//! High-level LinkPlay API for device control
//!
//! This crate provides typed access to the `httpapi.asp` endpoint that
//! LinkPlay-based speakers expose on the local network, plus the Last.fm
//! lookup used for cover art. It uses the private `http-client` crate for the
//! underlying blocking requests.
//!
//! ```rust,no_run
//! use linkplay_api::{Command, LinkPlayClient};
//!
//! let client = LinkPlayClient::new("192.168.1.20");
//! client.execute(&Command::set_volume_fraction(0.35)?)?;
//! client.execute(&Command::select_sound_mode("Jazz")?)?;
//! # Ok::<(), linkplay_api::ApiError>(())
//! ```

pub mod client;
pub mod command;
pub mod error;
pub mod lastfm;
pub mod mode;

pub use client::{LinkPlayClient, ACKNOWLEDGEMENT};
pub use command::{Command, ValidationError, MAX_VOLUME};
pub use error::{ApiError, Result};
pub use lastfm::LastFmClient;
pub use mode::{sound_mode_list, source_list, SoundMode, Source};

// Transport types are part of this crate's public signatures
pub use http_client::{HttpClient, HttpError, Transport};
