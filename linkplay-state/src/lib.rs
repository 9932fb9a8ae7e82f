//! Player-state reconciliation for LinkPlay devices
//!
//! This crate turns the raw `getPlayerStatus` payload into a stable
//! [`PlayerState`]:
//!
//! - [`StatusDecoder`] parses the JSON and decodes the hex text fields
//! - [`StateReconciler`] folds each decoded status into the previous state,
//!   detecting track changes and resolving metadata
//! - [`EnrichmentPipeline`] reads tags from `.mp3` files and looks up cover art
//!
//! ```rust,no_run
//! use linkplay_state::{PlayerState, StateReconciler, StatusDecoder};
//!
//! let reconciler: StateReconciler = StateReconciler::default();
//! let status = StatusDecoder::decode(r#"{"vol":"35","status":"play"}"#)?;
//! let state = reconciler.apply(&PlayerState::new(), &status);
//! assert_eq!(state.volume(), Some(35));
//! # Ok::<(), linkplay_state::DecodeError>(())
//! ```

pub mod decoder;
pub mod enrichment;
pub mod error;
pub mod logging;
pub mod model;
pub mod reconciler;

pub use decoder::StatusDecoder;
pub use enrichment::{Enricher, EnrichmentPipeline, LoftyTagReader, TagReader};
pub use error::{DecodeError, EnrichmentError};
pub use model::{DeviceStatus, PlaybackStatus, PlayerState, TrackTags};
pub use reconciler::{is_mp3_uri, StateReconciler, TrackKind};
