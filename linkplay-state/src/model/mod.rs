//! Model types for linkplay-state

mod device_status;
mod playback_status;
mod player_state;
mod track_tags;

pub use device_status::DeviceStatus;
pub use playback_status::PlaybackStatus;
pub use player_state::PlayerState;
pub use track_tags::TrackTags;
