//! Top-level application state store
//!
//! Components access state via lensing: `app.state.liked().songs()`

use super::liked::LikedState;
use super::playback::PlaybackUiState;
use dioxus::prelude::*;
use likes_common::Playlist;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Liked songs and playlists
    pub liked: LikedState,
    /// Current track and play/pause flag
    pub playback: PlaybackUiState,
    /// Playlist opened from the liked grid
    pub current_playlist: Option<Playlist>,
}
