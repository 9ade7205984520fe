//! Playback UI state store

use dioxus::prelude::*;
use likes_common::{NowPlaying, PlaybackSnapshot};

/// UI state for playback
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PlaybackUiState {
    /// Track or playlist the player is associated with
    pub current_track: Option<NowPlaying>,
    /// Only meaningful while `current_track` is set
    pub is_playing: bool,
}

impl PlaybackUiState {
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot::new(self.current_track.clone(), self.is_playing)
    }
}
