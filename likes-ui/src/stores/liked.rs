//! Liked content store

use dioxus::prelude::*;
use likes_common::{LikedCollections, Playlist, Track};

/// Liked songs and playlists in display order
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct LikedState {
    pub songs: Vec<Track>,
    pub playlists: Vec<Playlist>,
}

impl From<LikedCollections> for LikedState {
    fn from(liked: LikedCollections) -> Self {
        Self {
            songs: liked.liked_songs,
            playlists: liked.liked_playlists,
        }
    }
}
