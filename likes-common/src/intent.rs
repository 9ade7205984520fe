use crate::catalog::{Identified, Playlist, Track};
use crate::now_playing::{NowPlaying, PlaybackSnapshot};

/// Change requests handled by the state store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SetCurrentTrack(NowPlaying),
    SetIsPlaying(bool),
    SetCurrentPlaylist(Playlist),
    ToggleLikeSong(Track),
    ToggleLikePlaylist(Playlist),
}

/// Side effect requested by a click handler
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Dispatch(Intent),
    /// Client-side navigation to a route path
    Navigate(String),
}

/// Start `item` if it is not current, otherwise flip play/pause.
pub fn select_or_toggle(item: NowPlaying, playback: &PlaybackSnapshot) -> Vec<Intent> {
    if playback.is_current(item.id()) {
        vec![Intent::SetIsPlaying(!playback.is_playing)]
    } else {
        vec![Intent::SetCurrentTrack(item), Intent::SetIsPlaying(true)]
    }
}

pub fn playlist_route(playlist_id: &str) -> String {
    format!("/playlist/{}", playlist_id)
}

/// Make `playlist` the current playlist and navigate to its detail page
pub fn open_playlist(playlist: &Playlist) -> Vec<Effect> {
    vec![
        Effect::Dispatch(Intent::SetCurrentPlaylist(playlist.clone())),
        Effect::Navigate(playlist_route(&playlist.id)),
    ]
}
