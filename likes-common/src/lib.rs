//! likes-common - Pure domain logic for the liked content page
//!
//! Catalog types, the now-playing model, the intents views dispatch, and the
//! click propagation contract for nested clickable regions. Nothing here
//! touches a UI framework, so every rule can be tested directly.

pub mod catalog;
pub mod click;
pub mod duration;
pub mod intent;
pub mod liked;
pub mod now_playing;

pub use catalog::{
    Album, Artist, Identified, Image, LikedCollections, Playlist, Track, PLAYLIST_PLACEHOLDER,
    TRACK_PLACEHOLDER,
};
pub use click::{
    dispatch_click, playlist_card_handler, song_row_handler, CardRegion, ClickRegion, Handled,
    Propagation, SongRegion,
};
pub use duration::format_duration;
pub use intent::{open_playlist, playlist_route, select_or_toggle, Effect, Intent};
pub use liked::toggle_liked;
pub use now_playing::{NowPlaying, PlaybackSnapshot};
