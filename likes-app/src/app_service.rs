//! AppService - owns the reactive state and applies dispatched intents
//!
//! UI components access AppService via `use_app()` and:
//! - Read state reactively from `app.state`
//! - Report change requests with `app.dispatch(intent)`
//! - Request route changes with `app.navigate(path)`

use crate::app::{AppContext, Route};
use dioxus::prelude::*;
use likes_common::{toggle_liked, Intent, Playlist};
use likes_ui::stores::{
    AppState, AppStateStoreExt, LikedState, LikedStateStoreExt, PlaybackUiStateStoreExt,
};
use tracing::{debug, info, warn};

/// Main application service that encapsulates state.
///
/// Created inside the Dioxus component tree because Store<AppState> is not Send-safe.
/// Access via `use_app()` from any component.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state (Store for fine-grained reactivity)
    pub state: Store<AppState>,
}

impl AppService {
    pub fn new(context: &AppContext) -> Self {
        Self {
            state: Store::new(AppState {
                liked: LikedState::from(context.liked.clone()),
                ..Default::default()
            }),
        }
    }

    /// Apply one intent to the store
    pub fn dispatch(&self, intent: Intent) {
        debug!("Dispatching {:?}", intent);
        match intent {
            Intent::SetCurrentTrack(item) => {
                self.state.playback().current_track().set(Some(item));
            }
            Intent::SetIsPlaying(is_playing) => {
                self.state.playback().is_playing().set(is_playing);
            }
            Intent::SetCurrentPlaylist(playlist) => {
                self.state.current_playlist().set(Some(playlist));
            }
            Intent::ToggleLikeSong(track) => {
                let id = track.id.clone();
                let liked = toggle_liked(&mut *self.state.liked().songs().write(), track);
                info!("Song {} {}", id, if liked { "liked" } else { "unliked" });
            }
            Intent::ToggleLikePlaylist(playlist) => {
                let id = playlist.id.clone();
                let liked = toggle_liked(&mut *self.state.liked().playlists().write(), playlist);
                info!("Playlist {} {}", id, if liked { "liked" } else { "unliked" });
            }
        }
    }

    /// Navigate to a route path such as `/playlist/<id>`
    pub fn navigate(&self, path: &str) {
        match parse_route(path) {
            Some(route) => {
                info!("Navigating to {}", path);
                navigator().push(route);
            }
            None => warn!("No route matches {}", path),
        }
    }

    /// Playlist shown on its detail page
    pub fn playlist_for_route(&self, playlist_id: &str) -> Option<Playlist> {
        let current = self.state.current_playlist().read().clone();
        let liked = self.state.liked().playlists().read().clone();
        resolve_playlist(current, &liked, playlist_id)
    }
}

/// Route for a path, if any route matches it
pub fn parse_route(path: &str) -> Option<Route> {
    path.parse::<Route>().ok()
}

/// The current playlist when its id matches, otherwise the liked playlist
/// with that id.
pub fn resolve_playlist(
    current: Option<Playlist>,
    liked: &[Playlist],
    playlist_id: &str,
) -> Option<Playlist> {
    current
        .filter(|p| p.id == playlist_id)
        .or_else(|| liked.iter().find(|p| p.id == playlist_id).cloned())
}

/// Hook to access the AppService from any component
pub fn use_app() -> AppService {
    use_context::<AppService>()
}
