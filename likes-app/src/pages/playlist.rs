//! Playlist detail page

use crate::app::Route;
use crate::app_service::use_app;
use crate::components::NowPlayingBar;
use dioxus::prelude::*;
use likes_common::Intent;
use likes_ui::stores::AppStateStoreExt;
use likes_ui::PlaylistDetailView;

#[component]
pub fn PlaylistDetail(playlist_id: String) -> Element {
    let app = use_app();
    let playlist = app.playlist_for_route(&playlist_id);
    let playback = app.state.playback().read().snapshot();

    rsx! {
        PlaylistDetailView {
            playlist,
            playback,
            on_back: move |_| {
                navigator().push(Route::Likes {});
            },
            on_dispatch: move |intent: Intent| app.dispatch(intent),
        }
        NowPlayingBar {}
    }
}
