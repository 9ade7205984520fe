//! Liked content page
//!
//! Uses likes-ui's LikedContentView with app-specific dispatch and navigation.

use crate::app_service::use_app;
use crate::components::NowPlayingBar;
use dioxus::prelude::*;
use likes_common::Intent;
use likes_ui::stores::AppStateStoreExt;
use likes_ui::LikedContentView;

/// Liked content page - passes state lenses to the view, don't read here
#[component]
pub fn Likes() -> Element {
    let app = use_app();
    let liked = app.state.liked();
    let playback = app.state.playback();

    let on_dispatch = {
        let app = app.clone();
        move |intent: Intent| app.dispatch(intent)
    };

    let on_navigate = move |path: String| app.navigate(&path);

    rsx! {
        LikedContentView {
            liked,
            playback,
            on_dispatch,
            on_navigate,
            control_panel: rsx! {
                NowPlayingBar {}
            },
        }
    }
}
