//! Now Playing Bar component
//!
//! Wrapper that passes the playback store to NowPlayingBarView.

use crate::app_service::use_app;
use dioxus::prelude::*;
use likes_common::Intent;
use likes_ui::stores::AppStateStoreExt;
use likes_ui::NowPlayingBarView;

/// Now Playing Bar - passes playback store to view
#[component]
pub fn NowPlayingBar() -> Element {
    let app = use_app();
    let state = app.state.playback();

    rsx! {
        NowPlayingBarView {
            state,
            on_dispatch: move |intent: Intent| app.dispatch(intent),
        }
    }
}
