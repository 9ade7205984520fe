//! Now Playing Bar view component
//!
//! Pure, props-based control panel pinned to the bottom of the page.
//! There is no audio engine behind it; it only flips the play/pause flag.

use crate::components::icons::{PauseIcon, PlayIcon};
use crate::stores::playback::{PlaybackUiState, PlaybackUiStateStoreExt};
use dioxus::prelude::*;
use likes_common::{Intent, NowPlaying};

/// Now playing bar view (pure, props-based)
#[component]
pub fn NowPlayingBarView(
    state: ReadStore<PlaybackUiState>,
    on_dispatch: EventHandler<Intent>,
) -> Element {
    let current = state.current_track().read().clone();
    let is_playing = *state.is_playing().read();

    rsx! {
        div { class: "fixed bottom-0 left-0 right-0 bg-[#181818] text-white p-4 border-t border-gray-700",
            div { class: "flex items-center gap-4",
                PlayPauseButtonView {
                    enabled: current.is_some(),
                    is_playing,
                    on_toggle: move |_| on_dispatch.call(Intent::SetIsPlaying(!is_playing)),
                }
                NowPlayingInfoView { current }
            }
        }
    }
}

#[component]
fn PlayPauseButtonView(enabled: bool, is_playing: bool, on_toggle: EventHandler<()>) -> Element {
    let main_btn_base = "w-10 h-10 rounded-full flex items-center justify-center";

    rsx! {
        if !enabled {
            button {
                class: "{main_btn_base} bg-gray-700 opacity-50",
                disabled: true,
                PlayIcon { class: "w-4 h-4" }
            }
        } else if is_playing {
            button {
                class: "{main_btn_base} bg-white text-black hover:scale-105",
                "aria-label": "Pause",
                onclick: move |_| on_toggle.call(()),
                PauseIcon { class: "w-4 h-4", fill: "currentColor" }
            }
        } else {
            button {
                class: "{main_btn_base} bg-white text-black hover:scale-105",
                "aria-label": "Play",
                onclick: move |_| on_toggle.call(()),
                PlayIcon { class: "w-4 h-4", fill: "currentColor" }
            }
        }
    }
}

#[component]
fn NowPlayingInfoView(current: Option<NowPlaying>) -> Element {
    rsx! {
        if let Some(ref item) = current {
            div { class: "w-10 h-10 bg-gray-700 rounded-sm overflow-hidden flex-shrink-0",
                img {
                    src: "{item.cover_url()}",
                    alt: "{item.title()}",
                    class: "w-full h-full object-cover",
                }
            }
            div { class: "flex-1 min-w-0",
                div { class: "font-semibold truncate", "{item.title()}" }
                div { class: "text-sm text-gray-400 truncate", "{item.subtitle()}" }
            }
        } else {
            div { class: "flex-1",
                div { class: "font-semibold text-gray-400", "Nothing playing" }
            }
        }
    }
}
