//! Playlist detail view - target of the liked playlist grid

use crate::components::helpers::BackButton;
use crate::components::icons::{PauseIcon, PlayIcon};
use crate::display_types::PlaylistCardDisplay;
use dioxus::prelude::*;
use likes_common::{select_or_toggle, Intent, NowPlaying, PlaybackSnapshot, Playlist};

/// Header for one playlist. Shows a not-found message when `playlist` is None.
#[component]
pub fn PlaylistDetailView(
    playlist: Option<Playlist>,
    playback: PlaybackSnapshot,
    on_back: EventHandler<()>,
    on_dispatch: EventHandler<Intent>,
) -> Element {
    let Some(playlist) = playlist else {
        return rsx! {
            div { class: "min-h-screen bg-[#121212] text-white p-8",
                BackButton { on_click: move |_| on_back.call(()) }
                p { class: "text-gray-400", "Playlist not found" }
            }
        };
    };

    let header = PlaylistCardDisplay::new(&playlist, &playback);

    rsx! {
        div { class: "min-h-screen bg-gradient-to-b from-[#535353] to-[#121212] text-white p-8 pb-24",
            BackButton { on_click: move |_| on_back.call(()) }
            div { class: "flex items-end gap-6",
                img {
                    src: "{header.cover_url}",
                    alt: "{header.title}",
                    class: "w-48 h-48 object-cover rounded-md shadow-lg",
                }
                div { class: "flex flex-col gap-2 min-w-0",
                    span { class: "text-sm uppercase text-gray-300", "Playlist" }
                    h1 { class: "text-5xl font-bold truncate", "{header.title}" }
                    p { class: "text-gray-300", "{header.description}" }
                    button {
                        class: "mt-4 w-14 h-14 bg-green-500 rounded-full flex items-center justify-center text-black hover:scale-105 transition-transform",
                        onclick: {
                            let playlist = playlist.clone();
                            let playback = playback.clone();
                            move |_| {
                                for intent in select_or_toggle(
                                    NowPlaying::Playlist(playlist.clone()),
                                    &playback,
                                ) {
                                    on_dispatch.call(intent);
                                }
                            }
                        },
                        if header.shows_pause {
                            PauseIcon { class: "w-6 h-6", fill: "currentColor" }
                        } else {
                            PlayIcon { class: "w-6 h-6", fill: "currentColor" }
                        }
                    }
                }
            }
        }
    }
}
