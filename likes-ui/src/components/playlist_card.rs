//! Playlist card component - pure view with callbacks

use crate::components::icons::{HeartIcon, PauseIcon, PlayIcon};
use crate::components::utils::emit;
use crate::display_types::PlaylistCardDisplay;
use dioxus::prelude::*;
use likes_common::{playlist_card_handler, CardRegion, Intent, PlaybackSnapshot, Playlist};

/// Individual liked playlist card
///
/// Clicking the card body calls `on_click` (navigation is owned by the parent).
/// The play/pause overlay and the heart button stop the click before it
/// reaches the card body.
#[component]
pub fn PlaylistCard(
    playlist: Playlist,
    playback: PlaybackSnapshot,
    // Navigation callback - called when the card body is clicked
    on_click: EventHandler<()>,
    on_dispatch: EventHandler<Intent>,
) -> Element {
    let card = PlaylistCardDisplay::new(&playlist, &playback);
    let play_label = if card.shows_pause { "Pause" } else { "Play" };

    let card_class = "bg-[#181818] p-4 rounded-md cursor-pointer hover:bg-[#282828] transition-all duration-200 group";

    rsx! {
        div {
            class: "{card_class}",
            "data-testid": "playlist-card",
            onclick: move |_| on_click.call(()),
            div { class: "relative mb-4",
                img {
                    src: "{card.cover_url}",
                    alt: "{card.title}",
                    class: "w-full aspect-square object-cover rounded-md shadow-lg",
                }
                button {
                    class: "absolute bottom-2 right-2 bg-green-500 rounded-full p-3 opacity-0 group-hover:opacity-100 transition-opacity duration-200 shadow-lg text-black",
                    "aria-label": play_label,
                    onclick: {
                        let playlist = playlist.clone();
                        let playback = playback.clone();
                        move |evt: Event<MouseData>| {
                            let handled = playlist_card_handler(
                                CardRegion::PlayButton,
                                &playlist,
                                &playback,
                            );
                            if handled.is_stopped() {
                                evt.stop_propagation();
                            }
                            emit(handled.effects, on_dispatch, None);
                        }
                    },
                    if card.shows_pause {
                        PauseIcon { class: "w-6 h-6", fill: "currentColor" }
                    } else {
                        PlayIcon { class: "w-6 h-6", fill: "currentColor" }
                    }
                }
            }
            h3 { class: "font-semibold mb-1 truncate", title: "{card.title}", "{card.title}" }
            p { class: "text-sm text-gray-400 truncate", "{card.description}" }
            button {
                class: "mt-2 text-red-500 hover:text-red-400",
                "aria-label": "Remove from liked playlists",
                onclick: {
                    let playlist = playlist.clone();
                    let playback = playback.clone();
                    move |evt: Event<MouseData>| {
                        let handled =
                            playlist_card_handler(CardRegion::Unlike, &playlist, &playback);
                        if handled.is_stopped() {
                            evt.stop_propagation();
                        }
                        emit(handled.effects, on_dispatch, None);
                    }
                },
                HeartIcon { class: "w-5 h-5" }
            }
        }
    }
}
