//! Liked content view - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<LikedState>` and `ReadStore<PlaybackUiState>` and reads
//! them through lenses. Every change request leaves through `on_dispatch`,
//! every route change through `on_navigate`.

use crate::components::icons::{ClockIcon, HeartIcon, PauseIcon, PlayIcon};
use crate::components::playlist_card::PlaylistCard;
use crate::components::utils::emit;
use crate::display_types::SongRowDisplay;
use crate::stores::liked::{LikedState, LikedStateStoreExt};
use crate::stores::playback::{PlaybackUiState, PlaybackUiStateStoreExt};
use dioxus::prelude::*;
use likes_common::{
    playlist_card_handler, song_row_handler, CardRegion, Intent, PlaybackSnapshot, SongRegion,
    Track,
};

/// Liked songs table followed by the liked playlists grid
#[component]
pub fn LikedContentView(
    liked: ReadStore<LikedState>,
    playback: ReadStore<PlaybackUiState>,
    on_dispatch: EventHandler<Intent>,
    // Navigation callback - called with a route path
    on_navigate: EventHandler<String>,
    // Fixed playback control panel, composed as-is
    control_panel: Element,
) -> Element {
    let songs = liked.songs().read().clone();
    let playlists = liked.playlists().read().clone();
    let snapshot = PlaybackSnapshot::new(
        playback.current_track().read().clone(),
        *playback.is_playing().read(),
    );

    rsx! {
        div { class: "bg-gradient-to-b from-[#535353] to-[#121212] min-h-screen text-white p-8 pb-24",
            h1 { class: "text-4xl font-bold mb-6", "Liked Content" }

            h2 { class: "text-2xl font-bold mb-4", "Songs" }
            div { class: "w-full mb-8",
                if songs.is_empty() {
                    p { class: "text-gray-400", "No liked songs yet" }
                } else {
                    table { class: "w-full table-auto text-gray-200 text-sm",
                        thead {
                            tr { class: "border-b border-gray-600/40 text-gray-400 select-none",
                                th { class: "text-left pb-2 w-12", "#" }
                                th { class: "text-left pb-2", "TITLE" }
                                th { class: "text-left pb-2", "ALBUM" }
                                th { class: "text-right pb-2 pr-8",
                                    ClockIcon { class: "w-4 h-4 inline-block" }
                                }
                            }
                        }
                        tbody {
                            for song in songs.iter() {
                                SongRow {
                                    key: "{song.id}",
                                    song: song.clone(),
                                    playback: snapshot.clone(),
                                    on_dispatch,
                                }
                            }
                        }
                    }
                }
            }

            h2 { class: "text-2xl font-bold mb-4", "Playlists" }
            if playlists.is_empty() {
                p { class: "text-gray-400", "No liked playlists yet" }
            } else {
                div { class: "grid grid-cols-5 gap-4",
                    for playlist in playlists.iter() {
                        PlaylistCard {
                            key: "{playlist.id}",
                            playlist: playlist.clone(),
                            playback: snapshot.clone(),
                            on_click: {
                                let playlist = playlist.clone();
                                let snapshot = snapshot.clone();
                                move |_| {
                                    let handled = playlist_card_handler(
                                        CardRegion::Body,
                                        &playlist,
                                        &snapshot,
                                    );
                                    emit(handled.effects, on_dispatch, Some(on_navigate));
                                }
                            },
                            on_dispatch,
                        }
                    }
                }
            }

            {control_panel}
        }
    }
}

/// One liked song. Clicking the row plays or toggles it; the heart unlikes it.
#[component]
fn SongRow(song: Track, playback: PlaybackSnapshot, on_dispatch: EventHandler<Intent>) -> Element {
    let row = SongRowDisplay::new(&song, &playback);

    rsx! {
        tr {
            class: "hover:bg-white/10 group rounded-md transition-colors cursor-pointer",
            "data-testid": "liked-song-row",
            onclick: {
                let song = song.clone();
                let playback = playback.clone();
                move |_| {
                    let handled = song_row_handler(SongRegion::Row, &song, &playback);
                    emit(handled.effects, on_dispatch, None);
                }
            },
            td { class: "py-3 w-12",
                if row.shows_pause {
                    PauseIcon { class: "w-4 h-4 text-[#1ed760]" }
                } else {
                    PlayIcon { class: "w-4 h-4" }
                }
            }
            td {
                div { class: "flex items-center gap-3",
                    img {
                        src: "{row.thumbnail_url}",
                        alt: "{row.title}",
                        class: "w-10 h-10",
                    }
                    div {
                        div { class: "text-white font-normal", "{row.title}" }
                        div { class: "text-gray-400", "{row.artists}" }
                    }
                }
            }
            td { class: "text-gray-400", "{row.album}" }
            td { class: "text-gray-400 text-right pr-8",
                button {
                    class: "mr-4 text-[#1ed760]",
                    "aria-label": "Remove from liked songs",
                    onclick: {
                        let song = song.clone();
                        let playback = playback.clone();
                        move |evt: Event<MouseData>| {
                            let handled = song_row_handler(SongRegion::Unlike, &song, &playback);
                            if handled.is_stopped() {
                                evt.stop_propagation();
                            }
                            emit(handled.effects, on_dispatch, None);
                        }
                    },
                    HeartIcon { class: "w-4 h-4 inline-block" }
                }
                "{row.duration}"
            }
        }
    }
}
