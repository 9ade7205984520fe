//! Click handling for nested clickable regions
//!
//! A click is delivered to the innermost region first and then to each
//! enclosing region, until a handler stops it. UI components call the same
//! per-region handlers and mirror `Propagation::Stop` with the framework's
//! own `stop_propagation()`.

use crate::catalog::{Playlist, Track};
use crate::intent::{open_playlist, select_or_toggle, Effect, Intent};
use crate::now_playing::{NowPlaying, PlaybackSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Result of running one region's click handler
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handled {
    pub effects: Vec<Effect>,
    pub propagation: Propagation,
}

impl Handled {
    pub fn continue_with(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            propagation: Propagation::Continue,
        }
    }

    pub fn stop_with(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            propagation: Propagation::Stop,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.propagation == Propagation::Stop
    }
}

/// A clickable region nested inside at most one parent region
pub trait ClickRegion: Copy {
    fn parent(self) -> Option<Self>;
}

/// Deliver a click on `target` to it and its ancestors, innermost first.
pub fn dispatch_click<R, F>(target: R, mut handler: F) -> Vec<Effect>
where
    R: ClickRegion,
    F: FnMut(R) -> Handled,
{
    let mut effects = Vec::new();
    let mut region = Some(target);
    while let Some(current) = region {
        let handled = handler(current);
        let stopped = handled.is_stopped();
        effects.extend(handled.effects);
        if stopped {
            break;
        }
        region = current.parent();
    }
    effects
}

/// Regions of a liked song row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SongRegion {
    Row,
    Unlike,
}

impl ClickRegion for SongRegion {
    fn parent(self) -> Option<Self> {
        match self {
            SongRegion::Row => None,
            SongRegion::Unlike => Some(SongRegion::Row),
        }
    }
}

pub fn song_row_handler(region: SongRegion, song: &Track, playback: &PlaybackSnapshot) -> Handled {
    match region {
        SongRegion::Row => Handled::continue_with(dispatches(select_or_toggle(
            NowPlaying::Track(song.clone()),
            playback,
        ))),
        SongRegion::Unlike => {
            Handled::stop_with(dispatches(vec![Intent::ToggleLikeSong(song.clone())]))
        }
    }
}

/// Regions of a playlist card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRegion {
    Body,
    PlayButton,
    Unlike,
}

impl ClickRegion for CardRegion {
    fn parent(self) -> Option<Self> {
        match self {
            CardRegion::Body => None,
            CardRegion::PlayButton | CardRegion::Unlike => Some(CardRegion::Body),
        }
    }
}

pub fn playlist_card_handler(
    region: CardRegion,
    playlist: &Playlist,
    playback: &PlaybackSnapshot,
) -> Handled {
    match region {
        CardRegion::Body => Handled::continue_with(open_playlist(playlist)),
        CardRegion::PlayButton => Handled::stop_with(dispatches(select_or_toggle(
            NowPlaying::Playlist(playlist.clone()),
            playback,
        ))),
        CardRegion::Unlike => Handled::stop_with(dispatches(vec![Intent::ToggleLikePlaylist(
            playlist.clone(),
        )])),
    }
}

fn dispatches(intents: Vec<Intent>) -> Vec<Effect> {
    intents.into_iter().map(Effect::Dispatch).collect()
}
