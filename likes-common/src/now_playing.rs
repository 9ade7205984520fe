use crate::catalog::{Identified, Playlist, Track};
use serde::{Deserialize, Serialize};

/// What the player is currently associated with.
///
/// Playlists are stored whole rather than resolved to their first track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NowPlaying {
    Track(Track),
    Playlist(Playlist),
}

impl NowPlaying {
    pub fn title(&self) -> &str {
        match self {
            NowPlaying::Track(track) => &track.name,
            NowPlaying::Playlist(playlist) => &playlist.name,
        }
    }

    /// Artist line for tracks, description for playlists
    pub fn subtitle(&self) -> String {
        match self {
            NowPlaying::Track(track) => track.artist_line(),
            NowPlaying::Playlist(playlist) => playlist.description.clone(),
        }
    }

    pub fn cover_url(&self) -> &str {
        match self {
            NowPlaying::Track(track) => track.thumbnail_url(),
            NowPlaying::Playlist(playlist) => playlist.cover_url(),
        }
    }
}

impl Identified for NowPlaying {
    fn id(&self) -> &str {
        match self {
            NowPlaying::Track(track) => &track.id,
            NowPlaying::Playlist(playlist) => &playlist.id,
        }
    }
}

/// Read-only view of playback state for a single render pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub current: Option<NowPlaying>,
    pub is_playing: bool,
}

impl PlaybackSnapshot {
    pub fn new(current: Option<NowPlaying>, is_playing: bool) -> Self {
        Self {
            current,
            is_playing,
        }
    }

    /// False when nothing is current
    pub fn is_current(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|c| c.id() == id)
    }

    /// Whether the item with `id` should show the pause glyph
    pub fn shows_pause(&self, id: &str) -> bool {
        self.is_current(id) && self.is_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{playlist, track};

    #[test]
    fn nothing_current_is_never_current() {
        let snapshot = PlaybackSnapshot::new(None, true);
        assert!(!snapshot.is_current("t1"));
        assert!(!snapshot.shows_pause("t1"));
    }

    #[test]
    fn pause_only_when_current_and_playing() {
        let t1 = track("t1", &["A"]);
        let playing = PlaybackSnapshot::new(Some(NowPlaying::Track(t1.clone())), true);
        assert!(playing.shows_pause("t1"));
        assert!(!playing.shows_pause("t2"));

        let paused = PlaybackSnapshot::new(Some(NowPlaying::Track(t1)), false);
        assert!(paused.is_current("t1"));
        assert!(!paused.shows_pause("t1"));
    }

    #[test]
    fn playlist_and_track_share_identity_space() {
        let snapshot = PlaybackSnapshot::new(Some(NowPlaying::Playlist(playlist("x"))), true);
        assert!(snapshot.shows_pause("x"));
    }

    #[test]
    fn subtitle_depends_on_kind() {
        let t = NowPlaying::Track(track("t1", &["A", "B"]));
        assert_eq!(t.subtitle(), "A, B");
        let p = NowPlaying::Playlist(playlist("p1"));
        assert_eq!(p.subtitle(), "Mix");
        assert_eq!(p.title(), "Playlist p1");
    }
}
