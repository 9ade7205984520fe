//! Display types for UI components
//!
//! Row and card models derived from catalog data plus the playback snapshot.
//! They hold exactly what a view renders, so views stay free of lookups.

use likes_common::{format_duration, PlaybackSnapshot, Playlist, Track};

/// One row of the liked songs table
#[derive(Clone, Debug, PartialEq)]
pub struct SongRowDisplay {
    pub id: String,
    pub title: String,
    pub artists: String,
    pub album: String,
    pub thumbnail_url: String,
    pub duration: String,
    /// Pause glyph instead of play glyph
    pub shows_pause: bool,
}

impl SongRowDisplay {
    pub fn new(track: &Track, playback: &PlaybackSnapshot) -> Self {
        Self {
            id: track.id.clone(),
            title: track.name.clone(),
            artists: track.artist_line(),
            album: track.album.name.clone(),
            thumbnail_url: track.thumbnail_url().to_string(),
            duration: format_duration(track.duration_ms),
            shows_pause: playback.shows_pause(&track.id),
        }
    }
}

/// One card of the liked playlists grid
#[derive(Clone, Debug, PartialEq)]
pub struct PlaylistCardDisplay {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_url: String,
    pub shows_pause: bool,
}

impl PlaylistCardDisplay {
    pub fn new(playlist: &Playlist, playback: &PlaybackSnapshot) -> Self {
        Self {
            id: playlist.id.clone(),
            title: playlist.name.clone(),
            description: playlist.description.clone(),
            cover_url: playlist.cover_url().to_string(),
            shows_pause: playback.shows_pause(&playlist.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use likes_common::{Album, Artist, Image, NowPlaying};

    fn song(id: &str, artists: &[&str], duration_ms: u64) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Song {id}"),
            artists: artists
                .iter()
                .map(|name| Artist {
                    name: name.to_string(),
                })
                .collect(),
            album: Album {
                name: "Blue".to_string(),
                images: vec![Image {
                    url: "/covers/blue.jpg".to_string(),
                }],
            },
            duration_ms,
        }
    }

    fn bare_playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: "Focus".to_string(),
            description: "Deep work".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn song_row_fields() {
        let row = SongRowDisplay::new(
            &song("t1", &["Joni Mitchell"], 65_000),
            &PlaybackSnapshot::default(),
        );
        assert_eq!(row.title, "Song t1");
        assert_eq!(row.artists, "Joni Mitchell");
        assert_eq!(row.album, "Blue");
        assert_eq!(row.thumbnail_url, "/covers/blue.jpg");
        assert_eq!(row.duration, "1:05");
        assert!(!row.shows_pause);
    }

    #[test]
    fn song_row_without_artists_renders_empty_line() {
        let row = SongRowDisplay::new(&song("t1", &[], 0), &PlaybackSnapshot::default());
        assert_eq!(row.artists, "");
        assert_eq!(row.duration, "0:00");
    }

    #[test]
    fn only_current_playing_song_shows_pause() {
        let songs = [song("t1", &[], 1), song("t2", &[], 1), song("t3", &[], 1)];
        let playing = PlaybackSnapshot::new(Some(NowPlaying::Track(songs[1].clone())), true);
        let glyphs: Vec<bool> = songs
            .iter()
            .map(|s| SongRowDisplay::new(s, &playing).shows_pause)
            .collect();
        assert_eq!(glyphs, vec![false, true, false]);

        let paused = PlaybackSnapshot::new(Some(NowPlaying::Track(songs[1].clone())), false);
        assert!(songs
            .iter()
            .all(|s| !SongRowDisplay::new(s, &paused).shows_pause));
    }

    #[test]
    fn playlist_card_without_images_uses_placeholder() {
        let card = PlaylistCardDisplay::new(&bare_playlist("p1"), &PlaybackSnapshot::default());
        assert_eq!(card.cover_url, "/api/placeholder/160/160");
        assert_eq!(card.description, "Deep work");
    }

    #[test]
    fn playlist_card_pause_when_playlist_is_playing() {
        let p = bare_playlist("p1");
        let playing = PlaybackSnapshot::new(Some(NowPlaying::Playlist(p.clone())), true);
        assert!(PlaylistCardDisplay::new(&p, &playing).shows_pause);
        assert!(!PlaylistCardDisplay::new(&bare_playlist("p2"), &playing).shows_pause);
    }
}
