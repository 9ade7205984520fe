use serde::{Deserialize, Serialize};

/// Cover shown for a playlist that has no images
pub const PLAYLIST_PLACEHOLDER: &str = "/api/placeholder/160/160";

/// Thumbnail shown for a track whose album has no images
pub const TRACK_PLACEHOLDER: &str = "/api/placeholder/40/40";

/// Anything that can be compared against the current track by id.
///
/// Tracks and playlists share one identifier space.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// A liked song
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Album,
    pub duration_ms: u64,
}

impl Track {
    /// Artist names joined for display. Empty when the track has no artists.
    pub fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn thumbnail_url(&self) -> &str {
        self.album
            .images
            .first()
            .map(|img| img.url.as_str())
            .unwrap_or(TRACK_PLACEHOLDER)
    }
}

impl Identified for Track {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A liked playlist
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Playlist {
    /// First image URL, or the placeholder when the playlist has none
    pub fn cover_url(&self) -> &str {
        self.images
            .first()
            .map(|img| img.url.as_str())
            .unwrap_or(PLAYLIST_PLACEHOLDER)
    }
}

impl Identified for Playlist {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The user's liked songs and playlists, in display order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedCollections {
    #[serde(default)]
    pub liked_songs: Vec<Track>,
    #[serde(default)]
    pub liked_playlists: Vec<Playlist>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn track(id: &str, artists: &[&str]) -> Track {
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
                name: "Album".to_string(),
                images: vec![Image {
                    url: format!("/img/{id}.jpg"),
                }],
            },
            duration_ms: 180_000,
        }
    }

    pub(crate) fn playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: format!("Playlist {id}"),
            description: "Mix".to_string(),
            images: vec![],
        }
    }

    #[test]
    fn artist_line_joins_names() {
        let t = track("t1", &["Nina Simone", "Miles Davis"]);
        assert_eq!(t.artist_line(), "Nina Simone, Miles Davis");
    }

    #[test]
    fn artist_line_empty_without_artists() {
        let t = track("t1", &[]);
        assert_eq!(t.artist_line(), "");
    }

    #[test]
    fn playlist_without_images_uses_placeholder() {
        let p = playlist("p1");
        assert_eq!(p.cover_url(), "/api/placeholder/160/160");
    }

    #[test]
    fn playlist_uses_first_image() {
        let mut p = playlist("p1");
        p.images = vec![
            Image {
                url: "/a.jpg".to_string(),
            },
            Image {
                url: "/b.jpg".to_string(),
            },
        ];
        assert_eq!(p.cover_url(), "/a.jpg");
    }

    #[test]
    fn track_without_album_art_uses_placeholder() {
        let mut t = track("t1", &["A"]);
        t.album.images.clear();
        assert_eq!(t.thumbnail_url(), TRACK_PLACEHOLDER);
    }

    #[test]
    fn playlist_description_defaults_to_empty() {
        let p: Playlist = serde_json::from_str(r#"{"id": "p1", "name": "Road trip"}"#).unwrap();
        assert_eq!(p.description, "");
        assert!(p.images.is_empty());
    }
}
