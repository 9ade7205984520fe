use likes_app::config::Config;
use likes_app::fixtures::{self, FixtureError};
use likes_common::{format_duration, PLAYLIST_PLACEHOLDER};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn embedded_fixture_parses() {
    let liked = fixtures::embedded().unwrap();
    assert!(!liked.liked_songs.is_empty());
    assert!(!liked.liked_playlists.is_empty());
}

#[test]
fn embedded_fixture_covers_edge_cases() {
    let liked = fixtures::embedded().unwrap();

    let no_artists = liked
        .liked_songs
        .iter()
        .find(|t| t.artists.is_empty())
        .expect("a song without artists");
    assert_eq!(no_artists.artist_line(), "");
    assert_eq!(format_duration(no_artists.duration_ms), "2:00");

    assert!(liked
        .liked_playlists
        .iter()
        .any(|p| p.cover_url() == PLAYLIST_PLACEHOLDER));
}

#[test]
fn loads_from_file_in_order() {
    let file = write_fixture(
        r#"{
            "liked_songs": [
                {"id": "b", "name": "B", "artists": [], "album": {"name": "X"}, "duration_ms": 1000},
                {"id": "a", "name": "A", "artists": [{"name": "Ann"}], "album": {"name": "Y", "images": [{"url": "/y.png"}]}, "duration_ms": 2000}
            ],
            "liked_playlists": [{"id": "p", "name": "P"}]
        }"#,
    );

    let liked = fixtures::load_from_path(file.path()).unwrap();
    let ids: Vec<&str> = liked.liked_songs.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(liked.liked_playlists[0].description, "");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = write_fixture("{ not json");
    let result = fixtures::load_from_path(file.path());
    assert!(matches!(result, Err(FixtureError::Parse(_))));
}

#[test]
fn unreadable_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = fixtures::load_from_path(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(FixtureError::Io { .. })));
}

#[test]
fn load_falls_back_to_embedded_on_bad_file() {
    let file = write_fixture("42");
    let config = Config {
        fixture_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    assert_eq!(fixtures::load(&config), fixtures::embedded().unwrap());
}

#[test]
fn load_prefers_configured_file() {
    let file = write_fixture(r#"{"liked_songs": [], "liked_playlists": []}"#);
    let config = Config {
        fixture_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let liked = fixtures::load(&config);
    assert!(liked.liked_songs.is_empty());
    assert!(liked.liked_playlists.is_empty());
}
