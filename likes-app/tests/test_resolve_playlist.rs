use likes_app::app_service::resolve_playlist;
use likes_common::Playlist;

fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        images: vec![],
    }
}

#[test]
fn prefers_current_playlist_with_matching_id() {
    let current = playlist("p1", "Opened");
    let liked = vec![playlist("p1", "Liked copy")];
    let found = resolve_playlist(Some(current.clone()), &liked, "p1");
    assert_eq!(found, Some(current));
}

#[test]
fn falls_back_to_liked_playlists() {
    let liked = vec![playlist("p1", "One"), playlist("p2", "Two")];
    let found = resolve_playlist(Some(playlist("p1", "One")), &liked, "p2");
    assert_eq!(found.map(|p| p.name), Some("Two".to_string()));
}

#[test]
fn unknown_id_is_none() {
    assert_eq!(resolve_playlist(None, &[playlist("p1", "One")], "zzz"), None);
}
