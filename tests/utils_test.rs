use aoide::error::AoideError;
use aoide::types::{
    AudioFeatures, Playlist, PlaylistTrackItem, PlaylistTracksPage, Token, TrackAlbum, TrackArtist,
    TrackObject,
};
use aoide::utils::*;

// Helper function to create a page item with a well-formed track
fn create_track_item(id: &str, name: &str) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(TrackObject {
            id: Some(id.to_string()),
            name: name.to_string(),
            artists: vec![TrackArtist {
                name: format!("{}_artist", id),
            }],
            album: TrackAlbum {
                name: format!("{}_album", id),
            },
            duration_ms: 200_000,
        }),
    }
}

fn create_page(items: Vec<PlaylistTrackItem>, total: u32, offset: u32) -> PlaylistTracksPage {
    PlaylistTracksPage {
        items,
        total,
        limit: 100,
        offset,
        next: None,
    }
}

#[test]
fn test_extract_entity_id_from_playlist_link() {
    let id = extract_entity_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");

    // query strings are stripped
    let id = extract_entity_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123")
        .unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");

    // trailing path segments are ignored
    let id = extract_entity_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M/tracks")
        .unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_entity_id_from_track_link() {
    let id = extract_entity_id("https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl").unwrap();
    assert_eq!(id, "11dFghVXANMlKmJXsNCbNl");
}

#[test]
fn test_extract_entity_id_passes_through_raw_id() {
    let id = extract_entity_id("37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");

    // surrounding whitespace is tolerated
    let id = extract_entity_id("  37i9dQZF1DXcBWIGoYBM5M ").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_entity_id_rejects_unrecognized_input() {
    for reference in [
        "",
        "   ",
        "https://open.spotify.com/album/abc123",
        "https://example.com/",
        "/playlist/",
        "not a playlist!",
    ] {
        let result = extract_entity_id(reference);
        assert!(
            matches!(result, Err(AoideError::InvalidIdentifier(_))),
            "expected InvalidIdentifier for {reference:?}"
        );
    }
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(1_000), "0:01");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(225_000), "3:45");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_format_feature() {
    assert_eq!(format_feature(Some(120.0)), "120.00");
    assert_eq!(format_feature(Some(0.756)), "0.76");
    assert_eq!(format_feature(None), "-");
}

#[test]
fn test_token_expiry_boundary() {
    let token = Token {
        access_token: "BQC_test".to_string(),
        expires_at: 1_000,
    };

    // usable strictly before expires_at
    assert!(!token.is_expired(999));
    // expired at and after expires_at
    assert!(token.is_expired(1_000));
    assert!(token.is_expired(1_001));
}

#[test]
fn test_audio_features_vector_order() {
    let features = AudioFeatures {
        tempo: Some(128.0),
        energy: Some(0.9),
        danceability: Some(0.8),
        happiness: Some(0.5),
    };
    assert_eq!(features.vector(), vec![128.0, 0.9, 0.8, 0.5]);

    // absent values are dropped, order of the rest is preserved
    let sparse = AudioFeatures {
        tempo: Some(128.0),
        energy: None,
        danceability: Some(0.8),
        happiness: None,
    };
    assert_eq!(sparse.vector(), vec![128.0, 0.8]);
}

#[test]
fn test_playlist_from_pages_concatenates_in_page_order() {
    let page1 = create_page(
        vec![
            create_track_item("t1", "Track 1"),
            create_track_item("t2", "Track 2"),
        ],
        5,
        0,
    );
    let page2 = create_page(
        vec![
            create_track_item("t3", "Track 3"),
            create_track_item("t4", "Track 4"),
        ],
        5,
        2,
    );
    let page3 = create_page(vec![create_track_item("t5", "Track 5")], 5, 4);

    let playlist = Playlist::from_pages(
        "pl1".to_string(),
        "Test Playlist".to_string(),
        vec![page1, page2, page3],
    );

    assert_eq!(playlist.tracks.len(), 5);
    let ids: Vec<&str> = playlist.tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "t5"]);
}

#[test]
fn test_playlist_from_pages_skips_removed_and_local_tracks() {
    let page = create_page(
        vec![
            create_track_item("t1", "Track 1"),
            // removed track: the platform serializes a null entry
            PlaylistTrackItem { track: None },
            // local track: present but without a platform ID
            PlaylistTrackItem {
                track: Some(TrackObject {
                    id: None,
                    name: "Local File".to_string(),
                    artists: vec![],
                    album: TrackAlbum {
                        name: "Local".to_string(),
                    },
                    duration_ms: 100_000,
                }),
            },
            create_track_item("t2", "Track 2"),
        ],
        4,
        0,
    );

    let playlist = Playlist::from_pages("pl1".to_string(), "Mixed".to_string(), vec![page]);

    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[0].id, "t1");
    assert_eq!(playlist.tracks[1].id, "t2");
}

#[test]
fn test_track_page_envelope_deserializes() {
    let json = r#"{
        "items": [
            {
                "track": {
                    "id": "11dFghVXANMlKmJXsNCbNl",
                    "name": "Cut To The Feeling",
                    "artists": [{ "name": "Carly Rae Jepsen" }],
                    "album": { "name": "Cut To The Feeling" },
                    "duration_ms": 207959
                }
            },
            { "track": null }
        ],
        "total": 2,
        "limit": 100,
        "offset": 0,
        "next": null
    }"#;

    let page: PlaylistTracksPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 2);

    let track = page.items[0].track.as_ref().unwrap();
    assert_eq!(track.id.as_deref(), Some("11dFghVXANMlKmJXsNCbNl"));
    assert_eq!(track.duration_ms, 207_959);
    assert!(page.items[1].track.is_none());

    let playlist = Playlist::from_pages("pl".to_string(), "One".to_string(), vec![page]);
    assert_eq!(playlist.tracks.len(), 1);
    assert_eq!(playlist.tracks[0].name, "Cut To The Feeling");
    assert_eq!(playlist.tracks[0].primary_artist(), "Carly Rae Jepsen");
}
