use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_at: i64,
}

impl Token {
    /// A token is usable strictly before `expires_at`.
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: String,
    pub duration_ms: u64,
    pub features: Option<AudioFeatures>,
}

impl Track {
    pub fn primary_artist(&self) -> &str {
        self.artists
            .first()
            .map(|a| a.as_str())
            .unwrap_or("Unknown Artist")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Flattens paginated track pages, in page order, into a playlist.
    ///
    /// Items whose track is null or has no ID (removed or local tracks)
    /// are skipped.
    pub fn from_pages(id: String, name: String, pages: Vec<PlaylistTracksPage>) -> Self {
        let tracks = pages
            .into_iter()
            .flat_map(|page| page.items)
            .filter_map(|item| item.track)
            .filter_map(|track| {
                let id = track.id?;
                Some(Track {
                    id,
                    name: track.name,
                    artists: track.artists.into_iter().map(|a| a.name).collect(),
                    album: track.album.name,
                    duration_ms: track.duration_ms,
                    features: None,
                })
            })
            .collect();

        Playlist { id, name, tracks }
    }
}

/// Audio characteristics of a single track, as reported by the analysis
/// service. Field order is the feature-vector order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub tempo: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub happiness: Option<f64>,
}

impl AudioFeatures {
    /// The present feature values in fixed order:
    /// tempo, energy, danceability, happiness.
    pub fn vector(&self) -> Vec<f64> {
        [self.tempo, self.energy, self.danceability, self.happiness]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub tempo: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub happiness: Option<f64>,
}

impl From<AnalysisResponse> for AudioFeatures {
    fn from(res: AnalysisResponse) -> Self {
        AudioFeatures {
            tempo: res.tempo,
            energy: res.energy,
            danceability: res.danceability,
            happiness: res.happiness,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistMeta {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistTrackItem>,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub name: String,
    pub tempo: String,
    pub energy: String,
    pub danceability: String,
    pub happiness: String,
}
