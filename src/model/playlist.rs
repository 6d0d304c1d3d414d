//! Playlist sources: command-line tracks, JSON files and the demo list

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::PlayerError;
use super::playback::PlaybackContext;

const DEMO_TRACKS: [&str; 3] = ["Song A", "Song B", "Song C"];

/// On-disk playlist. Either a bare array of track names or an object with a
/// `tracks` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlaylistFile {
    Tracks(Vec<String>),
    Named {
        #[serde(default)]
        name: Option<String>,
        tracks: Vec<String>,
    },
}

/// An ordered list of track names, not yet bound to a player
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub tracks: Vec<String>,
}

impl Playlist {
    /// Build a playlist from raw names. Whitespace is trimmed and blank
    /// entries are dropped.
    pub fn from_tracks<I, S>(name: impl Into<String>, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tracks = tracks
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            name: name.into(),
            tracks,
        }
    }

    pub fn demo() -> Self {
        Self::from_tracks("Demo", DEMO_TRACKS)
    }

    pub fn load(path: &Path) -> Result<Self, PlayerError> {
        let content = fs::read_to_string(path).map_err(|source| PlayerError::PlaylistFile {
            path: path.to_path_buf(),
            source,
        })?;

        let file: PlaylistFile =
            serde_json::from_str(&content).map_err(|source| PlayerError::PlaylistFormat {
                path: path.to_path_buf(),
                source,
            })?;

        let fallback_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Playlist".to_string());

        let playlist = match file {
            PlaylistFile::Tracks(tracks) => Self::from_tracks(fallback_name, tracks),
            PlaylistFile::Named { name, tracks } => {
                Self::from_tracks(name.unwrap_or(fallback_name), tracks)
            }
        };

        tracing::info!(
            path = %path.display(),
            name = %playlist.name,
            tracks = playlist.tracks.len(),
            "Playlist loaded"
        );

        Ok(playlist)
    }

    pub fn into_context(self) -> Result<PlaybackContext, PlayerError> {
        PlaybackContext::new(self.tracks)
    }
}
