//! Player errors.

use std::path::PathBuf;

/// Errors raised while building a player or reading its inputs.
///
/// Dispatching an action never fails, so nothing here comes from the
/// state machine itself.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Playlist is empty. Give at least one track.")]
    EmptyPlaylist,

    #[error("Failed to read playlist {path}: {source}")]
    PlaylistFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid playlist {path}: {source}")]
    PlaylistFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown action '{token}' (expected lock, play, next or prev)")]
    UnknownAction { token: String },
}
