//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (modes, actions, outcomes, UI state)
//! - `error`: Errors raised while building a player
//! - `playback`: Playback context and the mode state machine
//! - `playlist`: Playlist sources (CLI, JSON files, demo list)
//! - `app_model`: Main application model with state management methods

mod types;
mod error;
mod playback;
mod playlist;
mod app_model;

// Re-export all public types for convenient access
pub use types::{
    Action, ActionEvent, HistoryEntry, Mode, Outcome, PlayerSnapshot, UiState,
};

pub use error::PlayerError;

pub use playback::{dispatch, PlaybackContext, SEEK_SECONDS};

pub use playlist::Playlist;

pub use app_model::AppModel;
