//! Core type definitions for the application

use std::fmt;
use std::time::Instant;

/// Operating mode of the player. Decides how every action is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Locked,
    Ready,
    Playing,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Locked => "Locked",
            Mode::Ready => "Ready",
            Mode::Playing => "Playing",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-triggered button press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Lock,
    Play,
    Next,
    Previous,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Lock => "Lock",
            Action::Play => "Play",
            Action::Next => "Next",
            Action::Previous => "Previous",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra information carried by a button press.
///
/// Only `Next` and `Previous` look at it; the default is a single click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionEvent {
    pub double_click: bool,
}

impl ActionEvent {
    pub const SINGLE: Self = Self { double_click: false };
    pub const DOUBLE: Self = Self { double_click: true };
}

/// Observable result of dispatching an action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Locked,
    /// `resumed` is the mode the player returned to
    Unlocked { resumed: Mode },
    Ignored { action: Action },
    Started { track: String },
    Paused,
    NextTrack { track: String },
    PreviousTrack { track: String },
    FastForward { seconds: u32 },
    Rewind { seconds: u32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Locked => write!(f, "Player locked"),
            Outcome::Unlocked { .. } => write!(f, "Player unlocked"),
            Outcome::Ignored { action } => {
                write!(f, "Player is locked. {} button ignored.", action)
            }
            Outcome::Started { track } => write!(f, "Playing: {}", track),
            Outcome::Paused => write!(f, "Playback paused"),
            Outcome::NextTrack { track } => write!(f, "Next song: {}", track),
            Outcome::PreviousTrack { track } => write!(f, "Previous song: {}", track),
            Outcome::FastForward { seconds } => write!(f, "Fast-forward {} seconds", seconds),
            Outcome::Rewind { seconds } => write!(f, "Rewind {} seconds", seconds),
        }
    }
}

/// One dispatched action as shown in the history pane
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub at: chrono::DateTime<chrono::Local>,
    pub action: Action,
    pub event: ActionEvent,
    pub outcome: Outcome,
}

/// Everything the view needs to draw the player
#[derive(Clone, Debug)]
pub struct PlayerSnapshot {
    pub playlist_name: String,
    pub device_name: String,
    pub tracks: Vec<String>,
    pub current_index: usize,
    pub is_playing: bool,
    pub mode: Mode,
    pub last_outcome: Option<Outcome>,
}

impl PlayerSnapshot {
    pub fn current_track(&self) -> &str {
        &self.tracks[self.current_index]
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Short-lived message, e.g. a button press ignored while locked
    pub notice_message: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}
