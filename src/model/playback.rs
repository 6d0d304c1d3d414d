//! Playback context and the mode state machine that drives it
//!
//! `PlaybackContext` holds the session data. The `dispatch_*` functions are
//! the per-mode behavior: they look at `ctx.mode`, perform the side effect on
//! the context and move it to the next mode. Nothing here can fail once a
//! context exists.

use super::error::PlayerError;
use super::types::{Action, ActionEvent, Mode, Outcome};

/// Seconds skipped by a single-click Next/Previous while playing
pub const SEEK_SECONDS: u32 = 5;

/// Mutable session state of one player
#[derive(Clone, Debug)]
pub struct PlaybackContext {
    playlist: Vec<String>,
    current_index: usize,
    is_playing: bool,
    mode: Mode,
}

impl PlaybackContext {
    /// Create a context positioned on the first track, in `Ready` mode.
    pub fn new(playlist: Vec<String>) -> Result<Self, PlayerError> {
        if playlist.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }

        tracing::debug!(tracks = playlist.len(), "Playback context created");

        Ok(Self {
            playlist,
            current_index: 0,
            is_playing: false,
            mode: Mode::Ready,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn playlist(&self) -> &[String] {
        &self.playlist
    }

    pub fn current_track(&self) -> &str {
        &self.playlist[self.current_index]
    }

    // ========================================================================
    // Playback operations used by the modes
    // ========================================================================

    fn start_playback(&mut self) -> Outcome {
        self.is_playing = true;
        Outcome::Started {
            track: self.current_track().to_string(),
        }
    }

    fn stop_playback(&mut self) -> Outcome {
        self.is_playing = false;
        Outcome::Paused
    }

    fn next_song(&mut self) -> Outcome {
        self.current_index = (self.current_index + 1) % self.playlist.len();
        Outcome::NextTrack {
            track: self.current_track().to_string(),
        }
    }

    fn previous_song(&mut self) -> Outcome {
        let len = self.playlist.len();
        self.current_index = (self.current_index + len - 1) % len;
        Outcome::PreviousTrack {
            track: self.current_track().to_string(),
        }
    }

    fn change_mode(&mut self, mode: Mode) {
        tracing::trace!(from = %self.mode, to = %mode, "Mode transition");
        self.mode = mode;
    }
}

/// Lock a ready/playing player, or unlock a locked one.
///
/// Unlocking returns to `Playing` when playback was running at lock time.
pub(super) fn dispatch_lock(ctx: &mut PlaybackContext) -> Outcome {
    let outcome = match ctx.mode {
        Mode::Locked => {
            let resumed = if ctx.is_playing { Mode::Playing } else { Mode::Ready };
            ctx.change_mode(resumed);
            Outcome::Unlocked { resumed }
        }
        Mode::Ready | Mode::Playing => {
            ctx.change_mode(Mode::Locked);
            Outcome::Locked
        }
    };
    tracing::debug!(is_playing = ctx.is_playing, outcome = %outcome, "Lock pressed");
    outcome
}

/// Start or pause playback.
pub(super) fn dispatch_play(ctx: &mut PlaybackContext) -> Outcome {
    let outcome = match ctx.mode {
        Mode::Locked => Outcome::Ignored { action: Action::Play },
        Mode::Ready => {
            let outcome = ctx.start_playback();
            ctx.change_mode(Mode::Playing);
            outcome
        }
        Mode::Playing => {
            let outcome = ctx.stop_playback();
            ctx.change_mode(Mode::Ready);
            outcome
        }
    };
    tracing::debug!(mode = %ctx.mode, outcome = %outcome, "Play pressed");
    outcome
}

/// Skip to the next track, or fast-forward on a single click while playing.
pub(super) fn dispatch_next(ctx: &mut PlaybackContext, event: ActionEvent) -> Outcome {
    let outcome = match ctx.mode {
        Mode::Locked => Outcome::Ignored { action: Action::Next },
        Mode::Ready => ctx.next_song(),
        Mode::Playing if event.double_click => ctx.next_song(),
        Mode::Playing => Outcome::FastForward { seconds: SEEK_SECONDS },
    };
    tracing::debug!(
        mode = %ctx.mode,
        double_click = event.double_click,
        index = ctx.current_index,
        outcome = %outcome,
        "Next pressed"
    );
    outcome
}

/// Skip to the previous track, or rewind on a single click while playing.
pub(super) fn dispatch_previous(ctx: &mut PlaybackContext, event: ActionEvent) -> Outcome {
    let outcome = match ctx.mode {
        Mode::Locked => Outcome::Ignored { action: Action::Previous },
        Mode::Ready => ctx.previous_song(),
        Mode::Playing if event.double_click => ctx.previous_song(),
        Mode::Playing => Outcome::Rewind { seconds: SEEK_SECONDS },
    };
    tracing::debug!(
        mode = %ctx.mode,
        double_click = event.double_click,
        index = ctx.current_index,
        outcome = %outcome,
        "Previous pressed"
    );
    outcome
}

/// Route an action to its handler. `event` is ignored by Lock and Play.
pub fn dispatch(ctx: &mut PlaybackContext, action: Action, event: ActionEvent) -> Outcome {
    match action {
        Action::Lock => dispatch_lock(ctx),
        Action::Play => dispatch_play(ctx),
        Action::Next => dispatch_next(ctx, event),
        Action::Previous => dispatch_previous(ctx, event),
    }
}
