//! Main application model with state management

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::playback::{self, PlaybackContext};
use super::types::{Action, ActionEvent, HistoryEntry, Outcome, PlayerSnapshot, UiState};

/// Oldest entries are dropped past this length
pub const HISTORY_LIMIT: usize = 100;

const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application model containing all state
pub struct AppModel {
    playlist_name: String,
    device_name: String,
    player: Arc<Mutex<PlaybackContext>>,
    history: Arc<Mutex<VecDeque<HistoryEntry>>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(playlist_name: String, device_name: String, player: PlaybackContext) -> Self {
        Self {
            playlist_name,
            device_name,
            player: Arc::new(Mutex::new(player)),
            history: Arc::new(Mutex::new(VecDeque::with_capacity(HISTORY_LIMIT))),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Player
    // ========================================================================

    /// Dispatch one action against the player and record the outcome.
    ///
    /// The player lock is held for the whole transition, so concurrent
    /// callers are applied one at a time.
    pub async fn dispatch(&self, action: Action, event: ActionEvent) -> Outcome {
        let mut player = self.player.lock().await;
        let before = player.mode();
        let outcome = playback::dispatch(&mut player, action, event);
        let after = player.mode();
        drop(player);

        crate::log_dispatch!(action, before, after, outcome);

        let mut history = self.history.lock().await;
        if history.len() == HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(HistoryEntry {
            at: chrono::Local::now(),
            action,
            event,
            outcome: outcome.clone(),
        });

        outcome
    }

    pub async fn get_player_snapshot(&self) -> PlayerSnapshot {
        let player = self.player.lock().await;
        let last_outcome = self.history.lock().await.back().map(|e| e.outcome.clone());

        PlayerSnapshot {
            playlist_name: self.playlist_name.clone(),
            device_name: self.device_name.clone(),
            tracks: player.playlist().to_vec(),
            current_index: player.current_index(),
            is_playing: player.is_playing(),
            mode: player.mode(),
            last_outcome,
        }
    }

    /// History entries, newest first
    pub async fn get_history(&self) -> Vec<HistoryEntry> {
        self.history.lock().await.iter().rev().cloned().collect()
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_notice(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.notice_message = Some(message);
        state.notice_timestamp = Some(Instant::now());
    }

    pub async fn clear_notice(&self) {
        let mut state = self.ui_state.lock().await;
        state.notice_message = None;
        state.notice_timestamp = None;
    }

    pub async fn has_notice(&self) -> bool {
        self.ui_state.lock().await.notice_message.is_some()
    }

    pub async fn auto_clear_old_notices(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.notice_timestamp {
            if timestamp.elapsed() > NOTICE_TIMEOUT {
                state.notice_message = None;
                state.notice_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    fn model() -> AppModel {
        let ctx = PlaybackContext::new(vec!["Song A".to_string(), "Song B".to_string()]).unwrap();
        AppModel::new("Test".to_string(), "test-device".to_string(), ctx)
    }

    #[tokio::test]
    async fn dispatch_updates_snapshot_and_history() {
        let model = model();

        let outcome = model.dispatch(Action::Play, ActionEvent::default()).await;
        assert_eq!(outcome, Outcome::Started { track: "Song A".to_string() });

        let snapshot = model.get_player_snapshot().await;
        assert_eq!(snapshot.mode, Mode::Playing);
        assert!(snapshot.is_playing);
        assert_eq!(snapshot.current_track(), "Song A");
        assert_eq!(snapshot.last_outcome, Some(outcome));

        let history = model.get_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, Action::Play);
    }

    #[tokio::test]
    async fn history_is_newest_first_and_bounded() {
        let model = model();

        for _ in 0..HISTORY_LIMIT + 10 {
            model.dispatch(Action::Next, ActionEvent::default()).await;
        }
        model.dispatch(Action::Lock, ActionEvent::default()).await;

        let history = model.get_history().await;
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].outcome, Outcome::Locked);
    }

    #[tokio::test]
    async fn notices_can_be_cleared() {
        let model = model();
        assert!(!model.has_notice().await);

        model.set_notice("Player is locked".to_string()).await;
        assert!(model.has_notice().await);

        // Fresh notices survive the periodic sweep
        model.auto_clear_old_notices().await;
        assert!(model.has_notice().await);

        model.clear_notice().await;
        assert!(!model.has_notice().await);
    }

    #[tokio::test]
    async fn notices_expire_after_timeout() {
        let model = model();
        model.set_notice("Player is locked".to_string()).await;

        model.ui_state.lock().await.notice_timestamp =
            Some(Instant::now() - Duration::from_secs(6));
        model.auto_clear_old_notices().await;

        assert!(!model.has_notice().await);
        assert!(model.get_ui_state().await.notice_timestamp.is_none());
    }

    #[tokio::test]
    async fn help_popup_and_quit_flags() {
        let model = model();

        model.show_help_popup().await;
        assert!(model.is_help_popup_open().await);
        model.hide_help_popup().await;
        assert!(!model.is_help_popup_open().await);

        assert!(!model.should_quit().await);
        model.set_should_quit(true).await;
        assert!(model.should_quit().await);
    }
}
