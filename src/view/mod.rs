//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, mode colors)
//! - `layout`: Main layout structure (top bar, playlist, history)
//! - `progress`: Status bar rendering
//! - `overlays`: Modal overlays (notice, help)

mod utils;
mod layout;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{HistoryEntry, PlayerSnapshot, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, player: &PlayerSnapshot, history: &[HistoryEntry], ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Mode + device
                Constraint::Min(0),    // Playlist + history
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], player);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45), // Playlist
                Constraint::Percentage(55), // History
            ])
            .split(chunks[1]);

        layout::render_playlist(frame, main_chunks[0], player);
        layout::render_history(frame, main_chunks[1], history);

        progress::render_status_bar(frame, chunks[2], player);

        if ui_state.notice_message.is_some() {
            overlays::render_notice(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::{Action, ActionEvent, AppModel, PlaybackContext};

    fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn renders_mode_tracks_and_history() {
        let ctx = PlaybackContext::new(vec!["Song A".to_string(), "Song B".to_string()]).unwrap();
        let model = AppModel::new("Mix".to_string(), "test-device".to_string(), ctx);
        model.dispatch(Action::Play, ActionEvent::default()).await;

        let player = model.get_player_snapshot().await;
        let history = model.get_history().await;
        let ui_state = model.get_ui_state().await;

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| AppView::render(f, &player, &history, &ui_state))
            .unwrap();

        let text = rendered_text(&terminal);
        assert!(text.contains("Playing"));
        assert!(text.contains("Song B"));
        assert!(text.contains("Playing: Song A"));
        assert!(text.contains("Track 1 / 2"));
    }

    #[tokio::test]
    async fn renders_help_popup_on_top() {
        let ctx = PlaybackContext::new(vec!["Song A".to_string()]).unwrap();
        let model = AppModel::new("Mix".to_string(), "test-device".to_string(), ctx);
        model.show_help_popup().await;

        let player = model.get_player_snapshot().await;
        let ui_state = model.get_ui_state().await;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| AppView::render(f, &player, &[], &ui_state))
            .unwrap();

        assert!(rendered_text(&terminal).contains("Lock / Unlock"));
    }
}
