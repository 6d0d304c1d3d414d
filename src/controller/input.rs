//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Handle help popup (blocks all other interactions)
        if model.is_help_popup_open().await {
            if let KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') = key.code {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            if model.has_notice().await {
                model.clear_notice().await;
            }
            return Ok(());
        }

        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                model.set_should_quit(true).await;
            }
            // Lock / unlock
            KeyCode::Char('l') | KeyCode::Char('L') => {
                drop(model);
                self.toggle_lock().await;
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                drop(model);
                self.toggle_playback().await;
            }
            // Next track, uppercase is a double click
            KeyCode::Char('n') => {
                drop(model);
                self.next_track(false).await;
            }
            KeyCode::Char('N') => {
                drop(model);
                self.next_track(true).await;
            }
            KeyCode::Right => {
                drop(model);
                self.next_track(shift).await;
            }
            // Previous track, uppercase is a double click
            KeyCode::Char('p') => {
                drop(model);
                self.previous_track(false).await;
            }
            KeyCode::Char('P') => {
                drop(model);
                self.previous_track(true).await;
            }
            KeyCode::Left => {
                drop(model);
                self.previous_track(shift).await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
