//! Player button presses

use crate::model::{Action, ActionEvent, Outcome};

use super::AppController;

impl AppController {
    pub async fn press(&self, action: Action, event: ActionEvent) -> Outcome {
        tracing::debug!(action = %action, double_click = event.double_click, "Button pressed");

        let model = self.model.lock().await;
        let outcome = model.dispatch(action, event).await;

        match &outcome {
            Outcome::Ignored { .. } => {
                model.set_notice(outcome.to_string()).await;
            }
            _ => {
                // Clear any stale notice
                model.clear_notice().await;
            }
        }

        outcome
    }

    pub async fn toggle_lock(&self) -> Outcome {
        self.press(Action::Lock, ActionEvent::default()).await
    }

    pub async fn toggle_playback(&self) -> Outcome {
        self.press(Action::Play, ActionEvent::default()).await
    }

    pub async fn next_track(&self, double_click: bool) -> Outcome {
        self.press(Action::Next, ActionEvent { double_click }).await
    }

    pub async fn previous_track(&self, double_click: bool) -> Outcome {
        self.press(Action::Previous, ActionEvent { double_click }).await
    }
}
