//! Utility functions for rendering UI components

use ratatui::style::Color;

use crate::model::{Action, ActionEvent, Mode};

pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Locked => Color::Red,
        Mode::Ready => Color::Yellow,
        Mode::Playing => Color::Green,
    }
}

pub fn mode_icon(mode: Mode) -> &'static str {
    match mode {
        Mode::Locked => "🔒",
        Mode::Ready => "⏸ ",
        Mode::Playing => "▶ ",
    }
}

/// Short label for a press, e.g. `Next x2` for a double click
pub fn press_label(action: Action, event: ActionEvent) -> String {
    match action {
        Action::Next | Action::Previous if event.double_click => format!("{} x2", action),
        _ => action.to_string(),
    }
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_width_grows_with_digits() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(10), 3);
        assert_eq!(calculate_num_width(150), 4);
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_string("Song A", 10), "Song A");
        assert_eq!(truncate_string("A very long song title", 10), "A very ...");
    }

    #[test]
    fn press_label_marks_double_clicks() {
        assert_eq!(press_label(Action::Next, ActionEvent::DOUBLE), "Next x2");
        assert_eq!(press_label(Action::Previous, ActionEvent::SINGLE), "Previous");
        assert_eq!(press_label(Action::Play, ActionEvent::DOUBLE), "Play");
    }
}
