//! Status bar rendering

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::{PlayerSnapshot, SEEK_SECONDS};
use super::utils::{mode_color, mode_icon};

pub fn render_status_bar(frame: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let status_text = format!(" {} {} ", mode_icon(player.mode), player.current_track());

    let last_action = player
        .last_outcome
        .as_ref()
        .map(|o| format!(" {} ", o))
        .unwrap_or_else(|| " Press H for help ".to_string());

    let position = format!("Track {} / {}", player.current_index + 1, player.tracks.len());
    let ratio = (player.current_index + 1) as f64 / player.tracks.len() as f64;

    let controls_info = format!(" Seek: {}s ", SEEK_SECONDS);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(status_text)
                .title(Line::from(last_action).right_aligned())
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(mode_color(player.mode)))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(position);

    frame.render_widget(gauge, area);
}
