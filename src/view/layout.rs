//! Layout rendering (top bar, playlist, history)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{HistoryEntry, Outcome, PlayerSnapshot};
use super::utils::{calculate_num_width, mode_color, mode_icon, press_label, truncate_string};

pub fn render_top_bar(frame: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Mode
            Constraint::Length(30), // Device name
        ])
        .split(area);

    let color = mode_color(player.mode);
    let mode_line = Line::from(vec![
        Span::styled(
            format!("{} {}", mode_icon(player.mode), player.mode),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            if player.is_playing { "playback on" } else { "playback off" },
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let mode = Paragraph::new(mode_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mode ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(mode, chunks[0]);

    let device = Paragraph::new(format!("🎵 {}", player.device_name))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Device "));
    frame.render_widget(device, chunks[1]);
}

pub fn render_playlist(frame: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let num_width = calculate_num_width(player.tracks.len());
    let title_width = (area.width as usize).saturating_sub(num_width + 8);

    let items: Vec<ListItem> = player
        .tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_current = i == player.current_index;
            let marker = if is_current { mode_icon(player.mode) } else { "  " };
            let text = format!(
                "{:>width$} {} {}",
                i + 1,
                marker,
                truncate_string(track, title_width),
                width = num_width
            );

            let style = if is_current {
                Style::default()
                    .fg(mode_color(player.mode))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", player.playlist_name))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(player.current_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_history(frame: &mut Frame, area: Rect, history: &[HistoryEntry]) {
    let items: Vec<ListItem> = history
        .iter()
        .map(|entry| {
            let outcome_style = match entry.outcome {
                Outcome::Ignored { .. } => Style::default().fg(Color::Red),
                Outcome::Locked | Outcome::Unlocked { .. } => Style::default().fg(Color::Yellow),
                _ => Style::default().fg(Color::White),
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<10}", press_label(entry.action, entry.event)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(entry.outcome.to_string(), outcome_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" History ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(list, area);
}
