use chrono::Timelike;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::theme::Theme};

use super::shared::panel_block;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block("Loading", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tick = state.now.second() as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", SPINNER[tick % SPINNER.len()], state.loading_message),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let width = usize::from(inner.width).saturating_sub(4).clamp(8, 56);
    for (label, share) in [("Now    ", 60), ("Sun    ", 80), ("Daily  ", 100), ("Hourly ", 45)] {
        lines.push(skeleton_line(label, width * share / 100, theme));
    }

    if let Some(error) = &state.last_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.danger),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press / to search, r to retry, q to quit",
        Style::default().fg(theme.muted_text),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn skeleton_line(label: &'static str, width: usize, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(theme.muted_text)),
        Span::styled("░".repeat(width.max(1)), Style::default().fg(theme.border)),
    ])
}
