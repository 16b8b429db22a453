use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::theme::Theme};

use super::shared::panel_block;

const MAIN_HINT: &str = "/ search · ←/→ day · r refresh · q quit";
const SEARCH_HINT: &str = "↑/↓ pick · Enter go · Esc cancel";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block("skycast", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(hint_width(state))])
            .areas(inner);

    let title = if state.search_focused {
        search_line(state, theme)
    } else {
        location_line(state, theme)
    };
    frame.render_widget(Paragraph::new(title), left);

    let hint = state
        .status
        .clone()
        .unwrap_or_else(|| hint_text(state).to_string());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.muted_text),
        )))
        .right_aligned(),
        right,
    );
}

fn hint_text(state: &AppState) -> &'static str {
    if state.search_focused {
        SEARCH_HINT
    } else {
        MAIN_HINT
    }
}

fn hint_width(state: &AppState) -> u16 {
    let text_len = state
        .status
        .as_deref()
        .unwrap_or_else(|| hint_text(state))
        .chars()
        .count();
    u16::try_from(text_len).unwrap_or(u16::MAX)
}

fn location_line(state: &AppState, theme: Theme) -> Line<'static> {
    let city = state
        .selected_location
        .as_ref()
        .or_else(|| state.weather.as_ref().map(|snapshot| &snapshot.location))
        .map_or_else(|| "Locating...".to_string(), |loc| loc.display_name());
    Line::from(vec![
        Span::styled(
            city,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(header_date(state), Style::default().fg(theme.muted_text)),
    ])
}

fn search_line(state: &AppState, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("Search: ", Style::default().fg(theme.muted_text)),
        Span::styled(
            format!("{}▏", state.search_query),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Long-form local date, e.g. `Tuesday, Aug 5, 2025`.
pub(crate) fn header_date(state: &AppState) -> String {
    state.now.format("%A, %b %-d, %Y").to_string()
}
