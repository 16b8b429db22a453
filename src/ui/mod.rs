pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if !layout::fits(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {}x{}.",
            layout::MIN_WIDTH,
            layout::MIN_HEIGHT
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    let theme = theme::resolved_theme(state);
    let areas = layout::dashboard(area);
    widgets::header::render(frame, areas.header, state, theme);

    if state.mode == AppMode::Loading || state.weather.is_none() {
        let body = Rect {
            y: areas.current.y,
            height: area.bottom().saturating_sub(areas.current.y),
            ..area
        };
        widgets::loading::render(frame, body, state, theme);
    } else {
        widgets::current::render(frame, areas.current, state, theme);
        widgets::sun::render(frame, areas.sun, state, theme);
        widgets::daily::render(frame, areas.daily, state, theme);
        widgets::hourly::render(frame, areas.hourly, state, theme);
    }

    if state.search_focused && !state.suggestions.is_empty() {
        let popup = layout::suggestions_rect(areas.header, area, state.suggestions.len());
        widgets::search::render(frame, popup, state, theme);
    }
}
