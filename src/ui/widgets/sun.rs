use std::f64::consts::PI;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::solar::clock_label,
    ui::theme::Theme,
};

use super::shared::panel_block;

const PATH: char = '·';
const HORIZON: char = '─';

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block("Sun", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [arc_area, text_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

    let marker = sun_marker(state.icon_mode);
    let arc = arc_rows(
        usize::from(arc_area.width),
        usize::from(arc_area.height),
        state.solar.position,
        marker,
    )
    .into_iter()
    .map(|row| {
        Line::from(
            row.chars()
                .map(|ch| {
                    let style = if ch == marker {
                        Style::default().fg(theme.sun).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.muted_text)
                    };
                    Span::styled(ch.to_string(), style)
                })
                .collect::<Vec<_>>(),
        )
    })
    .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(arc), arc_area);

    let today = state.weather.as_ref().and_then(|snapshot| snapshot.today());
    let muted = Style::default().fg(theme.muted_text);
    let lines = vec![
        Line::from(vec![
            Span::styled("Sunrise ", muted),
            Span::raw(clock_label(today.and_then(|day| day.sunrise))),
            Span::styled("   Sunset ", muted),
            Span::raw(clock_label(today.and_then(|day| day.sunset))),
        ]),
        Line::from(vec![
            Span::styled("Next sunrise in ", muted),
            Span::raw(state.solar.sunrise_countdown.clone()),
        ]),
        Line::from(vec![
            Span::styled("Next sunset in  ", muted),
            Span::raw(state.solar.sunset_countdown.clone()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);
}

fn sun_marker(mode: IconMode) -> char {
    match mode {
        IconMode::Ascii => 'O',
        IconMode::Unicode | IconMode::Emoji => '☀',
    }
}

/// Half-sine path from the left horizon to the right one, with `marker` placed
/// at `position` along it. Rows are ordered top to bottom.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn arc_rows(width: usize, height: usize, position: f64, marker: char) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut grid = vec![vec![' '; width]; height];
    grid[height - 1].fill(HORIZON);

    let row_at = |x: usize| -> usize {
        let t = if width == 1 { 0.5 } else { x as f64 / (width - 1) as f64 };
        let lift = ((PI * t).sin() * (height - 1) as f64).round() as usize;
        height - 1 - lift.min(height - 1)
    };
    for x in 0..width {
        grid[row_at(x)][x] = PATH;
    }

    let x = (position.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
    grid[row_at(x)][x] = marker;

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}
