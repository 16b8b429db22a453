use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::{
    app::state::AppState,
    domain::weather::weather_icon,
    ui::{
        layout::hourly_columns,
        theme::{Theme, icon_color, temp_color},
    },
};

use super::shared::{format_temp, panel_block};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let title = state.selected_day.map_or_else(
        || "Hourly".to_string(),
        |day| format!("{day} · hourly  ↑/↓"),
    );
    let block = panel_block(title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hours = state.visible_hours();
    if hours.is_empty() {
        let day = state
            .selected_day
            .map_or_else(|| "this day".to_string(), |day| day.to_string());
        frame.render_widget(
            Paragraph::new(format!("No hourly data for {day}"))
                .style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    }

    let slice = &hours[..hours.len().min(hourly_columns(inner.width))];

    let times = Row::new(
        slice
            .iter()
            .map(|entry| {
                Cell::from(entry.time.format("%H:%M").to_string())
                    .style(Style::default().fg(theme.muted_text))
            })
            .collect::<Vec<_>>(),
    );

    let icons = Row::new(
        slice
            .iter()
            .map(|entry| match (entry.weather_code, entry.category()) {
                (Some(code), Some(category)) => {
                    Cell::from(weather_icon(code, state.icon_mode))
                        .style(Style::default().fg(icon_color(&theme, category)))
                }
                _ => Cell::from(" "),
            })
            .collect::<Vec<_>>(),
    );

    let temps = Row::new(
        slice
            .iter()
            .map(|entry| {
                Cell::from(format_temp(entry.temperature)).style(
                    Style::default().fg(entry
                        .temperature
                        .map_or(theme.muted_text, |t| temp_color(&theme, t))),
                )
            })
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let widths = vec![Constraint::Length(6); slice.len()];
    let table = Table::new([times, icons, temps], widths);
    frame.render_widget(table, inner);
}
