use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    domain::{
        buckets::DayLabel,
        weather::{DailyForecast, category_for_code, weather_icon},
    },
    ui::theme::{Theme, icon_color},
};

use super::shared::{format_temp, panel_block};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block("Daily  ←/→", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = &state.weather else {
        return;
    };
    if snapshot.daily.is_empty() {
        frame.render_widget(
            Paragraph::new("No daily forecast").style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    }

    let columns = Layout::horizontal(vec![Constraint::Fill(1); snapshot.daily.len()]).split(inner);
    for (day, column) in snapshot.daily.iter().zip(columns.iter()) {
        let selected = state.selected_day == Some(DayLabel::of_date(day.date));
        frame.render_widget(day_cell(day, selected, state, theme), *column);
    }
}

fn day_cell(day: &DailyForecast, selected: bool, state: &AppState, theme: Theme) -> Paragraph<'static> {
    let label = DayLabel::of_date(day.date);
    let name_style = if selected {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.text)
    };
    let icon = day
        .weather_code
        .map_or(" ", |code| weather_icon(code, state.icon_mode));
    let icon_style = day.weather_code.map_or_else(Style::default, |code| {
        Style::default().fg(icon_color(&theme, category_for_code(code)))
    });

    Paragraph::new(vec![
        Line::from(Span::styled(format!(" {} ", label.short_name()), name_style)),
        Line::from(Span::styled(icon, icon_style)),
        Line::from(vec![
            Span::styled(format_temp(day.temperature_max), Style::default().fg(theme.text)),
            Span::styled("/", Style::default().fg(theme.muted_text)),
            Span::styled(format_temp(day.temperature_min), Style::default().fg(theme.muted_text)),
        ]),
    ])
    .centered()
}
