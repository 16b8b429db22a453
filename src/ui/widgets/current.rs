use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    domain::weather::{category_for_code, weather_icon, weather_label},
    ui::theme::{Theme, icon_color, temp_color},
};

use super::shared::{format_temp, panel_block};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = panel_block("Now", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = &state.weather else {
        return;
    };
    let current = &snapshot.current;
    let code = current.weather_code;
    let muted = Style::default().fg(theme.muted_text);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                weather_icon(code, state.icon_mode),
                Style::default().fg(icon_color(&theme, category_for_code(code))),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{}C", format_temp(Some(current.temperature_2m))),
                Style::default()
                    .fg(temp_color(&theme, current.temperature_2m))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(weather_label(code), Style::default().fg(theme.text)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Feels like    ", muted),
            Span::raw(format!(
                "{}C",
                format_temp(Some(current.apparent_temperature))
            )),
        ]),
        Line::from(vec![
            Span::styled("Humidity      ", muted),
            Span::raw(format!("{:.0}%", current.relative_humidity_2m)),
        ]),
        Line::from(vec![
            Span::styled("Wind          ", muted),
            Span::raw(format!("{:.0} km/h", current.wind_speed_10m)),
        ]),
        Line::from(vec![
            Span::styled("Precipitation ", muted),
            Span::raw(format!("{:.1} mm", current.precipitation_mm)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
