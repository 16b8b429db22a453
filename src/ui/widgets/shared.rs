use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

use crate::{domain::weather::round_temp, ui::theme::Theme};

pub(crate) fn panel_block(title: impl Into<String>, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.border))
}

/// Rounded degrees, or `--` for a missing reading.
pub(crate) fn format_temp(value: Option<f32>) -> String {
    value.map_or_else(|| "--".to_string(), |t| format!("{}°", round_temp(t)))
}

#[cfg(test)]
mod tests {
    use super::format_temp;

    #[test]
    fn format_temp_rounds_half_away_from_zero() {
        assert_eq!(format_temp(Some(2.5)), "3°");
        assert_eq!(format_temp(Some(-2.5)), "-3°");
        assert_eq!(format_temp(None), "--");
    }
}
