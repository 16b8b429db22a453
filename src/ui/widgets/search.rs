use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::{app::state::AppState, domain::weather::Location, ui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    frame.render_widget(Clear, area);

    let items = state
        .suggestions
        .iter()
        .map(|location| ListItem::new(suggestion_label(location)))
        .collect::<Vec<_>>();

    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );

    let mut list_state = ListState::default().with_selected(Some(
        state
            .suggestion_selected
            .min(state.suggestions.len().saturating_sub(1)),
    ));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// `Name, Region, Country`, skipping whichever parts are missing.
pub(crate) fn suggestion_label(location: &Location) -> String {
    [
        Some(location.name.as_str()),
        location.admin1.as_deref(),
        location.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::suggestion_label;
    use crate::{domain::weather::Location, test_support::berlin_location};

    #[test]
    fn label_includes_region_and_country() {
        assert_eq!(
            suggestion_label(&berlin_location()),
            "Berlin, Land Berlin, Germany"
        );
    }

    #[test]
    fn label_skips_missing_parts() {
        let mut location = Location::from_coords(1.0, 2.0);
        location.name = "Somewhere".to_string();
        location.country = Some("Nowhere".to_string());
        assert_eq!(suggestion_label(&location), "Somewhere, Nowhere");
    }
}
