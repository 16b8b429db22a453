mod common;

use chrono::{TimeZone, Utc};
use common::{offline_cli, place, ready_state};
use ratatui::{Terminal, backend::TestBackend};
use skycast::{app::state::AppState, ui};

fn render_state_to_string(width: u16, height: u16, state: &AppState) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Dashboard at Berlin's solar noon on the fixture's first day.
async fn noon_state(extra: &[&str]) -> AppState {
    let cli = offline_cli(extra);
    let mut state = ready_state(&cli, 3).await;
    state.tick_at(
        Utc.with_ymd_and_hms(2026, 2, 16, 11, 27, 30)
            .single()
            .expect("fixed time"),
    );
    state
}

#[tokio::test]
async fn dashboard_shows_every_panel() {
    let state = noon_state(&[]).await;
    let rendered = render_state_to_string(100, 30, &state);

    assert!(rendered.contains("Berlin, Germany"), "{rendered}");
    assert!(rendered.contains("Monday, Feb 16, 2026"), "{rendered}");
    assert!(rendered.contains("3°C"), "{rendered}");
    assert!(rendered.contains("Overcast"), "{rendered}");
    assert!(rendered.contains("Feels like"), "{rendered}");
    assert!(rendered.contains("Sunrise 07:25"), "{rendered}");
    assert!(rendered.contains("Sunset 17:30"), "{rendered}");
    assert!(rendered.contains("Next sunrise in 18h 57m 30s"), "{rendered}");
    assert!(rendered.contains("Next sunset in  5h 2m 30s"), "{rendered}");
    for day in ["Mon", "Tue", "Wed"] {
        assert!(rendered.contains(day), "missing {day}: {rendered}");
    }
    assert!(rendered.contains("Monday · hourly"), "{rendered}");
    assert!(rendered.contains("00:00"), "{rendered}");
    assert!(rendered.contains("11:00"), "{rendered}");
    assert!(!rendered.contains("12:00"), "{rendered}");
}

#[tokio::test]
async fn sun_marker_is_drawn_on_the_arc() {
    let state = noon_state(&[]).await;
    let rendered = render_state_to_string(100, 30, &state);
    assert_eq!(rendered.matches('☀').count(), 1, "{rendered}");

    let state = noon_state(&["--ascii-icons"]).await;
    let rendered = render_state_to_string(100, 30, &state);
    assert!(rendered.contains("CLD"), "{rendered}");
    assert!(!rendered.contains('☀'), "{rendered}");
}

#[tokio::test]
async fn loading_state_renders_skeleton() {
    let cli = offline_cli(&[]);
    let state = AppState::new(&cli);
    let rendered = render_state_to_string(80, 24, &state);

    assert!(rendered.contains("Initializing..."), "{rendered}");
    assert!(rendered.contains('░'), "{rendered}");
    assert!(rendered.contains("Press / to search"), "{rendered}");
    assert!(!rendered.contains("Sunrise"), "{rendered}");
}

#[tokio::test]
async fn search_popup_lists_suggestions() {
    let mut state = noon_state(&[]).await;
    state.search_focused = true;
    state.search_query = "Par".to_string();
    state.suggestions = vec![place("Paris", "France"), place("Parma", "Italy")];
    state.suggestion_selected = 1;

    let rendered = render_state_to_string(100, 30, &state);
    assert!(rendered.contains("Search: Par"), "{rendered}");
    assert!(rendered.contains("Paris, France"), "{rendered}");
    assert!(rendered.contains("› Parma, Italy"), "{rendered}");
}

#[tokio::test]
async fn tiny_terminal_shows_resize_hint() {
    let state = noon_state(&[]).await;
    let rendered = render_state_to_string(40, 15, &state);
    assert!(rendered.contains("Terminal too small"), "{rendered}");
}

#[tokio::test]
async fn status_message_replaces_key_hint() {
    let mut state = noon_state(&[]).await;
    state.status = Some("City not found: Atlantis".to_string());
    let rendered = render_state_to_string(100, 30, &state);
    assert!(rendered.contains("City not found: Atlantis"), "{rendered}");
    assert!(!rendered.contains("r refresh"), "{rendered}");
}
