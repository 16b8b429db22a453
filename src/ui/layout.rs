use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::domain::buckets::HOURLY_DISPLAY_LIMIT;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 23;
const HOURLY_COLUMN_WIDTH: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub header: Rect,
    pub current: Rect,
    pub sun: Rect,
    pub daily: Rect,
    pub hourly: Rect,
}

#[must_use]
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

#[must_use]
pub fn dashboard(area: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    DashboardAreas {
        header: rows[0],
        current: top[0],
        sun: top[1],
        daily: rows[2],
        hourly: rows[3],
    }
}

/// Hourly columns that fit in `width`, never more than the panel limit.
#[must_use]
pub fn hourly_columns(width: u16) -> usize {
    usize::from(width / HOURLY_COLUMN_WIDTH).clamp(1, HOURLY_DISPLAY_LIMIT)
}

/// Drop-down under the search field, tall enough for `rows` entries.
#[must_use]
pub fn suggestions_rect(header: Rect, bounds: Rect, rows: usize) -> Rect {
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(bounds.bottom().saturating_sub(header.bottom()));
    Rect {
        x: header.x + 1,
        y: header.bottom(),
        width: header.width.saturating_sub(2).min(48),
        height,
    }
}
