//! Sun position along the day arc and countdowns to the next sunrise and
//! sunset. Everything here is recomputed from scratch on every clock tick.

use chrono::{Duration, NaiveDateTime};

/// Rendered in place of times and countdowns when sunrise or sunset is unknown.
pub const UNKNOWN_PLACEHOLDER: &str = "—";

/// Next-event approximation: one fixed day, not tomorrow's real sunrise.
const DAY_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct SolarReading {
    pub position: f64,
    pub next_sunrise: Option<NaiveDateTime>,
    pub next_sunset: Option<NaiveDateTime>,
    pub sunrise_countdown: String,
    pub sunset_countdown: String,
}

impl SolarReading {
    #[must_use]
    pub fn compute(
        sunrise: Option<NaiveDateTime>,
        sunset: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Self {
        let (next_sunrise, next_sunset) = match (sunrise, sunset) {
            (Some(rise), Some(set)) => (Some(next_event(rise, now)), Some(next_event(set, now))),
            _ => (None, None),
        };

        Self {
            position: sun_position(sunrise, sunset, now),
            next_sunrise,
            next_sunset,
            sunrise_countdown: countdown_label(next_sunrise, now),
            sunset_countdown: countdown_label(next_sunset, now),
        }
    }
}

/// Fraction of the daylight window elapsed at `now`, in `[0, 1]`.
#[must_use]
pub fn sun_position(
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> f64 {
    let (Some(sunrise), Some(sunset)) = (sunrise, sunset) else {
        return 0.0;
    };
    if now < sunrise {
        return 0.0;
    }
    if now >= sunset {
        return 1.0;
    }

    let elapsed = (now - sunrise).num_milliseconds() as f64;
    let span = (sunset - sunrise).num_milliseconds() as f64;
    (elapsed / span).clamp(0.0, 1.0)
}

/// `event` itself while it is still ahead, otherwise the same time a day later.
#[must_use]
pub fn next_event(event: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
    if now < event {
        event
    } else {
        event + Duration::hours(DAY_HOURS)
    }
}

/// `"{h}h {m}m {s}s"` until `target`, floored at zero.
#[must_use]
pub fn format_countdown(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let total = (target - now).num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

#[must_use]
pub fn countdown_label(target: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    target.map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |target| format_countdown(target, now),
    )
}

#[must_use]
pub fn clock_label(time: Option<NaiveDateTime>) -> String {
    time.map_or_else(
        || UNKNOWN_PLACEHOLDER.to_string(),
        |t| t.format("%H:%M").to_string(),
    )
}
