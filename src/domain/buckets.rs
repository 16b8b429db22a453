//! Day bucketing of the hourly series.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::domain::weather::{DailyForecast, HourlyForecast, PresentationCategory, category_for_code};

/// Hourly rows shown by the hourly panel; the bucketing itself is unbounded.
pub const HOURLY_DISPLAY_LIMIT: usize = 12;

/// Weekday name of a timestamp in the snapshot's own timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayLabel(Weekday);

impl DayLabel {
    #[must_use]
    pub fn of_date(date: NaiveDate) -> Self {
        Self(date.weekday())
    }

    #[must_use]
    pub fn of_time(time: NaiveDateTime) -> Self {
        Self(time.weekday())
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    #[must_use]
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for DayLabel {
    fn from(value: Weekday) -> Self {
        Self(value)
    }
}

impl FromStr for DayLabel {
    type Err = chrono::ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Weekday>().map(Self)
    }
}

/// One projected hourly row.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature: Option<f32>,
    pub weather_code: Option<i32>,
}

impl HourlyEntry {
    #[must_use]
    pub fn category(&self) -> Option<PresentationCategory> {
        self.weather_code.map(category_for_code)
    }
}

impl From<&HourlyForecast> for HourlyEntry {
    fn from(hour: &HourlyForecast) -> Self {
        Self {
            time: hour.time,
            temperature: hour.temperature_2m,
            weather_code: hour.weather_code,
        }
    }
}

/// Weekday of the first daily entry, the day selected until the user picks one.
#[must_use]
pub fn default_day(daily: &[DailyForecast]) -> Option<DayLabel> {
    daily.first().map(|day| DayLabel::of_date(day.date))
}

/// Distinct day labels in daily order.
#[must_use]
pub fn day_labels(daily: &[DailyForecast]) -> Vec<DayLabel> {
    let mut labels = Vec::with_capacity(daily.len());
    for day in daily {
        let label = DayLabel::of_date(day.date);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

/// Hourly entries whose weekday matches `target` (or the first daily entry's
/// weekday when unset), in their original order.
#[must_use]
pub fn hourly_for_day(
    hourly: &[HourlyForecast],
    target: Option<DayLabel>,
    daily: &[DailyForecast],
) -> Vec<HourlyEntry> {
    let Some(target) = target.or_else(|| default_day(daily)) else {
        return Vec::new();
    };
    hourly
        .iter()
        .filter(|hour| DayLabel::of_time(hour.time) == target)
        .map(HourlyEntry::from)
        .collect()
}
