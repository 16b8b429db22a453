use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::Parser;

use crate::{
    cli::Cli,
    domain::weather::{CurrentConditions, DailyForecast, HourlyForecast, Location, WeatherSnapshot},
};

pub(crate) fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid time fixture")
}

pub(crate) fn state_test_cli() -> Cli {
    Cli::parse_from([
        "skycast",
        "--debounce-ms",
        "50",
        "--forecast-url",
        "http://127.0.0.1:9/v1/forecast",
        "--geocode-url",
        "http://127.0.0.1:9/v1/search",
    ])
}

pub(crate) fn berlin_location() -> Location {
    Location {
        id: Some(2_950_159),
        name: "Berlin".to_string(),
        latitude: 52.52,
        longitude: 13.41,
        country: Some("Germany".to_string()),
        admin1: Some("Land Berlin".to_string()),
        timezone: Some("Europe/Berlin".to_string()),
    }
}

/// Three days of forecast starting Monday 2026-02-16, hourly from midnight.
pub(crate) fn sample_snapshot() -> WeatherSnapshot {
    let start = parse_time("2026-02-16T00:00");
    let hourly = (0..72)
        .map(|hour| HourlyForecast {
            time: start + Duration::hours(hour),
            temperature_2m: Some(-2.0 + (hour % 24) as f32 * 0.5),
            weather_code: Some(if hour % 24 < 12 { 0 } else { 61 }),
        })
        .collect();
    let first_day = NaiveDate::from_ymd_opt(2026, 2, 16).expect("valid date");
    let daily = (0..3)
        .map(|offset| {
            let date = first_day + Duration::days(offset);
            DailyForecast {
                date,
                weather_code: Some([3, 61, 95][offset as usize]),
                temperature_max: Some(4.0 + offset as f32),
                temperature_min: Some(-3.0 + offset as f32),
                sunrise: date.and_hms_opt(7, 25, 0),
                sunset: date.and_hms_opt(17, 30, 0),
            }
        })
        .collect();

    WeatherSnapshot {
        location: berlin_location(),
        current: CurrentConditions {
            temperature_2m: 3.4,
            apparent_temperature: 0.6,
            precipitation_mm: 0.2,
            wind_speed_10m: 14.8,
            relative_humidity_2m: 81.0,
            weather_code: 3,
        },
        hourly,
        daily,
        utc_offset_seconds: 3600,
        fetched_at: Utc
            .with_ymd_and_hms(2026, 2, 16, 9, 0, 0)
            .single()
            .expect("valid fetch time"),
    }
}
