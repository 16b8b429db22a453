#![allow(clippy::cast_precision_loss)]
#![allow(dead_code)]

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::Parser;
use serde_json::{Value, json};
use skycast::{
    app::{
        events::AppEvent,
        state::{AppMode, AppState},
    },
    cli::Cli,
    domain::weather::{CurrentConditions, DailyForecast, HourlyForecast, Location, WeatherSnapshot},
};
use tokio::sync::mpsc;

pub const FIRST_DAY: &str = "2026-02-16";

pub fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").expect("valid fixed time")
}

/// CLI pointed at unreachable endpoints unless overridden.
pub fn offline_cli(extra: &[&str]) -> Cli {
    let mut args = vec![
        "skycast",
        "--debounce-ms",
        "50",
        "--forecast-url",
        "http://127.0.0.1:9/v1/forecast",
        "--geocode-url",
        "http://127.0.0.1:9/v1/search",
    ];
    args.extend_from_slice(extra);
    Cli::parse_from(args)
}

pub fn mocked_cli(server_uri: &str, extra: &[&str]) -> Cli {
    let forecast = format!("{server_uri}/v1/forecast");
    let geocode = format!("{server_uri}/v1/search");
    let mut args = vec![
        "skycast".to_string(),
        "--debounce-ms".to_string(),
        "50".to_string(),
        "--forecast-url".to_string(),
        forecast,
        "--geocode-url".to_string(),
        geocode,
    ];
    args.extend(extra.iter().map(ToString::to_string));
    Cli::parse_from(args)
}

pub fn berlin_location() -> Location {
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

pub fn place(name: &str, country: &str) -> Location {
    Location {
        id: None,
        name: name.to_string(),
        latitude: 48.85,
        longitude: 2.35,
        country: Some(country.to_string()),
        admin1: None,
        timezone: None,
    }
}

/// Monday through Wednesday, 24 hourly points per day.
pub fn fixture_snapshot(weather_code: i32) -> WeatherSnapshot {
    let start = parse_time("2026-02-16T00:00");
    let first_day = NaiveDate::from_ymd_opt(2026, 2, 16).expect("valid fixed date");

    WeatherSnapshot {
        location: berlin_location(),
        current: CurrentConditions {
            temperature_2m: 3.4,
            apparent_temperature: 0.6,
            precipitation_mm: 0.2,
            wind_speed_10m: 14.8,
            relative_humidity_2m: 81.0,
            weather_code,
        },
        hourly: (0..72)
            .map(|hour| HourlyForecast {
                time: start + chrono::Duration::hours(hour),
                temperature_2m: Some(-2.0 + (hour % 24) as f32 * 0.5),
                weather_code: Some(weather_code),
            })
            .collect(),
        daily: (0..3)
            .map(|offset| {
                let date = first_day + chrono::Duration::days(offset);
                DailyForecast {
                    date,
                    weather_code: Some(weather_code),
                    temperature_max: Some(4.0 + offset as f32),
                    temperature_min: Some(-3.0 + offset as f32),
                    sunrise: date.and_hms_opt(7, 25, 0),
                    sunset: date.and_hms_opt(17, 30, 0),
                }
            })
            .collect(),
        utc_offset_seconds: 3600,
        fetched_at: Utc
            .with_ymd_and_hms(2026, 2, 16, 9, 0, 0)
            .single()
            .expect("valid fetch time"),
    }
}

/// Open-Meteo forecast body matching `fixture_snapshot`'s shape.
pub fn forecast_body(weather_code: i32) -> Value {
    let times = (0..48)
        .map(|hour| format!("2026-02-{:02}T{:02}:00", 16 + hour / 24, hour % 24))
        .collect::<Vec<_>>();
    json!({
        "latitude": 52.52,
        "longitude": 13.41,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Berlin",
        "current": {
            "time": "2026-02-16T10:00",
            "temperature_2m": 3.4,
            "apparent_temperature": 0.6,
            "precipitation": 0.2,
            "wind_speed_10m": 14.8,
            "relative_humidity_2m": 81,
            "weather_code": weather_code
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![1.5; 48],
            "weather_code": vec![weather_code; 48]
        },
        "daily": {
            "time": [FIRST_DAY, "2026-02-17"],
            "weather_code": [weather_code, 61],
            "temperature_2m_max": [4.0, 5.0],
            "temperature_2m_min": [-3.0, -2.0],
            "sunrise": ["2026-02-16T07:25", "2026-02-17T07:23"],
            "sunset": ["2026-02-16T17:30", "2026-02-17T17:32"]
        }
    })
}

pub fn geocode_body(names: &[(&str, &str)]) -> Value {
    let results = names
        .iter()
        .enumerate()
        .map(|(idx, (name, country))| {
            json!({
                "id": idx + 1,
                "name": name,
                "latitude": 48.85 + idx as f64,
                "longitude": 2.35,
                "country": country,
                "admin1": "Region",
                "timezone": "Europe/Paris"
            })
        })
        .collect::<Vec<_>>();
    json!({ "results": results, "generationtime_ms": 0.5 })
}

/// State holding `fixture_snapshot` as the answer to forecast request 1.
pub async fn ready_state(cli: &Cli, weather_code: i32) -> AppState {
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(cli);
    state.forecast_request_id = 1;
    state
        .handle_event(
            AppEvent::FetchSucceeded {
                request_id: 1,
                snapshot: fixture_snapshot(weather_code),
            },
            &tx,
            cli,
        )
        .await
        .expect("fetch succeeded");
    assert_eq!(state.mode, AppMode::Ready);
    state
}

/// Feeds queued events back into `state` until `done` holds or time runs out.
pub async fn pump_until(
    state: &mut AppState,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
    cli: &Cli,
    done: impl Fn(&AppState) -> bool,
) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !done(state) {
        let event = tokio::time::timeout_at(deadline, rx.recv())
            .await
            .expect("condition reached before deadline")
            .expect("channel open");
        if matches!(event, AppEvent::TickClock) {
            continue;
        }
        state.handle_event(event, tx, cli).await.expect("event handled");
    }
}
