use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::{
    CurrentConditions, DailyForecast, HourlyForecast, Location, WeatherSnapshot, parse_date,
    parse_datetime,
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,precipitation,wind_speed_10m,relative_humidity_2m,weather_code";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("{series} series field `{field}` has {found} values, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, location: Location) -> Result<WeatherSnapshot> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to parse forecast payload")?;

        snapshot_from_payload(payload, location)
    }
}

fn snapshot_from_payload(payload: ForecastResponse, location: Location) -> Result<WeatherSnapshot> {
    let hourly = parse_hourly(&payload.hourly).context("invalid hourly series")?;
    let daily = parse_daily(&payload.daily).context("invalid daily series")?;
    let current = CurrentConditions {
        temperature_2m: payload.current.temperature_2m,
        apparent_temperature: payload.current.apparent_temperature,
        precipitation_mm: payload.current.precipitation,
        wind_speed_10m: payload.current.wind_speed_10m,
        relative_humidity_2m: payload.current.relative_humidity_2m,
        weather_code: payload.current.weather_code,
    };

    Ok(WeatherSnapshot {
        location,
        current,
        hourly,
        daily,
        utc_offset_seconds: payload.utc_offset_seconds,
        fetched_at: Utc::now(),
    })
}

fn ensure_len(
    series: &'static str,
    field: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), SeriesError> {
    if expected == found {
        Ok(())
    } else {
        Err(SeriesError::LengthMismatch {
            series,
            field,
            expected,
            found,
        })
    }
}

fn parse_hourly(hourly: &HourlyBlock) -> Result<Vec<HourlyForecast>, SeriesError> {
    let len = hourly.time.len();
    ensure_len("hourly", "temperature_2m", len, hourly.temperature_2m.len())?;
    ensure_len("hourly", "weather_code", len, hourly.weather_code.len())?;

    let mut out = Vec::with_capacity(len);
    for idx in 0..len {
        let Some(time) = parse_datetime(&hourly.time[idx]) else {
            continue;
        };

        out.push(HourlyForecast {
            time,
            temperature_2m: hourly.temperature_2m[idx],
            weather_code: hourly.weather_code[idx],
        });
    }
    Ok(out)
}

fn parse_daily(daily: &DailyBlock) -> Result<Vec<DailyForecast>, SeriesError> {
    let len = daily.time.len();
    ensure_len("daily", "weather_code", len, daily.weather_code.len())?;
    ensure_len("daily", "temperature_2m_max", len, daily.temperature_2m_max.len())?;
    ensure_len("daily", "temperature_2m_min", len, daily.temperature_2m_min.len())?;
    ensure_len("daily", "sunrise", len, daily.sunrise.len())?;
    ensure_len("daily", "sunset", len, daily.sunset.len())?;

    let mut out = Vec::with_capacity(len);
    for idx in 0..len {
        let Some(date) = parse_date(&daily.time[idx]) else {
            continue;
        };

        out.push(DailyForecast {
            date,
            weather_code: daily.weather_code[idx],
            temperature_max: daily.temperature_2m_max[idx],
            temperature_min: daily.temperature_2m_min[idx],
            sunrise: daily.sunrise[idx].as_deref().and_then(parse_datetime),
            sunset: daily.sunset[idx].as_deref().and_then(parse_datetime),
        });
    }
    Ok(out)
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    utc_offset_seconds: i32,
    current: CurrentBlock,
    hourly: HourlyBlock,
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f32,
    apparent_temperature: f32,
    precipitation: f32,
    wind_speed_10m: f32,
    relative_humidity_2m: f32,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f32>>,
    weather_code: Vec<Option<i32>>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    sunrise: Vec<Option<String>>,
    sunset: Vec<Option<String>>,
}
