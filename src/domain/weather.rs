use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

mod conditions;

pub use conditions::{
    PresentationCategory, DEFAULT_CATEGORY, category_for_code, lookup_category, weather_icon,
    weather_label,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Option<u64>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            id: None,
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
            timezone: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub temperature_2m: f32,
    pub apparent_temperature: f32,
    pub precipitation_mm: f32,
    pub wind_speed_10m: f32,
    pub relative_humidity_2m: f32,
    pub weather_code: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature_2m: Option<f32>,
    pub weather_code: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temperature_max: Option<f32>,
    pub temperature_min: Option<f32>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

/// One fetched forecast. Replaced wholesale by the next fetch.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
    pub utc_offset_seconds: i32,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn current_temp(&self) -> i32 {
        round_temp(self.current.temperature_2m)
    }

    /// Wall-clock time at the snapshot's location, in the same frame as the
    /// hourly and daily timestamps.
    #[must_use]
    pub fn local_time(&self, at: DateTime<Utc>) -> NaiveDateTime {
        local_time(at, self.utc_offset_seconds)
    }

    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

#[derive(Debug, Clone)]
pub enum GeocodeResolution {
    Selected(Location),
    NotFound(String),
}

#[must_use]
pub fn local_time(at: DateTime<Utc>, utc_offset_seconds: i32) -> NaiveDateTime {
    FixedOffset::east_opt(utc_offset_seconds)
        .map_or_else(|| at.naive_utc(), |offset| at.with_timezone(&offset).naive_local())
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
