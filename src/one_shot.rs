use std::fmt::Write as _;

use anyhow::{Result, bail};
use chrono::{NaiveDateTime, Utc};
use tracing::info;

use crate::{
    app::state::AppState,
    cli::Cli,
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::{
        buckets::{HOURLY_DISPLAY_LIMIT, default_day, hourly_for_day},
        solar::{SolarReading, clock_label},
        weather::{GeocodeResolution, WeatherSnapshot, round_temp, weather_icon, weather_label},
    },
    ui::widgets::shared::format_temp,
};

/// Fetches one snapshot and prints it without touching the terminal modes.
pub async fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;
    let location = match AppState::initial_location(cli) {
        Some(location) => location,
        None => {
            let geocoder = cli
                .geocode_url
                .as_deref()
                .map_or_else(GeocodeClient::new, GeocodeClient::with_base_url);
            match geocoder.resolve(cli.default_city()).await? {
                GeocodeResolution::Selected(location) => location,
                GeocodeResolution::NotFound(city) => bail!("city not found: {city}"),
            }
        }
    };

    let client = cli
        .forecast_url
        .as_deref()
        .map_or_else(ForecastClient::new, ForecastClient::with_base_url);
    let snapshot = client.fetch(location).await?;
    info!(location = %snapshot.location.display_name(), "one-shot forecast loaded");

    let now = snapshot.local_time(Utc::now());
    print!("{}", summary(&snapshot, now, cli));
    Ok(())
}

/// Plain-text rendering of the dashboard panels.
pub fn summary(snapshot: &WeatherSnapshot, now: NaiveDateTime, cli: &Cli) -> String {
    let mode = cli.icon_mode();
    let current = &snapshot.current;
    let code = current.weather_code;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} · {}",
        snapshot.location.display_name(),
        now.format("%A, %b %-d, %Y %H:%M")
    );
    let _ = writeln!(
        out,
        "{} {}°C {} (feels like {}°C)",
        weather_icon(code, mode),
        snapshot.current_temp(),
        weather_label(code),
        round_temp(current.apparent_temperature)
    );
    let _ = writeln!(
        out,
        "Humidity {:.0}% · Wind {:.0} km/h · Precipitation {:.1} mm",
        current.relative_humidity_2m, current.wind_speed_10m, current.precipitation_mm
    );

    let today = snapshot.today();
    let sunrise = today.and_then(|day| day.sunrise);
    let sunset = today.and_then(|day| day.sunset);
    let solar = SolarReading::compute(sunrise, sunset, now);
    let _ = writeln!(
        out,
        "Sunrise {} · Sunset {} · next sunrise in {} · next sunset in {}",
        clock_label(sunrise),
        clock_label(sunset),
        solar.sunrise_countdown,
        solar.sunset_countdown
    );

    let _ = writeln!(out);
    for day in &snapshot.daily {
        let icon = day
            .weather_code
            .map_or(" ", |code| weather_icon(code, mode));
        let _ = writeln!(
            out,
            "{} {} {}/{}",
            day.date.format("%a %d"),
            icon,
            format_temp(day.temperature_max),
            format_temp(day.temperature_min)
        );
    }

    let hours = hourly_for_day(&snapshot.hourly, default_day(&snapshot.daily), &snapshot.daily);
    if !hours.is_empty() {
        let _ = writeln!(out);
        let row = hours
            .iter()
            .take(HOURLY_DISPLAY_LIMIT)
            .map(|entry| {
                format!(
                    "{} {}",
                    entry.time.format("%H:%M"),
                    format_temp(entry.temperature)
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{row}");
    }
    out
}
