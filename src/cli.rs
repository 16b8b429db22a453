#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

/// Start city, matching the coordinates used when none is given.
pub const DEFAULT_CITY: &str = "Berlin";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Terminal weather dashboard with sun arc and day-by-day hourly forecast"
)]
pub struct Cli {
    /// City name (default: Berlin)
    pub city: Option<String>,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Quiet period after the last keystroke before suggestions are fetched
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS, value_parser = clap::value_parser!(u64).range(50..=5000))]
    pub debounce_ms: u64,

    /// Override the forecast endpoint
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Override the geocoding endpoint
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Write diagnostics to this file (filter with SKYCAST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city
            .clone()
            .unwrap_or_else(|| DEFAULT_CITY.to_string())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) =>
            {
                anyhow::bail!("--lat must be within ±90 and --lon within ±180")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
