use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    app::events::{AppEvent, ClockTask, Debouncer, start_clock_task},
    cli::{Cli, DEFAULT_CITY, IconMode},
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::{
        buckets::{DayLabel, HOURLY_DISPLAY_LIMIT, HourlyEntry, day_labels, default_day, hourly_for_day},
        solar::SolarReading,
        weather::{GeocodeResolution, Location, WeatherSnapshot, local_time},
    },
};

mod input;
mod methods_fetch;

/// Coordinates of the start city when nothing else is requested.
pub const DEFAULT_COORDS: (f64, f64) = (52.52, 13.41);
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub status: Option<String>,
    pub selected_location: Option<Location>,
    pub weather: Option<WeatherSnapshot>,
    pub selected_day: Option<DayLabel>,
    pub hourly_offset: usize,
    pub now: NaiveDateTime,
    pub solar: SolarReading,
    pub icon_mode: IconMode,
    pub search_focused: bool,
    pub search_query: String,
    pub suggestions: Vec<Location>,
    pub suggestion_selected: usize,
    pub search_seq: u64,
    pub suggestions_applied_seq: u64,
    /// Bumped by every city search, selection and refresh. Results carrying
    /// an older id are dropped.
    pub forecast_request_id: u64,
    pub fetch_in_flight: bool,
    pub clock: Option<ClockTask>,
    debouncer: Debouncer,
    forecast_client: ForecastClient,
    geocode_client: GeocodeClient,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            mode: AppMode::Loading,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            status: None,
            selected_location: None,
            weather: None,
            selected_day: None,
            hourly_offset: 0,
            now,
            solar: SolarReading::compute(None, None, now),
            icon_mode: cli.icon_mode(),
            search_focused: false,
            search_query: String::new(),
            suggestions: Vec::new(),
            suggestion_selected: 0,
            search_seq: 0,
            suggestions_applied_seq: 0,
            forecast_request_id: 0,
            fetch_in_flight: false,
            clock: None,
            debouncer: Debouncer::new(cli.debounce()),
            forecast_client: cli
                .forecast_url
                .as_deref()
                .map_or_else(ForecastClient::new, ForecastClient::with_base_url),
            geocode_client: cli
                .geocode_url
                .as_deref()
                .map_or_else(GeocodeClient::new, GeocodeClient::with_base_url),
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx, cli).await?,
            AppEvent::TickClock => self.tick_at(Utc::now()),
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::FetchStarted => self.handle_fetch_started(),
            AppEvent::GeocodeResolved {
                request_id,
                resolution,
            } => self.handle_geocode_resolved(tx, request_id, resolution),
            AppEvent::GeocodeFailed { request_id, error } => {
                self.handle_geocode_failed(request_id, error);
            }
            AppEvent::FetchSucceeded {
                request_id,
                snapshot,
            } => self.handle_fetch_succeeded(request_id, snapshot),
            AppEvent::FetchFailed { request_id, error } => {
                self.handle_fetch_failed(request_id, error);
            }
            AppEvent::SuggestionsDue { query } => self.dispatch_suggestions(tx, query),
            AppEvent::SuggestionsReady { seq, results } => {
                self.handle_suggestions_ready(seq, results);
            }
            AppEvent::SuggestionsFailed { seq, error } => {
                self.handle_suggestions_failed(seq, &error);
            }
            AppEvent::Quit => self.shutdown(),
        }
        Ok(())
    }

    pub(crate) async fn handle_bootstrap(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        cli.validate()?;
        self.clock = Some(start_clock_task(tx.clone(), CLOCK_PERIOD));
        self.start_fetch(tx, cli).await
    }

    /// Re-derives the local clock and the solar reading from scratch.
    pub fn tick_at(&mut self, at: DateTime<Utc>) {
        self.now = match &self.weather {
            Some(snapshot) => snapshot.local_time(at),
            None => local_time(at, 0),
        };
        let today = self.weather.as_ref().and_then(WeatherSnapshot::today);
        self.solar = SolarReading::compute(
            today.and_then(|day| day.sunrise),
            today.and_then(|day| day.sunset),
            self.now,
        );
    }

    pub(crate) fn handle_fetch_started(&mut self) {
        self.fetch_in_flight = true;
        self.loading_message = "Fetching weather...".to_string();
        if self.weather.is_none() {
            self.mode = AppMode::Loading;
        }
    }

    pub(crate) fn handle_geocode_resolved(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        request_id: u64,
        resolution: GeocodeResolution,
    ) {
        if request_id != self.forecast_request_id {
            debug!(request_id, current = self.forecast_request_id, "dropping superseded city search");
            return;
        }
        match resolution {
            GeocodeResolution::Selected(location) => self.select_location(tx, location),
            GeocodeResolution::NotFound(city) => {
                warn!(%city, "city not found");
                self.fetch_in_flight = false;
                self.status = Some(format!("City not found: {city}"));
                if self.weather.is_none() {
                    self.loading_message = format!("City not found: {city}. Press / to search.");
                } else {
                    self.mode = AppMode::Ready;
                }
            }
        }
    }

    pub(crate) fn handle_geocode_failed(&mut self, request_id: u64, error: String) {
        if request_id != self.forecast_request_id {
            debug!(request_id, "ignoring failure of superseded city search");
            return;
        }
        warn!(%error, "city search failed");
        self.fetch_in_flight = false;
        self.status = Some("City search failed; check your connection".to_string());
        if self.weather.is_some() {
            self.mode = AppMode::Ready;
        } else {
            self.mode = AppMode::Loading;
            self.loading_message = "City search failed. Press / to search again.".to_string();
        }
        self.last_error = Some(error);
    }

    pub(crate) fn handle_fetch_succeeded(&mut self, request_id: u64, snapshot: WeatherSnapshot) {
        if request_id != self.forecast_request_id {
            debug!(request_id, current = self.forecast_request_id, "dropping superseded forecast");
            return;
        }
        info!(location = %snapshot.location.display_name(), "forecast loaded");
        self.fetch_in_flight = false;
        self.selected_day = default_day(&snapshot.daily);
        self.hourly_offset = 0;
        self.weather = Some(snapshot);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.tick_at(Utc::now());
    }

    pub(crate) fn handle_fetch_failed(&mut self, request_id: u64, error: String) {
        if request_id != self.forecast_request_id {
            debug!(request_id, "ignoring failure of superseded forecast");
            return;
        }
        warn!(%error, "forecast fetch failed");
        self.fetch_in_flight = false;
        if self.weather.is_some() {
            self.mode = AppMode::Ready;
            self.status = Some("Fetch failed; keeping last weather (r to retry)".to_string());
        } else {
            self.mode = AppMode::Loading;
            self.loading_message = "Weather unavailable. Press r to retry.".to_string();
        }
        self.last_error = Some(error);
    }

    pub(crate) fn handle_suggestions_ready(&mut self, seq: u64, results: Vec<Location>) {
        if seq <= self.suggestions_applied_seq {
            debug!(seq, applied = self.suggestions_applied_seq, "dropping stale suggestions");
            return;
        }
        self.suggestions_applied_seq = seq;
        self.suggestions = results;
        self.suggestion_selected = 0;
    }

    pub(crate) fn handle_suggestions_failed(&mut self, seq: u64, error: &str) {
        warn!(seq, %error, "suggestion lookup failed");
        if seq > self.suggestions_applied_seq {
            self.suggestions_applied_seq = seq;
            self.suggestions.clear();
            self.suggestion_selected = 0;
        }
    }

    /// Stops the clock and any pending search dispatch.
    pub fn shutdown(&mut self) {
        self.mode = AppMode::Quit;
        self.clock = None;
        self.debouncer.cancel();
    }

    #[must_use]
    pub fn debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Hourly entries of the selected day, unbounded.
    #[must_use]
    pub fn selected_hours(&self) -> Vec<HourlyEntry> {
        self.weather.as_ref().map_or_else(Vec::new, |snapshot| {
            hourly_for_day(&snapshot.hourly, self.selected_day, &snapshot.daily)
        })
    }

    /// The window of selected-day entries the hourly panel shows.
    #[must_use]
    pub fn visible_hours(&self) -> Vec<HourlyEntry> {
        self.selected_hours()
            .into_iter()
            .skip(self.hourly_offset)
            .take(HOURLY_DISPLAY_LIMIT)
            .collect()
    }

    pub(crate) fn move_selected_day(&mut self, step: isize) {
        let Some(snapshot) = &self.weather else {
            return;
        };
        let labels = day_labels(&snapshot.daily);
        if labels.is_empty() {
            return;
        }
        let current = self
            .selected_day
            .and_then(|day| labels.iter().position(|label| *label == day))
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(step)
            .min(labels.len() - 1);
        self.selected_day = Some(labels[next]);
        self.hourly_offset = 0;
    }

    pub(crate) fn scroll_hourly(&mut self, step: isize) {
        let max = self
            .selected_hours()
            .len()
            .saturating_sub(HOURLY_DISPLAY_LIMIT);
        self.hourly_offset = self.hourly_offset.saturating_add_signed(step).min(max);
    }

    pub(crate) fn initial_location(cli: &Cli) -> Option<Location> {
        if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
            return Some(Location::from_coords(lat, lon));
        }
        if cli.city.is_none() {
            let mut berlin = Location::from_coords(DEFAULT_COORDS.0, DEFAULT_COORDS.1);
            berlin.name = DEFAULT_CITY.to_string();
            return Some(berlin);
        }
        None
    }
}
