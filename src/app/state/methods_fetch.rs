use super::*;

impl AppState {
    pub(crate) async fn start_fetch(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        tx.send(AppEvent::FetchStarted).await?;
        if let Some(location) = self.selected_location.clone() {
            self.fetch_forecast(tx, location);
            return Ok(());
        }
        if let Some(location) = Self::initial_location(cli) {
            tx.send(AppEvent::GeocodeResolved {
                request_id: self.forecast_request_id,
                resolution: GeocodeResolution::Selected(location),
            })
            .await?;
            return Ok(());
        }
        self.start_city_search(tx, cli.default_city());
        Ok(())
    }

    /// Makes `location` current and fetches its forecast, superseding any
    /// forecast or city search still in flight.
    pub(crate) fn select_location(&mut self, tx: &mpsc::Sender<AppEvent>, location: Location) {
        self.selected_location = Some(location.clone());
        self.status = None;
        self.mode = AppMode::Loading;
        self.loading_message = format!("Loading {}...", location.display_name());
        self.fetch_forecast(tx, location);
    }

    pub(crate) fn fetch_forecast(&mut self, tx: &mpsc::Sender<AppEvent>, location: Location) {
        self.forecast_request_id += 1;
        self.fetch_in_flight = true;
        let request_id = self.forecast_request_id;
        info!(
            request_id,
            lat = location.latitude,
            lon = location.longitude,
            "fetching forecast"
        );

        let client = self.forecast_client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match client.fetch(location).await {
                Ok(snapshot) => AppEvent::FetchSucceeded {
                    request_id,
                    snapshot,
                },
                Err(err) => AppEvent::FetchFailed {
                    request_id,
                    error: format!("{err:#}"),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    /// Free-text search resolved to its first match. Supersedes whatever
    /// forecast or search is still in flight.
    pub(crate) fn start_city_search(&mut self, tx: &mpsc::Sender<AppEvent>, city: String) {
        self.forecast_request_id += 1;
        self.fetch_in_flight = true;
        let request_id = self.forecast_request_id;
        self.status = Some(format!("Searching {city}..."));
        info!(request_id, %city, "resolving city");

        let geocoder = self.geocode_client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match geocoder.resolve(city).await {
                Ok(resolution) => AppEvent::GeocodeResolved {
                    request_id,
                    resolution,
                },
                Err(err) => AppEvent::GeocodeFailed {
                    request_id,
                    error: format!("{err:#}"),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    /// Re-arms the debounce for the current query; short queries clear the
    /// list at once and retire every lookup issued so far.
    pub(crate) fn on_query_changed(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.suggestion_selected = 0;
        let query = self.search_query.trim().to_string();
        if query.chars().count() < crate::data::geocode::MIN_QUERY_CHARS {
            self.debouncer.cancel();
            self.retire_suggestions();
            return;
        }
        self.debouncer.trigger(tx, AppEvent::SuggestionsDue { query });
    }

    pub(crate) fn retire_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestion_selected = 0;
        self.suggestions_applied_seq = self.search_seq;
    }

    /// Fires one suggestion lookup. In-flight lookups are never cancelled;
    /// their results are ordered by `seq` when they land.
    pub(crate) fn dispatch_suggestions(&mut self, tx: &mpsc::Sender<AppEvent>, query: String) {
        self.search_seq += 1;
        let seq = self.search_seq;
        debug!(seq, %query, "dispatching suggestion lookup");

        let geocoder = self.geocode_client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let event = match geocoder.suggest(&query).await {
                Ok(results) => AppEvent::SuggestionsReady { seq, results },
                Err(err) => AppEvent::SuggestionsFailed {
                    seq,
                    error: format!("{err:#}"),
                },
            };
            let _ = tx2.send(event).await;
        });
    }
}
