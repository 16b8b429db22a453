use super::*;

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

pub(super) fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
}

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if is_interrupt(key) {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }
        if self.search_focused {
            self.handle_search_key(key, tx);
            return Ok(());
        }
        self.handle_main_key(key, tx).await
    }

    async fn handle_main_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Left => self.move_selected_day(-1),
            KeyCode::Right => self.move_selected_day(1),
            KeyCode::Up => self.scroll_hourly(-1),
            KeyCode::Down => self.scroll_hourly(1),
            _ => match command_char(key) {
                Some('q') => tx.send(AppEvent::Quit).await?,
                Some('/') => self.focus_search(),
                Some('r') => self.refresh(tx),
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_search_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) {
        match key.code {
            KeyCode::Esc => self.leave_search(),
            KeyCode::Enter => self.submit_search(tx),
            KeyCode::Backspace => {
                if self.search_query.pop().is_some() {
                    self.on_query_changed(tx);
                }
            }
            KeyCode::Up => {
                self.suggestion_selected = self.suggestion_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.suggestion_selected + 1 < self.suggestions.len() {
                    self.suggestion_selected += 1;
                }
            }
            KeyCode::Char(ch)
                if is_city_char(ch)
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.search_query.push(ch);
                self.on_query_changed(tx);
            }
            _ => {}
        }
    }

    fn focus_search(&mut self) {
        self.search_focused = true;
        self.search_query.clear();
        self.retire_suggestions();
    }

    /// Leaves search mode. Lookups still in flight are outranked so their
    /// results never reopen the list.
    fn leave_search(&mut self) {
        self.search_focused = false;
        self.search_query.clear();
        self.debouncer.cancel();
        self.retire_suggestions();
    }

    fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let picked = self.suggestions.get(self.suggestion_selected).cloned();
        let query = self.search_query.trim().to_string();
        self.leave_search();
        match picked {
            Some(location) => self.select_location(tx, location),
            None if !query.is_empty() => self.start_city_search(tx, query),
            None => {}
        }
    }

    fn refresh(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.fetch_in_flight {
            debug!("refresh ignored while a request is in flight");
            return;
        }
        if let Some(location) = self.selected_location.clone() {
            self.status = Some("Refreshing...".to_string());
            self.fetch_forecast(tx, location);
        }
    }
}
