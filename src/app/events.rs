use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, task::JoinHandle, time::interval};

use crate::domain::weather::{GeocodeResolution, Location, WeatherSnapshot};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickClock,
    Input(Event),
    FetchStarted,
    GeocodeResolved {
        request_id: u64,
        resolution: GeocodeResolution,
    },
    GeocodeFailed {
        request_id: u64,
        error: String,
    },
    FetchSucceeded {
        request_id: u64,
        snapshot: WeatherSnapshot,
    },
    FetchFailed {
        request_id: u64,
        error: String,
    },
    SuggestionsDue {
        query: String,
    },
    SuggestionsReady {
        seq: u64,
        results: Vec<Location>,
    },
    SuggestionsFailed {
        seq: u64,
        error: String,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Handle to the one-second clock. The task stops when the handle drops.
#[derive(Debug)]
pub struct ClockTask {
    handle: JoinHandle<()>,
}

impl ClockTask {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ClockTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[must_use]
pub fn start_clock_task(tx: mpsc::Sender<AppEvent>, period: Duration) -> ClockTask {
    let handle = tokio::spawn(async move {
        let mut ticker = interval(period);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickClock).await.is_err() {
                break;
            }
        }
    });
    ClockTask { handle }
}

/// Delayed dispatch that restarts on every trigger. Only the timer is
/// cancellable; whatever the fired event starts runs to completion.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn trigger(&mut self, tx: &mpsc::Sender<AppEvent>, event: AppEvent) {
        self.cancel();
        let tx = tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(query: &str) -> AppEvent {
        AppEvent::SuggestionsDue {
            query: query.to_string(),
        }
    }

    #[tokio::test]
    async fn debouncer_only_fires_the_last_trigger() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(Duration::from_millis(40));

        debouncer.trigger(&tx, due("B"));
        debouncer.trigger(&tx, due("Be"));
        debouncer.trigger(&tx, due("Ber"));
        assert!(debouncer.is_pending());

        let fired = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("debounced event")
            .expect("channel open");
        assert!(matches!(fired, AppEvent::SuggestionsDue { ref query } if query == "Ber"));

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn cancelled_debouncer_never_fires() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = Debouncer::new(Duration::from_millis(30));
        debouncer.trigger(&tx, due("Paris"));
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn clock_ticks_until_dropped() {
        let (tx, mut rx) = mpsc::channel(64);
        let clock = start_clock_task(tx, Duration::from_millis(10));

        for _ in 0..3 {
            let tick = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("tick")
                .expect("channel open");
            assert!(matches!(tick, AppEvent::TickClock));
        }

        drop(clock);
        tokio::time::sleep(Duration::from_millis(50)).await;
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }
}
