//! Generic polling widget
//!
//! A [`DataWidget`] owns one [`Poller`] bound to a backend fetch and holds the
//! latest successfully fetched snapshot. Failures are logged and leave the
//! previous snapshot in place.

use super::WidgetKind;
use crate::api::error::ApiError;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::workers::{EventSender, Poller, Tick};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Mutable state shared between a widget and its in-flight fetches.
#[derive(Debug)]
pub struct WidgetState<T> {
    loading: bool,
    snapshot: Option<T>,
    /// Bumped every time a snapshot is applied.
    generation: u64,
    /// Tick of the snapshot currently held.
    applied_tick: Option<Tick>,
    mounted: bool,
}

impl<T> WidgetState<T> {
    pub fn new() -> Self {
        Self {
            loading: true,
            snapshot: None,
            generation: 0,
            applied_tick: None,
            mounted: true,
        }
    }

    /// Replace the snapshot unless a later-issued fetch already landed.
    /// Returns whether the snapshot was applied.
    pub fn apply_success(&mut self, tick: Tick, snapshot: T) -> bool {
        self.loading = false;
        if !self.mounted || self.applied_tick.is_some_and(|applied| applied > tick) {
            return false;
        }
        self.snapshot = Some(snapshot);
        self.applied_tick = Some(tick);
        self.generation += 1;
        true
    }

    /// Record a failed fetch; the held snapshot stays as it is.
    pub fn record_failure(&mut self) {
        self.loading = false;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of a widget's state, handed to render functions.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView<T> {
    pub loading: bool,
    pub snapshot: Option<T>,
    pub generation: u64,
}

pub struct DataWidget<T> {
    kind: WidgetKind,
    state: Arc<Mutex<WidgetState<T>>>,
    poller: Option<Poller>,
    events: EventSender,
}

impl<T> DataWidget<T>
where
    T: Clone + Send + 'static,
{
    /// Mount the widget: start in the loading state and begin polling `fetch`
    /// every `period`.
    pub fn mount<F, Fut>(kind: WidgetKind, period: Duration, events: EventSender, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let state = Arc::new(Mutex::new(WidgetState::new()));
        let poll_state = Arc::clone(&state);
        let poll_events = events.clone();
        let error_handler = ErrorHandler::new();

        let poller = Poller::start(period, move |tick| {
            let pending = fetch();
            let state = Arc::clone(&poll_state);
            let events = poll_events.clone();
            async move {
                events.send_widget_event(
                    kind,
                    format!("Refreshing {} (tick {})", kind.title(), tick.0),
                    EventType::Refresh,
                    LogLevel::Debug,
                );
                let result = pending.await;
                settle(kind, &state, &events, &error_handler, tick, result);
            }
        });

        log::info!(
            "Mounted {} widget, refreshing every {}s",
            kind.title(),
            period.as_secs()
        );

        Self {
            kind,
            state,
            poller: Some(poller),
            events,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn view(&self) -> WidgetView<T> {
        let state = lock(&self.state);
        WidgetView {
            loading: state.loading,
            snapshot: state.snapshot.clone(),
            generation: state.generation,
        }
    }

    pub fn is_mounted(&self) -> bool {
        lock(&self.state).is_mounted()
    }
}

impl<T> DataWidget<T> {
    /// Stop polling and ignore anything still in flight. Idempotent.
    pub fn teardown(&mut self) {
        let Some(mut poller) = self.poller.take() else {
            return;
        };
        poller.stop();
        lock(&self.state).unmount();

        self.events.send_widget_event(
            self.kind,
            format!("{} stopped", self.kind.title()),
            EventType::Teardown,
            LogLevel::Debug,
        );
    }
}

impl<T> Drop for DataWidget<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn lock<T>(state: &Mutex<WidgetState<T>>) -> MutexGuard<'_, WidgetState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Apply one fetch outcome to the widget state and report it.
fn settle<T>(
    kind: WidgetKind,
    state: &Mutex<WidgetState<T>>,
    events: &EventSender,
    error_handler: &ErrorHandler,
    tick: Tick,
    result: Result<T, ApiError>,
) {
    let mut guard = lock(state);
    if !guard.is_mounted() {
        return;
    }

    match result {
        Ok(snapshot) => {
            let applied = guard.apply_success(tick, snapshot);
            drop(guard);
            if applied {
                events.send_widget_event(
                    kind,
                    format!("{} updated", kind.title()),
                    EventType::Success,
                    LogLevel::Debug,
                );
            } else {
                log::debug!(
                    "Dropping {} response from tick {}: a later fetch already landed",
                    kind.title(),
                    tick.0
                );
            }
        }
        Err(e) => {
            guard.record_failure();
            drop(guard);
            let log_level = error_handler.classify_error(&e);
            let msg = format!("Failed to refresh {}: {}", kind.title(), e);
            log::log!(log::Level::from(log_level), "{}", msg);
            events.send_widget_event(kind, msg, EventType::Error, log_level);
        }
    }
}
