//! Session setup and initialization

use crate::alerts::{AlertBoard, AlertDismisser};
use crate::api::{ApiClient, DashboardApi};
use crate::config::Config;
use crate::consts::dashboard_consts::{EVENT_QUEUE_SIZE, alerts::dismiss_delay};
use crate::events::{Event, EventType, Source};
use crate::logging::LogLevel;
use crate::widgets::DashboardWidgets;
use crate::widgets::view::Tone;
use crate::workers::EventSender;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Backend the widgets poll
    pub api_url: String,
    /// Event receiver for widget events
    pub event_receiver: mpsc::Receiver<Event>,
    /// The mounted dashboard widgets
    pub widgets: DashboardWidgets,
    /// Banners flashed at startup
    pub alerts: AlertBoard,
    /// Clears the startup banners after a delay
    pub dismisser: AlertDismisser,
}

impl SessionData {
    /// Stop every poller and release the chart.
    pub fn teardown(&mut self) {
        self.widgets.teardown();
    }
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Builds the backend client
/// 2. Creates the event channel
/// 3. Mounts the four widgets
/// 4. Flashes the startup banners and schedules their dismissal
///
/// # Arguments
/// * `config` - Resolved and validated configuration
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Session setup failed
pub async fn setup_session(config: Config) -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new(&config.api_url, config.session_cookie.clone())?;
    let api: Arc<dyn DashboardApi> = Arc::new(client);
    let api_url = api.base_url().to_string();

    let (sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let events = EventSender::new(sender);

    let widgets = DashboardWidgets::mount(Arc::clone(&api), events.clone());

    let alerts = AlertBoard::new();
    alerts.push(Tone::Success, format!("Connected to {}", api_url));
    if config.session_cookie.is_some() {
        alerts.push(Tone::Info, "Using the saved session cookie");
    }
    let dismisser = AlertDismisser::on_load(&alerts, dismiss_delay());

    events.send_event(Event::session(
        format!("Dashboard started against {}", api_url),
        EventType::Success,
    ));
    events.send_event(Event::new(
        Source::Alerts,
        format!(
            "{} notice(s) will clear in {}s",
            alerts.len(),
            dismiss_delay().as_secs()
        ),
        EventType::Refresh,
        LogLevel::Debug,
    ));

    Ok(SessionData {
        api_url,
        event_receiver,
        widgets,
        alerts,
        dismisser,
    })
}
