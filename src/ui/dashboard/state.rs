//! Dashboard state management
//!
//! Holds the mounted widgets alongside the UI-only state (activity log,
//! animation tick).

use crate::alerts::AlertBoard;
use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::widgets::DashboardWidgets;

use std::collections::VecDeque;
use std::time::Instant;

pub struct DashboardState {
    /// Backend the widgets poll.
    pub api_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// The four self-polling widgets.
    pub widgets: DashboardWidgets,
    /// Banners shown above the widgets.
    pub alerts: AlertBoard,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
    /// Paint a dark background behind the panels
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(
        api_url: String,
        widgets: DashboardWidgets,
        alerts: AlertBoard,
        with_background_color: bool,
    ) -> Self {
        Self {
            api_url,
            start_time: Instant::now(),
            widgets,
            alerts,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            with_background_color,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }

    /// Tear down every widget. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.widgets.teardown();
    }
}
