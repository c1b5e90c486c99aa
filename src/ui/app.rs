//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::Event as WidgetEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;

/// Delay between frames. The widgets poll on the same thread, so the loop
/// yields to the runtime instead of blocking on terminal input.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// What a key press asks the dashboard to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    DismissAlert,
    None,
}

impl KeyAction {
    pub fn from_key(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Quit
            }
            KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::DismissAlert,
            _ => KeyAction::None,
        }
    }
}

/// Application state
pub struct App {
    /// Receives events from the widgets.
    event_receiver: mpsc::Receiver<WidgetEvent>,

    /// The dashboard being displayed.
    dashboard: DashboardState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(event_receiver: mpsc::Receiver<WidgetEvent>, dashboard: DashboardState) -> Self {
        Self {
            event_receiver,
            dashboard,
        }
    }

    /// Apply a key press. Returns `false` once the app should exit.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match KeyAction::from_key(key) {
            KeyAction::Quit => false,
            KeyAction::DismissAlert => {
                if let Some(id) = self.dashboard.alerts.close_latest() {
                    log::debug!("Dismissed alert {:?}", id);
                }
                true
            }
            KeyAction::None => true,
        }
    }
}

/// Runs the dashboard in a loop until the user quits, then tears every widget down.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let result = event_loop(terminal, &mut app).await;
    app.dashboard.teardown();
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.add_event(event);
        }

        app.dashboard.update();
        terminal.draw(|f| render_dashboard(f, &app.dashboard))?;

        // Drain key events without blocking the runtime
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(&key) {
                    return Ok(());
                }
            }
        }

        tokio::time::sleep(FRAME_INTERVAL).await;
    }
}
