//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use std::error::Error;

/// Runs the application in headless mode
///
/// Widget events are printed to stdout until Ctrl+C, then every widget is
/// torn down.
///
/// # Arguments
/// * `session` - Session data from setup
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.api_url);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    // Event loop: log events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
            _ = &mut shutdown => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.teardown();
    print_session_exit_success();

    Ok(())
}
