//! Alert banners and their startup auto-dismissal.

use crate::widgets::view::Tone;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub tone: Tone,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("Alert {0:?} is no longer on the board")]
    NotFound(AlertId),
}

#[derive(Debug, Default)]
struct Board {
    next_id: u64,
    alerts: Vec<Alert>,
}

/// Banners currently shown above the dashboard, oldest first.
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    inner: Arc<Mutex<Board>>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, tone: Tone, message: impl Into<String>) -> AlertId {
        let mut board = self.lock();
        board.next_id += 1;
        let id = AlertId(board.next_id);
        board.alerts.push(Alert {
            id,
            tone,
            message: message.into(),
        });
        id
    }

    pub fn close(&self, id: AlertId) -> Result<(), AlertError> {
        let mut board = self.lock();
        let position = board
            .alerts
            .iter()
            .position(|alert| alert.id == id)
            .ok_or(AlertError::NotFound(id))?;
        board.alerts.remove(position);
        Ok(())
    }

    /// Close the most recently pushed banner, if any.
    pub fn close_latest(&self) -> Option<AlertId> {
        self.lock().alerts.pop().map(|alert| alert.id)
    }

    pub fn present_ids(&self) -> Vec<AlertId> {
        self.lock().alerts.iter().map(|alert| alert.id).collect()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Closes every banner present at startup once `delay` has passed.
///
/// Banners pushed after [`AlertDismisser::on_load`] are left alone, and
/// banners already closed by then are skipped silently.
#[derive(Debug)]
pub struct AlertDismisser {
    handle: JoinHandle<()>,
}

impl AlertDismisser {
    /// Must be called from within a tokio runtime.
    pub fn on_load(board: &AlertBoard, delay: Duration) -> Self {
        let targets = board.present_ids();
        let board = board.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            for id in targets {
                if let Err(e) = board.close(id) {
                    log::trace!("Skipping alert dismissal: {}", e);
                }
            }
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AlertDismisser {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[test]
    fn test_close_unknown_alert_fails() {
        let board = AlertBoard::new();
        let id = board.push(Tone::Info, "hello");
        assert_eq!(board.close(id), Ok(()));
        assert_eq!(board.close(id), Err(AlertError::NotFound(id)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_close_latest_pops_newest() {
        let board = AlertBoard::new();
        let first = board.push(Tone::Success, "first");
        let second = board.push(Tone::Info, "second");
        assert_eq!(board.close_latest(), Some(second));
        assert_eq!(board.present_ids(), vec![first]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismisses_alerts_present_at_load_only() {
        let board = AlertBoard::new();
        for n in 0..3 {
            board.push(Tone::Success, format!("flash {}", n));
        }
        let dismisser = AlertDismisser::on_load(&board, Duration::from_millis(5_000));
        let late = board.push(Tone::Warning, "added after load");

        sleep(Duration::from_millis(4_999)).await;
        assert_eq!(board.len(), 4);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(board.present_ids(), vec![late]);
        assert!(dismisser.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_closed_alert_is_ignored() {
        let board = AlertBoard::new();
        let closed_early = board.push(Tone::Info, "closed by hand");
        board.push(Tone::Info, "closed by timer");
        let _dismisser = AlertDismisser::on_load(&board, Duration::from_millis(5_000));

        board.close(closed_early).unwrap();
        sleep(Duration::from_millis(5_001)).await;
        assert!(board.is_empty());
    }
}
