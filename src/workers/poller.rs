//! Cancellable fixed-interval polling
//!
//! A [`Poller`] invokes its fetch function immediately and then once per
//! interval until stopped. Invocations run as independent tasks, so a fetch
//! slower than the interval overlaps with the next one; each invocation is
//! handed a [`Tick`] so consumers can tell which was issued last.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Issue order of a poll invocation, starting at 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tick(pub u64);

/// Handle to a running poll loop. Stopping is synchronous, idempotent and
/// also happens on drop.
#[derive(Debug)]
pub struct Poller {
    token: CancellationToken,
    driver: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start polling. Must be called from within a tokio runtime.
    pub fn start<F, Fut>(period: Duration, fetch_fn: F) -> Self
    where
        F: Fn(Tick) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let driver_token = token.clone();

        let driver = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut issued = 0u64;

            loop {
                tokio::select! {
                    biased;
                    _ = driver_token.cancelled() => break,
                    _ = ticker.tick() => {
                        issued += 1;
                        let invocation = fetch_fn(Tick(issued));
                        let invocation_token = driver_token.clone();
                        tokio::spawn(async move {
                            tokio::select! {
                                biased;
                                // In-flight work is abandoned at its next suspension point
                                _ = invocation_token.cancelled() => {}
                                _ = invocation => {}
                            }
                        });
                    }
                }
            }
        });

        Self {
            token,
            driver: Some(driver),
        }
    }

    /// Stop polling. No invocation starts or completes after this returns.
    pub fn stop(&mut self) {
        self.token.cancel();
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    fn counting_poller(period: Duration, calls: &Arc<AtomicUsize>) -> Poller {
        let calls = Arc::clone(calls);
        Poller::start(period, move |_| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_invokes_immediately_then_every_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let _poller = counting_poller(Duration::from_millis(100), &calls);

        sleep(Duration::from_millis(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sleep(Duration::from_millis(100)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_invocations_after_stop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut poller = counting_poller(Duration::from_millis(100), &calls);

        sleep(Duration::from_millis(250)).await;
        let before_stop = calls.load(Ordering::SeqCst);
        assert_eq!(before_stop, 3);

        poller.stop();
        assert!(!poller.is_running());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(calls.load(Ordering::SeqCst), before_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut poller = counting_poller(Duration::from_millis(100), &calls);
        poller.stop();
        poller.stop();
        drop(poller);
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_flight_invocation_is_abandoned_on_stop() {
        let completed = Arc::new(AtomicUsize::new(0));
        let done = Arc::clone(&completed);
        let mut poller = Poller::start(Duration::from_millis(100), move |_| {
            let done = Arc::clone(&done);
            async move {
                sleep(Duration::from_millis(50)).await;
                done.fetch_add(1, Ordering::SeqCst);
            }
        });

        sleep(Duration::from_millis(10)).await;
        poller.stop();

        sleep(Duration::from_millis(200)).await;
        assert_eq!(completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_fetches_overlap_with_increasing_ticks() {
        let ticks = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = Arc::clone(&ticks);
        let _poller = Poller::start(Duration::from_millis(100), move |tick| {
            seen.lock().unwrap().push(tick);
            async move {
                sleep(Duration::from_millis(250)).await;
            }
        });

        sleep(Duration::from_millis(210)).await;
        // Three invocations started while the first is still pending
        assert_eq!(*ticks.lock().unwrap(), vec![Tick(1), Tick(2), Tick(3)]);
    }
}
