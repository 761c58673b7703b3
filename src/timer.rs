//! One-shot completion timer for a spin
//!
//! The timer owns a tokio task that sleeps for the spin duration and then
//! runs the completion callback. Dropping or cancelling the timer aborts the
//! task, so a cancelled spin never reports completion.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

#[derive(Debug)]
pub struct SpinTimer {
    spin_id: u64,
    handle: JoinHandle<()>,
}

impl SpinTimer {
    /// Arms a timer that calls `on_complete` once after `duration`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(spin_id: u64, duration: Duration, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + duration;
        debug!(spin_id, ?duration, "arming spin timer");

        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            debug!(spin_id, "spin timer fired");
            on_complete();
        });

        Self { spin_id, handle }
    }

    pub fn spin_id(&self) -> u64 {
        self.spin_id
    }

    /// Whether the callback has already run (or the task was aborted)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the timer; the callback will not run if it has not already
    pub fn cancel(self) {
        if !self.handle.is_finished() {
            debug!(spin_id = self.spin_id, "cancelling spin timer");
        }
        // Drop aborts the task.
    }
}

impl Drop for SpinTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_duration() {
        let (count, callback) = counter();
        let timer = SpinTimer::arm(1, Duration::from_millis(4000), callback);

        tokio::time::sleep(Duration::from_millis(3999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!timer.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_callback() {
        let (count, callback) = counter();
        let timer = SpinTimer::arm(2, Duration::from_millis(4000), callback);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        timer.cancel();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_prevents_callback() {
        let (count, callback) = counter();
        {
            let _timer = SpinTimer::arm(3, Duration::from_millis(500), callback);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifies_through_channel() {
        let (tx, mut rx) = mpsc::channel::<u64>(4);
        let timer = SpinTimer::arm(7, Duration::from_millis(250), move || {
            let _ = tx.try_send(7);
        });
        assert_eq!(timer.spin_id(), 7);

        let received = rx.recv().await;
        assert_eq!(received, Some(7));
        // Sender was moved into the callback and dropped after it ran.
        assert_eq!(rx.recv().await, None);
    }
}
