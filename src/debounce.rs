//! Cancellable delayed execution for input-driven effects.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Delay used by the dashboard password fields.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runs an effect once its input has been stable for `delay`.
///
/// Scheduling a new effect cancels the one still waiting.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `effect` after the delay, superseding any pending effect.
    ///
    /// The returned handle resolves to `true` if the effect ran and `false`
    /// if it was cancelled first. Must be called within a tokio runtime.
    pub fn schedule<F, Fut>(&mut self, effect: F) -> JoinHandle<bool>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.replace(token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => false,
                _ = tokio::time::sleep(delay) => {
                    effect().await;
                    true
                }
            }
        })
    }

    /// Cancels the pending effect, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
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
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_effect_runs_after_delay() {
        let mut debouncer = Debouncer::default();
        let runs = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&runs);
        let handle = debouncer.schedule(move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        assert!(handle.await.unwrap());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_schedule_supersedes_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let seen = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for value in 1..=3 {
            let seen = Arc::clone(&seen);
            handles.push(debouncer.schedule(move || async move {
                seen.store(value, Ordering::SeqCst);
            }));
        }

        let mut fired = Vec::new();
        for handle in handles {
            fired.push(handle.await.unwrap());
        }
        assert_eq!(fired, vec![false, false, true]);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let mut debouncer = Debouncer::default();
        let handle = debouncer.schedule(|| async {});

        drop(debouncer);

        assert!(!handle.await.unwrap());
    }
}
