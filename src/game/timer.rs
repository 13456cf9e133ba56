use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Once-per-second elapsed counter for the active round.
///
/// Exactly one timer lives per round. `stop` is idempotent and aborts the
/// tick task, so a resolved or skipped round can never keep counting in the
/// background; dropping the timer stops it too.
#[derive(Debug)]
pub struct RoundTimer {
    elapsed: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl RoundTimer {
    pub fn start() -> Self {
        let elapsed = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&elapsed);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            // The first tick completes immediately; consume it so the
            // counter starts at zero.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                counter.fetch_add(1, Ordering::Relaxed);
            }
        });

        Self {
            elapsed,
            handle: Some(handle),
        }
    }

    /// Whole seconds elapsed since the timer started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stops the tick task. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
