//! Mount Timer - Cancellable once-per-second tick source
//!
//! The view owns a [`MountTimer`] for exactly as long as it is mounted.
//! The handle owns the background tick task; `cancel()` (or dropping the
//! handle) aborts it, so no tick can outlive the view on any exit path.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Wall-clock tick period for the mounted-duration counter.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle owning a background task that counts whole seconds since start.
///
/// The cumulative count is published on a watch channel; subscribe with
/// [`MountTimer::subscribe`] and await `changed()` to observe each tick.
pub struct MountTimer {
    elapsed_rx: watch::Receiver<u64>,
    task: Option<JoinHandle<()>>,
}

impl MountTimer {
    /// Start a timer ticking once per second.
    pub fn start() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Start a timer with a custom tick period.
    pub fn with_period(period: Duration) -> Self {
        let (tx, rx) = watch::channel(0u64);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // A delayed tick still counts once; never burst to catch up.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; skip it so
            // the count stays aligned with whole elapsed periods.
            ticker.tick().await;

            let mut elapsed: u64 = 0;
            loop {
                ticker.tick().await;
                elapsed += 1;
                if tx.send(elapsed).is_err() {
                    // Every receiver is gone; nobody is watching.
                    break;
                }
            }
        });

        tracing::debug!("mount timer started (period {:?})", period);

        Self {
            elapsed_rx: rx,
            task: Some(task),
        }
    }

    /// Latest published second count.
    pub fn elapsed(&self) -> u64 {
        *self.elapsed_rx.borrow()
    }

    /// Subscribe to tick updates.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed_rx.clone()
    }

    /// Stop the tick task. Idempotent; once this returns, the counter is
    /// frozen and the watch channel closes.
    ///
    /// `abort()` cannot interrupt a poll that is already past its await
    /// point, so on a multi-thread runtime one tick mid-send may still
    /// land after this returns. The channel closes before any later tick
    /// could fire, so subscribers see at most that one value and then the
    /// closed channel.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("mount timer cancelled at {}s", self.elapsed());
        }
    }
}

impl Drop for MountTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_counts_one_increment_per_tick() {
        let timer = MountTimer::start();
        let mut ticks = timer.subscribe();

        for expected in 1..=3u64 {
            ticks.changed().await.unwrap();
            assert_eq!(*ticks.borrow(), expected);
        }
        assert_eq!(timer.elapsed(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent() {
        let mut timer = MountTimer::start();
        let mut ticks = timer.subscribe();

        ticks.changed().await.unwrap();
        timer.cancel();
        // Second cancel is a no-op, not a panic.
        timer.cancel();
        tokio::task::yield_now().await;

        assert_eq!(timer.elapsed(), 1);
        assert!(ticks.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_period() {
        let timer = MountTimer::with_period(Duration::from_millis(100));
        let mut ticks = timer.subscribe();

        ticks.changed().await.unwrap();
        assert_eq!(timer.elapsed(), 1);
    }
}
