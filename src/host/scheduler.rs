use std::future;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Re-armable fixed-rate tick clock owned by the host.
///
/// Restarting replaces the underlying interval, which drops any tick that
/// was about to fire, so at most one tick is ever pending.
pub struct TickScheduler {
    period: Duration,
    interval: Option<Interval>,
}

impl TickScheduler {
    /// Create a stopped scheduler
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Start ticking now, cancelling any running clock. The first tick
    /// fires immediately.
    pub fn restart(&mut self) {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_immediate() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(200));
        scheduler.restart();

        let start = Instant::now();
        scheduler.tick().await;
        assert_eq!(start.elapsed(), Duration::ZERO);

        scheduler.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_scheduler_never_ticks() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(50));
        assert!(!scheduler.is_running());

        let waited = time::timeout(Duration::from_secs(5), scheduler.tick()).await;
        assert!(waited.is_err());

        scheduler.restart();
        scheduler.stop();
        let waited = time::timeout(Duration::from_secs(5), scheduler.tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_rearms_clock() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(200));
        scheduler.restart();
        scheduler.tick().await;

        time::advance(Duration::from_millis(150)).await;
        let rearmed_at = Instant::now();
        scheduler.restart();

        // Re-arming fires straight away and then keeps the full period
        scheduler.tick().await;
        assert_eq!(rearmed_at.elapsed(), Duration::ZERO);
        scheduler.tick().await;
        assert_eq!(rearmed_at.elapsed(), Duration::from_millis(200));
    }

    #[test]
    fn test_zero_period_clamped() {
        let scheduler = TickScheduler::new(Duration::ZERO);
        assert_eq!(scheduler.period(), Duration::from_millis(1));
    }
}
