use std::time::{Duration, Instant};

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Handle to the one pending auto-reset, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReset {
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct ResetTimer {
    delay: Duration,
    pending: Option<PendingReset>,
}

impl ResetTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arms the timer from `now`. Refuses while another reset is pending.
    pub fn schedule(&mut self, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingReset {
            due: now + self.delay,
        });
        true
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consumes the handle once its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(PendingReset { due }) if now >= due => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.due.saturating_duration_since(now))
    }
}

impl Default for ResetTimer {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = ResetTimer::new(Duration::from_millis(100));
        assert!(timer.schedule(start));
        assert!(!timer.fire_if_due(start + Duration::from_millis(99)));
        assert!(timer.fire_if_due(start + Duration::from_millis(100)));
        assert!(!timer.fire_if_due(start + Duration::from_millis(500)));
    }

    #[test]
    fn only_one_reset_can_be_pending() {
        let start = Instant::now();
        let mut timer = ResetTimer::default();
        assert!(timer.schedule(start));
        assert!(!timer.schedule(start + Duration::from_secs(1)));
        assert_eq!(
            timer.remaining(start + Duration::from_secs(1)),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = ResetTimer::default();
        timer.schedule(start);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.fire_if_due(start + Duration::from_secs(10)));
    }
}
