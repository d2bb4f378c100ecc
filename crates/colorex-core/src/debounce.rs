//! Minimum-interval gate for repeated user actions (clipboard writes).

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Returns `true` and records `now` if more than `interval` has passed
    /// since the last accepted call.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let ready = match self.last_fired {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        };

        if ready {
            self.last_fired = Some(now);
        }
        ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        assert!(debouncer.try_fire(Instant::now()));
    }

    #[test]
    fn test_rejects_within_interval() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        assert!(debouncer.try_fire(start));
        assert!(!debouncer.try_fire(start + Duration::from_millis(100)));
        assert!(!debouncer.try_fire(start + Duration::from_millis(250)));
        assert!(debouncer.try_fire(start + Duration::from_millis(251)));
    }

    #[test]
    fn test_rejected_calls_do_not_extend_window() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        assert!(debouncer.try_fire(start));
        assert!(!debouncer.try_fire(start + Duration::from_millis(200)));
        assert!(debouncer.try_fire(start + Duration::from_millis(300)));
    }
}
