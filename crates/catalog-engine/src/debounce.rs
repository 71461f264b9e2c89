use std::time::{Duration, Instant};

/// Trailing-edge debouncer with a single pending slot.
///
/// Every `schedule` replaces the pending value and pushes the deadline out
/// to `now + delay`. `poll` hands the value back once the deadline has
/// passed, then the slot is empty until the next `schedule`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Take the pending value regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("lamp", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("lamp"));
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_each_schedule_restarts_the_timer() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("l", start);
        debouncer.schedule("la", start + Duration::from_millis(300));
        debouncer.schedule("lam", start + Duration::from_millis(600));

        // first deadline would have been start+500
        assert_eq!(debouncer.poll(start + Duration::from_millis(700)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(1100)), Some("lam"));
    }

    #[test]
    fn test_flush_ignores_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(3, start);

        assert_eq!(debouncer.flush(), Some(3));
        assert_eq!(debouncer.poll(start + DELAY), None);
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.remaining(start), None);

        debouncer.schedule((), start);
        assert_eq!(
            debouncer.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(debouncer.remaining(start + DELAY * 2), Some(Duration::ZERO));

        debouncer.cancel();
        assert!(!debouncer.is_pending());
    }
}
