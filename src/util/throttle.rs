use std::time::{Duration, Instant};

/// Lets the first call through, then drops calls until `limit` has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    pub fn run<R>(&mut self, f: impl FnOnce() -> R) -> Option<R> {
        self.ready_at(Instant::now()).then(f)
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(throttle.ready_at(t0));
        assert!(!throttle.ready_at(t0 + Duration::from_millis(50)));
        assert!(!throttle.ready_at(t0 + Duration::from_millis(99)));
        assert!(throttle.ready_at(t0 + Duration::from_millis(100)));
        assert!(!throttle.ready_at(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn test_run_returns_value_only_when_passed() {
        let mut throttle = Throttle::new(Duration::from_secs(60));
        assert_eq!(throttle.run(|| 7), Some(7));
        assert_eq!(throttle.run(|| 8), None);
    }
}
