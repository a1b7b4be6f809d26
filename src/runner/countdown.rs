use std::time::{Duration, Instant};

/// Fixed wall-clock target computed once at startup.
pub struct Countdown {
    target: Instant,
}

impl Countdown {
    pub fn new(secs: f64) -> Self {
        Countdown {
            target: Instant::now() + Duration::from_secs_f64(secs),
        }
    }

    /// Seconds left until the target, clamped at 0.0.
    pub fn remaining(&self) -> f64 {
        self.target
            .saturating_duration_since(Instant::now())
            .as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn remaining_never_increases() {
        let countdown = Countdown::new(1.0);
        let first = countdown.remaining();
        thread::sleep(Duration::from_millis(20));
        let second = countdown.remaining();
        assert!(second <= first);
        assert!(second >= 0.0);
    }

    #[test]
    fn zero_countdown_is_already_done() {
        let countdown = Countdown::new(0.0);
        assert_eq!(countdown.remaining(), 0.0);
    }

    #[test]
    fn stays_at_zero_after_expiry() {
        let countdown = Countdown::new(0.01);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(countdown.remaining(), 0.0);
        thread::sleep(Duration::from_millis(10));
        assert_eq!(countdown.remaining(), 0.0);
    }
}
