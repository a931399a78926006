use std::time::Instant;

/// Wall-clock timer handing out per-frame deltas in seconds.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    last: Instant,
}

impl Clock {
    /// Starts the clock now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the previous call (or since the clock started).
    pub fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        delta
    }

    /// Seconds since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn deltas_add_up_to_elapsed() {
        let mut clock = Clock::new();
        let mut total = 0.0;
        for _ in 0..3 {
            thread::sleep(Duration::from_millis(2));
            total += clock.delta();
        }
        assert!(total >= 0.006);
        assert!(total <= clock.elapsed());
    }

    #[test]
    fn delta_is_never_negative() {
        let mut clock = Clock::new();
        assert!(clock.delta() >= 0.0);
        assert!(clock.delta() >= 0.0);
    }
}
