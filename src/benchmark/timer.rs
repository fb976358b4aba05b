use std::time::{Duration, Instant};

/// Measures the time until it is dropped and writes it to `slot`.
///
/// Dropping happens on every exit path, so an early return, an error or a
/// panic inside the measured scope still leaves a measurement behind.
pub struct ScopedTimer<'a> {
    start: Instant,
    slot: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn start(slot: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            slot,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        *self.slot = self.start.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_on_drop() {
        let mut elapsed = Duration::from_secs(3600);
        {
            let _timer = ScopedTimer::start(&mut elapsed);
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(elapsed >= Duration::from_millis(2));
        assert!(elapsed < Duration::from_secs(3600));
    }

    #[test]
    fn test_records_on_early_return() {
        fn fails(slot: &mut Duration) -> Result<(), &'static str> {
            let _timer = ScopedTimer::start(slot);
            std::thread::sleep(Duration::from_millis(1));
            Err("boom")
        }

        let mut elapsed = Duration::default();
        assert!(fails(&mut elapsed).is_err());
        assert!(elapsed >= Duration::from_millis(1));
    }
}
