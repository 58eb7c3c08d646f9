use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time in seconds, used to timestamp sensor readings.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Clock(f64);

impl Clock {
    pub fn now() -> Self {
        // A clock set before the epoch reads as 0.
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(now.as_secs_f64())
    }

    pub fn as_secs(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_now() {
        let clock = Clock::now();
        assert!(clock.as_secs() > 0.0);
    }

    #[test]
    fn test_clock_as_secs() {
        let clock = Clock(12345.678);
        assert_eq!(clock.as_secs(), 12345.678);
    }

    #[test]
    fn test_clock_now_is_recent() {
        let clock = Clock::now();
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
        assert!((clock.as_secs() - now.as_secs_f64()).abs() < 1.0);
    }
}
