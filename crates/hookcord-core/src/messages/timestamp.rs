//! Time values accepted by `timestamp(...)` setters.
//!
//! A setter stores whatever it was given. The conversion to Unix epoch
//! seconds happens when the payload is built, not when the builder is called.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone};

/// Anything that can report itself as Unix epoch seconds.
pub trait EpochSeconds {
    fn epoch_seconds(&self) -> i64;
}

impl EpochSeconds for i64 {
    fn epoch_seconds(&self) -> i64 {
        *self
    }
}

impl EpochSeconds for u32 {
    fn epoch_seconds(&self) -> i64 {
        i64::from(*self)
    }
}

impl<Tz: TimeZone> EpochSeconds for DateTime<Tz> {
    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }
}

impl EpochSeconds for SystemTime {
    fn epoch_seconds(&self) -> i64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }
}

/// A stored, not yet unwrapped, time value.
#[derive(Clone)]
pub struct Timestamp(Arc<dyn EpochSeconds + Send + Sync>);

impl Timestamp {
    pub fn new<T>(value: T) -> Self
    where
        T: EpochSeconds + Send + Sync + 'static,
    {
        Timestamp(Arc::new(value))
    }

    /// Unwrap to epoch seconds.
    pub fn epoch_seconds(&self) -> i64 {
        self.0.epoch_seconds()
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Timestamp").field(&self.epoch_seconds()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    #[test]
    fn test_integer_passthrough() {
        assert_eq!(Timestamp::new(1_234_567_890i64).epoch_seconds(), 1_234_567_890);
        assert_eq!(Timestamp::new(42u32).epoch_seconds(), 42);
    }

    #[test]
    fn test_chrono_datetime() {
        let dt = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        assert_eq!(Timestamp::new(dt).epoch_seconds(), 1_600_000_000);
    }

    #[test]
    fn test_system_time() {
        let t = UNIX_EPOCH + Duration::from_secs(99);
        assert_eq!(Timestamp::new(t).epoch_seconds(), 99);

        let before = UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(Timestamp::new(before).epoch_seconds(), -5);
    }

    #[test]
    fn test_custom_capability() {
        struct Fixed;
        impl EpochSeconds for Fixed {
            fn epoch_seconds(&self) -> i64 {
                7
            }
        }
        assert_eq!(Timestamp::new(Fixed).epoch_seconds(), 7);
    }
}
