use data::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};
    use data::Timestamp;
    use super::Clock;

    /// Starts at the given unix time and only moves when told to.
    #[derive(Clone, Debug)]
    pub struct ManualClock {
        seconds: Arc<AtomicI64>,
    }

    impl ManualClock {
        pub fn new(seconds: i64) -> Self {
            ManualClock {
                seconds: Arc::new(AtomicI64::new(seconds)),
            }
        }

        pub fn advance(&self, seconds: i64) {
            self.seconds.fetch_add(seconds, Ordering::Relaxed);
        }

        pub fn timestamp(seconds: i64) -> Timestamp {
            Timestamp::from_unix_timestamp(seconds)
                .expect("test timestamp out of range")
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            Self::timestamp(self.seconds.load(Ordering::Relaxed))
        }
    }
}
