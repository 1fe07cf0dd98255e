//! Wall-clock source used for token issuance and expiry checks.

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

/// Source of "now" in whole seconds since the Unix epoch.
pub trait Clock: Debug + Send + Sync {
    fn now_unix(&self) -> i64;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}

/// Clock pinned to a settable instant. Lets tests move time forward
/// past an expiry without sleeping.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn at(now_unix: i64) -> Self {
        Self {
            now: AtomicI64::new(now_unix),
        }
    }

    pub fn set(&self, now_unix: i64) {
        self.now.store(now_unix, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_unix(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
