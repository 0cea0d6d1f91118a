//! Sources of the current UTC instant.
//!
//! Right ascension depends on "now". Production code reads the system clock;
//! tests and replays pin the instant with [`FixedClock`].

use chrono::{DateTime, Utc};
use std::sync::Arc;

pub trait UtcClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl UtcClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl UtcClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: UtcClock + ?Sized> UtcClock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: UtcClock + ?Sized> UtcClock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: UtcClock + ?Sized> UtcClock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
