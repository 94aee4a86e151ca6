// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Wall-clock source, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
