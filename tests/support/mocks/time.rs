// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};

use orgsite_core::application::ports::time::Clock;
use orgsite_core::application::ports::util::SlugGenerator;

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Minimal slugifier for tests: lowercase, spaces to hyphens.
pub struct SimpleSlugGenerator;

impl SlugGenerator for SimpleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        input
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}
