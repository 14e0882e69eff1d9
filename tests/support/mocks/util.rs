// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl ifsc_directory::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        super::time::fixed_now()
    }
}
