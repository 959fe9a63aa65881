use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock stamps for article writes; the only clock wired up outside
/// tests.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
