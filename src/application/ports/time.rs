// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the `created_date`/`modified_date` stamps handed to the store.
/// Injected so tests can observe what "current time" an article was written
/// or modified with.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
