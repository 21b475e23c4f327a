use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Time-based id generation for customers and addresses.
///
/// Ids start at the current millisecond epoch and increment from there, so
/// they are unique and strictly increasing within a process, and runs that
/// start later issue larger ids than runs that started earlier.
#[derive(Debug)]
pub struct IdGen {
    next: AtomicU64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::starting_at(Utc::now().timestamp_millis() as u64)
    }

    /// Start from a fixed value. Tests use this for predictable ids.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}
