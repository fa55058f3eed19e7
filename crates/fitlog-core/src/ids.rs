// ABOUTME: Monotonic millisecond-timestamp identifiers for newly logged entries
// ABOUTME: Guarantees strictly increasing ids even within the same millisecond
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Generates entry ids from the wall clock
///
/// Ids are Unix milliseconds, bumped by one when the clock has not advanced
/// past the previous id, so two entries created back to back never collide.
#[derive(Debug, Default)]
pub struct EntryIdGenerator {
    last: AtomicI64,
}

impl EntryIdGenerator {
    /// Create a generator with no history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Next id based on the current time
    pub fn next_id(&self) -> i64 {
        self.next_id_at(Utc::now())
    }

    /// Next id based on the given time
    pub fn next_id_at(&self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let next = candidate.max(previous.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(previous, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => previous = actual,
            }
        }
    }

    /// Make sure future ids are greater than `existing`
    pub fn observe(&self, existing: i64) {
        self.last.fetch_max(existing, Ordering::AcqRel);
    }
}
