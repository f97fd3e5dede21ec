use crate::page::ViewMode;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

///
/// Metrics
/// Ephemeral, in-memory counters for catalog pagination activity.
///

// Relaxed suffices: counters are independent and monotonic between resets.
static FLAT_PAGES: AtomicU64 = AtomicU64::new(0);
static GROUPED_PAGES: AtomicU64 = AtomicU64::new(0);
static EMPTY_PAGES: AtomicU64 = AtomicU64::new(0);
static CURSOR_DECODE_FAILURES: AtomicU64 = AtomicU64::new(0);

///
/// EventReport
///
/// Point-in-time snapshot of the pagination counters.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub flat_pages: u64,
    pub grouped_pages: u64,
    pub empty_pages: u64,
    pub cursor_decode_failures: u64,
}

/// Record one served page.
pub(crate) fn record_page(mode: ViewMode, empty: bool) {
    let counter = match mode {
        ViewMode::Flat => &FLAT_PAGES,
        ViewMode::Namespace => &GROUPED_PAGES,
    };
    counter.fetch_add(1, Ordering::Relaxed);

    if empty {
        EMPTY_PAGES.fetch_add(1, Ordering::Relaxed);
    }
}

/// Record one rejected cursor token from addressable state.
pub(crate) fn record_cursor_decode_failure() {
    CURSOR_DECODE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

/// Snapshot the pagination counters.
#[must_use]
pub fn report() -> EventReport {
    EventReport {
        flat_pages: FLAT_PAGES.load(Ordering::Relaxed),
        grouped_pages: GROUPED_PAGES.load(Ordering::Relaxed),
        empty_pages: EMPTY_PAGES.load(Ordering::Relaxed),
        cursor_decode_failures: CURSOR_DECODE_FAILURES.load(Ordering::Relaxed),
    }
}

/// Reset all counters to zero.
pub fn reset() {
    FLAT_PAGES.store(0, Ordering::Relaxed);
    GROUPED_PAGES.store(0, Ordering::Relaxed);
    EMPTY_PAGES.store(0, Ordering::Relaxed);
    CURSOR_DECODE_FAILURES.store(0, Ordering::Relaxed);
}

///
/// TESTS
///
