//! Injectable time source.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Millisecond time source used to stamp tasks.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds. Successive calls never go backwards.
    fn now_ms(&self) -> u64;
}

/// Wall clock that never goes backwards for a given instance.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_ms: AtomicU64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        let wall = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let previous = self.last_ms.fetch_max(wall, Ordering::Relaxed);
        previous.max(wall)
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::Relaxed)
    }
}
