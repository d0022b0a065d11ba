//! Lock-free load statistics

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Number of independent hit counters
const HIT_STRIPES: usize = 16;

static NEXT_STRIPE: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static HIT_STRIPE: usize = NEXT_STRIPE.fetch_add(1, Ordering::Relaxed) % HIT_STRIPES;
}

/// One counter per cache line
#[derive(Debug, Default)]
#[repr(align(64))]
struct PaddedCounter(AtomicU64);

/// Counters updated on every lookup; reads never block writers.
///
/// Hits are the only per-lookup write and are spread over cache-line
/// sized stripes picked per thread, so warm lookups on different threads
/// do not share a counter.
#[derive(Debug, Default)]
pub struct MetadataStats {
    hits: [PaddedCounter; HIT_STRIPES],
    cold_loads: AtomicU64,
    redundant_loads: AtomicU64,
    anomalies: AtomicU64,
    failures: AtomicU64,
}

/// Point-in-time copy of [`MetadataStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub cold_loads: u64,
    pub redundant_loads: u64,
    pub anomalies: u64,
    pub failures: u64,
}

impl MetadataStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        let stripe = HIT_STRIPE.with(|stripe| *stripe);
        self.hits[stripe].0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cold_load(&self) {
        self.cold_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redundant_load(&self) {
        self.redundant_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_anomaly(&self) {
        self.anomalies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self
                .hits
                .iter()
                .map(|counter| counter.0.load(Ordering::Relaxed))
                .sum(),
            cold_loads: self.cold_loads.load(Ordering::Relaxed),
            redundant_loads: self.redundant_loads.load(Ordering::Relaxed),
            anomalies: self.anomalies.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

impl StatsSnapshot {
    /// Share of lookups served without a load
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.cold_loads + self.redundant_loads;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
