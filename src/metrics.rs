use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Operation counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub animals_listed: Arc<AtomicU64>,
    pub animals_fetched: Arc<AtomicU64>,
    pub animals_created: Arc<AtomicU64>,
    pub animals_updated: Arc<AtomicU64>,
    pub animals_deleted: Arc<AtomicU64>,
    pub searches: Arc<AtomicU64>,
    pub not_found: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            animals_listed: Arc::new(AtomicU64::new(0)),
            animals_fetched: Arc::new(AtomicU64::new(0)),
            animals_created: Arc::new(AtomicU64::new(0)),
            animals_updated: Arc::new(AtomicU64::new(0)),
            animals_deleted: Arc::new(AtomicU64::new(0)),
            searches: Arc::new(AtomicU64::new(0)),
            not_found: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_listed(&self) {
        self.animals_listed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fetched(&self) {
        self.animals_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_created(&self) {
        self.animals_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_updated(&self) {
        self.animals_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_deleted(&self) {
        self.animals_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            animals_listed: self.animals_listed.load(Ordering::Relaxed),
            animals_fetched: self.animals_fetched.load(Ordering::Relaxed),
            animals_created: self.animals_created.load(Ordering::Relaxed),
            animals_updated: self.animals_updated.load(Ordering::Relaxed),
            animals_deleted: self.animals_deleted.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub animals_listed: u64,
    pub animals_fetched: u64,
    pub animals_created: u64,
    pub animals_updated: u64,
    pub animals_deleted: u64,
    pub searches: u64,
    pub not_found: u64,
    pub uptime_seconds: u64,
}
