// =============================================================================
// Central Application State
// =============================================================================
//
// Shared across request handlers via `Arc<AppState>`. The dashboard service is
// immutable after startup; the only mutable value is the request counter.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::dashboard::DashboardService;

pub struct AppState {
    pub dashboard: DashboardService,

    /// Number of dashboard snapshots served since startup.
    requests_served: AtomicU64,

    /// Startup time (epoch millis).
    pub started_at: i64,
}

impl AppState {
    pub fn new(dashboard: DashboardService) -> Self {
        Self {
            dashboard,
            requests_served: AtomicU64::new(0),
            started_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn record_request(&self) -> u64 {
        self.requests_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }
}
