use tracing_subscriber::EnvFilter;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: commit attempts. Labels: status (`ok`, `conflict`, `rejected`).
pub const COMMITS_TOTAL: &str = "roomledger_commits_total";

/// Counter: release and cancel calls.
pub const RELEASES_TOTAL: &str = "roomledger_releases_total";

/// Histogram: nights covered by each successful commit.
pub const COMMITTED_NIGHTS: &str = "roomledger_committed_nights";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: number of bookable resources.
pub const RESOURCES_ACTIVE: &str = "roomledger_resources_active";

/// Install the fmt subscriber. `RUST_LOG` overrides the `info` default.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Map a commit outcome to a short label for metrics.
pub fn commit_label<T>(result: &Result<T, crate::engine::EngineError>) -> &'static str {
    use crate::engine::EngineError;
    match result {
        Ok(_) => "ok",
        Err(EngineError::Conflict { .. }) => "conflict",
        Err(_) => "rejected",
    }
}
