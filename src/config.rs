//! Configuration for the triage and feed-refresh pipelines.
//!
//! Plain structs with `Default` impls replace the `@Value`-injected knobs of
//! a framework container: construct one, override fields, pass it down.

/// Hong Kong Hospital Authority A&E waiting-time open-data feed.
pub const DEFAULT_FEED_URL: &str = "https://www.ha.org.hk/opendata/aed/aedwtdata2-en.json";

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "wardroute=info".to_string()
}

/// Weights and caps for symptom matching and hospital ranking.
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Weight of normalized distance in the composite hospital score.
    pub distance_weight: f64,
    /// Weight of current A&E intensity in the composite hospital score.
    pub intensity_weight: f64,
    /// Weight of the operational-status penalty in the composite score.
    pub status_weight: f64,
    /// Distance cap used to normalize kilometres into [0,1].
    pub max_distance_km: f64,
    /// Default number of ranked hospitals returned.
    pub max_results: usize,
    /// Minimum adjusted score for a symptom match to count.
    pub min_confidence: f64,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            distance_weight: 0.4,
            intensity_weight: 0.3,
            status_weight: 0.3,
            max_distance_km: 50.0,
            max_results: 5,
            min_confidence: 0.25,
        }
    }
}

/// Settings for the external waiting-time feed and its refresh cycle.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Remote feed endpoint.
    pub url: String,
    /// Per-request timeout for the remote fetch (seconds).
    pub timeout_secs: u64,
    /// Refresh period (seconds).
    pub interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 10,
            interval_secs: 15 * 60,
        }
    }
}
