//! Wire types for the Hospital Authority A&E waiting-time feed.
//!
//! All durations arrive as free text ("15 minutes", "less than 1 hour");
//! parsing happens in the intensity calculator. Entries are ephemeral:
//! consumed once per refresh cycle, never persisted.

use serde::{Deserialize, Serialize};

/// Top-level feed payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitTimeFeed {
    #[serde(rename = "waitTime", default)]
    pub entries: Vec<WaitTimeEntry>,
    /// Free-text publication timestamp, e.g. "26/8/2026 3:15pm".
    #[serde(rename = "updateTime", default)]
    pub update_time: Option<String>,
}

/// Per-hospital waiting times by triage tier. T3 (semi-urgent) is more
/// urgent than T4/T5; p50/p95 are percentile waits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitTimeEntry {
    #[serde(rename = "hospName")]
    pub hospital_name: String,
    #[serde(rename = "t1wt", default)]
    pub t1_wait: Option<String>,
    #[serde(rename = "t2wt", default)]
    pub t2_wait: Option<String>,
    #[serde(rename = "t3p50", default)]
    pub t3_median: Option<String>,
    #[serde(rename = "t3p95", default)]
    pub t3_p95: Option<String>,
    #[serde(rename = "t45p50", default)]
    pub t45_median: Option<String>,
    #[serde(rename = "t45p95", default)]
    pub t45_p95: Option<String>,
}
