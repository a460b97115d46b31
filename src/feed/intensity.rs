//! Converts published waiting-time percentiles into a bounded congestion
//! score.
//!
//! Missing or unparseable durations degrade to defaults instead of erroring:
//! a feed hiccup should lower confidence, not break the refresh cycle.

use std::sync::LazyLock;

use regex::Regex;

use super::types::WaitTimeEntry;

/// Target ceiling for T3 (semi-urgent) median wait: one hour.
const T3_CAP_MINUTES: f64 = 60.0;
/// Target ceiling for T4/T5 median wait: four hours.
const T45_CAP_MINUTES: f64 = 240.0;
/// Score assumed when a hospital publishes no usable wait time.
const DEFAULT_SCORE: f64 = 0.35;
/// Floor keeps even an idle A&E from scoring a flat zero.
const SCORE_FLOOR: f64 = 0.05;

/// Sentinel for "no duration text at all".
const MISSING: f64 = -1.0;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]+").expect("valid literal regex"));

#[derive(Debug, Clone, Default)]
pub struct IntensityCalculator;

impl IntensityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Congestion score for one feed entry, in [0.05, 1.0].
    ///
    /// A missing entry yields the 0.35 default. Otherwise the T3 and T4/5
    /// median waits are normalized against their caps and blended 60/40,
    /// rounded to two decimals, then clamped.
    pub fn calculate_intensity(&self, entry: Option<&WaitTimeEntry>) -> f64 {
        let Some(entry) = entry else {
            return DEFAULT_SCORE;
        };

        let t3_score = normalize_wait(parse_minutes(entry.t3_median.as_deref()), T3_CAP_MINUTES);
        let t45_score = normalize_wait(parse_minutes(entry.t45_median.as_deref()), T45_CAP_MINUTES);

        let weighted = 0.6 * t3_score + 0.4 * t45_score;
        round_to_two(weighted).clamp(SCORE_FLOOR, 1.0)
    }
}

/// Parse a free-text duration into minutes.
///
/// Returns -1.0 for missing/blank input. A leading "less than" qualifier is
/// stripped; "hour(s)"/"hr(s)" scale by 60, anything else is taken as
/// minutes. Text with no numeric portion parses to 0.0, never an error.
pub fn parse_minutes(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return MISSING;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return MISSING;
    }

    let mut normalized = trimmed.to_lowercase();
    if let Some(rest) = normalized.strip_prefix("less than") {
        normalized = rest.trim().to_string();
    }

    let multiplier = if normalized.contains("hour") || normalized.contains("hr") {
        60.0
    } else {
        1.0
    };

    let numeric = NON_NUMERIC.replace_all(&normalized, "");
    if numeric.is_empty() {
        return 0.0;
    }
    numeric.parse::<f64>().unwrap_or(0.0) * multiplier
}

/// Minutes normalized against a cap; the missing sentinel maps to the
/// default score rather than zero congestion.
fn normalize_wait(minutes: f64, cap: f64) -> f64 {
    if minutes < 0.0 {
        return DEFAULT_SCORE;
    }
    (minutes / cap).min(1.0)
}

fn round_to_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
