//! Integration with the A&E waiting-time open-data feed.

pub mod client;
pub mod intensity;
pub mod refresh;
pub mod types;

pub use client::{FeedError, WaitTimeClient};
pub use intensity::IntensityCalculator;
pub use refresh::{start_refresh_scheduler, IntensityRefreshJob, RefreshOutcome};
pub use types::{WaitTimeEntry, WaitTimeFeed};
