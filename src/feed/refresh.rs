//! Periodic intensity refresh: pulls the waiting-time feed, recomputes each
//! hospital's congestion score, and writes the batch back to the directory.
//!
//! The job is the only writer of `current_intensity`. A cycle that starts
//! while another is still running is skipped, not queued, so the feed is
//! never fetched twice concurrently and writes never interleave.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::directory::HospitalDirectory;

use super::client::WaitTimeClient;
use super::intensity::IntensityCalculator;
use super::types::WaitTimeEntry;

/// Publication timestamp format used by the feed, e.g. "26/8/2026 3:15pm".
const UPDATE_TIME_FORMAT: &str = "%d/%m/%Y %I:%M%p";

/// Sleep granularity of the scheduler loop, for responsive shutdown.
const SLEEP_GRANULARITY_SECS: u64 = 5;

/// What a refresh cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Feed consumed; this many hospitals got a new intensity.
    Completed { updated: usize },
    /// A previous cycle was still running; nothing was fetched.
    SkippedBusy,
    /// Neither remote feed nor bundled snapshot was usable; prior
    /// intensities persist untouched.
    FeedUnavailable,
    /// The directory rejected the batch write; intensities not yet written
    /// retain their prior value.
    WriteFailed,
}

pub struct IntensityRefreshJob {
    directory: Arc<dyn HospitalDirectory>,
    client: WaitTimeClient,
    calculator: IntensityCalculator,
    running: AtomicBool,
    last_update: RwLock<Option<NaiveDateTime>>,
}

impl IntensityRefreshJob {
    pub fn new(directory: Arc<dyn HospitalDirectory>, client: WaitTimeClient) -> Self {
        Self {
            directory,
            client,
            calculator: IntensityCalculator::new(),
            running: AtomicBool::new(false),
            last_update: RwLock::new(None),
        }
    }

    /// When the feed last published, per its own `updateTime` field.
    pub fn last_update(&self) -> Option<NaiveDateTime> {
        self.last_update.read().ok().and_then(|guard| *guard)
    }

    /// Run one refresh cycle. Non-reentrant: overlapping calls return
    /// `SkippedBusy` immediately.
    pub fn run_once(&self) -> RefreshOutcome {
        if self
            .running
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            tracing::info!("Refresh cycle already in progress, skipping");
            return RefreshOutcome::SkippedBusy;
        }

        let outcome = self.refresh_cycle();
        self.running.store(false, Ordering::Release);
        outcome
    }

    fn refresh_cycle(&self) -> RefreshOutcome {
        tracing::info!("Starting A&E waiting-time refresh");

        let Some(feed) = self.client.fetch_latest() else {
            tracing::warn!("No A&E payload available, leaving intensities untouched");
            return RefreshOutcome::FeedUnavailable;
        };
        if feed.entries.is_empty() {
            tracing::warn!("A&E payload has no entries, leaving intensities untouched");
            return RefreshOutcome::FeedUnavailable;
        }

        let updates = match self.compute_updates(&feed.entries) {
            Ok(updates) => updates,
            Err(e) => {
                tracing::error!(error = %e, "Could not read hospital directory for refresh");
                return RefreshOutcome::WriteFailed;
            }
        };

        let updated = match self.directory.apply_intensities(&updates) {
            Ok(updated) => updated,
            Err(e) => {
                tracing::error!(error = %e, "Intensity batch write failed");
                return RefreshOutcome::WriteFailed;
            }
        };

        let published = parse_update_time(feed.update_time.as_deref());
        if let Ok(mut guard) = self.last_update.write() {
            *guard = Some(published);
        }

        tracing::info!(
            entries = feed.entries.len(),
            updated,
            published = %published,
            "A&E waiting-time refresh completed"
        );
        RefreshOutcome::Completed { updated }
    }

    /// Pair directory hospitals with feed entries by name and recompute
    /// their intensity. Hospitals with no matching entry are left alone.
    fn compute_updates(
        &self,
        entries: &[WaitTimeEntry],
    ) -> Result<Vec<(Uuid, f64)>, crate::directory::DirectoryError> {
        let mut by_name: HashMap<&str, &WaitTimeEntry> = HashMap::new();
        for entry in entries {
            // First entry wins on duplicate hospital names.
            by_name.entry(entry.hospital_name.as_str()).or_insert(entry);
        }

        let hospitals = self.directory.all_hospitals()?;
        Ok(hospitals
            .iter()
            .filter_map(|hospital| {
                by_name.get(hospital.name.as_str()).map(|entry| {
                    (hospital.id, self.calculator.calculate_intensity(Some(entry)))
                })
            })
            .collect())
    }
}

/// Best-effort parse of the feed's publication timestamp; on failure the
/// current local time stands in.
fn parse_update_time(raw: Option<&str>) -> NaiveDateTime {
    let now = Local::now().naive_local();
    let Some(raw) = raw else {
        return now;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return now;
    }
    match NaiveDateTime::parse_from_str(&trimmed.to_uppercase(), UPDATE_TIME_FORMAT) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(raw = trimmed, error = %e, "Unparseable feed update time");
            now
        }
    }
}

/// Handle for the background refresh thread. Requests shutdown and joins on
/// drop so the thread never outlives its owner.
pub struct RefreshSchedulerHandle {
    shutdown: Arc<AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl RefreshSchedulerHandle {
    /// Request graceful shutdown. A cycle already running completes; no new
    /// cycle starts.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Drop for RefreshSchedulerHandle {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

/// Spawn the periodic refresh loop. Runs one cycle immediately, then every
/// `interval_secs`, sleeping in short increments so shutdown stays prompt.
pub fn start_refresh_scheduler(
    job: Arc<IntensityRefreshJob>,
    interval_secs: u64,
) -> RefreshSchedulerHandle {
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);

    let handle = std::thread::spawn(move || {
        tracing::info!(interval_secs, "Intensity refresh scheduler started");
        loop {
            if flag.load(Ordering::Relaxed) {
                break;
            }
            job.run_once();

            let steps = (interval_secs / SLEEP_GRANULARITY_SECS).max(1);
            for _ in 0..steps {
                if flag.load(Ordering::Relaxed) {
                    tracing::info!("Intensity refresh scheduler shutting down");
                    return;
                }
                std::thread::sleep(Duration::from_secs(
                    SLEEP_GRANULARITY_SECS.min(interval_secs.max(1)),
                ));
            }
        }
        tracing::info!("Intensity refresh scheduler shutting down");
    });

    RefreshSchedulerHandle {
        shutdown,
        handle: Some(handle),
    }
}
