//! The data-access seam: a read-only hospital/department/symptom directory
//! plus a sink for refreshed intensity values.
//!
//! Triage and ranking only ever read through this trait, so independent
//! requests run fully in parallel over whatever snapshot the implementation
//! currently holds.

pub mod memory;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Department, Hospital, SymptomDefinition};

pub use memory::{DirectorySnapshot, InMemoryDirectory};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Directory lock poisoned")]
    LockPoisoned,

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Read-only directory of reference data, plus the one write path the
/// refresh job uses to persist recomputed intensities.
pub trait HospitalDirectory: Send + Sync {
    /// All hospitals, regardless of department or status.
    fn all_hospitals(&self) -> Result<Vec<Hospital>, DirectoryError>;

    /// Hospitals offering the given department. Unknown department ids
    /// simply yield an empty list; the caller decides whether that is an
    /// error condition.
    fn hospitals_for_department(&self, department_id: Uuid)
        -> Result<Vec<Hospital>, DirectoryError>;

    fn department(&self, department_id: Uuid) -> Result<Option<Department>, DirectoryError>;

    fn departments(&self) -> Result<Vec<Department>, DirectoryError>;

    fn symptom_definitions(&self) -> Result<Vec<SymptomDefinition>, DirectoryError>;

    /// Apply a batch of `(hospital id, intensity)` updates atomically.
    /// Values are clamped to [0,1]; ids with no matching hospital are
    /// ignored. Returns the number of hospitals actually updated.
    fn apply_intensities(&self, updates: &[(Uuid, f64)]) -> Result<usize, DirectoryError>;
}
