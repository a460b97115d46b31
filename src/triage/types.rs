use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::directory::DirectoryError;
use crate::models::OperationalStatus;

/// Result of matching free-text symptoms against the definition set.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub department_id: Uuid,
    /// Adjusted score capped at 1.0; never below the configured floor.
    pub confidence: f64,
    /// Candidate tokens that matched, in sorted order.
    pub matched_keywords: Vec<String>,
}

/// Service-level view of a symptom analysis, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomAnalysis {
    pub department_id: Uuid,
    pub department_name: String,
    pub department_code: String,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
}

/// One ranked hospital recommendation. Lower score is better.
#[derive(Debug, Clone, Serialize)]
pub struct RankedHospital {
    pub hospital_id: Uuid,
    pub name: String,
    pub address: String,
    pub district: String,
    pub distance_km: f64,
    pub intensity: f64,
    pub operational_status: OperationalStatus,
    pub score: f64,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Department not found: {0}")]
    DepartmentNotFound(Uuid),

    #[error("No hospitals offer department {0}")]
    NoHospitalsForDepartment(Uuid),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}
