//! Symptom-to-department matching and hospital ranking.

pub mod matcher;
pub mod ranker;
pub mod service;
pub mod types;

pub use matcher::SymptomMatcher;
pub use ranker::HospitalRanker;
pub use service::TriageService;
pub use types::{MatchOutcome, RankedHospital, SymptomAnalysis, TriageError};
