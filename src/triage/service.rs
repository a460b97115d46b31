//! Service facade over the matcher and ranker.
//!
//! Both operations are pure computations over the directory's current
//! snapshot; absence of a symptom match is a normal outcome (`Ok(None)`),
//! while unknown or empty departments are explicit error variants.

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::config::TriageConfig;
use crate::directory::HospitalDirectory;

use super::matcher::SymptomMatcher;
use super::ranker::HospitalRanker;
use super::types::{RankedHospital, SymptomAnalysis, TriageError};

pub struct TriageService {
    directory: Arc<dyn HospitalDirectory>,
    matcher: SymptomMatcher,
    ranker: HospitalRanker,
    config: TriageConfig,
}

impl TriageService {
    pub fn new(directory: Arc<dyn HospitalDirectory>, config: TriageConfig) -> Self {
        Self {
            matcher: SymptomMatcher::new(config.min_confidence),
            ranker: HospitalRanker::new(config.clone()),
            directory,
            config,
        }
    }

    /// Infer a department from free-text symptoms.
    ///
    /// `Ok(None)` means no definition qualified: the patient should pick a
    /// department manually.
    pub fn analyze_symptom(&self, text: &str) -> Result<Option<SymptomAnalysis>, TriageError> {
        let start = Instant::now();
        let definitions = self.directory.symptom_definitions()?;

        let Some(outcome) = self.matcher.match_text(text, &definitions) else {
            tracing::info!(
                candidates = definitions.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "No qualifying symptom match"
            );
            return Ok(None);
        };

        let department = self
            .directory
            .department(outcome.department_id)?
            .ok_or(TriageError::DepartmentNotFound(outcome.department_id))?;

        tracing::info!(
            department = %department.code,
            confidence = outcome.confidence,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Symptom analysis complete"
        );

        Ok(Some(SymptomAnalysis {
            department_id: department.id,
            department_name: department.name,
            department_code: department.code,
            confidence: outcome.confidence,
            matched_keywords: outcome.matched_keywords,
        }))
    }

    /// Rank hospitals offering a department for a patient location.
    pub fn recommend_hospitals(
        &self,
        latitude: f64,
        longitude: f64,
        department_id: Uuid,
        max_results: Option<usize>,
    ) -> Result<Vec<RankedHospital>, TriageError> {
        let department = self
            .directory
            .department(department_id)?
            .ok_or(TriageError::DepartmentNotFound(department_id))?;

        let candidates = self.directory.hospitals_for_department(department_id)?;
        if candidates.is_empty() {
            return Err(TriageError::NoHospitalsForDepartment(department_id));
        }

        let ranked = self.ranker.rank(
            &candidates,
            latitude,
            longitude,
            max_results.unwrap_or(self.config.max_results),
        );

        tracing::info!(
            department = %department.code,
            candidates = candidates.len(),
            returned = ranked.len(),
            "Hospital ranking complete"
        );

        Ok(ranked)
    }
}
