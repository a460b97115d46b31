//! In-memory directory backed by an atomically swapped snapshot.
//!
//! Readers clone an `Arc` out of the lock and never hold it while working,
//! so a refresh landing mid-request cannot show them a half-updated list:
//! they keep the snapshot they started with.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::{Department, Hospital, SymptomDefinition};

use super::{DirectoryError, HospitalDirectory};

/// One immutable generation of directory data.
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    pub hospitals: Vec<Hospital>,
    pub departments: Vec<Department>,
    pub symptoms: Vec<SymptomDefinition>,
}

pub struct InMemoryDirectory {
    snapshot: RwLock<Arc<DirectorySnapshot>>,
}

impl InMemoryDirectory {
    pub fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Current snapshot generation.
    pub fn snapshot(&self) -> Result<Arc<DirectorySnapshot>, DirectoryError> {
        let guard = self.snapshot.read().map_err(|_| DirectoryError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Replace the whole snapshot. Used by administrators reloading
    /// reference data; intensity refreshes go through `apply_intensities`.
    pub fn replace(&self, snapshot: DirectorySnapshot) -> Result<(), DirectoryError> {
        let mut guard = self.snapshot.write().map_err(|_| DirectoryError::LockPoisoned)?;
        *guard = Arc::new(snapshot);
        Ok(())
    }
}

impl HospitalDirectory for InMemoryDirectory {
    fn all_hospitals(&self) -> Result<Vec<Hospital>, DirectoryError> {
        Ok(self.snapshot()?.hospitals.clone())
    }

    fn hospitals_for_department(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<Hospital>, DirectoryError> {
        Ok(self
            .snapshot()?
            .hospitals
            .iter()
            .filter(|h| h.offers_department(department_id))
            .cloned()
            .collect())
    }

    fn department(&self, department_id: Uuid) -> Result<Option<Department>, DirectoryError> {
        Ok(self
            .snapshot()?
            .departments
            .iter()
            .find(|d| d.id == department_id)
            .cloned())
    }

    fn departments(&self) -> Result<Vec<Department>, DirectoryError> {
        Ok(self.snapshot()?.departments.clone())
    }

    fn symptom_definitions(&self) -> Result<Vec<SymptomDefinition>, DirectoryError> {
        Ok(self.snapshot()?.symptoms.clone())
    }

    fn apply_intensities(&self, updates: &[(Uuid, f64)]) -> Result<usize, DirectoryError> {
        if updates.is_empty() {
            return Ok(0);
        }

        let by_id: HashMap<Uuid, f64> = updates.iter().copied().collect();

        let mut guard = self.snapshot.write().map_err(|_| DirectoryError::LockPoisoned)?;
        let mut next = (**guard).clone();

        let mut updated = 0;
        for hospital in &mut next.hospitals {
            if let Some(&intensity) = by_id.get(&hospital.id) {
                hospital.current_intensity = intensity.clamp(0.0, 1.0);
                updated += 1;
            }
        }

        *guard = Arc::new(next);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperationalStatus;

    fn hospital(name: &str, intensity: f64) -> Hospital {
        Hospital {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: "1 Hospital Road".to_string(),
            district: "Central".to_string(),
            latitude: 22.28,
            longitude: 114.16,
            capacity: 500,
            current_intensity: intensity,
            operational_status: OperationalStatus::Operational,
            department_ids: vec![],
        }
    }

    #[test]
    fn apply_intensities_updates_matching_hospitals() {
        let a = hospital("Queen Mary Hospital", 0.0);
        let b = hospital("Ruttonjee Hospital", 0.0);
        let a_id = a.id;
        let directory = InMemoryDirectory::new(DirectorySnapshot {
            hospitals: vec![a, b],
            ..Default::default()
        });

        let updated = directory
            .apply_intensities(&[(a_id, 0.8), (Uuid::new_v4(), 0.3)])
            .unwrap();
        assert_eq!(updated, 1);

        let hospitals = directory.all_hospitals().unwrap();
        let refreshed = hospitals.iter().find(|h| h.id == a_id).unwrap();
        assert_eq!(refreshed.current_intensity, 0.8);
        // Hospital without a feed entry keeps its prior value.
        assert_eq!(hospitals.iter().find(|h| h.id != a_id).unwrap().current_intensity, 0.0);
    }

    #[test]
    fn intensities_are_clamped_to_unit_interval() {
        let h = hospital("Queen Mary Hospital", 0.5);
        let id = h.id;
        let directory = InMemoryDirectory::new(DirectorySnapshot {
            hospitals: vec![h],
            ..Default::default()
        });

        directory.apply_intensities(&[(id, 1.7)]).unwrap();
        assert_eq!(directory.all_hospitals().unwrap()[0].current_intensity, 1.0);

        directory.apply_intensities(&[(id, -0.2)]).unwrap();
        assert_eq!(directory.all_hospitals().unwrap()[0].current_intensity, 0.0);
    }

    #[test]
    fn readers_keep_the_snapshot_they_started_with() {
        let h = hospital("Queen Mary Hospital", 0.2);
        let id = h.id;
        let directory = InMemoryDirectory::new(DirectorySnapshot {
            hospitals: vec![h],
            ..Default::default()
        });

        let before = directory.snapshot().unwrap();
        directory.apply_intensities(&[(id, 0.9)]).unwrap();

        // The old generation is untouched; only new reads see the write.
        assert_eq!(before.hospitals[0].current_intensity, 0.2);
        assert_eq!(directory.snapshot().unwrap().hospitals[0].current_intensity, 0.9);
    }

    #[test]
    fn department_filter_matches_offerings() {
        let dept = Uuid::new_v4();
        let mut a = hospital("Queen Mary Hospital", 0.0);
        a.department_ids = vec![dept];
        let b = hospital("Ruttonjee Hospital", 0.0);
        let directory = InMemoryDirectory::new(DirectorySnapshot {
            hospitals: vec![a, b],
            ..Default::default()
        });

        let offering = directory.hospitals_for_department(dept).unwrap();
        assert_eq!(offering.len(), 1);
        assert_eq!(offering[0].name, "Queen Mary Hospital");
        assert!(directory.hospitals_for_department(Uuid::new_v4()).unwrap().is_empty());
    }
}
