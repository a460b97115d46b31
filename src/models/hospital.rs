use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::OperationalStatus;

/// A hospital as published by the directory collaborator.
///
/// `current_intensity` is the only field the refresh job mutates; everything
/// else is administrator-managed reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: Uuid,
    /// Must match the `hospName` used by the A&E waiting-time feed for the
    /// intensity refresh to pick this hospital up.
    pub name: String,
    pub address: String,
    pub district: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: u32,
    /// Congestion proxy in [0,1]; 0.0 = quiet, 1.0 = saturated.
    pub current_intensity: f64,
    pub operational_status: OperationalStatus,
    /// Departments offered at this hospital.
    pub department_ids: Vec<Uuid>,
}

impl Hospital {
    pub fn offers_department(&self, department_id: Uuid) -> bool {
        self.department_ids.contains(&department_id)
    }
}
