use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clinical department. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    /// Stable short identifier, e.g. "CAR" for Cardiology.
    pub code: String,
}
