use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An administrator-curated symptom phrase mapped to a department.
///
/// Read-only to the matcher. `priority` is a positive integer where lower
/// means higher clinical urgency; it feeds the tie-break boost during
/// matching and the deterministic candidate order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomDefinition {
    pub id: Uuid,
    /// Canonical phrase, e.g. "heart pain".
    pub text: String,
    /// Synonym phrases; insertion order is irrelevant.
    pub keywords: Vec<String>,
    pub department_id: Uuid,
    pub priority: u32,
}
