use serde::{Deserialize, Serialize};

use crate::directory::DirectoryError;

/// Availability state of a hospital, administrator-managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalStatus {
    Operational,
    PartialService,
    ClosedEpidemic,
    ClosedOther,
}

impl OperationalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::PartialService => "PARTIAL_SERVICE",
            Self::ClosedEpidemic => "CLOSED_EPIDEMIC",
            Self::ClosedOther => "CLOSED_OTHER",
        }
    }

    /// Closed hospitals are excluded from ranking entirely.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::ClosedEpidemic | Self::ClosedOther)
    }

    /// Penalty term in the composite ranking score. Closed statuses carry
    /// the full penalty even though ranking filters them out first.
    pub fn penalty(&self) -> f64 {
        match self {
            Self::Operational => 0.0,
            Self::PartialService => 0.5,
            Self::ClosedEpidemic | Self::ClosedOther => 1.0,
        }
    }
}

impl std::str::FromStr for OperationalStatus {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPERATIONAL" => Ok(Self::Operational),
            "PARTIAL_SERVICE" => Ok(Self::PartialService),
            "CLOSED_EPIDEMIC" => Ok(Self::ClosedEpidemic),
            "CLOSED_OTHER" => Ok(Self::ClosedOther),
            _ => Err(DirectoryError::InvalidEnum {
                field: "OperationalStatus".into(),
                value: s.into(),
            }),
        }
    }
}
