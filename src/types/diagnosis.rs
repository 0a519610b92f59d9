//! Diagnosed problems and recommended interventions

use serde::{Deserialize, Serialize};

/// Problem categories, in the order they are reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    HighNoShowRate,
    SlowLeadResponse,
    LowPackageAdoption,
    PoorRetention,
    MissingDigitalInfrastructure,
}

impl ProblemKind {
    pub const fn title(self) -> &'static str {
        match self {
            ProblemKind::HighNoShowRate => "High No-Show Rate",
            ProblemKind::SlowLeadResponse => "Slow Lead Response",
            ProblemKind::LowPackageAdoption => "Low Treatment Plan Adoption",
            ProblemKind::PoorRetention => "Patient Retention Failure",
            ProblemKind::MissingDigitalInfrastructure => "Missing Digital Infrastructure",
        }
    }
}

/// One diagnosed problem with its recommended solution and tactics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub kind: ProblemKind,
    pub title: String,
    pub description: String,
    pub solution: String,
    pub details: Vec<String>,
}
