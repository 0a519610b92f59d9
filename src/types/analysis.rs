//! Derived presentation figures: waste breakdown, outcome ranges, comparisons

use serde::Serialize;

use super::{Problem, ProjectionResult, ScenarioProfile};

/// Annual waste restated per period and as fundable equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteBreakdown {
    pub per_day: f64,
    pub per_business_hour: f64,
    pub per_week: f64,
    pub per_month: f64,
    pub hires: u64,
    pub treatment_rooms: u64,
    pub marketing_campaigns: u64,
    pub equipment_packages: u64,
}

/// Service offering an outcome range is quoted for.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServicePackage {
    SetupAndTrain,
    FullTransformation,
}

impl ServicePackage {
    pub const fn display_name(self) -> &'static str {
        match self {
            ServicePackage::SetupAndTrain => "Setup & Train",
            ServicePackage::FullTransformation => "Full Transformation",
        }
    }
}

/// Expected first-year additional gross profit band for a service package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeRange {
    pub package: ServicePackage,
    pub low: f64,
    pub high: f64,
}

/// Current vs improved figure for a bar comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub metric: &'static str,
    pub current: f64,
    pub improved: f64,
    /// Width of the current bar relative to the improved bar (%), floored
    pub current_bar_percent: f64,
}

/// Everything derived from one `(ClinicInputs, Scenario)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub scenario: ScenarioProfile,
    pub projection: ProjectionResult,
    pub problems: Vec<Problem>,
    pub waste_breakdown: WasteBreakdown,
    pub outcomes: Vec<OutcomeRange>,
    pub comparisons: Vec<Comparison>,
}
