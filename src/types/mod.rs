//! Shared data structures for the clinic profit leak calculator
//!
//! - ClinicInputs / ClinicType: the operating metrics a clinic enters
//! - Scenario / ScenarioProfile: the three fixed improvement profiles
//! - ProjectionResult: current, improved and waste figures
//! - Problem: diagnosed operational problems with recommended interventions
//! - Analysis: everything the results view and report need in one value

mod clinic;
mod scenario;
mod projection;
// Public so the constant tables stay reachable as `types::thresholds::*`.
pub mod thresholds;
mod diagnosis;
mod analysis;

pub use clinic::*;
pub use scenario::*;
pub use projection::*;
pub use thresholds::*;
pub use diagnosis::*;
pub use analysis::*;
