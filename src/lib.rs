//! Clinic Profit Leak Calculator
//!
//! Estimates how much revenue a physiotherapy or chiropractic clinic loses
//! to no-shows, slow lead response, low treatment-plan adoption and poor
//! rebooking, and projects the gain under three improvement scenarios.
//!
//! ## Architecture
//!
//! - **Projection Engine**: pure `(ClinicInputs, Scenario) -> ProjectionResult`
//! - **Diagnosis**: ordered problem list with recommended interventions
//! - **Submission**: form validation plus concurrent delivery (report,
//!   email, spreadsheet row)
//! - **API**: Axum HTTP surface over all of the above

pub mod analysis;
pub mod api;
pub mod config;
pub mod delivery;
pub mod diagnosis;
pub mod format;
pub mod projection_engine;
pub mod submission;
pub mod types;
pub mod validation;

// Re-export configuration
pub use config::CalculatorConfig;

// Re-export commonly used types
pub use types::{
    Analysis, ClinicInputs, ClinicType, Problem, ProblemKind, ProjectionResult, Scenario,
    ScenarioProfile, Waste, WasteBreakdown,
};

// Re-export entry points
pub use analysis::analyze;
pub use diagnosis::diagnose;
pub use projection_engine::project;
pub use submission::{SideEffectStatus, Submission, SubmissionCoordinator};
pub use validation::{validate_inputs, ValidationError};
