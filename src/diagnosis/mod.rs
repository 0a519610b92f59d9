//! Problem diagnosis
//!
//! Compares each current rate against its threshold and emits the matching
//! problem, then always appends the digital-infrastructure problem. Order is
//! fixed: show rate, lead-to-book, package attach, rebook, infrastructure.

mod templates;

pub use templates::problem_template;

use crate::types::{diagnosis_thresholds, ClinicInputs, Problem, ProblemKind, ProjectionResult};

/// Kinds of problem the inputs trigger, in reporting order.
pub fn triggered_kinds(inputs: &ClinicInputs) -> Vec<ProblemKind> {
    let checks = [
        (
            inputs.current_show_rate < diagnosis_thresholds::SHOW_RATE_MIN,
            ProblemKind::HighNoShowRate,
        ),
        (
            inputs.current_lead_to_book < diagnosis_thresholds::LEAD_TO_BOOK_MIN,
            ProblemKind::SlowLeadResponse,
        ),
        (
            inputs.current_package_attach < diagnosis_thresholds::PACKAGE_ATTACH_MIN,
            ProblemKind::LowPackageAdoption,
        ),
        (
            inputs.current_rebook_rate < diagnosis_thresholds::REBOOK_RATE_MIN,
            ProblemKind::PoorRetention,
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(triggered, kind)| triggered.then_some(kind))
        .chain(std::iter::once(ProblemKind::MissingDigitalInfrastructure))
        .collect()
}

/// Build the ordered problem list for a clinic and its projection.
pub fn diagnose(inputs: &ClinicInputs, projection: &ProjectionResult) -> Vec<Problem> {
    triggered_kinds(inputs)
        .into_iter()
        .map(|kind| problem_template(kind, inputs, projection))
        .collect()
}
