//! Problem text templates
//!
//! Each problem cites the clinic's own numbers: the current rate and the
//! matching waste figure from the projection.

use crate::format::{format_currency, format_number, format_plain};
use crate::types::{ClinicInputs, Problem, ProblemKind, ProjectionResult};

/// Build the problem record for a kind, filled in with the clinic's figures.
pub fn problem_template(
    kind: ProblemKind,
    inputs: &ClinicInputs,
    projection: &ProjectionResult,
) -> Problem {
    let (description, solution, details) = match kind {
        ProblemKind::HighNoShowRate => no_show_template(inputs, projection),
        ProblemKind::SlowLeadResponse => lead_response_template(inputs, projection),
        ProblemKind::LowPackageAdoption => package_template(inputs, projection),
        ProblemKind::PoorRetention => retention_template(inputs, projection),
        ProblemKind::MissingDigitalInfrastructure => infrastructure_template(),
    };

    Problem {
        kind,
        title: kind.title().to_string(),
        description,
        solution: solution.to_string(),
        details: details.iter().map(|d| (*d).to_string()).collect(),
    }
}

type Template = (String, &'static str, &'static [&'static str]);

fn no_show_template(inputs: &ClinicInputs, projection: &ProjectionResult) -> Template {
    (
        format!(
            "Your {}% show rate costs {}/year. That's {} empty slots.",
            format_plain(inputs.current_show_rate),
            format_currency(projection.waste.no_show),
            format_number(projection.current.no_shows),
        ),
        "AI-Powered Attendance System",
        &[
            "Predictive no-show detection using ML",
            "Intelligent 3-step SMS cadence",
            "Frictionless deposit collection + card-on-file",
            "One-tap rescheduling with AI-suggested slots",
            "Smart waitlist automation fills cancellations in 15min",
        ],
    )
}

fn lead_response_template(inputs: &ClinicInputs, projection: &ProjectionResult) -> Template {
    (
        format!(
            "Only {}% of leads book. Losing {}/year from phone tag.",
            format_plain(inputs.current_lead_to_book),
            format_currency(projection.waste.slow_lead),
        ),
        "AI Voice + Instant Response",
        &[
            "AI phone receptionist answers 24/7, sounds human",
            "<60-second missed-call text-back",
            "AI chatbot qualifies leads, books into EMR",
            "Smart call routing and lead scoring",
            "Automated follow-up sequences",
        ],
    )
}

fn package_template(inputs: &ClinicInputs, projection: &ProjectionResult) -> Template {
    (
        format!(
            "Only {}% accept packages. Missing {}/year.",
            format_plain(inputs.current_package_attach),
            format_currency(projection.waste.missed_package),
        ),
        "AI Care Plan System",
        &[
            "Visual plan builder shown DURING booking",
            "AI recommends optimal package",
            "Dynamic pricing with savings display",
            "Progress visualization with timeline",
            "Social proof integration",
        ],
    )
}

fn retention_template(inputs: &ClinicInputs, projection: &ProjectionResult) -> Template {
    (
        format!(
            "Only {}% rebook. Losing {}/year.",
            format_plain(inputs.current_rebook_rate),
            format_currency(projection.waste.missed_rebook),
        ),
        "AI Retention Automation",
        &[
            "\"Book-before-you-leave\" iPad kiosk",
            "AI-powered 30-day recall sequences",
            "Predictive drop-off alerts",
            "Automated re-engagement campaigns",
            "AI voice agent check-in calls",
        ],
    )
}

fn infrastructure_template() -> Template {
    (
        "Manual processes that don't scale. Need systems that work while you sleep.".to_string(),
        "Complete AI Automation Stack",
        &[
            "AI phone system with EMR integration",
            "Automated insurance verification",
            "Smart payment processing",
            "Review automation engine",
            "Real-time analytics dashboard",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection_engine::project;
    use crate::types::Scenario;

    #[test]
    fn test_no_show_description_cites_waste_and_slots() {
        let inputs = ClinicInputs::default();
        let projection = project(&inputs, Scenario::Expected);
        let p = problem_template(ProblemKind::HighNoShowRate, &inputs, &projection);
        assert_eq!(p.title, "High No-Show Rate");
        assert_eq!(
            p.description,
            "Your 75% show rate costs $71,820/year. That's 126 empty slots."
        );
        assert_eq!(p.solution, "AI-Powered Attendance System");
        assert_eq!(p.details.len(), 5);
    }

    #[test]
    fn test_lead_response_description() {
        let inputs = ClinicInputs::default();
        let projection = project(&inputs, Scenario::Expected);
        let p = problem_template(ProblemKind::SlowLeadResponse, &inputs, &projection);
        assert_eq!(
            p.description,
            "Only 35% of leads book. Losing $73,872/year from phone tag."
        );
    }

    #[test]
    fn test_every_kind_has_tactics() {
        let inputs = ClinicInputs::default();
        let projection = project(&inputs, Scenario::Conservative);
        for kind in [
            ProblemKind::HighNoShowRate,
            ProblemKind::SlowLeadResponse,
            ProblemKind::LowPackageAdoption,
            ProblemKind::PoorRetention,
            ProblemKind::MissingDigitalInfrastructure,
        ] {
            let p = problem_template(kind, &inputs, &projection);
            assert!(!p.details.is_empty(), "{kind:?} has no tactics");
            assert!(!p.solution.is_empty());
        }
    }
}
