//! One-shot analysis: projection, diagnosis and presentation figures
//!
//! Recomputed from scratch for every input or scenario change.

use crate::diagnosis::diagnose;
use crate::projection_engine::{comparisons, outcome_ranges, project, waste_breakdown};
use crate::types::{Analysis, ClinicInputs, Scenario};

/// Run the full analysis for one `(inputs, scenario)` pair.
pub fn analyze(inputs: &ClinicInputs, scenario: Scenario) -> Analysis {
    let projection = project(inputs, scenario);
    Analysis {
        scenario: scenario.profile(),
        problems: diagnose(inputs, &projection),
        waste_breakdown: waste_breakdown(projection.waste.total),
        outcomes: outcome_ranges(&projection),
        comparisons: comparisons(&projection),
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_bundles_consistent_figures() {
        let inputs = ClinicInputs::default();
        let analysis = analyze(&inputs, Scenario::Aggressive);
        assert_eq!(analysis.scenario.label, "Aggressive");
        assert_eq!(analysis.projection, project(&inputs, Scenario::Aggressive));
        assert_eq!(
            analysis.waste_breakdown.per_month,
            analysis.projection.waste.total / 12.0
        );
        assert_eq!(analysis.problems.len(), 5);
        assert_eq!(analysis.outcomes.len(), 2);
        assert_eq!(analysis.comparisons.len(), 3);
    }
}
