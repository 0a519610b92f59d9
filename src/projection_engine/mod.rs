//! Projection Engine Module
//!
//! Deterministic revenue model for a clinic's patient funnel. Everything here
//! is plain arithmetic over `ClinicInputs` and a `Scenario`; nothing is stored
//! and no input is ever mutated.
//!
//! - `project()` - current state, improved state, deltas, waste, valuation
//! - `improved_rates()` - scenario bumps capped at the rate ceilings
//! - `breakdown` - waste per period, outcome ranges, comparison bars

pub mod breakdown;
mod funnel;

pub use breakdown::{comparisons, outcome_ranges, waste_breakdown};
pub use funnel::Funnel;

use crate::types::{
    model, rate_ceilings, ClinicInputs, CurrentState, Deltas, ImprovedRates, ImprovedState,
    ProjectionResult, Scenario, ScenarioProfile, VisitSources, Waste,
};

// ============================================================================
// Improved Rates
// ============================================================================

/// Apply the scenario's additive bumps, capping each rate at its ceiling.
///
/// A current rate already above its ceiling is pulled down to the ceiling.
pub fn improved_rates(inputs: &ClinicInputs, profile: &ScenarioProfile) -> ImprovedRates {
    ImprovedRates {
        show_rate: rate_ceilings::SHOW_RATE.min(inputs.current_show_rate + profile.show_rate),
        lead_to_book: rate_ceilings::LEAD_TO_BOOK
            .min(inputs.current_lead_to_book + profile.lead_to_book),
        package_attach: rate_ceilings::PACKAGE_ATTACH
            .min(inputs.current_package_attach + profile.package_attach),
        rebook_rate: rate_ceilings::REBOOK_RATE
            .min(inputs.current_rebook_rate + profile.rebook_rate),
    }
}

// ============================================================================
// Projection
// ============================================================================

/// Project a clinic's current and improved annual economics.
///
/// Total over its whole domain: negative or non-finite inputs are not
/// rejected and flow straight through the formulas. Callers validate first.
///
/// Additional visits are the sum of four sources (packages, rebooking, show
/// rate, lead conversion). The sources overlap; the sum is kept as the model
/// defines it.
///
/// Waste is measured against current performance, using the scenario bump
/// as the size of the recoverable loss for each lever.
pub fn project(inputs: &ClinicInputs, scenario: Scenario) -> ProjectionResult {
    let profile = scenario.profile();
    let base_visits = inputs.clinic_type.base_visits_per_patient();
    let package_bonus = inputs.clinic_type.package_visits_bonus();
    let rpv = inputs.revenue_per_visit;

    // Current annualized state
    let current_annual_visits = inputs.visits_per_week * model::WEEKS_PER_YEAR;
    let current_annual_revenue = current_annual_visits * rpv;
    let current = Funnel::new(
        inputs.leads_per_month,
        inputs.current_lead_to_book,
        inputs.current_show_rate,
        inputs.current_package_attach,
    );

    // Improved state
    let rates = improved_rates(inputs, &profile);
    let improved = Funnel::new(
        inputs.leads_per_month,
        rates.lead_to_book,
        rates.show_rate,
        rates.package_attach,
    );

    let visit_sources = VisitSources {
        from_packages: (improved.package_patients - current.package_patients) * package_bonus,
        from_rebooking: current.shown
            * (profile.rebook_rate / 100.0)
            * model::EXTRA_VISITS_PER_REBOOK,
        from_show_rate: (improved.shown - current.shown) * base_visits,
        from_lead_conversion: ((improved.booked - current.booked) * (rates.show_rate / 100.0))
            * base_visits,
    };
    let total_additional_visits = visit_sources.total();

    let additional_revenue = total_additional_visits * rpv;
    let new_annual_revenue = current_annual_revenue + additional_revenue;
    let additional_gross_profit = additional_revenue * model::GROSS_MARGIN;

    // Waste under current performance
    let annual_leads = inputs.leads_per_month * model::MONTHS_PER_YEAR;
    let waste = Waste::new(
        current.no_shows * rpv * base_visits,
        annual_leads
            * (profile.lead_to_book / 100.0)
            * (inputs.current_show_rate / 100.0)
            * rpv
            * base_visits,
        current.shown * (profile.package_attach / 100.0) * package_bonus * rpv,
        current.shown * (profile.rebook_rate / 100.0) * model::EXTRA_VISITS_PER_REBOOK * rpv,
    );

    ProjectionResult {
        current: CurrentState {
            annual_revenue: current_annual_revenue,
            annual_visits: current_annual_visits,
            no_shows: current.no_shows,
        },
        improved: ImprovedState {
            annual_revenue: new_annual_revenue,
            annual_visits: current_annual_visits + total_additional_visits,
        },
        deltas: Deltas {
            revenue: additional_revenue,
            gross_profit: additional_gross_profit,
            visits: total_additional_visits,
        },
        visit_sources,
        waste,
        improved_rates: rates,
        valuation_impact: additional_gross_profit * model::VALUATION_MULTIPLE,
    }
}
