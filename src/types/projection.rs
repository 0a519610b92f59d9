//! Projection outputs: current state, improved state, deltas and waste

use serde::{Deserialize, Serialize};

/// Annualized figures under current performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentState {
    pub annual_revenue: f64,
    pub annual_visits: f64,
    /// Booked new-patient appointments that were not attended, per year
    pub no_shows: f64,
}

/// Annualized figures once the scenario's improvements are in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovedState {
    pub annual_revenue: f64,
    pub annual_visits: f64,
}

/// Improvement over current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deltas {
    pub revenue: f64,
    pub gross_profit: f64,
    pub visits: f64,
}

/// Where the additional visits come from.
///
/// The four sources overlap causally (a converted lead who also buys a
/// package lands in two buckets); they are summed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitSources {
    pub from_packages: f64,
    pub from_rebooking: f64,
    pub from_show_rate: f64,
    pub from_lead_conversion: f64,
}

impl VisitSources {
    pub fn total(&self) -> f64 {
        self.from_packages + self.from_rebooking + self.from_show_rate + self.from_lead_conversion
    }
}

/// Revenue lost per year under current performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waste {
    pub no_show: f64,
    pub slow_lead: f64,
    pub missed_package: f64,
    pub missed_rebook: f64,
    /// Always `no_show + slow_lead + missed_package + missed_rebook`
    pub total: f64,
}

impl Waste {
    pub fn new(no_show: f64, slow_lead: f64, missed_package: f64, missed_rebook: f64) -> Self {
        Self {
            no_show,
            slow_lead,
            missed_package,
            missed_rebook,
            total: no_show + slow_lead + missed_package + missed_rebook,
        }
    }
}

/// Target rates after applying a scenario, each capped at its ceiling (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovedRates {
    pub show_rate: f64,
    pub lead_to_book: f64,
    pub package_attach: f64,
    pub rebook_rate: f64,
}

/// Output of the projection engine.
///
/// Derived on demand from `(ClinicInputs, Scenario)`; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub current: CurrentState,
    pub improved: ImprovedState,
    pub deltas: Deltas,
    pub visit_sources: VisitSources,
    pub waste: Waste,
    pub improved_rates: ImprovedRates,
    pub valuation_impact: f64,
}
