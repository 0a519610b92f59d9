//! Annual new-patient funnel for a given set of rates

use crate::types::model;

/// Booked, attended and package-buying new patients per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Funnel {
    pub booked: f64,
    pub shown: f64,
    pub no_shows: f64,
    pub package_patients: f64,
}

impl Funnel {
    /// Rates are percentages.
    pub fn new(leads_per_month: f64, lead_to_book: f64, show_rate: f64, package_attach: f64) -> Self {
        let booked = leads_per_month * model::MONTHS_PER_YEAR * (lead_to_book / 100.0);
        let shown = booked * (show_rate / 100.0);
        Self {
            booked,
            shown,
            no_shows: booked - shown,
            package_patients: shown * (package_attach / 100.0),
        }
    }
}
