//! Presentation figures derived from a projection
//!
//! Restates annual waste per period, quotes outcome bands for the two
//! service packages, and sizes the current-vs-improved comparison bars.

use crate::types::{
    breakdown, model, Comparison, OutcomeRange, ProjectionResult, ServicePackage, WasteBreakdown,
};

/// Restate annual waste per day, business hour, week and month, and as
/// whole units of things it could fund.
pub fn waste_breakdown(total_waste: f64) -> WasteBreakdown {
    let per_day = total_waste / breakdown::DAYS_PER_YEAR;
    WasteBreakdown {
        per_day,
        per_business_hour: per_day / breakdown::BUSINESS_HOURS_PER_DAY,
        per_week: total_waste / breakdown::WEEKS_PER_YEAR,
        per_month: total_waste / breakdown::MONTHS_PER_YEAR,
        hires: fundable_units(total_waste, breakdown::COST_PER_HIRE),
        treatment_rooms: fundable_units(total_waste, breakdown::COST_PER_TREATMENT_ROOM),
        marketing_campaigns: fundable_units(total_waste, breakdown::COST_PER_MARKETING_CAMPAIGN),
        equipment_packages: fundable_units(total_waste, breakdown::COST_PER_EQUIPMENT_PACKAGE),
    }
}

/// Whole units affordable; zero for negative or non-finite totals.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fundable_units(total: f64, unit_cost: f64) -> u64 {
    let units = (total / unit_cost).floor();
    if units.is_finite() && units > 0.0 {
        units as u64
    } else {
        0
    }
}

/// First-year additional gross profit bands per service package.
///
/// Setup & Train: 70% to 100% of the projected gain.
/// Full Transformation: 100% to 130%.
pub fn outcome_ranges(projection: &ProjectionResult) -> Vec<OutcomeRange> {
    let gp = projection.deltas.gross_profit;
    vec![
        OutcomeRange {
            package: ServicePackage::SetupAndTrain,
            low: gp * 0.7,
            high: gp,
        },
        OutcomeRange {
            package: ServicePackage::FullTransformation,
            low: gp,
            high: gp * 1.3,
        },
    ]
}

/// Current vs improved revenue, gross profit and visits.
pub fn comparisons(projection: &ProjectionResult) -> Vec<Comparison> {
    let current = &projection.current;
    let improved = &projection.improved;
    vec![
        comparison("annual_revenue", current.annual_revenue, improved.annual_revenue),
        comparison(
            "gross_profit",
            current.annual_revenue * model::GROSS_MARGIN,
            improved.annual_revenue * model::GROSS_MARGIN,
        ),
        comparison("annual_visits", current.annual_visits, improved.annual_visits),
    ]
}

fn comparison(metric: &'static str, current: f64, improved: f64) -> Comparison {
    // f64::max ignores NaN, so a zero improved figure still yields the floor
    Comparison {
        metric,
        current,
        improved,
        current_bar_percent: breakdown::MIN_BAR_PERCENT.max(current / improved * 100.0),
    }
}
