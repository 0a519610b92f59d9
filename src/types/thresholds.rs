//! Projection model constants and diagnosis thresholds

/// Fixed constants of the projection model
pub mod model {
    pub const WEEKS_PER_YEAR: f64 = 52.0;
    pub const MONTHS_PER_YEAR: f64 = 12.0;
    /// Share of revenue kept as profit before overhead
    pub const GROSS_MARGIN: f64 = 0.68;
    /// EBITDA-style multiple applied to incremental gross profit
    pub const VALUATION_MULTIPLE: f64 = 3.5;
    /// Extra visits a rebooking patient adds
    pub const EXTRA_VISITS_PER_REBOOK: f64 = 2.0;
}

/// Upper bounds on improved rates (percent). A scenario bump never lifts a
/// rate past its ceiling.
pub mod rate_ceilings {
    pub const SHOW_RATE: f64 = 95.0;
    pub const LEAD_TO_BOOK: f64 = 55.0;
    pub const PACKAGE_ATTACH: f64 = 45.0;
    pub const REBOOK_RATE: f64 = 55.0;
}

/// A current rate strictly below its threshold raises the matching problem.
pub mod diagnosis_thresholds {
    /// Show rate (%) below which no-shows are flagged
    pub const SHOW_RATE_MIN: f64 = 80.0;
    /// Lead-to-book rate (%) below which lead response is flagged
    pub const LEAD_TO_BOOK_MIN: f64 = 40.0;
    /// Package attach rate (%) below which plan adoption is flagged
    pub const PACKAGE_ATTACH_MIN: f64 = 25.0;
    /// Rebook rate (%) below which retention is flagged
    pub const REBOOK_RATE_MIN: f64 = 35.0;
}

/// Divisors for presenting annual waste over shorter periods and as
/// things the money could have paid for.
pub mod breakdown {
    pub const DAYS_PER_YEAR: f64 = 365.0;
    pub const BUSINESS_HOURS_PER_DAY: f64 = 10.0;
    pub const WEEKS_PER_YEAR: f64 = 52.0;
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    pub const COST_PER_HIRE: f64 = 60_000.0;
    pub const COST_PER_TREATMENT_ROOM: f64 = 150_000.0;
    pub const COST_PER_MARKETING_CAMPAIGN: f64 = 25_000.0;
    pub const COST_PER_EQUIPMENT_PACKAGE: f64 = 80_000.0;

    /// Minimum width (%) of the "current" bar in a comparison
    pub const MIN_BAR_PERCENT: f64 = 20.0;
}
