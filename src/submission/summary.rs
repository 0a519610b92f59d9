//! Results summary rows and email template parameters

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::format::{format_currency, format_plain};
use crate::types::{breakdown, Analysis, ClinicInputs};

/// Flat record of one submission, logged to the spreadsheet endpoint.
///
/// Raw inputs are kept as entered; result figures are display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub timestamp: String,
    pub clinic_name: String,
    pub email: String,
    pub clinic_type: String,
    #[serde(serialize_with = "as_entered")]
    pub providers: f64,
    #[serde(serialize_with = "as_entered")]
    pub visits_per_week: f64,
    #[serde(serialize_with = "as_entered")]
    pub revenue_per_visit: f64,
    #[serde(serialize_with = "as_entered")]
    pub leads_per_month: f64,
    #[serde(serialize_with = "as_entered")]
    pub current_show_rate: f64,
    #[serde(serialize_with = "as_entered")]
    pub current_lead_to_book: f64,
    #[serde(serialize_with = "as_entered")]
    pub current_package_attach: f64,
    #[serde(serialize_with = "as_entered")]
    pub current_rebook_rate: f64,
    pub scenario: String,
    pub additional_revenue: String,
    pub additional_gross_profit: String,
    pub valuation_impact: String,
    pub total_current_waste: String,
    pub daily_waste: String,
}

impl ResultsSummary {
    pub fn new(inputs: &ClinicInputs, analysis: &Analysis, at: DateTime<Utc>) -> Self {
        let projection = &analysis.projection;
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            clinic_name: inputs.clinic_name.clone(),
            email: inputs.email.clone(),
            clinic_type: inputs.clinic_type.display_name().to_string(),
            providers: inputs.providers,
            visits_per_week: inputs.visits_per_week,
            revenue_per_visit: inputs.revenue_per_visit,
            leads_per_month: inputs.leads_per_month,
            current_show_rate: inputs.current_show_rate,
            current_lead_to_book: inputs.current_lead_to_book,
            current_package_attach: inputs.current_package_attach,
            current_rebook_rate: inputs.current_rebook_rate,
            scenario: analysis.scenario.label.to_string(),
            additional_revenue: format_currency(projection.deltas.revenue),
            additional_gross_profit: format_currency(projection.deltas.gross_profit),
            valuation_impact: format_currency(projection.valuation_impact),
            total_current_waste: format_currency(projection.waste.total),
            daily_waste: format_currency(projection.waste.total / breakdown::DAYS_PER_YEAR),
        }
    }
}

/// Whole numbers go out as JSON integers (`90`, not `90.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn as_entered<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Template parameters for the results email.
///
/// One email goes to the submitter with `cc_email` copied.
pub fn email_template_params(
    inputs: &ClinicInputs,
    summary: &ResultsSummary,
    cc_email: &str,
) -> BTreeMap<String, String> {
    let pairs: [(&str, String); 20] = [
        ("to_name", inputs.clinic_name.clone()),
        ("to_email", inputs.email.clone()),
        ("cc_email", cc_email.to_string()),
        ("clinic_name", inputs.clinic_name.clone()),
        ("clinic_email", inputs.email.clone()),
        ("clinic_type", summary.clinic_type.clone()),
        ("providers", format_plain(inputs.providers)),
        ("visits_per_week", format_plain(inputs.visits_per_week)),
        ("revenue_per_visit", format_currency(inputs.revenue_per_visit)),
        ("leads_per_month", format_plain(inputs.leads_per_month)),
        ("show_rate", format_plain(inputs.current_show_rate)),
        ("lead_to_book", format_plain(inputs.current_lead_to_book)),
        ("package_attach", format_plain(inputs.current_package_attach)),
        ("rebook_rate", format_plain(inputs.current_rebook_rate)),
        ("scenario", summary.scenario.clone()),
        ("additional_revenue", summary.additional_revenue.clone()),
        ("additional_profit", summary.additional_gross_profit.clone()),
        ("valuation_impact", summary.valuation_impact.clone()),
        ("total_waste", summary.total_current_waste.clone()),
        ("daily_waste", summary.daily_waste.clone()),
    ];
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
