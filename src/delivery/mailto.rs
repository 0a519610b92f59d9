//! Pre-filled `mailto:` contact link
//!
//! Fallback for visitors who prefer their own mail client. Subject and
//! body are percent-encoded, so the link is a single valid URI.

use crate::format::{format_currency, format_plain};
use crate::types::{Analysis, ClinicInputs};

pub const MAILTO_SUBJECT: &str = "Profit Leak Calculator Results - My Clinic";

/// Plain-text body summarising the clinic and its projected results.
pub fn mailto_body(inputs: &ClinicInputs, analysis: &Analysis) -> String {
    let p = &analysis.projection;
    format!(
        "Hello,\n\n\
         I used your Profit Leak Calculator and I'm interested in discussing the results:\n\n\
         CLINIC DETAILS:\n\
         - Clinic Type: {clinic_type}\n\
         - Providers: {providers}\n\
         - Current Weekly Visits: {visits}\n\
         - Revenue Per Visit: {rpv}\n\
         - Monthly Leads: {leads}\n\n\
         CURRENT PERFORMANCE:\n\
         - Show Rate: {show}%\n\
         - Lead-to-Book Rate: {ltb}%\n\
         - Package Attach Rate: {pkg}%\n\
         - Rebook Rate: {rebook}%\n\n\
         PROJECTED RESULTS ({scenario} Scenario):\n\
         - Additional Annual Revenue: {revenue}\n\
         - Additional Gross Profit: {profit}\n\
         - Business Valuation Impact: {valuation}\n\
         - Total Current Waste: {waste}\n\n\
         I'd like to learn more about your services.\n\n\
         Best regards",
        clinic_type = inputs.clinic_type.display_name(),
        providers = inputs.providers,
        visits = format_plain(inputs.visits_per_week),
        rpv = format_currency(inputs.revenue_per_visit),
        leads = format_plain(inputs.leads_per_month),
        show = format_plain(inputs.current_show_rate),
        ltb = format_plain(inputs.current_lead_to_book),
        pkg = format_plain(inputs.current_package_attach),
        rebook = format_plain(inputs.current_rebook_rate),
        scenario = analysis.scenario.label,
        revenue = format_currency(p.deltas.revenue),
        profit = format_currency(p.deltas.gross_profit),
        valuation = format_currency(p.valuation_impact),
        waste = format_currency(p.waste.total),
    )
}

/// Build `mailto:<recipient>?subject=..&body=..` for the given results.
pub fn mailto_link(recipient: &str, inputs: &ClinicInputs, analysis: &Analysis) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(MAILTO_SUBJECT),
        urlencoding::encode(&mailto_body(inputs, analysis))
    )
}
