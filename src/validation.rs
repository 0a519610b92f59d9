//! Form validation for a submission
//!
//! Checks run in a fixed order and the first failure wins; only one message
//! is ever reported. A failed check blocks the submission before any
//! side effect runs.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::ClinicInputs;

/// Why a submission was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your clinic name")]
    MissingClinicName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter the number of providers")]
    MissingProviders,
    #[error("Please enter total visits per week")]
    MissingVisitsPerWeek,
    #[error("Please enter average revenue per visit")]
    MissingRevenuePerVisit,
    #[error("Please enter new leads per month")]
    MissingLeadsPerMonth,
}

impl ValidationError {
    /// Name of the offending form field
    pub const fn field(self) -> &'static str {
        match self {
            ValidationError::MissingClinicName => "clinic_name",
            ValidationError::MissingEmail | ValidationError::InvalidEmail => "email",
            ValidationError::MissingProviders => "providers",
            ValidationError::MissingVisitsPerWeek => "visits_per_week",
            ValidationError::MissingRevenuePerVisit => "revenue_per_visit",
            ValidationError::MissingLeadsPerMonth => "leads_per_month",
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
            .expect("email pattern is a valid regex")
    })
}

/// Whitespace for blank-field checks; the byte order mark counts too.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

/// Check an address against the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validate inputs before submission.
///
/// Numeric fields must be at least 1. NaN fails every check as well.
pub fn validate_inputs(inputs: &ClinicInputs) -> Result<(), ValidationError> {
    if is_blank(&inputs.clinic_name) {
        return Err(ValidationError::MissingClinicName);
    }
    if is_blank(&inputs.email) {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(&inputs.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !at_least_one(inputs.providers) {
        return Err(ValidationError::MissingProviders);
    }
    if !at_least_one(inputs.visits_per_week) {
        return Err(ValidationError::MissingVisitsPerWeek);
    }
    if !at_least_one(inputs.revenue_per_visit) {
        return Err(ValidationError::MissingRevenuePerVisit);
    }
    if !at_least_one(inputs.leads_per_month) {
        return Err(ValidationError::MissingLeadsPerMonth);
    }
    Ok(())
}

fn at_least_one(value: f64) -> bool {
    value >= 1.0
}
