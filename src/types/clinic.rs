//! Clinic identity and operating metrics

use serde::{Deserialize, Serialize};

/// Kind of practice. Selects the per-patient visit multipliers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClinicType {
    #[default]
    Physio,
    Chiro,
}

impl ClinicType {
    /// Visits a typical new patient generates over an episode of care.
    pub const fn base_visits_per_patient(self) -> f64 {
        match self {
            ClinicType::Chiro => 8.0,
            ClinicType::Physio => 6.0,
        }
    }

    /// Extra visits a patient on a treatment package adds.
    pub const fn package_visits_bonus(self) -> f64 {
        match self {
            ClinicType::Chiro => 4.0,
            ClinicType::Physio => 3.0,
        }
    }

    /// Get display name for emails, reports and the sheet log
    pub const fn display_name(self) -> &'static str {
        match self {
            ClinicType::Physio => "Physiotherapy",
            ClinicType::Chiro => "Chiropractic",
        }
    }
}

impl std::fmt::Display for ClinicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Operating metrics entered by a clinic.
///
/// Rates are percentages in `0..=100`. `clinic_name` and `email` identify the
/// submitter and never enter the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicInputs {
    pub clinic_name: String,
    pub email: String,
    pub clinic_type: ClinicType,
    pub providers: f64,
    pub visits_per_week: f64,
    pub revenue_per_visit: f64,
    pub leads_per_month: f64,
    pub current_show_rate: f64,
    pub current_lead_to_book: f64,
    pub current_package_attach: f64,
    pub current_rebook_rate: f64,
}

impl Default for ClinicInputs {
    fn default() -> Self {
        Self {
            clinic_name: String::new(),
            email: String::new(),
            clinic_type: ClinicType::Physio,
            providers: 3.0,
            visits_per_week: 90.0,
            revenue_per_visit: 95.0,
            leads_per_month: 120.0,
            current_show_rate: 75.0,
            current_lead_to_book: 35.0,
            current_package_attach: 15.0,
            current_rebook_rate: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chiro_uses_larger_multipliers() {
        assert_eq!(ClinicType::Chiro.base_visits_per_patient(), 8.0);
        assert_eq!(ClinicType::Chiro.package_visits_bonus(), 4.0);
        assert_eq!(ClinicType::Physio.base_visits_per_patient(), 6.0);
        assert_eq!(ClinicType::Physio.package_visits_bonus(), 3.0);
    }

    #[test]
    fn test_partial_json_keeps_form_defaults() {
        let inputs: ClinicInputs =
            serde_json::from_str(r#"{"clinic_name":"Bayside Physio","clinic_type":"chiro"}"#)
                .expect("partial inputs should parse");
        assert_eq!(inputs.clinic_name, "Bayside Physio");
        assert_eq!(inputs.clinic_type, ClinicType::Chiro);
        assert_eq!(inputs.providers, 3.0);
        assert_eq!(inputs.visits_per_week, 90.0);
        assert_eq!(inputs.current_rebook_rate, 25.0);
    }
}
