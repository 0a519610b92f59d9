//! Improvement scenarios

use serde::{Deserialize, Serialize};

/// One of the three fixed improvement profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    #[default]
    Expected,
    Aggressive,
}

/// Additive percentage-point bumps applied to the current rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioProfile {
    pub scenario: Scenario,
    pub show_rate: f64,
    pub lead_to_book: f64,
    pub package_attach: f64,
    pub rebook_rate: f64,
    pub label: &'static str,
    pub color: &'static str,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Expected,
        Scenario::Aggressive,
    ];

    pub const fn profile(self) -> ScenarioProfile {
        match self {
            Scenario::Conservative => ScenarioProfile {
                scenario: self,
                show_rate: 5.0,
                lead_to_book: 8.0,
                package_attach: 8.0,
                rebook_rate: 8.0,
                label: "Conservative",
                color: "#10b981",
            },
            Scenario::Expected => ScenarioProfile {
                scenario: self,
                show_rate: 10.0,
                lead_to_book: 12.0,
                package_attach: 12.0,
                rebook_rate: 12.0,
                label: "Expected",
                color: "#3b82f6",
            },
            Scenario::Aggressive => ScenarioProfile {
                scenario: self,
                show_rate: 15.0,
                lead_to_book: 15.0,
                package_attach: 18.0,
                rebook_rate: 18.0,
                label: "Aggressive",
                color: "#0ea5e9",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        self.profile().label
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown scenario '{0}' (expected conservative, expected or aggressive)")]
pub struct UnknownScenario(pub String);

impl std::str::FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(Scenario::Conservative),
            "expected" => Ok(Scenario::Expected),
            "aggressive" => Ok(Scenario::Aggressive),
            _ => Err(UnknownScenario(s.to_string())),
        }
    }
}
