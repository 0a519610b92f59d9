//! Config validation: unknown-key detection with Levenshtein suggestions
//! and settings sanity checks.
//!
//! The raw TOML is first parsed into a `toml::Value` and its key tree
//! compared against the known field names. Unknown keys only warn, so a
//! misspelled optional key never prevents startup.

use std::collections::HashSet;

use super::CalculatorConfig;
use crate::validation::is_valid_email;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `CalculatorConfig`.
///
/// Kept in step with calculator_config.rs by hand.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        "server",
        "server.addr",
        "email",
        "email.enabled",
        "email.endpoint",
        "email.service_id",
        "email.template_id",
        "email.public_key",
        "email.cc_email",
        "sheets",
        "sheets.enabled",
        "sheets.endpoint",
        "report",
        "report.enabled",
        "report.output_dir",
        "contact",
        "contact.mailto_recipient",
        "http",
        "http.timeout_secs",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collect the dotted key paths of a `toml::Value` tree.
///
/// `{ a = { b = 1 } }` yields `["a", "a.b"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Closest known key within edit distance 3, ties broken alphabetically.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(unknown, k), *k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return a warning for every unknown key.
///
/// Syntax errors yield no warnings; serde reports them afterwards.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Settings Validation
// ============================================================================

/// Sanity-check parsed settings.
///
/// Returns (errors, warnings). Errors must prevent startup, warnings are
/// logged and ignored.
pub fn validate_settings(config: &CalculatorConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.http.timeout_secs == 0 {
        errors.push("http.timeout_secs must be > 0".to_string());
    } else if config.http.timeout_secs > 300 {
        warnings.push(ValidationWarning {
            field: "http.timeout_secs".to_string(),
            message: format!(
                "http.timeout_secs = {} is unusually long for a form submission",
                config.http.timeout_secs
            ),
            suggestion: None,
        });
    }

    if config.server.addr.parse::<std::net::SocketAddr>().is_err() {
        errors.push(format!(
            "server.addr = '{}' is not a valid socket address",
            config.server.addr
        ));
    }

    if config.email.enabled && !is_http_url(&config.email.endpoint) {
        errors.push(format!(
            "email.endpoint = '{}' must be an http(s) URL",
            config.email.endpoint
        ));
    }
    if config.sheets.enabled && !config.sheets.endpoint.is_empty() && !is_http_url(&config.sheets.endpoint) {
        errors.push(format!(
            "sheets.endpoint = '{}' must be an http(s) URL",
            config.sheets.endpoint
        ));
    }

    let cc = config.email.cc_email.trim();
    if !cc.is_empty() && !is_valid_email(cc) {
        errors.push(format!("email.cc_email = '{cc}' is not a valid address"));
    }

    let recipient = config.contact.mailto_recipient.trim();
    if recipient.is_empty() {
        warnings.push(ValidationWarning {
            field: "contact.mailto_recipient".to_string(),
            message: "contact.mailto_recipient is empty; mailto links will have no recipient"
                .to_string(),
            suggestion: None,
        });
    } else if !is_valid_email(recipient) {
        errors.push(format!(
            "contact.mailto_recipient = '{recipient}' is not a valid address"
        ));
    }

    (errors, warnings)
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

// ============================================================================
// Tests
// ============================================================================
