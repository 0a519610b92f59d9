//! Calculator Configuration - deployment settings as TOML values
//!
//! Each struct implements `Default` so an absent file, or an absent section,
//! yields a working local setup: reports on, email and sheet logging off.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a calculator deployment.
///
/// Load with `CalculatorConfig::load()` which searches:
/// 1. `$LEAK_CONFIG` env var
/// 2. `./calculator.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Email delivery service
    #[serde(default)]
    pub email: EmailConfig,

    /// Spreadsheet logging endpoint
    #[serde(default)]
    pub sheets: SheetsConfig,

    /// Report document output
    #[serde(default)]
    pub report: ReportConfig,

    /// Mailto fallback contact
    #[serde(default)]
    pub contact: ContactConfig,

    /// Outbound HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl CalculatorConfig {
    /// Load configuration using the standard search order:
    /// 1. `$LEAK_CONFIG` environment variable
    /// 2. `./calculator.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("LEAK_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded calculator config from LEAK_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from LEAK_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "LEAK_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./calculator.toml
        let local = PathBuf::from("calculator.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded calculator config from ./calculator.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./calculator.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No calculator.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Two passes: unknown keys are reported as warnings first, then the
    /// document is deserialized and validated.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate settings for internal consistency.
    ///
    /// Rules:
    /// - An enabled email service needs its service id, template id and public key
    /// - An enabled sheet logger needs an endpoint
    /// - Endpoints must be http(s) URLs, addresses must be well-formed
    /// - HTTP timeout must be > 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.email.enabled {
            Self::require("email.service_id", &self.email.service_id, &mut errors);
            Self::require("email.template_id", &self.email.template_id, &mut errors);
            Self::require("email.public_key", &self.email.public_key, &mut errors);
        }
        if self.sheets.enabled {
            Self::require("sheets.endpoint", &self.sheets.endpoint, &mut errors);
        }
        if self.report.enabled && self.report.output_dir.as_os_str().is_empty() {
            errors.push("report.output_dir must not be empty when reports are enabled".to_string());
        }

        let (range_errors, range_warnings) = super::validation::validate_settings(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn require(name: &str, value: &str, errors: &mut Vec<String>) {
        if value.trim().is_empty() {
            errors.push(format!("{name} is required when the section is enabled"));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Server Config
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address.
    ///
    /// Can be overridden by `LEAK_SERVER_ADDR` env var or `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Email Config
// ============================================================================

/// Email delivery service credentials and routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub enabled: bool,

    /// REST endpoint accepting `{service_id, template_id, user_id, template_params}`
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub service_id: String,

    #[serde(default = "default_email_template")]
    pub template_id: String,

    /// Public (browser) key of the email service account
    #[serde(default)]
    pub public_key: String,

    /// Address copied on every results email
    #[serde(default)]
    pub cc_email: String,
}

fn default_email_endpoint() -> String {
    defaults::EMAIL_ENDPOINT.to_string()
}
fn default_email_template() -> String {
    defaults::EMAIL_TEMPLATE.to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_email_endpoint(),
            service_id: String::new(),
            template_id: default_email_template(),
            public_key: String::new(),
            cc_email: String::new(),
        }
    }
}

// ============================================================================
// Sheets Config
// ============================================================================

/// Spreadsheet logging endpoint (e.g. a web-app script URL).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SheetsConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub endpoint: String,
}

// ============================================================================
// Report Config
// ============================================================================

/// Report document output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_report_dir")]
    pub output_dir: PathBuf,
}

fn default_true() -> bool {
    true
}
fn default_report_dir() -> PathBuf {
    PathBuf::from(defaults::REPORT_OUTPUT_DIR)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: default_report_dir(),
        }
    }
}

// ============================================================================
// Contact Config
// ============================================================================

/// Recipient of the pre-filled mailto link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub mailto_recipient: String,
}

// ============================================================================
// HTTP Config
// ============================================================================

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    defaults::HTTP_TIMEOUT_SECS
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
