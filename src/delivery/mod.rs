//! Outbound delivery of calculator results
//!
//! Each side effect of a submission sits behind a trait so the submission
//! coordinator can run real HTTP/file implementations in production and
//! in-memory doubles in tests:
//!
//! - [`Mailer`]: templated results email ([`EmailJsMailer`])
//! - [`SheetLogger`]: one row per submission ([`HttpSheetLogger`])
//! - [`ReportRenderer`]: paginated results document ([`TextReportRenderer`])
//!
//! [`mailto_link`] builds the pre-filled contact link; it has no side effect.

mod email;
mod mailto;
mod report;
mod sheets;

pub use email::EmailJsMailer;
pub use mailto::{mailto_body, mailto_link, MAILTO_SUBJECT};
pub use report::{report_file_stem, ReportDocument, ReportPage, TextReportRenderer, LINES_PER_PAGE};
pub use sheets::HttpSheetLogger;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::submission::ResultsSummary;

// ============================================================================
// Errors
// ============================================================================

/// Email / sheet delivery errors
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned status {0}")]
    ServerError(reqwest::StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Report rendering errors
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to create report directory {}: {}", .0.display(), .1)]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("Failed to write report {}: {}", .0.display(), .1)]
    Write(PathBuf, #[source] std::io::Error),
}

// ============================================================================
// Collaborator Traits
// ============================================================================

/// Sends a templated email built from flat display-string parameters.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, template: &str, params: &BTreeMap<String, String>) -> Result<(), DeliveryError>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Appends one submission row to an external spreadsheet.
#[async_trait]
pub trait SheetLogger: Send + Sync {
    async fn log(&self, row: &ResultsSummary) -> Result<(), DeliveryError>;
}

/// Renders a report document and persists it.
///
/// The returned future resolves only once the document is fully written;
/// the path it yields is the saved file.
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    async fn render(&self, document: &ReportDocument) -> Result<PathBuf, ReportError>;
}

/// Shared HTTP client for outbound delivery.
pub fn http_client(timeout_secs: u64) -> Result<reqwest::Client, DeliveryError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}
