//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Server
// ============================================================================

/// Default HTTP bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Maximum accepted request body (bytes). Inputs are a few hundred bytes.
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Outbound Delivery
// ============================================================================

/// HTTP client timeout for the email service and sheet endpoint (seconds).
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Email delivery REST endpoint.
pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Email template used for calculator results.
pub const EMAIL_TEMPLATE: &str = "calculator";

// ============================================================================
// Report
// ============================================================================

/// Directory generated reports are written to.
pub const REPORT_OUTPUT_DIR: &str = "./reports";

/// Suffix appended to the clinic slug for report file names.
pub const REPORT_FILE_SUFFIX: &str = "_Profit_Analysis";

/// A4 page size (mm).
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Margin on every page edge (mm).
pub const PAGE_MARGIN_MM: f64 = 10.0;

/// Height of one text line in the rendered report (mm).
pub const LINE_HEIGHT_MM: f64 = 6.0;
