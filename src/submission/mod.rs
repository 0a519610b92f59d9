//! Submission workflow
//!
//! A submission validates the form, computes the analysis, then runs the
//! three delivery side effects concurrently:
//!
//! ```text
//! validate ──► analyze ──► summary + email params + report document
//!                               │
//!              ┌────────────────┼────────────────┐
//!              ▼                ▼                ▼
//!         render report     send email      log sheet row
//! ```
//!
//! Side-effect failures are logged and recorded per effect; they never fail
//! the submission. Only validation can reject it, and then nothing is sent.

mod summary;

pub use summary::{email_template_params, ResultsSummary};

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::analyze;
use crate::config::CalculatorConfig;
use crate::delivery::{
    http_client, DeliveryError, EmailJsMailer, HttpSheetLogger, Mailer, ReportDocument,
    ReportRenderer, SheetLogger, TextReportRenderer,
};
use crate::types::{Analysis, ClinicInputs, Scenario};
use crate::validation::{validate_inputs, ValidationError};

// ============================================================================
// Outcome Types
// ============================================================================

/// What happened to one side effect of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SideEffectStatus {
    Delivered {
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
    /// No collaborator configured
    Skipped,
    Failed { message: String },
}

impl SideEffectStatus {
    pub const fn is_delivered(&self) -> bool {
        matches!(self, SideEffectStatus::Delivered { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideEffects {
    pub report: SideEffectStatus,
    pub email: SideEffectStatus,
    pub sheet: SideEffectStatus,
}

/// Result of an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub analysis: Analysis,
    pub summary: ResultsSummary,
    pub side_effects: SideEffects,
}

// ============================================================================
// Coordinator
// ============================================================================

/// Drives validation, analysis and delivery for form submissions.
///
/// Every collaborator is optional; a missing one is reported as
/// [`SideEffectStatus::Skipped`].
#[derive(Clone)]
pub struct SubmissionCoordinator {
    mailer: Option<Arc<dyn Mailer>>,
    sheet_logger: Option<Arc<dyn SheetLogger>>,
    report_renderer: Option<Arc<dyn ReportRenderer>>,
    email_template: String,
    cc_email: String,
}

impl SubmissionCoordinator {
    /// Coordinator with no collaborators. Every side effect is skipped.
    pub fn new(email_template: &str, cc_email: &str) -> Self {
        Self {
            mailer: None,
            sheet_logger: None,
            report_renderer: None,
            email_template: email_template.to_string(),
            cc_email: cc_email.to_string(),
        }
    }

    /// Wire up the HTTP and file collaborators enabled in `config`.
    pub fn from_config(config: &CalculatorConfig) -> Result<Self, DeliveryError> {
        let mut coordinator = Self::new(&config.email.template_id, &config.email.cc_email);

        if config.email.enabled || config.sheets.enabled {
            let http = http_client(config.http.timeout_secs)?;
            if config.email.enabled {
                coordinator = coordinator.with_mailer(Arc::new(EmailJsMailer::new(
                    http.clone(),
                    &config.email.endpoint,
                    &config.email.service_id,
                    &config.email.public_key,
                )));
            }
            if config.sheets.enabled {
                coordinator = coordinator
                    .with_sheet_logger(Arc::new(HttpSheetLogger::new(http, &config.sheets.endpoint)));
            }
        }
        if config.report.enabled {
            coordinator = coordinator
                .with_report_renderer(Arc::new(TextReportRenderer::new(&config.report.output_dir)));
        }

        info!(
            email = config.email.enabled,
            sheets = config.sheets.enabled,
            report = config.report.enabled,
            "Submission coordinator configured"
        );
        Ok(coordinator)
    }

    #[must_use]
    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    #[must_use]
    pub fn with_sheet_logger(mut self, logger: Arc<dyn SheetLogger>) -> Self {
        self.sheet_logger = Some(logger);
        self
    }

    #[must_use]
    pub fn with_report_renderer(mut self, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.report_renderer = Some(renderer);
        self
    }

    /// Validate, analyze and deliver one submission.
    ///
    /// Returns the validation error untouched if the form is incomplete;
    /// in that case no side effect runs.
    pub async fn submit(
        &self,
        inputs: &ClinicInputs,
        scenario: Scenario,
    ) -> Result<Submission, ValidationError> {
        if let Err(e) = validate_inputs(inputs) {
            debug!(field = e.field(), "Submission rejected: {}", e);
            return Err(e);
        }

        let analysis = analyze(inputs, scenario);
        let now = Utc::now();
        let summary = ResultsSummary::new(inputs, &analysis, now);
        let params = email_template_params(inputs, &summary, &self.cc_email);
        let document = ReportDocument::new(inputs, &analysis, now);

        let (report, email, sheet) = tokio::join!(
            self.render_report(&document),
            self.send_email(&params),
            self.log_sheet(&summary),
        );

        info!(
            clinic = %inputs.clinic_name,
            scenario = %scenario,
            additional_revenue = %summary.additional_revenue,
            report = report.is_delivered(),
            email = email.is_delivered(),
            sheet = sheet.is_delivered(),
            "Submission processed"
        );

        Ok(Submission {
            analysis,
            summary,
            side_effects: SideEffects { report, email, sheet },
        })
    }

    async fn render_report(&self, document: &ReportDocument) -> SideEffectStatus {
        let Some(renderer) = &self.report_renderer else {
            return SideEffectStatus::Skipped;
        };
        match renderer.render(document).await {
            Ok(path) => SideEffectStatus::Delivered {
                detail: Some(path.display().to_string()),
            },
            Err(e) => {
                warn!(error = %e, "Report generation failed");
                SideEffectStatus::Failed { message: e.to_string() }
            }
        }
    }

    async fn send_email(&self, params: &std::collections::BTreeMap<String, String>) -> SideEffectStatus {
        let Some(mailer) = &self.mailer else {
            return SideEffectStatus::Skipped;
        };
        match mailer.send(&self.email_template, params).await {
            Ok(()) => SideEffectStatus::Delivered { detail: None },
            Err(e) => {
                warn!(mailer = mailer.name(), error = %e, "Results email failed");
                SideEffectStatus::Failed { message: e.to_string() }
            }
        }
    }

    async fn log_sheet(&self, summary: &ResultsSummary) -> SideEffectStatus {
        let Some(logger) = &self.sheet_logger else {
            return SideEffectStatus::Skipped;
        };
        match logger.log(summary).await {
            Ok(()) => SideEffectStatus::Delivered { detail: None },
            Err(e) => {
                warn!(error = %e, "Sheet logging failed");
                SideEffectStatus::Failed { message: e.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::ReportError;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, BTreeMap<String, String>)>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, template: &str, params: &BTreeMap<String, String>) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push((template.to_string(), params.clone()));
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _: &str, _: &BTreeMap<String, String>) -> Result<(), DeliveryError> {
            Err(DeliveryError::ServerError(reqwest::StatusCode::BAD_GATEWAY))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[derive(Default)]
    struct RecordingSheet {
        rows: Mutex<Vec<ResultsSummary>>,
    }

    #[async_trait]
    impl SheetLogger for RecordingSheet {
        async fn log(&self, row: &ResultsSummary) -> Result<(), DeliveryError> {
            self.rows.lock().unwrap().push(row.clone());
            Ok(())
        }
    }

    struct FixedRenderer;

    #[async_trait]
    impl ReportRenderer for FixedRenderer {
        async fn render(&self, document: &ReportDocument) -> Result<PathBuf, ReportError> {
            Ok(PathBuf::from(format!("{}.txt", document.file_stem())))
        }
    }

    fn valid_inputs() -> ClinicInputs {
        ClinicInputs {
            clinic_name: "Northside Physio".to_string(),
            email: "owner@northside.example".to_string(),
            ..ClinicInputs::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_form_fires_no_side_effects() {
        let mailer = Arc::new(RecordingMailer::default());
        let sheet = Arc::new(RecordingSheet::default());
        let coordinator = SubmissionCoordinator::new("calculator", "team@growth.example")
            .with_mailer(mailer.clone())
            .with_sheet_logger(sheet.clone());

        let inputs = ClinicInputs {
            email: "not-an-address".to_string(),
            ..valid_inputs()
        };
        let err = coordinator.submit(&inputs, Scenario::Expected).await.unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert!(mailer.sent.lock().unwrap().is_empty());
        assert!(sheet.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_all_side_effects_delivered() {
        let mailer = Arc::new(RecordingMailer::default());
        let sheet = Arc::new(RecordingSheet::default());
        let coordinator = SubmissionCoordinator::new("calculator", "team@growth.example")
            .with_mailer(mailer.clone())
            .with_sheet_logger(sheet.clone())
            .with_report_renderer(Arc::new(FixedRenderer));

        let submission = coordinator.submit(&valid_inputs(), Scenario::Expected).await.unwrap();

        assert_eq!(
            submission.side_effects.report,
            SideEffectStatus::Delivered {
                detail: Some("Northside_Physio_Profit_Analysis.txt".to_string())
            }
        );
        assert!(submission.side_effects.email.is_delivered());
        assert!(submission.side_effects.sheet.is_delivered());

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "calculator");
        assert_eq!(sent[0].1["cc_email"], "team@growth.example");
        assert_eq!(sent[0].1["additional_revenue"], "$232,898");

        let rows = sheet.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], submission.summary);
    }

    #[tokio::test]
    async fn test_email_failure_is_recorded_not_fatal() {
        let sheet = Arc::new(RecordingSheet::default());
        let coordinator = SubmissionCoordinator::new("calculator", "")
            .with_mailer(Arc::new(FailingMailer))
            .with_sheet_logger(sheet.clone());

        let submission = coordinator.submit(&valid_inputs(), Scenario::Expected).await.unwrap();
        assert_eq!(
            submission.side_effects.email,
            SideEffectStatus::Failed {
                message: "Server returned status 502 Bad Gateway".to_string()
            }
        );
        assert!(submission.side_effects.sheet.is_delivered());
        assert_eq!(submission.side_effects.report, SideEffectStatus::Skipped);
        assert_eq!(sheet.rows.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_status_serialization() {
        let v = serde_json::to_value(SideEffectStatus::Failed {
            message: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(v, serde_json::json!({"status": "failed", "message": "boom"}));
        let v = serde_json::to_value(SideEffectStatus::Delivered { detail: None }).unwrap();
        assert_eq!(v, serde_json::json!({"status": "delivered"}));
        let v = serde_json::to_value(SideEffectStatus::Skipped).unwrap();
        assert_eq!(v, serde_json::json!({"status": "skipped"}));
    }

    #[test]
    fn test_from_default_config_enables_report_only() {
        let coordinator = SubmissionCoordinator::from_config(&CalculatorConfig::default()).unwrap();
        assert!(coordinator.mailer.is_none());
        assert!(coordinator.sheet_logger.is_none());
        assert!(coordinator.report_renderer.is_some());
    }
}
