//! Spreadsheet logging via a web-app endpoint
//!
//! Fire-and-forget: the row is POSTed as JSON and the response status is
//! not inspected. Only transport failures surface as errors.

use async_trait::async_trait;
use tracing::debug;

use super::{DeliveryError, SheetLogger};
use crate::submission::ResultsSummary;

#[derive(Clone)]
pub struct HttpSheetLogger {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSheetLogger {
    pub fn new(http: reqwest::Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl SheetLogger for HttpSheetLogger {
    async fn log(&self, row: &ResultsSummary) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(row)?;
        let resp = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        debug!(status = %resp.status(), clinic = %row.clinic_name, "Submission row sent to sheet endpoint");
        Ok(())
    }
}
