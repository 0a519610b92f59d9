//! Email delivery through an EmailJS-style REST endpoint

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use super::{DeliveryError, Mailer};

/// Request body accepted by the email service.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

/// Posts templated emails to the configured email service.
#[derive(Clone)]
pub struct EmailJsMailer {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    public_key: String,
}

impl EmailJsMailer {
    pub fn new(http: reqwest::Client, endpoint: &str, service_id: &str, public_key: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
            service_id: service_id.to_string(),
            public_key: public_key.to_string(),
        }
    }

    fn request_body<'a>(
        &'a self,
        template: &'a str,
        params: &'a BTreeMap<String, String>,
    ) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: template,
            user_id: &self.public_key,
            template_params: params,
        }
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, template: &str, params: &BTreeMap<String, String>) -> Result<(), DeliveryError> {
        let body = self.request_body(template, params);
        debug!(endpoint = %self.endpoint, template, "Sending results email");

        let resp = self.http.post(&self.endpoint).json(&body).send().await?;

        if resp.status().is_success() {
            info!(
                to = params.get("to_email").map_or("", String::as_str),
                template,
                "Results email sent"
            );
            Ok(())
        } else {
            Err(DeliveryError::ServerError(resp.status()))
        }
    }

    fn name(&self) -> &'static str {
        "emailjs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let mailer = EmailJsMailer::new(
            reqwest::Client::new(),
            "https://mail.example/send",
            "service_abc",
            "pk_123",
        );
        let mut params = BTreeMap::new();
        params.insert("to_email".to_string(), "owner@clinic.example".to_string());

        let v = serde_json::to_value(mailer.request_body("calculator", &params)).unwrap();
        assert_eq!(v["service_id"], "service_abc");
        assert_eq!(v["template_id"], "calculator");
        assert_eq!(v["user_id"], "pk_123");
        assert_eq!(v["template_params"]["to_email"], "owner@clinic.example");
    }
}
