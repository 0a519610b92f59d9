//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! every endpoint using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use tower::ServiceExt;

use clinic_profit_leak::api::{create_app, ApiState};
use clinic_profit_leak::config::CalculatorConfig;
use clinic_profit_leak::delivery::{ReportError, ReportDocument, ReportRenderer};
use clinic_profit_leak::SubmissionCoordinator;

struct InMemoryRenderer;

#[async_trait::async_trait]
impl ReportRenderer for InMemoryRenderer {
    async fn render(&self, document: &ReportDocument) -> Result<std::path::PathBuf, ReportError> {
        Ok(std::path::PathBuf::from(format!("{}.txt", document.file_stem())))
    }
}

fn create_test_state() -> ApiState {
    let mut config = CalculatorConfig::default();
    config.contact.mailto_recipient = "growth@clinic.example".to_string();
    let coordinator = SubmissionCoordinator::new("calculator", "team@growth.example")
        .with_report_renderer(Arc::new(InMemoryRenderer));
    ApiState::new(coordinator, config)
}

async fn get(uri: &str) -> Response {
    create_app(create_test_state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(uri: &str, body: &str) -> Response {
    create_app(create_test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(resp: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

const VALID_SUBMISSION: &str = r#"{
    "inputs": {
        "clinic_name": "Northside Physio",
        "email": "owner@northside.example",
        "clinic_type": "physio",
        "providers": 3,
        "visits_per_week": 90,
        "revenue_per_visit": 95,
        "leads_per_month": 120,
        "current_show_rate": 75,
        "current_lead_to_book": 35,
        "current_package_attach": 15,
        "current_rebook_rate": 25
    },
    "scenario": "expected"
}"#;

/// All GET endpoints should return 200.
#[tokio::test]
async fn test_get_endpoints_return_200() {
    for endpoint in ["/health", "/api/v1/scenarios", "/api/v1/inputs/default"] {
        let resp = get(endpoint).await;
        assert!(
            resp.status().is_success(),
            "GET {endpoint} returned status {}",
            resp.status()
        );
    }
}

#[tokio::test]
async fn test_scenarios_lists_three_profiles_in_order() {
    let json = json_body(get("/api/v1/scenarios").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["scenario"], "conservative");
    assert_eq!(data[1]["label"], "Expected");
    assert_eq!(data[1]["show_rate"], 10.0);
    assert_eq!(data[2]["color"], "#0ea5e9");
}

#[tokio::test]
async fn test_default_inputs_match_form_defaults() {
    let json = json_body(get("/api/v1/inputs/default").await).await;
    let data = &json["data"];
    assert_eq!(data["clinic_type"], "physio");
    assert_eq!(data["providers"], 3.0);
    assert_eq!(data["leads_per_month"], 120.0);
    assert_eq!(data["current_rebook_rate"], 25.0);
}

#[tokio::test]
async fn test_project_returns_worked_example() {
    let resp = post_json("/api/v1/project", VALID_SUBMISSION).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let projection = &json["data"]["projection"];
    let revenue = projection["deltas"]["revenue"].as_f64().unwrap();
    assert!((revenue - 232_897.896).abs() < 1e-6, "revenue {revenue}");
    let waste = projection["waste"]["total"].as_f64().unwrap();
    assert!((waste - 167_238.0).abs() < 1e-6, "waste {waste}");
    assert_eq!(json["data"]["problems"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["waste_breakdown"]["marketing_campaigns"], 6);
}

#[tokio::test]
async fn test_project_accepts_empty_body_object() {
    let resp = post_json("/api/v1/project", "{}").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["data"]["scenario"]["label"], "Expected");
}

#[tokio::test]
async fn test_malformed_json_is_enveloped_bad_request() {
    let resp = post_json("/api/v1/project", "{not json").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_scenario_is_bad_request() {
    let resp = post_json("/api/v1/project", r#"{"scenario": "heroic"}"#).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_valid_form() {
    let resp = post_json("/api/v1/submit", VALID_SUBMISSION).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let data = &json["data"];
    assert_eq!(data["summary"]["clinicName"], "Northside Physio");
    assert_eq!(data["summary"]["additionalRevenue"], "$232,898");
    assert_eq!(data["side_effects"]["report"]["status"], "delivered");
    assert_eq!(
        data["side_effects"]["report"]["detail"],
        "Northside_Physio_Profit_Analysis.txt"
    );
    assert_eq!(data["side_effects"]["email"]["status"], "skipped");
    assert_eq!(data["side_effects"]["sheet"]["status"], "skipped");
}

#[tokio::test]
async fn test_submit_without_clinic_name_fails_validation() {
    let body = VALID_SUBMISSION.replace("Northside Physio", "   ");
    let resp = post_json("/api/v1/submit", &body).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = json_body(resp).await;
    assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(json["error"]["field"], "clinic_name");
    assert_eq!(json["error"]["message"], "Please enter your clinic name");
}

#[tokio::test]
async fn test_submit_zero_leads_fails_validation() {
    let body = VALID_SUBMISSION.replace("\"leads_per_month\": 120", "\"leads_per_month\": 0");
    let json = json_body(post_json("/api/v1/submit", &body).await).await;
    assert_eq!(json["error"]["message"], "Please enter new leads per month");
}

#[tokio::test]
async fn test_submit_negative_providers_fails_validation() {
    let body = VALID_SUBMISSION.replace("\"providers\": 3", "\"providers\": -1");
    let resp = post_json("/api/v1/submit", &body).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = json_body(resp).await;
    assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(json["error"]["field"], "providers");
    assert_eq!(json["error"]["message"], "Please enter the number of providers");
}

#[tokio::test]
async fn test_submit_fractional_providers_below_one_fails_validation() {
    let body = VALID_SUBMISSION.replace("\"providers\": 3", "\"providers\": 0.5");
    let json = json_body(post_json("/api/v1/submit", &body).await).await;
    assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(json["error"]["field"], "providers");
}

#[tokio::test]
async fn test_mailto_link() {
    let resp = post_json("/api/v1/mailto", VALID_SUBMISSION).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    let link = json["data"]["link"].as_str().unwrap();
    assert!(link.starts_with("mailto:growth@clinic.example?subject=Profit%20Leak"));
    assert!(link.contains("&body=Hello%2C"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let resp = get("/api/v1/nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
