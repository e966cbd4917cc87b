//! Integration tests for `HttpLeadSubmitter`.
//!
//! A local `wiremock` server stands in for the lead-capture endpoint.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use home_in_israel::leads::{
    ContactFormSubmission, FormKind, HttpLeadSubmitter, Lead, LeadError, LeadSubmitter,
};
use home_in_israel::models::Language;

const USER_AGENT: &str = "home-in-israel-test/0.1";

fn submitter(endpoint: String) -> HttpLeadSubmitter {
    HttpLeadSubmitter::new(endpoint, Duration::from_secs(5), USER_AGENT)
        .expect("failed to build test submitter")
}

fn investor_lead() -> Lead {
    let form = ContactFormSubmission {
        first_name: "Noa".to_string(),
        last_name: "Cohen".to_string(),
        email: "noa@example.com".to_string(),
        phone: "050-000-0000".to_string(),
        country: "IL".to_string(),
        investment_type: "residential".to_string(),
        budget: "500,000".to_string(),
        ..ContactFormSubmission::default()
    };
    Lead::from_submission(FormKind::Investor, Language::He, &form).expect("valid investor form")
}

#[tokio::test]
async fn delivers_lead_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/leads"))
        .and(header("user-agent", USER_AGENT))
        .and(body_partial_json(json!({
            "language": "he",
            "contact": { "firstName": "Noa", "country": "IL" },
            "interest": { "kind": "investor", "investmentType": "residential" }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let result = submitter(format!("{}/leads", server.uri()))
        .submit(&investor_lead())
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn server_error_is_rejected_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/leads"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = submitter(format!("{}/leads", server.uri()))
        .submit(&investor_lead())
        .await
        .expect_err("503 must fail");

    assert!(
        matches!(err, LeadError::Rejected { status: 503, ref body } if body == "maintenance"),
        "expected Rejected(503), got: {err:?}"
    );
}

#[tokio::test]
async fn client_error_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/leads"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let err = submitter(format!("{}/leads", server.uri()))
        .submit(&investor_lead())
        .await
        .expect_err("422 must fail");

    assert!(matches!(err, LeadError::Rejected { status: 422, .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = submitter(format!("http://{addr}/leads"))
        .submit(&investor_lead())
        .await
        .expect_err("no server listening");

    assert!(matches!(err, LeadError::Transport(_)), "got: {err:?}");
}
