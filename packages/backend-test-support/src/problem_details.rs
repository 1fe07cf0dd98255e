//! Assertions for `application/problem+json` error responses, written
//! against the JSON shape so they do not depend on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert the status, code and (optionally) detail of an error response,
/// and that the body's `trace_id` matches the `x-trace-id` header.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(resp.status(), expected_status);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id should be ASCII")
        .to_string();

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemDetailsLike =
        serde_json::from_slice(&body).expect("body should be problem details JSON");

    assert_eq!(problem.trace_id, trace_header, "trace_id should match header");
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.code, expected_code);
    if let Some(detail) = expected_detail {
        assert_eq!(problem.detail, detail);
    }

    problem
}
