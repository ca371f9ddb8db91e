//! Integration tests for the X12 HTTP shim (spec.md §6).
//!
//! Uses tower::ServiceExt to call the router directly without a running server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn isa_header(term: u8) -> String {
    let mut isa = vec![b' '; x12_types::ISA_LENGTH];
    isa[0..3].copy_from_slice(b"ISA");
    isa[3] = b'*';
    isa[82] = b'^';
    isa[104] = b':';
    isa[105] = term;
    String::from_utf8(isa).unwrap()
}

fn minimal_270() -> String {
    format!(
        "{}GS*HS*SENDER*RECEIVER*20060501*1319*1*X*005010~\
ST*270*0001*005010X279A1~\
HL*1**20*1~NM1*PR*2*PAYER*****PI*12345~\
HL*2*1*22*0~NM1*IL*1*DOE*JOHN~\
SE*6*0001~GE*1*1~IEA*1*1~",
        isa_header(b'~')
    )
}

async fn post(body: serde_json::Value, response_type: Option<&str>) -> axum::response::Response {
    let app = x12_http::build_router();
    let mut request = Request::builder().method("POST").uri("/x12").header("content-type", "application/json");
    if let Some(value) = response_type {
        request = request.header("LFH-X12-RESPONSE", value);
    }
    let request = request.body(Body::from(serde_json::to_string(&body).unwrap())).unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_post_x12_defaults_to_models() {
    let response = post(serde_json::json!({ "x12": minimal_270() }), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let models: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0]["transaction_code"], "270");
}

#[tokio::test]
async fn test_post_x12_segments_header_returns_raw_segments() {
    let response = post(serde_json::json!({ "x12": minimal_270() }), Some("segments")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let segments: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert!(segments[0].as_object().unwrap().contains_key("HL00"));
}

#[tokio::test]
async fn test_post_x12_unknown_header_value_falls_back_to_models() {
    let response = post(serde_json::json!({ "x12": minimal_270() }), Some("bogus")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let models: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(models[0]["transaction_code"], "270");
}

#[tokio::test]
async fn test_post_x12_malformed_body_is_400() {
    let app = x12_http::build_router();
    let request = Request::builder()
        .method("POST")
        .uri("/x12")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_x12_invalid_x12_is_400_with_fixed_message() {
    let response = post(serde_json::json!({ "x12": "not x12 at all" }), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["detail"], "Invalid X12 payload. To troubleshoot please run the x12 CLI");
}

#[tokio::test]
async fn test_post_x12_validation_failure_is_400() {
    let bad = minimal_270().replace("SE*6*0001~", "SE*99*0001~");
    let response = post(serde_json::json!({ "x12": bad }), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
