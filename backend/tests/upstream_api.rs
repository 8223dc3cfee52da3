//! Glue endpoints served from fixture upstream sources.

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::Value;

mod support;

use support::test_app;

#[rstest]
#[actix_web::test]
async fn root_reports_the_server_is_online() {
    let app = test_app().await;
    let request = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["message"], "yep, here it goes again [Server's online!]");
}

#[rstest]
#[actix_web::test]
async fn weather_is_reported_for_a_region() {
    let app = test_app().await;
    let request = test::TestRequest::get().uri("/weather/Lisbon").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["region"], "Lisbon");
    assert!(body["temperature_c"].is_number());
}

#[rstest]
#[case("/apod?start_date=2024-06-01&end_date=2024-06-03", StatusCode::OK)]
#[case("/apod?date=2024-06-01&start_date=2024-06-02", StatusCode::BAD_REQUEST)]
#[case("/apod?count=abc", StatusCode::BAD_REQUEST)]
#[case("/xkcd", StatusCode::OK)]
#[case("/xkcd/353", StatusCode::OK)]
#[case("/xkcd/0", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn glue_endpoints_validate_their_inputs(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = test_app().await;
    let request = test::TestRequest::get().uri(uri).to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), expected);
    assert!(response.headers().contains_key("trace-id"));
}

#[rstest]
#[actix_web::test]
async fn bad_requests_carry_the_error_shape() {
    let app = test_app().await;
    let request = test::TestRequest::get().uri("/apod?count=101").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert!(body["message"].as_str().is_some_and(|m| m.contains("count")));
}
