//! `POST /` tests.

use axum::http::StatusCode;
use message_store::message::domain::MessageId;
use rstest::rstest;
use serde_json::json;

use super::helpers::{TestApp, app, create, get, post_json, send};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_generated_id_and_message(app: TestApp) {
    let (status, body) = send(&app.router, post_json(r#"{"msg":"hello"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "hello");
    let id = body["id"].as_str().expect("id is a string");
    id.parse::<MessageId>().expect("id is a UUID");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_message_is_visible_on_stream(app: TestApp) {
    let created = create(&app.router, "hello").await;

    let (status, listed) = send(&app.router, get("/stream")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[rstest]
#[case::missing_field(r"{}", "msg may not be null")]
#[case::null_field(r#"{"msg":null}"#, "msg may not be null")]
#[case::empty_field(r#"{"msg":""}"#, "msg may not be empty")]
#[case::blank_field(r#"{"msg":"   "}"#, "msg may not be empty")]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_text_is_rejected_and_not_stored(
    app: TestApp,
    #[case] body: &str,
    #[case] expected: &str,
) {
    let (status, error) = send(&app.router, post_json(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": expected }));
    let (_, listed) = send(&app.router, get("/future")).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case::not_json("not json")]
#[case::wrong_type(r#"{"msg":5}"#)]
#[case::bare_string(r#""hello""#)]
#[tokio::test(flavor = "multi_thread")]
async fn unparseable_body_is_a_bad_request(app: TestApp, #[case] body: &str) {
    let (status, error) = send(&app.router, post_json(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].is_string());
    let (_, listed) = send(&app.router, get("/")).await;
    assert_eq!(listed, json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_content_type_is_a_bad_request(app: TestApp) {
    let request = axum::http::Request::post("/")
        .body(axum::body::Body::from(r#"{"msg":"hello"}"#))
        .expect("request");

    let (status, _) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn text_is_returned_verbatim(app: TestApp) {
    let created = create(&app.router, "  spaced out ✓ ").await;
    assert_eq!(created["message"], "  spaced out ✓ ");
}
