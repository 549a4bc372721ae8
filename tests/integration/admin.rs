use crate::common;

use axum::http::StatusCode;
use chirpy::infrastructure::config::Platform;
use serde_json::json;

#[tokio::test]
async fn test_reset_on_dev() {
    let app = common::create_mock_app(Platform::Dev);
    common::register_and_login(&app, "alice@example.com", "secret123").await;

    let response = common::send(&app, "POST", "/admin/reset", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "secret123" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reset_forbidden_outside_dev() {
    let app = common::create_mock_app(Platform::Other("production".to_string()));
    common::register_and_login(&app, "alice@example.com", "secret123").await;

    let response = common::send(&app, "POST", "/admin/reset", None, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "You're not allowed to use this endpoint");

    let response = common::send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "secret123" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
