//! Integration tests for tool catalog API handlers
mod common;

use crate::common::{bearer, create_test_app_state, create_test_tool, create_test_user};

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tm_server::routes::build_router;

#[tokio::test]
async fn test_list_tools_empty() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/tools")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["tools"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_admin_creates_tool_then_public_reads_it() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "admin@x.com", "admin").await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/tools")
        .header("authorization", bearer(&state, "admin@x.com"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "name": "Angle Grinder",
                "description": "125mm disc",
                "price": 75.5,
                "min_order_qty": 2,
                "available_qty": 30
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let tool_id = json["tool"]["id"].as_str().unwrap().to_string();
    assert_eq!(json["tool"]["name"], "Angle Grinder");

    // No token needed to read the catalog.
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/tools/{}", tool_id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["tool"]["id"], tool_id);
    assert_eq!(json["tool"]["price"], 75.5);
}

#[tokio::test]
async fn test_create_tool_rejects_non_positive_price() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "admin@x.com", "admin").await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/tools")
        .header("authorization", bearer(&state, "admin@x.com"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({
                "name": "Free Hammer",
                "description": "",
                "price": 0.0,
                "min_order_qty": 1,
                "available_qty": 1
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "price");
}

#[tokio::test]
async fn test_get_missing_tool_is_404() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/tools/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_tool_counts_are_passed_through() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "admin@x.com", "admin").await;
    let tool_id = create_test_tool(&state.pool).await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/tools/{}", tool_id))
        .header("authorization", bearer(&state, "admin@x.com"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["deleted_count"], 1);

    // Deleting the same row again is a benign no-op.
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/tools/{}", tool_id))
        .header("authorization", bearer(&state, "admin@x.com"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["deleted_count"], 0);
}
