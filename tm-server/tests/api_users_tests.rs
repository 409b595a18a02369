//! Integration tests for account and profile API handlers
mod common;

use crate::common::{bearer, create_test_app_state, create_test_user};

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tm_server::routes::build_router;

#[tokio::test]
async fn test_sign_in_creates_account_and_issues_usable_token() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/users/ada@x.com")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "name": "Ada", "profile": { "city": "London" } }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["user"]["email"], "ada@x.com");
    assert_eq!(json["user"]["role"], "customer");
    let token = json["token"].as_str().unwrap().to_string();

    // The returned token opens the owner's profile.
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/profile/ada@x.com")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["user"]["name"], "Ada");
    assert_eq!(json["user"]["profile"]["city"], "London");
}

#[tokio::test]
async fn test_sign_in_rejects_invalid_email() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/users/not-an-email")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_sign_in_preserves_promoted_role() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "boss@x.com", "admin").await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/users/boss@x.com")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "name": "Boss" }).to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users/boss@x.com/admin")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["admin"], true);
}

#[tokio::test]
async fn test_list_users_is_admin_only() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "admin@x.com", "admin").await;
    create_test_user(&state.pool, "customer@x.com", "customer").await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users")
        .header("authorization", bearer(&state, "customer@x.com"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users")
        .header("authorization", bearer(&state, "admin@x.com"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["users"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_promotion_takes_effect_on_pre_promotion_token() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "admin@x.com", "admin").await;
    create_test_user(&state.pool, "newbie@x.com", "customer").await;
    let app = build_router(state.clone());

    // Token minted while still a customer.
    let newbie_token = bearer(&state, "newbie@x.com");

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users")
        .header("authorization", newbie_token.clone())
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/users/newbie@x.com/admin")
        .header("authorization", bearer(&state, "admin@x.com"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["matched_count"], 1);

    // The role lives in the store, not the token, so the old token now
    // passes the admin gate.
    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users")
        .header("authorization", newbie_token)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_profile_is_owner_only() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "ada@x.com", "customer").await;
    create_test_user(&state.pool, "eve@x.com", "customer").await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/profile/ada@x.com")
        .header("authorization", bearer(&state, "eve@x.com"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_profile_passes_counts_through() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "ada@x.com", "customer").await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/profile/ada@x.com")
        .header("authorization", bearer(&state, "ada@x.com"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "profile": { "phone": "555-0101" } }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["acknowledged"], true);
    assert_eq!(json["matched_count"], 1);

    // Updating an account that was never signed in matches nothing.
    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/profile/ghost@x.com")
        .header("authorization", bearer(&state, "ghost@x.com"))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "name": "Ghost" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["matched_count"], 0);
}
