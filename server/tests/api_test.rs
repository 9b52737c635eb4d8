//! Router integration tests.
//!
//! Exercise the HTTP surface that does not require a live database: health,
//! authentication rejection paths, and self-toggle validation. The state is
//! built over a lazy pool, which never connects unless a query runs.
//!
//! Run with: `cargo test --test api_test`

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use ripple_server::api::{create_router, AppState};
use ripple_server::auth::jwt::generate_access_token;
use ripple_server::config::Config;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

fn test_state() -> AppState {
    let config = Config::default_for_test();
    let db = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    AppState::new(db, config)
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_is_public() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn missing_bearer_token_is_unauthorized() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/users/{}", Uuid::now_v7()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "MISSING_AUTH");
}

#[tokio::test]
async fn malformed_auth_header_is_unauthorized() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/users/{}", Uuid::now_v7()))
                .header(header::AUTHORIZATION, "Token abcdef")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_AUTH_HEADER");
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/users/{}/friends", Uuid::now_v7()))
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn self_toggle_is_rejected() {
    let state = test_state();
    let user_id = Uuid::now_v7();
    let token = generate_access_token(user_id, &state.config.jwt_secret, 900).unwrap();
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/users/{user_id}/{user_id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"], "SELF_FRIENDSHIP");
}
