use std::time::Duration;

use axum::{body::Body, http::Request};
use pricewise_server::{api::app_router, build_state, config::Config};
use tempfile::tempdir;
use tower::ServiceExt;

fn test_config(data_dir: &std::path::Path, user_dir: &std::path::Path) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        data_dir: data_dir.to_string_lossy().into_owned(),
        user_data_dir: user_dir.to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn health_works() {
    let data = tempdir().unwrap();
    let users = tempdir().unwrap();
    let config = test_config(data.path(), users.path());
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn malformed_date_is_a_bad_request() {
    let data = tempdir().unwrap();
    let users = tempdir().unwrap();
    let config = test_config(data.path(), users.path());
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/discounts?date=03-10-2024")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
