mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    response::IntoResponse,
};
use pg_workload::{
    routes::create_router,
    routes::dynamic::dynamic_page,
    routes::health::health_check,
    routes::home::{INDEX_HTML, static_page},
    state::AppState,
};
use tower::ServiceExt;

use common::MemoryStore;

#[tokio::test]
async fn health_check_returns_ok() {
    let state = AppState::with_store(Arc::new(MemoryStore::new()));
    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert!(data.pool_size.is_none());
}

#[tokio::test]
async fn dynamic_page_renders_title_and_time() {
    let response = dynamic_page().await;
    let data = response.0.data.expect("page data");
    assert_eq!(data.title, "Dynamic Page");
    assert!(data.time.ends_with("UTC"));
}

#[tokio::test]
async fn static_page_serves_the_fixed_html() {
    let page = static_page().await;
    assert_eq!(page.0, INDEX_HTML);
    assert!(page.0.contains("<title>Static Page</title>"));

    let response = static_page().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn root_path_is_routed_to_the_static_page() {
    let app = create_router().with_state(AppState::with_store(Arc::new(MemoryStore::new())));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
