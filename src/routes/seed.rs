use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    faker::RandomFaker,
    response::ApiResponse,
    routes::params::SeedQuery,
    services::{
        seed_service::{self, SeedReport},
        setup_service::{self, SetupReport},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/firstrun", get(first_run))
        .route("/seed", get(seed_db).post(seed_db))
}

#[utoipa::path(
    get,
    path = "/firstrun",
    responses(
        (status = 200, description = "Schema created", body = ApiResponse<SetupReport>),
        (status = 500, description = "One or more schema statements failed", body = ApiResponse<SetupReport>),
    ),
    tag = "Seeding"
)]
pub async fn first_run(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<SetupReport>>) {
    let resp = setup_service::first_run(state.store.as_ref()).await;
    let complete = resp.data.as_ref().is_some_and(SetupReport::is_complete);
    let status = if complete {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(resp))
}

#[utoipa::path(
    method(get, post),
    path = "/seed",
    params(SeedQuery),
    responses(
        (status = 201, description = "Every phase inserted", body = ApiResponse<SeedReport>),
        (status = 500, description = "At least one phase failed or was skipped", body = ApiResponse<SeedReport>),
    ),
    tag = "Seeding"
)]
pub async fn seed_db(
    State(state): State<AppState>,
    Query(query): Query<SeedQuery>,
) -> (StatusCode, Json<ApiResponse<SeedReport>>) {
    let plan = query.normalize();
    tracing::info!(?plan, "seeding database");
    let mut faker = RandomFaker::from_entropy();
    let resp = seed_service::seed(state.store.as_ref(), &mut faker, plan).await;
    let complete = resp.data.as_ref().is_some_and(SeedReport::is_complete);
    let status = if complete {
        StatusCode::CREATED
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(resp))
}
