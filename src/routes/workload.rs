use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::workload::{ProductReport, PurchaseReport},
    error::AppResult,
    faker::RandomFaker,
    response::ApiResponse,
    services::{read_service, write_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/read", get(read_workload))
        .route("/write", get(write_workload).post(write_workload))
}

#[utoipa::path(
    get,
    path = "/read",
    responses(
        (status = 200, description = "Random product with order counts and reviews", body = ApiResponse<ProductReport>),
        (status = 500, description = "Sampling or a dependent query failed"),
    ),
    tag = "Workload"
)]
pub async fn read_workload(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductReport>>> {
    let resp = read_service::describe_random_product(state.store.as_ref()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    method(get, post),
    path = "/write",
    responses(
        (status = 200, description = "New order and review for a random user and product", body = ApiResponse<PurchaseReport>),
        (status = 500, description = "Empty sample, constraint violation or backend failure"),
    ),
    tag = "Workload"
)]
pub async fn write_workload(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PurchaseReport>>> {
    let mut faker = RandomFaker::from_entropy();
    let resp = write_service::record_random_purchase(state.store.as_ref(), &mut faker).await?;
    Ok(Json(resp))
}
