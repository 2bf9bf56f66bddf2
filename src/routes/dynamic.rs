use axum::Json;
use chrono::Utc;

use crate::{
    dto::workload::DynamicPage,
    response::{ApiResponse, Meta},
};

/// Page rendered without touching the database; a baseline for the workload endpoints.
#[utoipa::path(
    get,
    path = "/dynamic",
    responses(
        (status = 200, description = "Current server time", body = ApiResponse<DynamicPage>),
    ),
    tag = "Pages"
)]
pub async fn dynamic_page() -> Json<ApiResponse<DynamicPage>> {
    let data = DynamicPage {
        title: "Dynamic Page".to_string(),
        time: Utc::now().format("%d %b %y %H:%M %Z").to_string(),
    };
    Json(ApiResponse::success("Dynamic page", data, Some(Meta::empty())))
}
