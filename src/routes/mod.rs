use axum::{Router, routing::get};

use crate::state::AppState;

pub mod doc;
pub mod dynamic;
pub mod health;
pub mod home;
pub mod params;
pub mod seed;
pub mod workload;

// Build the router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::static_page))
        .route("/health", get(health::health_check))
        .route("/dynamic", get(dynamic::dynamic_page))
        .merge(seed::router())
        .merge(workload::router())
}
