use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Order, ProductReview, Review};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductReport {
    pub product_id: Uuid,
    pub product_name: String,
    pub order_count: i64,
    pub unique_user_count: i64,
    pub reviews: Vec<ProductReview>,
}

/// Rendered from the values that were written, not read back from the store.
#[derive(Debug, Serialize, ToSchema)]
pub struct PurchaseReport {
    pub product_name: String,
    pub user_name: String,
    pub order: Order,
    pub review: Review,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DynamicPage {
    pub title: String,
    pub time: String,
}
