use chrono::Utc;

use crate::{
    dto::workload::PurchaseReport,
    error::AppResult,
    faker::Faker,
    models::{MAX_RATING, MIN_RATING, Order, Review},
    response::{ApiResponse, Meta},
    store::Store,
};

const WORKLOAD_QUANTITY_MAX: i32 = 5;

/// Simulate a purchase followed by a review from the same user.
///
/// Both samples must come back with a row before anything is written: an
/// empty sample (pool starved, or a table with nothing in it) ends the
/// request with `SampleEmpty` and no insert is attempted. The order is
/// written before the review, as two independent statements; a failed order
/// insert means the review is never sent.
pub async fn record_random_purchase<F: Faker + ?Sized>(
    store: &dyn Store,
    faker: &mut F,
) -> AppResult<ApiResponse<PurchaseReport>> {
    let product = store
        .sample_product()
        .await
        .inspect_err(|err| tracing::error!(error = %err, "error selecting random product"))?;
    let user = store
        .sample_user()
        .await
        .inspect_err(|err| tracing::error!(error = %err, "error selecting random user"))?;

    let product = product
        .require()
        .inspect_err(|err| tracing::error!(error = %err, "write aborted before insert"))?;
    let user = user
        .require()
        .inspect_err(|err| tracing::error!(error = %err, "write aborted before insert"))?;

    let order = Order::new(
        &user,
        &product,
        faker.number(1, WORKLOAD_QUANTITY_MAX),
        Utc::now(),
    );
    store.insert_order(&order).await.inspect_err(|err| {
        tracing::error!(order_id = %order.id, error = %err, "error inserting new order")
    })?;

    let review = Review::new(
        &product,
        &user,
        faker.number(MIN_RATING, MAX_RATING),
        faker.paragraph(),
    );
    store.insert_review(&review).await.inspect_err(|err| {
        tracing::error!(review_id = %review.id, error = %err, "error inserting new review")
    })?;

    tracing::debug!(order_id = %order.id, review_id = %review.id, "purchase recorded");

    let report = PurchaseReport {
        product_name: product.name,
        user_name: user.name,
        order,
        review,
    };
    Ok(ApiResponse::success("Purchase recorded", report, Some(Meta::empty())))
}
