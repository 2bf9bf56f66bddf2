use crate::{
    dto::workload::ProductReport,
    error::AppResult,
    response::{ApiResponse, Meta},
    store::Store,
};

/// Sample one product and describe it: order count, distinct buyers and its
/// reviews. The four queries share no transaction, so concurrent writers may
/// move the counts between steps.
pub async fn describe_random_product(store: &dyn Store) -> AppResult<ApiResponse<ProductReport>> {
    let product = store
        .sample_product()
        .await
        .inspect_err(|err| tracing::error!(error = %err, "error selecting random product"))?
        .require()
        .inspect_err(|err| tracing::error!(error = %err, "no product to read"))?;

    let order_count = store
        .count_orders(product.id)
        .await
        .inspect_err(|err| tracing::error!(product_id = %product.id, error = %err, "error counting orders"))?;

    let unique_user_count = store
        .count_unique_buyers(product.id)
        .await
        .inspect_err(|err| {
            tracing::error!(product_id = %product.id, error = %err, "error counting unique users")
        })?;

    let reviews = store
        .product_reviews(product.id)
        .await
        .inspect_err(|err| tracing::error!(product_id = %product.id, error = %err, "error fetching reviews"))?;

    let review_total = i64::try_from(reviews.len()).unwrap_or(i64::MAX);
    let report = ProductReport {
        product_id: product.id,
        product_name: product.name,
        order_count,
        unique_user_count,
        reviews,
    };

    Ok(ApiResponse::success(
        "Random product",
        report,
        Some(Meta::empty().with_total(review_total)),
    ))
}
