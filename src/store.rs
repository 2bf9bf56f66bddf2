use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::PgStore,
    error::StoreResult,
    models::{Order, Product, ProductReview, Review, User},
    sampler::{Sample, sample_random},
};

/// Datastore operations the seeder and the workload handlers are written against.
#[async_trait]
pub trait Store: Send + Sync {
    async fn exec_statement(&self, statement: &str) -> StoreResult<u64>;

    async fn insert_users(&self, rows: &[User]) -> StoreResult<u64>;
    async fn insert_products(&self, rows: &[Product]) -> StoreResult<u64>;
    async fn insert_orders(&self, rows: &[Order]) -> StoreResult<u64>;
    async fn insert_reviews(&self, rows: &[Review]) -> StoreResult<u64>;

    async fn insert_order(&self, order: &Order) -> StoreResult<()>;
    async fn insert_review(&self, review: &Review) -> StoreResult<()>;

    async fn sample_user(&self) -> StoreResult<Sample<User>>;
    async fn sample_product(&self) -> StoreResult<Sample<Product>>;

    async fn count_orders(&self, product_id: Uuid) -> StoreResult<i64>;
    async fn count_unique_buyers(&self, product_id: Uuid) -> StoreResult<i64>;
    async fn product_reviews(&self, product_id: Uuid) -> StoreResult<Vec<ProductReview>>;
}

#[async_trait]
impl Store for PgStore {
    async fn exec_statement(&self, statement: &str) -> StoreResult<u64> {
        self.exec_raw(statement).await
    }

    async fn insert_users(&self, rows: &[User]) -> StoreResult<u64> {
        self.bulk_insert(rows).await
    }

    async fn insert_products(&self, rows: &[Product]) -> StoreResult<u64> {
        self.bulk_insert(rows).await
    }

    async fn insert_orders(&self, rows: &[Order]) -> StoreResult<u64> {
        self.bulk_insert(rows).await
    }

    async fn insert_reviews(&self, rows: &[Review]) -> StoreResult<u64> {
        self.bulk_insert(rows).await
    }

    async fn insert_order(&self, order: &Order) -> StoreResult<()> {
        self.exec(
            sqlx::query(
                r#"
                INSERT INTO orders (id, user_id, product_id, quantity, total_price, date)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(order.id)
            .bind(order.user_id)
            .bind(order.product_id)
            .bind(order.quantity)
            .bind(order.total_price)
            .bind(order.date),
        )
        .await?;
        Ok(())
    }

    async fn insert_review(&self, review: &Review) -> StoreResult<()> {
        self.exec(
            sqlx::query(
                r#"
                INSERT INTO reviews (id, product_id, user_id, rating, content)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(review.id)
            .bind(review.product_id)
            .bind(review.user_id)
            .bind(review.rating)
            .bind(review.content.as_str()),
        )
        .await?;
        Ok(())
    }

    async fn sample_user(&self) -> StoreResult<Sample<User>> {
        sample_random::<User>(self).await
    }

    async fn sample_product(&self) -> StoreResult<Sample<Product>> {
        sample_random::<Product>(self).await
    }

    async fn count_orders(&self, product_id: Uuid) -> StoreResult<i64> {
        let count: (i64,) = self
            .query_one(
                sqlx::query_as("SELECT COUNT(*) FROM orders WHERE product_id = $1").bind(product_id),
            )
            .await?;
        Ok(count.0)
    }

    async fn count_unique_buyers(&self, product_id: Uuid) -> StoreResult<i64> {
        let count: (i64,) = self
            .query_one(
                sqlx::query_as("SELECT COUNT(DISTINCT user_id) FROM orders WHERE product_id = $1")
                    .bind(product_id),
            )
            .await?;
        Ok(count.0)
    }

    async fn product_reviews(&self, product_id: Uuid) -> StoreResult<Vec<ProductReview>> {
        self.query_many(
            sqlx::query_as::<_, ProductReview>(
                r#"
                SELECT u.name AS username, r.rating, r.content
                FROM reviews r
                JOIN users u ON r.user_id = u.id
                WHERE r.product_id = $1
                "#,
            )
            .bind(product_id),
        )
        .await
    }
}
