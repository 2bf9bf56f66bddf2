use sqlx::{
    FromRow, PgPool, Postgres,
    postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow},
    query::{Query, QueryAs},
};

use crate::{
    config::AppConfig,
    error::{StoreError, StoreResult},
    models::{Order, Product, Review, User},
};

pub type DbPool = PgPool;

/// Schema applied by `/firstrun` and the `migrate` binary.
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_workload_schema.sql");

/// Build the shared pool. Connections are opened on first use and capped at
/// `max_connections`; callers past the cap wait up to `acquire_timeout`.
pub fn create_pool(config: &AppConfig) -> DbPool {
    let pg = &config.postgres;
    let options = PgConnectOptions::new()
        .host(&pg.host)
        .port(pg.port)
        .username(&pg.user)
        .password(&pg.password)
        .database(&pg.database);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options)
}

/// Postgres prepared statements cannot contain multiple commands, so the
/// schema file is split and each statement is issued on its own.
pub fn schema_statements() -> impl Iterator<Item = &'static str> {
    SCHEMA_SQL
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty() && !stmt.lines().all(|l| l.trim_start().starts_with("--")))
}

/// Row types that can be written many-at-once in a single statement.
pub trait BulkInsert: Sized {
    fn bulk_query(rows: &[Self]) -> Query<'static, Postgres, PgArguments>;
}

/// Every datastore call goes through here; the pool is the only thing shared
/// between request tasks.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Exactly one row; zero rows is `StoreError::NotFound`.
    pub async fn query_one<'q, T>(&self, query: QueryAs<'q, Postgres, T, PgArguments>) -> StoreResult<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    pub async fn query_many<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> StoreResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        Ok(query.fetch_all(&self.pool).await?)
    }

    pub async fn exec<'q>(&self, query: Query<'q, Postgres, PgArguments>) -> StoreResult<u64> {
        Ok(query.execute(&self.pool).await?.rows_affected())
    }

    /// Unprepared statement text, used for DDL.
    pub async fn exec_raw(&self, statement: &str) -> StoreResult<u64> {
        Ok(sqlx::raw_sql(statement)
            .execute(&self.pool)
            .await?
            .rows_affected())
    }

    /// One round trip for the whole batch; the batch succeeds or fails as a unit.
    pub async fn bulk_insert<B: BulkInsert>(&self, rows: &[B]) -> StoreResult<u64> {
        if rows.is_empty() {
            return Ok(0);
        }
        self.exec(B::bulk_query(rows)).await
    }
}

// Column arrays are bound whole and expanded server-side with UNNEST, which
// keeps the bind count fixed no matter how many rows the batch holds.

impl BulkInsert for User {
    fn bulk_query(rows: &[Self]) -> Query<'static, Postgres, PgArguments> {
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let names: Vec<_> = rows.iter().map(|r| r.name.clone()).collect();
        let addresses: Vec<_> = rows.iter().map(|r| r.address.clone()).collect();

        sqlx::query(
            r#"
            INSERT INTO users (id, name, address)
            SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::text[])
            "#,
        )
        .bind(ids)
        .bind(names)
        .bind(addresses)
    }
}

impl BulkInsert for Product {
    fn bulk_query(rows: &[Self]) -> Query<'static, Postgres, PgArguments> {
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let names: Vec<_> = rows.iter().map(|r| r.name.clone()).collect();
        let descriptions: Vec<_> = rows.iter().map(|r| r.description.clone()).collect();
        let prices: Vec<_> = rows.iter().map(|r| r.price).collect();

        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price)
            SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::text[], $4::numeric[])
            "#,
        )
        .bind(ids)
        .bind(names)
        .bind(descriptions)
        .bind(prices)
    }
}

impl BulkInsert for Order {
    fn bulk_query(rows: &[Self]) -> Query<'static, Postgres, PgArguments> {
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let user_ids: Vec<_> = rows.iter().map(|r| r.user_id).collect();
        let product_ids: Vec<_> = rows.iter().map(|r| r.product_id).collect();
        let quantities: Vec<_> = rows.iter().map(|r| r.quantity).collect();
        let totals: Vec<_> = rows.iter().map(|r| r.total_price).collect();
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();

        sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, product_id, quantity, total_price, date)
            SELECT * FROM UNNEST(
                $1::uuid[], $2::uuid[], $3::uuid[], $4::int4[], $5::numeric[], $6::timestamptz[]
            )
            "#,
        )
        .bind(ids)
        .bind(user_ids)
        .bind(product_ids)
        .bind(quantities)
        .bind(totals)
        .bind(dates)
    }
}

impl BulkInsert for Review {
    fn bulk_query(rows: &[Self]) -> Query<'static, Postgres, PgArguments> {
        let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        let product_ids: Vec<_> = rows.iter().map(|r| r.product_id).collect();
        let user_ids: Vec<_> = rows.iter().map(|r| r.user_id).collect();
        let ratings: Vec<_> = rows.iter().map(|r| r.rating).collect();
        let contents: Vec<_> = rows.iter().map(|r| r.content.clone()).collect();

        sqlx::query(
            r#"
            INSERT INTO reviews (id, product_id, user_id, rating, content)
            SELECT * FROM UNNEST($1::uuid[], $2::uuid[], $3::uuid[], $4::int4[], $5::text[])
            "#,
        )
        .bind(ids)
        .bind(product_ids)
        .bind(user_ids)
        .bind(ratings)
        .bind(contents)
    }
}
