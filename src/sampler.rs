//! Uniform random row selection, done by the backend (`ORDER BY RANDOM()`)
//! rather than by pulling a table into memory.

use sqlx::{FromRow, postgres::PgRow};

use crate::{
    db::PgStore,
    error::{AppError, AppResult, StoreError, StoreResult},
    models::{Product, User},
};

/// Result of drawing one row from a table.
///
/// An empty table, or a draw that came back with no row, is `Empty`. The row
/// is only reachable by matching or through [`Sample::require`], so an absent
/// sample can never flow into a dependent write as a zero-valued entity.
#[must_use = "a sample may be empty and must be checked before use"]
#[derive(Debug, Clone, PartialEq)]
pub enum Sample<T> {
    Drawn(T),
    Empty { table: &'static str },
}

impl<T> Sample<T> {
    pub fn require(self) -> AppResult<T> {
        match self {
            Sample::Drawn(row) => Ok(row),
            Sample::Empty { table } => Err(AppError::SampleEmpty { table }),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Sample::Empty { .. })
    }
}

pub trait Sampled: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    const RANDOM_ROW_SQL: &'static str;

    fn empty() -> Sample<Self> {
        Sample::Empty { table: Self::TABLE }
    }
}

impl Sampled for User {
    const TABLE: &'static str = "users";
    const RANDOM_ROW_SQL: &'static str = "SELECT * FROM users ORDER BY RANDOM() LIMIT 1";
}

impl Sampled for Product {
    const TABLE: &'static str = "products";
    const RANDOM_ROW_SQL: &'static str = "SELECT * FROM products ORDER BY RANDOM() LIMIT 1";
}

pub async fn sample_random<T: Sampled>(db: &PgStore) -> StoreResult<Sample<T>> {
    match db.query_one(sqlx::query_as::<_, T>(T::RANDOM_ROW_SQL)).await {
        Ok(row) => Ok(Sample::Drawn(row)),
        Err(StoreError::NotFound) => Ok(T::empty()),
        Err(err) => Err(err),
    }
}
