#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use rand::Rng;
use uuid::Uuid;

use pg_workload::{
    error::{StoreError, StoreResult},
    models::{MAX_RATING, MIN_RATING, Order, Product, ProductReview, Review, User},
    sampler::{Sample, Sampled},
    store::Store,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    products: Vec<Product>,
    orders: Vec<Order>,
    reviews: Vec<Review>,
}

/// In-process `Store` with the same key, foreign-key and check constraints as
/// the Postgres schema. Knobs let tests simulate a starved pool.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    starve_samples: AtomicBool,
    failing_tables: Mutex<HashSet<&'static str>>,
    pub single_inserts: AtomicUsize,
    pub dependent_reads: AtomicUsize,
    pub statements: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sample comes back empty, as when the pool hands back no row.
    pub fn starve_samples(&self) {
        self.starve_samples.store(true, Ordering::SeqCst);
    }

    /// Writes to `table` fail with a backend error.
    pub fn fail_writes_to(&self, table: &'static str) {
        self.failing_tables.lock().unwrap().insert(table);
    }

    pub fn users(&self) -> Vec<User> {
        self.tables.lock().unwrap().users.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.tables.lock().unwrap().products.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.tables.lock().unwrap().orders.clone()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.tables.lock().unwrap().reviews.clone()
    }

    pub fn single_insert_count(&self) -> usize {
        self.single_inserts.load(Ordering::SeqCst)
    }

    pub fn dependent_read_count(&self) -> usize {
        self.dependent_reads.load(Ordering::SeqCst)
    }

    fn check_writable(&self, table: &'static str) -> StoreResult<()> {
        if self.failing_tables.lock().unwrap().contains(table) {
            return Err(StoreError::Backend(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn draw<T: Clone + Sampled>(&self, rows: &[T]) -> Sample<T> {
        if self.starve_samples.load(Ordering::SeqCst) || rows.is_empty() {
            return T::empty();
        }
        let idx = rand::thread_rng().gen_range(0..rows.len());
        Sample::Drawn(rows[idx].clone())
    }
}

fn violation(constraint: &str, message: &str) -> StoreError {
    StoreError::Constraint {
        constraint: Some(constraint.to_string()),
        message: message.to_string(),
    }
}

fn check_unique<'a>(existing: impl Iterator<Item = Uuid>, new: impl Iterator<Item = &'a Uuid>, table: &str) -> StoreResult<()> {
    let mut seen: HashSet<Uuid> = existing.collect();
    for id in new {
        if !seen.insert(*id) {
            return Err(violation(
                &format!("{table}_pkey"),
                "duplicate key value violates unique constraint",
            ));
        }
    }
    Ok(())
}

struct Parents {
    users: HashSet<Uuid>,
    products: HashSet<Uuid>,
}

impl Parents {
    fn of(tables: &Tables) -> Self {
        Self {
            users: tables.users.iter().map(|u| u.id).collect(),
            products: tables.products.iter().map(|p| p.id).collect(),
        }
    }

    fn check(&self, user_id: Uuid, product_id: Uuid, table: &str) -> StoreResult<()> {
        if !self.users.contains(&user_id) {
            return Err(violation(
                &format!("{table}_user_id_fkey"),
                "insert violates foreign key constraint on user_id",
            ));
        }
        if !self.products.contains(&product_id) {
            return Err(violation(
                &format!("{table}_product_id_fkey"),
                "insert violates foreign key constraint on product_id",
            ));
        }
        Ok(())
    }
}

fn validate_orders(tables: &Tables, rows: &[Order]) -> StoreResult<()> {
    check_unique(tables.orders.iter().map(|o| o.id), rows.iter().map(|o| &o.id), "orders")?;
    let parents = Parents::of(tables);
    rows.iter()
        .try_for_each(|o| parents.check(o.user_id, o.product_id, "orders"))
}

fn validate_reviews(tables: &Tables, rows: &[Review]) -> StoreResult<()> {
    check_unique(tables.reviews.iter().map(|r| r.id), rows.iter().map(|r| &r.id), "reviews")?;
    let parents = Parents::of(tables);
    rows.iter().try_for_each(|r| {
        if !(MIN_RATING..=MAX_RATING).contains(&r.rating) {
            return Err(violation("reviews_rating_check", "new row violates check constraint"));
        }
        parents.check(r.user_id, r.product_id, "reviews")
    })
}

#[async_trait]
impl Store for MemoryStore {
    async fn exec_statement(&self, statement: &str) -> StoreResult<u64> {
        self.statements.lock().unwrap().push(statement.to_string());
        Ok(0)
    }

    async fn insert_users(&self, rows: &[User]) -> StoreResult<u64> {
        self.check_writable("users")?;
        let mut tables = self.tables.lock().unwrap();
        check_unique(tables.users.iter().map(|u| u.id), rows.iter().map(|u| &u.id), "users")?;
        tables.users.extend_from_slice(rows);
        Ok(rows.len() as u64)
    }

    async fn insert_products(&self, rows: &[Product]) -> StoreResult<u64> {
        self.check_writable("products")?;
        let mut tables = self.tables.lock().unwrap();
        check_unique(tables.products.iter().map(|p| p.id), rows.iter().map(|p| &p.id), "products")?;
        tables.products.extend_from_slice(rows);
        Ok(rows.len() as u64)
    }

    async fn insert_orders(&self, rows: &[Order]) -> StoreResult<u64> {
        self.check_writable("orders")?;
        let mut tables = self.tables.lock().unwrap();
        validate_orders(&tables, rows)?;
        tables.orders.extend_from_slice(rows);
        Ok(rows.len() as u64)
    }

    async fn insert_reviews(&self, rows: &[Review]) -> StoreResult<u64> {
        self.check_writable("reviews")?;
        let mut tables = self.tables.lock().unwrap();
        validate_reviews(&tables, rows)?;
        tables.reviews.extend_from_slice(rows);
        Ok(rows.len() as u64)
    }

    async fn insert_order(&self, order: &Order) -> StoreResult<()> {
        self.single_inserts.fetch_add(1, Ordering::SeqCst);
        self.insert_orders(std::slice::from_ref(order)).await.map(|_| ())
    }

    async fn insert_review(&self, review: &Review) -> StoreResult<()> {
        self.single_inserts.fetch_add(1, Ordering::SeqCst);
        self.insert_reviews(std::slice::from_ref(review)).await.map(|_| ())
    }

    async fn sample_user(&self) -> StoreResult<Sample<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(self.draw(&tables.users))
    }

    async fn sample_product(&self) -> StoreResult<Sample<Product>> {
        let tables = self.tables.lock().unwrap();
        Ok(self.draw(&tables.products))
    }

    async fn count_orders(&self, product_id: Uuid) -> StoreResult<i64> {
        self.dependent_reads.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .orders
            .iter()
            .filter(|o| o.product_id == product_id)
            .count() as i64)
    }

    async fn count_unique_buyers(&self, product_id: Uuid) -> StoreResult<i64> {
        self.dependent_reads.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        let buyers: HashSet<Uuid> = tables
            .orders
            .iter()
            .filter(|o| o.product_id == product_id)
            .map(|o| o.user_id)
            .collect();
        Ok(buyers.len() as i64)
    }

    async fn product_reviews(&self, product_id: Uuid) -> StoreResult<Vec<ProductReview>> {
        self.dependent_reads.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        let names: HashMap<Uuid, &str> = tables
            .users
            .iter()
            .map(|u| (u.id, u.name.as_str()))
            .collect();
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .filter_map(|r| {
                names.get(&r.user_id).map(|name| ProductReview {
                    username: name.to_string(),
                    rating: r.rating,
                    content: r.content.clone(),
                })
            })
            .collect())
    }
}
