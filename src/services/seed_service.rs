use std::time::Instant;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::StoreResult,
    faker::Faker,
    models::{MAX_RATING, MIN_RATING, Order, Product, Review, User},
    response::{ApiResponse, Meta},
    store::Store,
};

pub const DEFAULT_USERS: usize = 2_000;
pub const DEFAULT_PRODUCTS: usize = 100;
pub const DEFAULT_ORDERS: usize = 30_000;
pub const DEFAULT_REVIEWS: usize = 10_000;

const PRICE_MIN: u32 = 1;
const PRICE_MAX: u32 = 1_000;
const SEED_QUANTITY_MAX: i32 = 10;
const ORDER_HISTORY_DAYS: i64 = 365;

/// How many rows of each entity one seed run generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedPlan {
    pub users: usize,
    pub products: usize,
    pub orders: usize,
    pub reviews: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            products: DEFAULT_PRODUCTS,
            orders: DEFAULT_ORDERS,
            reviews: DEFAULT_REVIEWS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeedPhase {
    Users,
    Products,
    Orders,
    Reviews,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhaseStatus {
    Inserted,
    Failed { error: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PhaseOutcome {
    pub phase: SeedPhase,
    pub requested: usize,
    pub inserted: u64,
    #[serde(flatten)]
    pub status: PhaseStatus,
}

/// What each phase of a seed run did. A failed phase does not stop the phases after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeedReport {
    pub plan: SeedPlan,
    pub phases: Vec<PhaseOutcome>,
}

impl SeedReport {
    pub fn is_complete(&self) -> bool {
        self.phases
            .iter()
            .all(|p| p.status == PhaseStatus::Inserted)
    }

    pub fn phase(&self, phase: SeedPhase) -> Option<&PhaseOutcome> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    fn record(&mut self, phase: SeedPhase, requested: usize, result: StoreResult<u64>) -> bool {
        let (inserted, status) = match result {
            Ok(count) => {
                tracing::info!(?phase, inserted = count, "seed phase inserted");
                (count, PhaseStatus::Inserted)
            }
            Err(err) => {
                tracing::error!(?phase, requested, error = %err, "seed phase failed");
                (0, PhaseStatus::Failed { error: err.to_string() })
            }
        };
        let ok = status == PhaseStatus::Inserted;
        self.phases.push(PhaseOutcome {
            phase,
            requested,
            inserted,
            status,
        });
        ok
    }

    fn skip(&mut self, phase: SeedPhase, requested: usize, reason: &str) {
        tracing::warn!(?phase, requested, reason, "seed phase skipped");
        self.phases.push(PhaseOutcome {
            phase,
            requested,
            inserted: 0,
            status: PhaseStatus::Skipped {
                reason: reason.to_string(),
            },
        });
    }
}

pub fn generate_users<F: Faker + ?Sized>(faker: &mut F, count: usize) -> Vec<User> {
    (0..count)
        .map(|_| User::new(faker.name(), faker.address()))
        .collect()
}

pub fn generate_products<F: Faker + ?Sized>(faker: &mut F, count: usize) -> Vec<Product> {
    (0..count)
        .map(|_| {
            Product::new(
                faker.product_name(),
                faker.product_description(),
                faker.price(PRICE_MIN, PRICE_MAX),
            )
        })
        .collect()
}

/// Orders reference users and products drawn uniformly from the given sets,
/// dated over the trailing year. Empty parent sets produce no orders.
pub fn generate_orders<F: Faker + ?Sized>(
    faker: &mut F,
    users: &[User],
    products: &[Product],
    count: usize,
) -> Vec<Order> {
    if users.is_empty() || products.is_empty() {
        return Vec::new();
    }
    let end = Utc::now();
    let start = end - Duration::days(ORDER_HISTORY_DAYS);
    (0..count)
        .map(|_| {
            let user = &users[faker.index(users.len())];
            let product = &products[faker.index(products.len())];
            let quantity = faker.number(1, SEED_QUANTITY_MAX);
            Order::new(user, product, quantity, faker.timestamp_between(start, end))
        })
        .collect()
}

pub fn generate_reviews<F: Faker + ?Sized>(
    faker: &mut F,
    users: &[User],
    products: &[Product],
    count: usize,
) -> Vec<Review> {
    if users.is_empty() || products.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let user = &users[faker.index(users.len())];
            let product = &products[faker.index(products.len())];
            Review::new(
                product,
                user,
                faker.number(MIN_RATING, MAX_RATING),
                faker.paragraph(),
            )
        })
        .collect()
}

/// Populate all four tables in foreign-key order.
///
/// Orders and reviews are wired to the users and products generated in this
/// same run, so no read-back from the store is needed. Each phase is one bulk
/// insert; a failing phase is recorded and the run moves on, except that
/// orders and reviews are skipped when their parents could not be written.
///
/// Expects no concurrent workload traffic against the same tables.
pub async fn seed_database<F: Faker + ?Sized>(
    store: &dyn Store,
    faker: &mut F,
    plan: SeedPlan,
) -> SeedReport {
    let mut report = SeedReport {
        plan,
        phases: Vec::with_capacity(4),
    };

    let users = generate_users(faker, plan.users);
    let users_ok = report.record(SeedPhase::Users, plan.users, store.insert_users(&users).await);

    let products = generate_products(faker, plan.products);
    let products_ok = report.record(
        SeedPhase::Products,
        plan.products,
        store.insert_products(&products).await,
    );

    let parents_missing = if !users_ok || !products_ok {
        Some("parent users or products were not inserted")
    } else if users.is_empty() || products.is_empty() {
        Some("no users or products to reference")
    } else {
        None
    };

    match parents_missing {
        Some(reason) if plan.orders > 0 => report.skip(SeedPhase::Orders, plan.orders, reason),
        _ => {
            let orders = generate_orders(faker, &users, &products, plan.orders);
            report.record(SeedPhase::Orders, plan.orders, store.insert_orders(&orders).await);
        }
    }

    match parents_missing {
        Some(reason) if plan.reviews > 0 => report.skip(SeedPhase::Reviews, plan.reviews, reason),
        _ => {
            let reviews = generate_reviews(faker, &users, &products, plan.reviews);
            report.record(
                SeedPhase::Reviews,
                plan.reviews,
                store.insert_reviews(&reviews).await,
            );
        }
    }

    report
}

pub async fn seed<F: Faker + ?Sized>(
    store: &dyn Store,
    faker: &mut F,
    plan: SeedPlan,
) -> ApiResponse<SeedReport> {
    let started = Instant::now();
    let report = seed_database(store, faker, plan).await;
    let message = if report.is_complete() {
        "Database seeded successfully"
    } else {
        "Database seeded partially"
    };
    tracing::info!(
        complete = report.is_complete(),
        ms = %started.elapsed().as_millis(),
        "seed finished"
    );
    ApiResponse::success(message, report, Some(Meta::timed(started.elapsed())))
}
