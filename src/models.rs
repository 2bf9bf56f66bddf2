use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub address: String,
}

impl User {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl Product {
    /// Negative prices are floored at zero.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price: to_cents(price.max(Decimal::ZERO)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total_price: Decimal,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Prices the order against `product` as it is right now. Quantity is raised to 1 if lower.
    pub fn new(user: &User, product: &Product, quantity: i32, date: DateTime<Utc>) -> Self {
        let quantity = quantity.max(1);
        Self {
            id: Uuid::new_v4(),
            user_id: user.id,
            product_id: product.id,
            quantity,
            total_price: order_total(quantity, product.price),
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub content: String,
}

impl Review {
    pub fn new(product: &Product, user: &User, rating: i32, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product.id,
            user_id: user.id,
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            content: content.into(),
        }
    }
}

/// A review as shown next to a product: the reviewer's name instead of their id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductReview {
    pub username: String,
    pub rating: i32,
    pub content: String,
}

pub fn order_total(quantity: i32, price: Decimal) -> Decimal {
    to_cents(Decimal::from(quantity) * price)
}

/// Two decimals, rounding half away from zero the way `NUMERIC(10, 2)` does.
fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
