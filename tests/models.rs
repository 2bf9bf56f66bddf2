use chrono::Utc;
use pg_workload::models::{Order, Product, Review, User, order_total};
use rust_decimal::Decimal;

#[test]
fn order_total_is_quantity_times_price_at_two_decimals() {
    assert_eq!(order_total(3, Decimal::new(1999, 2)), Decimal::new(5997, 2));
    assert_eq!(order_total(10, Decimal::new(100000, 2)), Decimal::new(1000000, 2));
}

#[test]
fn order_prices_against_the_given_product() {
    let user = User::new("Grace", "addr");
    let product = Product::new("Router", "Routes packets.", Decimal::new(4550, 2));
    let order = Order::new(&user, &product, 4, Utc::now());
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.product_id, product.id);
    assert_eq!(order.total_price, Decimal::new(18200, 2));
}

#[test]
fn quantity_below_one_is_raised() {
    let user = User::new("Grace", "addr");
    let product = Product::new("Tent", "Keeps rain out.", Decimal::new(10000, 2));
    let order = Order::new(&user, &product, 0, Utc::now());
    assert_eq!(order.quantity, 1);
    assert_eq!(order.total_price, product.price);
}

#[test]
fn review_rating_is_clamped() {
    let user = User::new("Hiro", "addr");
    let product = Product::new("Mug", "Ceramic.", Decimal::ONE);
    assert_eq!(Review::new(&product, &user, 0, "x").rating, 1);
    assert_eq!(Review::new(&product, &user, 250, "x").rating, 100);
    assert_eq!(Review::new(&product, &user, 42, "x").rating, 42);
}

#[test]
fn product_price_is_non_negative_and_rounded() {
    assert_eq!(Product::new("a", "b", Decimal::new(-5, 0)).price, Decimal::ZERO);
    assert_eq!(Product::new("a", "b", Decimal::new(12345, 3)).price, Decimal::new(1235, 2));
}
