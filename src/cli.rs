use clap::Parser;

use crate::services::seed_service::{
    DEFAULT_ORDERS, DEFAULT_PRODUCTS, DEFAULT_REVIEWS, DEFAULT_USERS, SeedPlan,
};

/// Command line of the `seed` binary.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "seed",
    about = "Create the workload schema and fill it with generated rows"
)]
pub struct SeedArgs {
    /// Users to generate.
    #[arg(long, default_value_t = DEFAULT_USERS)]
    pub users: usize,
    /// Products to generate.
    #[arg(long, default_value_t = DEFAULT_PRODUCTS)]
    pub products: usize,
    /// Orders to generate, each against a generated user and product.
    #[arg(long, default_value_t = DEFAULT_ORDERS)]
    pub orders: usize,
    /// Reviews to generate, each against a generated user and product.
    #[arg(long, default_value_t = DEFAULT_REVIEWS)]
    pub reviews: usize,
    /// Fixed RNG seed for reproducible content; entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SeedArgs {
    pub fn plan(&self) -> SeedPlan {
        SeedPlan {
            users: self.users,
            products: self.products,
            orders: self.orders,
            reviews: self.reviews,
        }
    }
}
