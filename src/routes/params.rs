use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::services::seed_service::SeedPlan;

pub const MAX_SEED_ROWS: usize = 1_000_000;

/// Optional overrides for the seed volume; anything left out uses the default plan.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SeedQuery {
    pub users: Option<usize>,
    pub products: Option<usize>,
    pub orders: Option<usize>,
    pub reviews: Option<usize>,
}

impl SeedQuery {
    pub fn normalize(&self) -> SeedPlan {
        let defaults = SeedPlan::default();
        let pick = |value: Option<usize>, default: usize| value.unwrap_or(default).min(MAX_SEED_ROWS);
        SeedPlan {
            users: pick(self.users, defaults.users),
            products: pick(self.products, defaults.products),
            orders: pick(self.orders, defaults.orders),
            reviews: pick(self.reviews, defaults.reviews),
        }
    }
}
