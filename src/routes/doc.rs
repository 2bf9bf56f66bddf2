use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::workload::{DynamicPage, ProductReport, PurchaseReport},
    models::{Order, Product, ProductReview, Review, User},
    response::{ApiResponse, Meta},
    routes::{dynamic, health, home, params, seed, workload},
    services::{
        seed_service::{PhaseOutcome, PhaseStatus, SeedPhase, SeedPlan, SeedReport},
        setup_service::{SetupReport, StatementOutcome},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        home::static_page,
        dynamic::dynamic_page,
        seed::first_run,
        seed::seed_db,
        workload::read_workload,
        workload::write_workload
    ),
    components(
        schemas(
            User,
            Product,
            Order,
            Review,
            ProductReview,
            ProductReport,
            PurchaseReport,
            DynamicPage,
            SeedPlan,
            SeedPhase,
            PhaseStatus,
            PhaseOutcome,
            SeedReport,
            StatementOutcome,
            SetupReport,
            params::SeedQuery,
            health::HealthData,
            Meta,
            ApiResponse<ProductReport>,
            ApiResponse<PurchaseReport>,
            ApiResponse<SeedReport>,
            ApiResponse<SetupReport>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Pages", description = "Database-free pages"),
        (name = "Seeding", description = "Schema creation and bulk seeding"),
        (name = "Workload", description = "Randomized read and write workload"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
