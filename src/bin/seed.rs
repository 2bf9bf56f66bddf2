use clap::Parser;
use pg_workload::{
    cli::SeedArgs,
    config::AppConfig,
    db::{PgStore, create_pool},
    faker::RandomFaker,
    services::{seed_service::seed_database, setup_service::setup_database},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = SeedArgs::parse();
    let plan = args.plan();

    let config = AppConfig::from_env()?;
    let store = PgStore::new(create_pool(&config));

    // Ensure the schema exists.
    let setup = setup_database(&store).await;
    if !setup.is_complete() {
        anyhow::bail!("schema setup failed, not seeding");
    }

    let mut faker = match args.seed {
        Some(seed) => RandomFaker::seeded(seed),
        None => RandomFaker::from_entropy(),
    };
    let report = seed_database(&store, &mut faker, plan).await;

    for phase in &report.phases {
        println!(
            "{:?}: requested {}, inserted {} ({:?})",
            phase.phase, phase.requested, phase.inserted, phase.status
        );
    }
    if !report.is_complete() {
        anyhow::bail!("seed incomplete");
    }
    println!("Seed completed");
    Ok(())
}
