use pg_workload::{
    config::AppConfig,
    db::{PgStore, create_pool},
    services::setup_service::setup_database,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let store = PgStore::new(create_pool(&config));
    let report = setup_database(&store).await;

    for outcome in &report.statements {
        match &outcome.error {
            None => println!("ok      {}", outcome.statement),
            Some(err) => println!("failed  {} ({err})", outcome.statement),
        }
    }
    if !report.is_complete() {
        anyhow::bail!("schema setup incomplete");
    }
    println!("Schema applied");
    Ok(())
}
