use salon_booking_api::{
    config::{AppConfig, StorageBackend},
    db::{create_pool, orm_from_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    anyhow::ensure!(
        config.storage == StorageBackend::Postgres,
        "migrations only apply to STORAGE_BACKEND=postgres"
    );
    let pool = create_pool(&config.connection_string(), config.max_connections).await?;
    run_migrations(&orm_from_pool(&pool)).await?;
    println!("Migrations applied");
    Ok(())
}
