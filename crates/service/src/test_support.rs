#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> configs::DatabaseConfig {
    let mut cfg = configs::AppConfig::default().database;
    cfg.max_connections = 10;
    cfg.min_connections = 1;
    cfg.connect_timeout_secs = 10;
    cfg.acquire_timeout_secs = 10;
    cfg.idle_timeout_secs = 600;
    cfg.max_lifetime_secs = 3600;
    cfg
}

/// Returns `Ok(None)` when the suite should skip database-backed tests:
/// either `SKIP_DB_TESTS` is set or no `DATABASE_URL` is provided.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing or SKIP_DB_TESTS set; skipping db tests");
        return Ok(None);
    }

    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&test_config()).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&test_config()).await?;
    Ok(Some(db))
}
