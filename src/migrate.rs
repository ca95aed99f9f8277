//! Database migration utilities

use ecoclean::Config;
use sqlx::{Sqlite, migrate::MigrateDatabase};

/// Create the database if needed and apply every migration
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");

    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = ecoclean::db::create_write_pool(&config.database.url).await?;
    ecoclean::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Resetting database...");

    if Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
