use sqlx_migrator::{Info, Migrator};

mod m0001;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
    use sqlx_migrator::{Migrate, Plan};
    use temp_dir::TempDir;

    #[tokio::test]
    async fn migrations_create_tables_and_are_idempotent() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.child("db.sqlite3");
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        let mut conn = pool.acquire().await?;

        super::migrator()?
            .run(&mut conn, &Plan::apply_all())
            .await?;
        super::migrator()?
            .run(&mut conn, &Plan::apply_all())
            .await?;
        drop(conn);

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('user', 'event', 'event_volunteer') ORDER BY name",
        )
        .fetch_all(&pool)
        .await?;

        assert_eq!(
            tables.into_iter().map(|t| t.0).collect::<Vec<_>>(),
            vec!["event", "event_volunteer", "user"]
        );

        Ok(())
    }
}
