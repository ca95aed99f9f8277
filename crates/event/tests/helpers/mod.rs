use std::{path::PathBuf, str::FromStr};

use ecoclean_event::CreateEventInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<ecoclean_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    ecoclean_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(ecoclean_shared::State::single(pool))
}

#[allow(dead_code)]
pub fn event_input(title: impl Into<String>) -> CreateEventInput {
    CreateEventInput {
        title: title.into(),
        description: "Bring gloves".to_owned(),
        location: "Juhu Beach".to_owned(),
        date: "2025-03-09".to_owned(),
        time: "07:00".to_owned(),
        created_by: None,
    }
}

#[allow(dead_code)]
pub async fn create_event(
    cmd: &ecoclean_event::Command,
    title: impl Into<String>,
) -> anyhow::Result<String> {
    Ok(cmd.create(event_input(title)).await?)
}
