use ecoclean_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub created_at: i64,
}

pub(crate) async fn find_by_username(
    pool: &SqlitePool,
    username: impl Into<String>,
) -> ecoclean_shared::Result<Option<UserRow>> {
    let statement = Query::select()
        .columns([User::Id, User::Username, User::Password, User::CreatedAt])
        .from(User::Table)
        .and_where(Expr::col(User::Username).eq(username.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Inserts the user row. The raw `sqlx::Error` is returned so callers can
/// tell a unique violation on `username` apart from other failures.
pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    username: String,
    password: String,
) -> Result<(), sqlx::Error> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([User::Id, User::Username, User::Password, User::CreatedAt])
        .values_panic([id.into(), username.into(), password.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
