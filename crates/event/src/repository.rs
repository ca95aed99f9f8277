use std::collections::HashMap;

use ecoclean_db::table::{Event, EventVolunteer};
use sea_query::{Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(Debug, FromRow)]
pub(crate) struct EventRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub created_by: String,
}

impl EventRow {
    fn into_event(self, volunteers: Vec<String>) -> crate::Event {
        crate::Event {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            date: self.date,
            time: self.time,
            created_by: self.created_by,
            volunteers,
        }
    }
}

#[derive(FromRow)]
struct VolunteerRow {
    event_id: String,
    username: String,
}

fn select_events() -> SelectStatement {
    Query::select()
        .columns([
            Event::Id,
            Event::Title,
            Event::Description,
            Event::Location,
            Event::Date,
            Event::Time,
            Event::CreatedBy,
        ])
        .from(Event::Table)
        .order_by_expr(Expr::cust("rowid"), Order::Asc)
        .to_owned()
}

pub(crate) struct CreateInput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub created_by: String,
}

pub(crate) async fn create(pool: &SqlitePool, input: CreateInput) -> ecoclean_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(Event::Table)
        .columns([
            Event::Id,
            Event::Title,
            Event::Description,
            Event::Location,
            Event::Date,
            Event::Time,
            Event::CreatedBy,
            Event::CreatedAt,
        ])
        .values_panic([
            input.id.into(),
            input.title.into(),
            input.description.into(),
            input.location.into(),
            input.date.into(),
            input.time.into(),
            input.created_by.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn find_row(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> ecoclean_shared::Result<Option<EventRow>> {
    let statement = select_events()
        .and_where(Expr::col(Event::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn find(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> ecoclean_shared::Result<Option<crate::Event>> {
    let Some(row) = find_row(pool, id).await? else {
        return Ok(None);
    };

    let volunteers = volunteers(pool, &row.id).await?;

    Ok(Some(row.into_event(volunteers)))
}

pub(crate) async fn list(pool: &SqlitePool) -> ecoclean_shared::Result<Vec<crate::Event>> {
    let (sql, values) = select_events().build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    attach_volunteers(pool, rows).await
}

pub(crate) async fn list_by_volunteer(
    pool: &SqlitePool,
    username: impl Into<String>,
) -> ecoclean_shared::Result<Vec<crate::Event>> {
    let enrolled = Query::select()
        .column(EventVolunteer::EventId)
        .from(EventVolunteer::Table)
        .and_where(Expr::col(EventVolunteer::Username).eq(username.into()))
        .to_owned();

    let statement = select_events()
        .and_where(Expr::col(Event::Id).in_subquery(enrolled))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    attach_volunteers(pool, rows).await
}

async fn attach_volunteers(
    pool: &SqlitePool,
    rows: Vec<EventRow>,
) -> ecoclean_shared::Result<Vec<crate::Event>> {
    if rows.is_empty() {
        return Ok(vec![]);
    }

    let statement = Query::select()
        .columns([EventVolunteer::EventId, EventVolunteer::Username])
        .from(EventVolunteer::Table)
        .and_where(Expr::col(EventVolunteer::EventId).is_in(rows.iter().map(|r| r.id.to_owned())))
        .order_by(EventVolunteer::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let volunteer_rows = sqlx::query_as_with::<_, VolunteerRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    let mut rosters: HashMap<String, Vec<String>> = HashMap::new();
    for row in volunteer_rows {
        rosters.entry(row.event_id).or_default().push(row.username);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let volunteers = rosters.remove(&row.id).unwrap_or_default();
            row.into_event(volunteers)
        })
        .collect())
}

pub(crate) async fn volunteers(
    pool: &SqlitePool,
    event_id: impl Into<String>,
) -> ecoclean_shared::Result<Vec<String>> {
    let statement = Query::select()
        .column(EventVolunteer::Username)
        .from(EventVolunteer::Table)
        .and_where(Expr::col(EventVolunteer::EventId).eq(event_id.into()))
        .order_by(EventVolunteer::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| r.0).collect())
}

pub(crate) async fn is_enrolled(
    pool: &SqlitePool,
    event_id: impl Into<String>,
    username: impl Into<String>,
) -> ecoclean_shared::Result<bool> {
    let statement = Query::select()
        .column(EventVolunteer::Id)
        .from(EventVolunteer::Table)
        .and_where(Expr::col(EventVolunteer::EventId).eq(event_id.into()))
        .and_where(Expr::col(EventVolunteer::Username).eq(username.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Appends to the roster. The raw `sqlx::Error` is returned so the caller
/// can map a unique violation to "already enrolled".
pub(crate) async fn enroll(
    pool: &SqlitePool,
    event_id: String,
    username: String,
) -> Result<(), sqlx::Error> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(EventVolunteer::Table)
        .columns([
            EventVolunteer::EventId,
            EventVolunteer::Username,
            EventVolunteer::EnrolledAt,
        ])
        .values_panic([event_id.into(), username.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Removes the event and its roster, returning whether the event existed.
pub(crate) async fn delete(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> ecoclean_shared::Result<bool> {
    let id = id.into();
    let mut tx = pool.begin().await?;

    let (sql, values) = Query::delete()
        .from_table(EventVolunteer::Table)
        .and_where(Expr::col(EventVolunteer::EventId).eq(id.to_owned()))
        .to_owned()
        .build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *tx).await?;

    let (sql, values) = Query::delete()
        .from_table(Event::Table)
        .and_where(Expr::col(Event::Id).eq(id))
        .to_owned()
        .build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
