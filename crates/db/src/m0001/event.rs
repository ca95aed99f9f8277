use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Event;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Event::Table)
        .col(
            ColumnDef::new(Event::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Event::Title).string().not_null())
        .col(ColumnDef::new(Event::Description).text().not_null())
        .col(ColumnDef::new(Event::Location).string().not_null())
        .col(
            ColumnDef::new(Event::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Event::Time)
                .string()
                .not_null()
                .string_len(5),
        )
        .col(
            ColumnDef::new(Event::CreatedBy)
                .string()
                .not_null()
                .default("admin"),
        )
        .col(ColumnDef::new(Event::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Event::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
