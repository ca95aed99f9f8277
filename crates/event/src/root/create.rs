use ulid::Ulid;
use validator::Validate;

use crate::{DEFAULT_CREATED_BY, parse_date, parse_time, repository};

#[derive(Validate)]
pub struct CreateEventInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: String,
    #[validate(length(max = 200))]
    pub location: String,
    pub date: String,
    pub time: String,
    #[validate(length(min = 1, max = 50))]
    pub created_by: Option<String>,
}

impl super::Command {
    pub async fn create(&self, input: CreateEventInput) -> ecoclean_shared::Result<String> {
        input.validate()?;

        let date = parse_date(&input.date)?;
        let time = parse_time(&input.time)?;
        let id = Ulid::new().to_string();

        repository::create(
            &self.write_db,
            repository::CreateInput {
                id: id.to_owned(),
                title: input.title,
                description: input.description,
                location: input.location,
                date,
                time,
                created_by: input
                    .created_by
                    .unwrap_or_else(|| DEFAULT_CREATED_BY.to_owned()),
            },
        )
        .await?;

        tracing::info!(event_id = %id, "event created");

        Ok(id)
    }
}
