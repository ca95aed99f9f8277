use validator::Validate;

use crate::repository;

#[derive(Validate)]
struct EnrollInput {
    #[validate(length(min = 1, max = 50))]
    username: String,
}

impl super::Command {
    /// Appends `username` to the event roster exactly once.
    ///
    /// The membership lookup gives the common case a clean answer. Two
    /// concurrent calls can both pass it, so the insert relies on the unique
    /// `(event_id, username)` index and a violation is reported the same way.
    /// An event deleted after the lookup trips the foreign key instead.
    pub async fn enroll(
        &self,
        event_id: impl Into<String>,
        username: impl Into<String>,
    ) -> ecoclean_shared::Result<()> {
        let event_id = event_id.into();
        let input = EnrollInput {
            username: username.into(),
        };
        input.validate()?;

        if repository::find_row(&self.read_db, &event_id).await?.is_none() {
            ecoclean_shared::not_found!("Event not found");
        }

        if repository::is_enrolled(&self.read_db, &event_id, &input.username).await? {
            ecoclean_shared::conflict!("Already enrolled");
        }

        repository::enroll(&self.write_db, event_id.to_owned(), input.username.to_owned())
            .await
            .map_err(insert_error)?;

        tracing::info!(event_id = %event_id, username = %input.username, "volunteer enrolled");

        Ok(())
    }
}

fn insert_error(err: sqlx::Error) -> ecoclean_shared::Error {
    if ecoclean_shared::is_unique_violation(&err) {
        return ecoclean_shared::Error::Conflict("Already enrolled".to_owned());
    }

    if ecoclean_shared::is_foreign_key_violation(&err) {
        return ecoclean_shared::Error::NotFound("Event not found".to_owned());
    }

    err.into()
}
