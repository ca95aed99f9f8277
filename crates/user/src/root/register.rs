use ulid::Ulid;
use validator::Validate;

use crate::{password, repository};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

impl super::Command {
    pub async fn register(&self, input: RegisterInput) -> ecoclean_shared::Result<String> {
        input.validate()?;

        if repository::find_by_username(&self.read_db, &input.username)
            .await?
            .is_some()
        {
            ecoclean_shared::conflict!("User already exists");
        }

        let password_hash = password::hash_password(&input.password)?;
        let id = Ulid::new().to_string();

        // A concurrent registration can pass the lookup above; the unique
        // index on username settles it.
        match repository::create(
            &self.write_db,
            id.to_owned(),
            input.username.to_owned(),
            password_hash,
        )
        .await
        {
            Ok(()) => {}
            Err(e) if ecoclean_shared::is_unique_violation(&e) => {
                ecoclean_shared::conflict!("User already exists");
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %id, username = %input.username, "user registered");

        Ok(id)
    }
}
