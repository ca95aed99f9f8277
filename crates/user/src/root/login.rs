use validator::Validate;

use crate::{password, repository};

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Returns the username of the authenticated user.
    pub async fn login(&self, input: LoginInput) -> ecoclean_shared::Result<String> {
        input.validate()?;

        let Some(user_row) = repository::find_by_username(&self.read_db, &input.username).await?
        else {
            ecoclean_shared::user!("User not found");
        };

        if !password::verify_password(&input.password, &user_row.password)? {
            ecoclean_shared::unauthorized!("Invalid password");
        }

        tracing::info!(user_id = %user_row.id, "user logged in");

        Ok(user_row.username)
    }
}
