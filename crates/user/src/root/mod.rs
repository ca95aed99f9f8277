use std::ops::Deref;

mod login;
mod register;

pub use login::LoginInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: ecoclean_shared::State,
}

impl Deref for Command {
    type Target = ecoclean_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: ecoclean_shared::State) -> Self {
        Self { state }
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> ecoclean_shared::Result<Option<crate::UserRow>> {
        crate::repository::find_by_username(&self.read_db, username).await
    }
}

