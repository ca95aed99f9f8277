use std::ops::Deref;

mod create;
mod delete;
mod enroll;

pub use create::CreateEventInput;

use crate::repository;

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

    /// All events in insertion order, each with its roster.
    pub async fn list(&self) -> ecoclean_shared::Result<Vec<crate::Event>> {
        repository::list(&self.read_db).await
    }

    pub async fn find(&self, id: impl Into<String>) -> ecoclean_shared::Result<Option<crate::Event>> {
        repository::find(&self.read_db, id).await
    }

    /// Events the given user is enrolled in.
    pub async fn list_by_volunteer(
        &self,
        username: impl Into<String>,
    ) -> ecoclean_shared::Result<Vec<crate::Event>> {
        repository::list_by_volunteer(&self.read_db, username).await
    }
}
