use crate::repository;

impl super::Command {
    pub async fn delete(&self, id: impl Into<String>) -> ecoclean_shared::Result<()> {
        let id = id.into();

        if !repository::delete(&self.write_db, &id).await? {
            ecoclean_shared::not_found!("Event not found");
        }

        tracing::info!(event_id = %id, "event deleted");

        Ok(())
    }
}
