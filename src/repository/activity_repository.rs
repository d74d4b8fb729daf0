use async_trait::async_trait;

use crate::{
    domain::Activity,
    error::Result,
    repository::{ActivityRepository, DataStore},
};

#[async_trait]
impl ActivityRepository for DataStore {
    async fn list(&self) -> Result<Vec<Activity>> {
        let mut activities = self.read(|state| state.activities.clone()).await;
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(activities)
    }

    /// Removing a log entry is not itself logged.
    async fn delete(&self, id: u64) -> Result<bool> {
        let removed = self.mutate_existing(|state| {
            let index = state.activities.iter().position(|a| a.id == id)?;
            state.activities.remove(index);
            Some(())
        })
        .await?;

        Ok(removed.is_some())
    }
}
