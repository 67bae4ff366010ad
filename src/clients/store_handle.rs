use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the standard lookups.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every store supports identically: `get` and `delete`.
/// Errors stay as [`StoreError`]; the administration service converts them
/// into its own taxonomy at the service boundary.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// Access the inner generic store client.
    fn inner(&self) -> &StoreClient<T>;

    /// Fetch a record by primary key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Delete a record by primary key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
