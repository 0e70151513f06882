//! Controller contract exposed to application code.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::PageRequest;

/// CRUD and lifecycle operations offered to callers for one entity type.
///
/// Mirrors [`Dao`](super::dao::Dao) without `is_persistent`, and adds
/// [`save_or_update`](Controller::save_or_update). Callers that do not care
/// which DAO backs a controller can hold a `dyn Controller<T, K>`.
#[async_trait]
pub trait Controller<T, K>: Send + Sync
where
    T: Send + Sync + 'static,
    K: Send + Sync + 'static,
{
    /// Persist a new entity.
    async fn save(&self, entity: &T) -> AppResult<()>;

    /// Update an existing entity.
    async fn update(&self, entity: &T) -> AppResult<T>;

    /// Save the entity if it is new, update it otherwise.
    ///
    /// Returns the input itself after a save, or whatever the update
    /// produced.
    async fn save_or_update(&self, entity: T) -> AppResult<T>;

    /// Delete the entity with the given identifier.
    async fn delete_by_id(&self, id: &K) -> AppResult<()>;

    /// Delete the given entity.
    async fn delete(&self, entity: &T) -> AppResult<()>;

    /// Return every stored entity.
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// Return one window of the stored entities.
    async fn find_all_paged(&self, page: &PageRequest) -> AppResult<Vec<T>>;

    /// Find an entity by its identifier.
    async fn find_by_id(&self, id: &K) -> AppResult<Option<T>>;

    /// Find all entities whose identifier is in `ids`.
    async fn find_by_ids(&self, ids: &[K]) -> AppResult<Vec<T>>;

    /// Detach an entity from any caching or identity-tracking layer.
    async fn evict(&self, entity: &T) -> AppResult<()>;

    /// Attach a detached entity again.
    async fn reattach(&self, entity: &T) -> AppResult<T>;

    /// Reload an entity's state from the store.
    async fn refresh(&self, entity: &T) -> AppResult<T>;

    /// Count stored entities.
    async fn count_all(&self) -> AppResult<u64>;
}
