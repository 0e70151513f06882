//! Generic data-access capability trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::PageRequest;

/// Generic data-access object for one entity type.
///
/// `T` is the entity type and `K` its identifier type. Concrete persistence
/// backends implement this trait; controllers only ever talk to it.
///
/// Entities are passed by reference so that implementations observe the
/// caller's value itself. Operations that may hand back a different
/// instance (`update`, `reattach`, `refresh`) return an owned `T`.
#[async_trait]
pub trait Dao<T, K>: Send + Sync + 'static
where
    T: Send + Sync + 'static,
    K: Send + Sync + 'static,
{
    /// Persist a new entity.
    async fn save(&self, entity: &T) -> AppResult<()>;

    /// Update an existing entity and return the instance the store now tracks.
    async fn update(&self, entity: &T) -> AppResult<T>;

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

    /// Attach a detached entity again and return the tracked instance.
    async fn reattach(&self, entity: &T) -> AppResult<T>;

    /// Reload an entity's state from the store.
    async fn refresh(&self, entity: &T) -> AppResult<T>;

    /// Whether the entity already has a stored, identifiable representation.
    async fn is_persistent(&self, entity: &T) -> AppResult<bool>;

    /// Count stored entities.
    async fn count_all(&self) -> AppResult<u64>;
}

macro_rules! forward_dao {
    ($wrapper:ident) => {
        #[async_trait]
        impl<T, K, D> Dao<T, K> for $wrapper<D>
        where
            T: Send + Sync + 'static,
            K: Send + Sync + 'static,
            D: Dao<T, K> + ?Sized,
        {
            async fn save(&self, entity: &T) -> AppResult<()> {
                (**self).save(entity).await
            }

            async fn update(&self, entity: &T) -> AppResult<T> {
                (**self).update(entity).await
            }

            async fn delete_by_id(&self, id: &K) -> AppResult<()> {
                (**self).delete_by_id(id).await
            }

            async fn delete(&self, entity: &T) -> AppResult<()> {
                (**self).delete(entity).await
            }

            async fn find_all(&self) -> AppResult<Vec<T>> {
                (**self).find_all().await
            }

            async fn find_all_paged(&self, page: &PageRequest) -> AppResult<Vec<T>> {
                (**self).find_all_paged(page).await
            }

            async fn find_by_id(&self, id: &K) -> AppResult<Option<T>> {
                (**self).find_by_id(id).await
            }

            async fn find_by_ids(&self, ids: &[K]) -> AppResult<Vec<T>> {
                (**self).find_by_ids(ids).await
            }

            async fn evict(&self, entity: &T) -> AppResult<()> {
                (**self).evict(entity).await
            }

            async fn reattach(&self, entity: &T) -> AppResult<T> {
                (**self).reattach(entity).await
            }

            async fn refresh(&self, entity: &T) -> AppResult<T> {
                (**self).refresh(entity).await
            }

            async fn is_persistent(&self, entity: &T) -> AppResult<bool> {
                (**self).is_persistent(entity).await
            }

            async fn count_all(&self) -> AppResult<u64> {
                (**self).count_all().await
            }
        }
    };
}

forward_dao!(Arc);
forward_dao!(Box);
