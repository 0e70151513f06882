//! Generic entity controller.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{debug, trace};

use arsmachina_core::error::AppError;
use arsmachina_core::result::AppResult;
use arsmachina_core::traits::{Controller, Dao};
use arsmachina_core::types::pagination::PageRequest;

/// Delegates CRUD and lifecycle operations for entity `T` (identified by
/// `K`) to an exclusively owned DAO `D`.
///
/// Entity arguments reach the DAO as the caller's own reference and DAO
/// results come back by move, so nothing is copied on the way through.
/// DAO errors are returned untouched.
///
/// To share one DAO between several controllers, hand each an `Arc<D>`.
pub struct EntityController<T, K, D> {
    dao: D,
    _entity: PhantomData<fn() -> (T, K)>,
}

impl<T, K, D> EntityController<T, K, D>
where
    T: Send + Sync + 'static,
    K: Send + Sync + 'static,
    D: Dao<T, K>,
{
    /// Creates a controller over `dao`.
    pub fn new(dao: D) -> Self {
        Self {
            dao,
            _entity: PhantomData,
        }
    }

    /// Creates a controller from a DAO that may not have been resolved.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](arsmachina_core::ErrorKind::InvalidArgument)
    /// when `dao` is `None`.
    pub fn try_new(dao: Option<D>) -> AppResult<Self> {
        dao.map(Self::new)
            .ok_or_else(|| AppError::invalid_argument("dao cannot be null"))
    }

    /// The DAO this controller delegates to.
    pub fn dao(&self) -> &D {
        &self.dao
    }

    /// Persists a new entity.
    pub async fn save(&self, entity: &T) -> AppResult<()> {
        trace!(operation = "save", entity = type_name::<T>());
        self.dao.save(entity).await
    }

    /// Updates an existing entity, returning the DAO's instance.
    pub async fn update(&self, entity: &T) -> AppResult<T> {
        trace!(operation = "update", entity = type_name::<T>());
        self.dao.update(entity).await
    }

    /// Saves `entity` if the DAO does not consider it persistent yet,
    /// updates it otherwise.
    ///
    /// After an update the DAO's result is returned, which may be a
    /// different instance. After a save the input itself is handed back.
    pub async fn save_or_update(&self, entity: T) -> AppResult<T> {
        let persistent = self.dao.is_persistent(&entity).await?;
        debug!(
            operation = "save_or_update",
            entity = type_name::<T>(),
            persistent,
            "Resolved persistence state"
        );

        if persistent {
            self.dao.update(&entity).await
        } else {
            self.dao.save(&entity).await?;
            Ok(entity)
        }
    }

    /// Deletes the entity identified by `id`.
    pub async fn delete_by_id(&self, id: &K) -> AppResult<()> {
        trace!(operation = "delete_by_id", entity = type_name::<T>());
        self.dao.delete_by_id(id).await
    }

    /// Deletes the given entity.
    pub async fn delete(&self, entity: &T) -> AppResult<()> {
        trace!(operation = "delete", entity = type_name::<T>());
        self.dao.delete(entity).await
    }

    /// Returns every stored entity.
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        trace!(operation = "find_all", entity = type_name::<T>());
        self.dao.find_all().await
    }

    /// Returns the window of entities described by `page`.
    pub async fn find_all_paged(&self, page: &PageRequest) -> AppResult<Vec<T>> {
        trace!(
            operation = "find_all_paged",
            entity = type_name::<T>(),
            first_result = page.first_result,
            max_results = page.max_results
        );
        self.dao.find_all_paged(page).await
    }

    /// Finds an entity by identifier.
    pub async fn find_by_id(&self, id: &K) -> AppResult<Option<T>> {
        trace!(operation = "find_by_id", entity = type_name::<T>());
        self.dao.find_by_id(id).await
    }

    /// Finds the entities with the given identifiers.
    pub async fn find_by_ids(&self, ids: &[K]) -> AppResult<Vec<T>> {
        trace!(operation = "find_by_ids", entity = type_name::<T>(), count = ids.len());
        self.dao.find_by_ids(ids).await
    }

    /// Detaches an entity from the DAO's identity tracking.
    pub async fn evict(&self, entity: &T) -> AppResult<()> {
        trace!(operation = "evict", entity = type_name::<T>());
        self.dao.evict(entity).await
    }

    /// Reattaches a detached entity.
    pub async fn reattach(&self, entity: &T) -> AppResult<T> {
        trace!(operation = "reattach", entity = type_name::<T>());
        self.dao.reattach(entity).await
    }

    /// Reloads an entity from the store.
    pub async fn refresh(&self, entity: &T) -> AppResult<T> {
        trace!(operation = "refresh", entity = type_name::<T>());
        self.dao.refresh(entity).await
    }

    /// Counts stored entities.
    pub async fn count_all(&self) -> AppResult<u64> {
        trace!(operation = "count_all", entity = type_name::<T>());
        self.dao.count_all().await
    }
}

impl<T, K, D: fmt::Debug> fmt::Debug for EntityController<T, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityController")
            .field("entity", &type_name::<T>())
            .field("dao", &self.dao)
            .finish()
    }
}

impl<T, K, D: Clone> Clone for EntityController<T, K, D> {
    fn clone(&self) -> Self {
        Self {
            dao: self.dao.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T, K, D> Controller<T, K> for EntityController<T, K, D>
where
    T: Send + Sync + 'static,
    K: Send + Sync + 'static,
    D: Dao<T, K>,
{
    async fn save(&self, entity: &T) -> AppResult<()> {
        EntityController::save(self, entity).await
    }

    async fn update(&self, entity: &T) -> AppResult<T> {
        EntityController::update(self, entity).await
    }

    async fn save_or_update(&self, entity: T) -> AppResult<T> {
        EntityController::save_or_update(self, entity).await
    }

    async fn delete_by_id(&self, id: &K) -> AppResult<()> {
        EntityController::delete_by_id(self, id).await
    }

    async fn delete(&self, entity: &T) -> AppResult<()> {
        EntityController::delete(self, entity).await
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        EntityController::find_all(self).await
    }

    async fn find_all_paged(&self, page: &PageRequest) -> AppResult<Vec<T>> {
        EntityController::find_all_paged(self, page).await
    }

    async fn find_by_id(&self, id: &K) -> AppResult<Option<T>> {
        EntityController::find_by_id(self, id).await
    }

    async fn find_by_ids(&self, ids: &[K]) -> AppResult<Vec<T>> {
        EntityController::find_by_ids(self, ids).await
    }

    async fn evict(&self, entity: &T) -> AppResult<()> {
        EntityController::evict(self, entity).await
    }

    async fn reattach(&self, entity: &T) -> AppResult<T> {
        EntityController::reattach(self, entity).await
    }

    async fn refresh(&self, entity: &T) -> AppResult<T> {
        EntityController::refresh(self, entity).await
    }

    async fn count_all(&self) -> AppResult<u64> {
        EntityController::count_all(self).await
    }
}
