//! Shared test helpers for integration tests.

use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use uuid::Uuid;

use arsmachina::{AppError, AppResult, Dao, EntityController, PageRequest};

/// Sample entity managed by the test controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub version: u64,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// A new, not yet stored article.
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            version: 0,
            updated_at: Utc::now(),
        }
    }
}

/// In-memory DAO keeping articles in a concurrent map.
///
/// `attached` tracks which stored articles are currently attached; `evict`
/// detaches and `reattach` attaches again.
#[derive(Debug, Default)]
pub struct MemoryArticleDao {
    rows: DashMap<Uuid, Article>,
    attached: DashSet<Uuid>,
}

impl MemoryArticleDao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self, id: &Uuid) -> bool {
        self.attached.contains(id)
    }

    fn stored(&self, id: &Uuid) -> AppResult<Article> {
        self.rows
            .get(id)
            .map(|row| row.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Article {id} not found")))
    }

    fn sorted_rows(&self, page: Option<&PageRequest>) -> AppResult<Vec<Article>> {
        let mut rows: Vec<Article> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by(|a, b| a.title.cmp(&b.title));

        if let Some(sort) = page.and_then(|p| p.sort.as_ref()) {
            match sort.property.as_str() {
                "title" => rows.sort_by(|a, b| a.title.cmp(&b.title)),
                "version" => rows.sort_by_key(|a| a.version),
                other => {
                    return Err(AppError::invalid_argument(format!(
                        "Unknown sort property: {other}"
                    )));
                }
            }
            if !sort.direction.is_ascending() {
                rows.reverse();
            }
        }
        Ok(rows)
    }
}

#[async_trait]
impl Dao<Article, Uuid> for MemoryArticleDao {
    async fn save(&self, entity: &Article) -> AppResult<()> {
        match self.rows.entry(entity.id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Article {} already exists",
                entity.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                self.attached.insert(entity.id);
                Ok(())
            }
        }
    }

    async fn update(&self, entity: &Article) -> AppResult<Article> {
        let mut row = self
            .rows
            .get_mut(&entity.id)
            .ok_or_else(|| AppError::not_found(format!("Article {} not found", entity.id)))?;
        let updated = Article {
            version: row.version + 1,
            updated_at: Utc::now(),
            ..entity.clone()
        };
        *row = updated.clone();
        self.attached.insert(entity.id);
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &Uuid) -> AppResult<()> {
        self.rows
            .remove(id)
            .ok_or_else(|| AppError::not_found(format!("Article {id} not found")))?;
        self.attached.remove(id);
        Ok(())
    }

    async fn delete(&self, entity: &Article) -> AppResult<()> {
        self.delete_by_id(&entity.id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Article>> {
        self.sorted_rows(None)
    }

    async fn find_all_paged(&self, page: &PageRequest) -> AppResult<Vec<Article>> {
        Ok(self
            .sorted_rows(Some(page))?
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Article>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Article>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.rows.get(id).map(|row| row.value().clone()))
            .collect())
    }

    async fn evict(&self, entity: &Article) -> AppResult<()> {
        self.attached.remove(&entity.id);
        Ok(())
    }

    async fn reattach(&self, entity: &Article) -> AppResult<Article> {
        let stored = self.stored(&entity.id)?;
        self.attached.insert(entity.id);
        Ok(stored)
    }

    async fn refresh(&self, entity: &Article) -> AppResult<Article> {
        self.stored(&entity.id)
    }

    async fn is_persistent(&self, entity: &Article) -> AppResult<bool> {
        Ok(self.rows.contains_key(&entity.id))
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(self.rows.len() as u64)
    }
}

/// Concrete controller for articles, built on the generic one.
#[derive(Debug, Clone)]
pub struct ArticleController {
    inner: EntityController<Article, Uuid, Arc<MemoryArticleDao>>,
}

impl ArticleController {
    pub fn new(dao: Arc<MemoryArticleDao>) -> Self {
        Self {
            inner: EntityController::new(dao),
        }
    }

    /// Articles whose title starts with `prefix`.
    pub async fn find_by_title_prefix(&self, prefix: &str) -> AppResult<Vec<Article>> {
        let all = self.inner.find_all().await?;
        Ok(all
            .into_iter()
            .filter(|article| article.title.starts_with(prefix))
            .collect())
    }
}

impl Deref for ArticleController {
    type Target = EntityController<Article, Uuid, Arc<MemoryArticleDao>>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Test fixture: one shared DAO and a controller over it.
pub struct TestApp {
    pub dao: Arc<MemoryArticleDao>,
    pub controller: ArticleController,
}

impl TestApp {
    pub fn new() -> Self {
        let dao = Arc::new(MemoryArticleDao::new());
        let controller = ArticleController::new(Arc::clone(&dao));
        Self { dao, controller }
    }

    /// Store one article per title through the controller.
    pub async fn seed(&self, titles: &[&str]) -> Vec<Article> {
        let mut stored = Vec::with_capacity(titles.len());
        for title in titles {
            let article = self
                .controller
                .save_or_update(Article::new(title))
                .await
                .expect("seed article");
            stored.push(article);
        }
        stored
    }
}
