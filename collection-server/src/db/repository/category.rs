//! Category Repository

use super::{Collection, RepoResult, contains_folded};
use shared::models::Category;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, type FROM category WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }
}

impl Collection for CategoryRepository {
    type Record = Category;
    /// Categories are never filtered
    type Filter = ();

    const RESOURCE: &'static str = "category";

    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM category ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn find_by_filter(&self, _filter: &()) -> RepoResult<Vec<Category>> {
        self.find_all().await
    }

    async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<Category>> {
        let needle = term.to_lowercase();
        let categories = self.find_all().await?;
        Ok(categories
            .into_iter()
            .filter(|c| contains_folded(&c.kind, &needle))
            .collect())
    }
}
