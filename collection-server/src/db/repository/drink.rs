//! Drink Repository

use super::{Collection, RepoError, RepoResult, contains_folded};
use shared::models::{Drink, RecipePart};
use sqlx::SqlitePool;
use sqlx::types::Json;

#[derive(Clone)]
pub struct DrinkRepository {
    pool: SqlitePool,
}

impl DrinkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Drink>> {
        let drink = sqlx::query_as::<_, Drink>("SELECT id, title, recipe FROM drink WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(drink)
    }

    /// Insert a drink; a duplicate title fails the unique constraint
    pub async fn create(&self, title: &str, recipe: &[RecipePart]) -> RepoResult<Drink> {
        let mut tx = self.pool.begin().await?;
        let drink = sqlx::query_as::<_, Drink>(
            "INSERT INTO drink (title, recipe) VALUES (?, ?) RETURNING id, title, recipe",
        )
        .bind(title)
        .bind(Json(recipe))
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(drink)
    }

    /// Patch the provided fields, leaving the others unchanged
    pub async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        recipe: Option<&[RecipePart]>,
    ) -> RepoResult<Drink> {
        let mut tx = self.pool.begin().await?;
        let drink = sqlx::query_as::<_, Drink>(
            "UPDATE drink SET title = COALESCE(?1, title), recipe = COALESCE(?2, recipe) WHERE id = ?3 RETURNING id, title, recipe",
        )
        .bind(title)
        .bind(recipe.map(Json))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Drink {id} not found")))?;
        tx.commit().await?;
        Ok(drink)
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM drink WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Drink {id} not found")));
        }
        tx.commit().await?;
        Ok(())
    }
}

impl Collection for DrinkRepository {
    type Record = Drink;
    type Filter = ();

    const RESOURCE: &'static str = "drink";

    async fn find_all(&self) -> RepoResult<Vec<Drink>> {
        let drinks = sqlx::query_as::<_, Drink>("SELECT id, title, recipe FROM drink ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(drinks)
    }

    async fn find_by_filter(&self, _filter: &()) -> RepoResult<Vec<Drink>> {
        self.find_all().await
    }

    async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<Drink>> {
        let needle = term.to_lowercase();
        let drinks = self.find_all().await?;
        Ok(drinks
            .into_iter()
            .filter(|d| contains_folded(&d.title, &needle))
            .collect())
    }
}
