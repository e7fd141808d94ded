//! Venue Repository

use std::collections::HashMap;

use super::{Collection, RepoError, RepoResult, contains_folded};
use shared::models::{Venue, VenueFilter, VenueForm};
use sqlx::SqlitePool;
use sqlx::types::Json;

const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description";

#[derive(Clone)]
pub struct VenueRepository {
    pool: SqlitePool,
}

impl VenueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(&format!("SELECT {COLUMNS} FROM venue WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    /// Shows starting strictly after `now_ms`, counted per venue
    pub async fn upcoming_show_counts(&self, now_ms: i64) -> RepoResult<HashMap<i64, i64>> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT venue_id, COUNT(*) FROM shows WHERE start_time > ? GROUP BY venue_id",
        )
        .bind(now_ms)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn create(&self, data: &VenueForm) -> RepoResult<Venue> {
        let mut tx = self.pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "INSERT INTO venue (name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(Json(&data.genres))
        .bind(&data.image_link)
        .bind(&data.facebook_link)
        .bind(&data.website_link)
        .bind(data.seeking_talent)
        .bind(&data.seeking_description)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Replace every mutable field
    pub async fn update(&self, id: i64, data: &VenueForm) -> RepoResult<Venue> {
        let mut tx = self.pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "UPDATE venue SET name = ?1, city = ?2, state = ?3, address = ?4, phone = ?5, genres = ?6, image_link = ?7, facebook_link = ?8, website_link = ?9, seeking_talent = ?10, seeking_description = ?11 WHERE id = ?12 RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(Json(&data.genres))
        .bind(&data.image_link)
        .bind(&data.facebook_link)
        .bind(&data.website_link)
        .bind(data.seeking_talent)
        .bind(&data.seeking_description)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Venue {id} not found")))?;
        tx.commit().await?;
        Ok(venue)
    }

    /// Delete a venue; its shows go with it (ON DELETE CASCADE)
    pub async fn delete(&self, id: i64) -> RepoResult<Venue> {
        let mut tx = self.pool.begin().await?;
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "DELETE FROM venue WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Venue {id} not found")))?;
        tx.commit().await?;
        Ok(venue)
    }
}

impl Collection for VenueRepository {
    type Record = Venue;
    type Filter = VenueFilter;

    const RESOURCE: &'static str = "venue";

    async fn find_all(&self) -> RepoResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(&format!("SELECT {COLUMNS} FROM venue ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(venues)
    }

    async fn find_by_filter(&self, filter: &VenueFilter) -> RepoResult<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {COLUMNS} FROM venue WHERE (?1 IS NULL OR city = ?1) AND (?2 IS NULL OR state = ?2) ORDER BY id"
        ))
        .bind(&filter.city)
        .bind(&filter.state)
        .fetch_all(&self.pool)
        .await?;
        Ok(venues)
    }

    async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<Venue>> {
        let needle = term.to_lowercase();
        let venues = self.find_all().await?;
        Ok(venues
            .into_iter()
            .filter(|v| contains_folded(&v.name, &needle))
            .collect())
    }
}
