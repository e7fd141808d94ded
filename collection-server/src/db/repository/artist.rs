//! Artist Repository

use std::collections::HashMap;

use super::{Collection, RepoError, RepoResult, contains_folded};
use shared::models::{Artist, ArtistFilter, ArtistForm};
use sqlx::SqlitePool;
use sqlx::types::Json;

const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description";

#[derive(Clone)]
pub struct ArtistRepository {
    pool: SqlitePool,
}

impl ArtistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Artist>> {
        let artist =
            sqlx::query_as::<_, Artist>(&format!("SELECT {COLUMNS} FROM artist WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(artist)
    }

    pub async fn upcoming_show_counts(&self, now_ms: i64) -> RepoResult<HashMap<i64, i64>> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT artist_id, COUNT(*) FROM shows WHERE start_time > ? GROUP BY artist_id",
        )
        .bind(now_ms)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn create(&self, data: &ArtistForm) -> RepoResult<Artist> {
        let mut tx = self.pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "INSERT INTO artist (name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.phone)
        .bind(Json(&data.genres))
        .bind(&data.image_link)
        .bind(&data.facebook_link)
        .bind(&data.website_link)
        .bind(data.seeking_venue)
        .bind(&data.seeking_description)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(artist)
    }

    pub async fn update(&self, id: i64, data: &ArtistForm) -> RepoResult<Artist> {
        let mut tx = self.pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "UPDATE artist SET name = ?1, city = ?2, state = ?3, phone = ?4, genres = ?5, image_link = ?6, facebook_link = ?7, website_link = ?8, seeking_venue = ?9, seeking_description = ?10 WHERE id = ?11 RETURNING {COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.phone)
        .bind(Json(&data.genres))
        .bind(&data.image_link)
        .bind(&data.facebook_link)
        .bind(&data.website_link)
        .bind(data.seeking_venue)
        .bind(&data.seeking_description)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Artist {id} not found")))?;
        tx.commit().await?;
        Ok(artist)
    }

    pub async fn delete(&self, id: i64) -> RepoResult<Artist> {
        let mut tx = self.pool.begin().await?;
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "DELETE FROM artist WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Artist {id} not found")))?;
        tx.commit().await?;
        Ok(artist)
    }
}

impl Collection for ArtistRepository {
    type Record = Artist;
    type Filter = ArtistFilter;

    const RESOURCE: &'static str = "artist";

    async fn find_all(&self) -> RepoResult<Vec<Artist>> {
        let artists =
            sqlx::query_as::<_, Artist>(&format!("SELECT {COLUMNS} FROM artist ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(artists)
    }

    async fn find_by_filter(&self, filter: &ArtistFilter) -> RepoResult<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {COLUMNS} FROM artist WHERE (?1 IS NULL OR city = ?1) AND (?2 IS NULL OR state = ?2) ORDER BY id"
        ))
        .bind(&filter.city)
        .bind(&filter.state)
        .fetch_all(&self.pool)
        .await?;
        Ok(artists)
    }

    async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<Artist>> {
        let needle = term.to_lowercase();
        let artists = self.find_all().await?;
        Ok(artists
            .into_iter()
            .filter(|a| contains_folded(&a.name, &needle))
            .collect())
    }
}
