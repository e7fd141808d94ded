//! Show Repository
//!
//! Shows are always read joined with their venue and artist.

use super::{Collection, RepoResult, contains_folded};
use shared::models::{NewShow, ShowFilter, ShowListing};
use sqlx::SqlitePool;

const LISTING: &str = "SELECT s.id, s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
     s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time \
     FROM shows s JOIN venue v ON v.id = s.venue_id JOIN artist a ON a.id = s.artist_id";

#[derive(Clone)]
pub struct ShowRepository {
    pool: SqlitePool,
}

impl ShowRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a show; an unknown artist or venue fails the foreign key check
    pub async fn create(&self, data: &NewShow) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await?;
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(data.artist_id)
        .bind(data.venue_id)
        .bind(data.start_time)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(id)
    }
}

impl Collection for ShowRepository {
    type Record = ShowListing;
    type Filter = ShowFilter;

    const RESOURCE: &'static str = "show";

    async fn find_all(&self) -> RepoResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(&format!("{LISTING} ORDER BY s.id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(shows)
    }

    async fn find_by_filter(&self, filter: &ShowFilter) -> RepoResult<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(&format!(
            "{LISTING} WHERE (?1 IS NULL OR s.venue_id = ?1) AND (?2 IS NULL OR s.artist_id = ?2) ORDER BY s.id"
        ))
        .bind(filter.venue_id)
        .bind(filter.artist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(shows)
    }

    /// Matches on either the artist or the venue name
    async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<ShowListing>> {
        let needle = term.to_lowercase();
        let shows = self.find_all().await?;
        Ok(shows
            .into_iter()
            .filter(|s| contains_folded(&s.artist_name, &needle) || contains_folded(&s.venue_name, &needle))
            .collect())
    }
}
