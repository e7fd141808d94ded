//! Listing views for venues and artists
//!
//! Upcoming means a start time strictly after `now`; everything else is past.

use std::collections::HashMap;

use shared::models::{
    Area, Artist, ArtistDetail, ArtistShow, ArtistSummary, ShowFilter, ShowListing, Venue,
    VenueDetail, VenueShow, VenueSummary,
};
use sqlx::SqlitePool;

use crate::db::repository::{ArtistRepository, Collection, ShowRepository, VenueRepository};
use crate::utils::{AppError, AppResult};

/// Builds the venue and artist pages
#[derive(Clone)]
pub struct ListingService {
    pub venues: VenueRepository,
    pub artists: ArtistRepository,
    pub shows: ShowRepository,
}

impl ListingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            venues: VenueRepository::new(pool.clone()),
            artists: ArtistRepository::new(pool.clone()),
            shows: ShowRepository::new(pool),
        }
    }

    /// Every venue, grouped by (city, state)
    pub async fn areas(&self, now_ms: i64) -> AppResult<Vec<Area>> {
        let venues = self.venues.find_all().await?;
        let counts = self.venues.upcoming_show_counts(now_ms).await?;
        Ok(group_by_location(venues, &counts))
    }

    pub async fn venue_summaries(
        &self,
        venues: Vec<Venue>,
        now_ms: i64,
    ) -> AppResult<Vec<VenueSummary>> {
        let counts = self.venues.upcoming_show_counts(now_ms).await?;
        Ok(venues.iter().map(|v| venue_summary(v, &counts)).collect())
    }

    pub async fn artist_summaries(
        &self,
        artists: Vec<Artist>,
        now_ms: i64,
    ) -> AppResult<Vec<ArtistSummary>> {
        let counts = self.artists.upcoming_show_counts(now_ms).await?;
        Ok(artists
            .into_iter()
            .map(|a| ArtistSummary {
                num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    pub async fn venue_detail(&self, id: i64, now_ms: i64) -> AppResult<VenueDetail> {
        let venue = self
            .venues
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::not_found)?;
        let shows = self.shows.find_by_filter(&ShowFilter::venue(id)).await?;
        let (past, upcoming) = partition(&shows, now_ms, ShowListing::venue_view);
        Ok(venue_detail(venue, past, upcoming))
    }

    pub async fn artist_detail(&self, id: i64, now_ms: i64) -> AppResult<ArtistDetail> {
        let artist = self
            .artists
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::not_found)?;
        let shows = self.shows.find_by_filter(&ShowFilter::artist(id)).await?;
        let (past, upcoming) = partition(&shows, now_ms, ShowListing::artist_view);
        Ok(artist_detail(artist, past, upcoming))
    }
}

fn venue_summary(venue: &Venue, counts: &HashMap<i64, i64>) -> VenueSummary {
    VenueSummary {
        id: venue.id,
        name: venue.name.clone(),
        num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
    }
}

/// Group venues by (city, state), areas in order of first appearance
pub fn group_by_location(venues: Vec<Venue>, counts: &HashMap<i64, i64>) -> Vec<Area> {
    let mut areas: Vec<Area> = Vec::new();
    for venue in &venues {
        let summary = venue_summary(venue, counts);
        match areas
            .iter_mut()
            .find(|a| a.city == venue.city && a.state == venue.state)
        {
            Some(area) => area.venues.push(summary),
            None => areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![summary],
            }),
        }
    }
    areas
}

/// Split shows into (past, upcoming) views
pub fn partition<V>(
    shows: &[ShowListing],
    now_ms: i64,
    view: impl Fn(&ShowListing) -> V,
) -> (Vec<V>, Vec<V>) {
    let (upcoming, past): (Vec<&ShowListing>, Vec<&ShowListing>) =
        shows.iter().partition(|s| s.is_upcoming(now_ms));
    (
        past.into_iter().map(&view).collect(),
        upcoming.into_iter().map(&view).collect(),
    )
}

fn venue_detail(venue: Venue, past: Vec<VenueShow>, upcoming: Vec<VenueShow>) -> VenueDetail {
    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past.len(),
        upcoming_shows_count: upcoming.len(),
        past_shows: past,
        upcoming_shows: upcoming,
    }
}

fn artist_detail(artist: Artist, past: Vec<ArtistShow>, upcoming: Vec<ArtistShow>) -> ArtistDetail {
    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past.len(),
        upcoming_shows_count: upcoming.len(),
        past_shows: past,
        upcoming_shows: upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::utils::ErrorCode;
    use shared::models::{ArtistForm, NewShow, VenueForm};

    fn venue(id: i64, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: format!("Venue {id}"),
            city: city.into(),
            state: state.into(),
            address: "1 Main Street".into(),
            phone: None,
            genres: vec![],
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn show(id: i64, start_time: i64) -> ShowListing {
        ShowListing {
            id,
            venue_id: 1,
            venue_name: "Venue 1".into(),
            venue_image_link: None,
            artist_id: 2,
            artist_name: "Artist 2".into(),
            artist_image_link: None,
            start_time,
        }
    }

    #[test]
    fn test_group_by_location_keeps_first_appearance_order() {
        let venues = vec![
            venue(1, "San Francisco", "CA"),
            venue(2, "New York", "NY"),
            venue(3, "San Francisco", "CA"),
        ];
        let counts = HashMap::from([(3, 2)]);
        let areas = group_by_location(venues, &counts);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        let ids: Vec<_> = areas[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 2);
        assert_eq!(areas[1].state, "NY");
    }

    #[test]
    fn test_same_city_different_state_is_separate_area() {
        let venues = vec![venue(1, "Portland", "OR"), venue(2, "Portland", "ME")];
        assert_eq!(group_by_location(venues, &HashMap::new()).len(), 2);
    }

    #[test]
    fn test_partition_boundary_is_past() {
        let shows = vec![show(1, 500), show(2, 1_000), show(3, 1_500)];
        let (past, upcoming) = partition(&shows, 1_000, |s| s.id);
        assert_eq!(past, vec![1, 2]);
        assert_eq!(upcoming, vec![3]);
    }

    #[tokio::test]
    async fn test_venue_detail_after_delete_is_not_found() {
        let db = DbService::in_memory().await.unwrap();
        let service = ListingService::new(db.pool);
        let venue = service
            .venues
            .create(&VenueForm {
                name: "The Dueling Pianos Bar".into(),
                city: "New York".into(),
                state: "NY".into(),
                address: "335 Delancey Street".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let artist = service
            .artists
            .create(&ArtistForm {
                name: "The Wild Sax Band".into(),
                city: "San Francisco".into(),
                state: "CA".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        for start_time in [1_000, 3_000] {
            service
                .shows
                .create(&NewShow {
                    artist_id: artist.id,
                    venue_id: venue.id,
                    start_time,
                })
                .await
                .unwrap();
        }

        let detail = service.venue_detail(venue.id, 2_000).await.unwrap();
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].artist_name, "The Wild Sax Band");

        let artist_page = service.artist_detail(artist.id, 2_000).await.unwrap();
        assert_eq!(artist_page.past_shows[0].venue_name, "The Dueling Pianos Bar");

        service.venues.delete(venue.id).await.unwrap();
        assert!(service.shows.find_all().await.unwrap().is_empty());
        let err = service.venue_detail(venue.id, 2_000).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
