//! Show Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArtistShow, Keyed, VenueShow};
use crate::util::millis_to_datetime;

/// Show row joined with its artist and venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// Start time (Unix millis, UTC)
    pub start_time: i64,
}

impl Keyed for ShowListing {
    fn key(&self) -> i64 {
        self.id
    }
}

impl ShowListing {
    /// Upcoming means strictly after `now_ms`
    pub fn is_upcoming(&self, now_ms: i64) -> bool {
        self.start_time > now_ms
    }

    pub fn view(&self) -> ShowView {
        ShowView {
            venue_id: self.venue_id,
            venue_name: self.venue_name.clone(),
            artist_id: self.artist_id,
            artist_name: self.artist_name.clone(),
            artist_image_link: self.artist_image_link.clone(),
            start_time: millis_to_datetime(self.start_time),
        }
    }

    pub fn venue_view(&self) -> VenueShow {
        VenueShow {
            artist_id: self.artist_id,
            artist_name: self.artist_name.clone(),
            artist_image_link: self.artist_image_link.clone(),
            start_time: millis_to_datetime(self.start_time),
        }
    }

    pub fn artist_view(&self) -> ArtistShow {
        ArtistShow {
            venue_id: self.venue_id,
            venue_name: self.venue_name.clone(),
            venue_image_link: self.venue_image_link.clone(),
            start_time: millis_to_datetime(self.start_time),
        }
    }
}

/// Show filter by owning venue and/or artist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowFilter {
    pub venue_id: Option<i64>,
    pub artist_id: Option<i64>,
}

impl ShowFilter {
    pub fn venue(id: i64) -> Self {
        Self {
            venue_id: Some(id),
            artist_id: None,
        }
    }

    pub fn artist(id: i64) -> Self {
        Self {
            venue_id: None,
            artist_id: Some(id),
        }
    }
}

/// Create show payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowCreate {
    pub artist_id: Option<i64>,
    pub venue_id: Option<i64>,
    /// RFC 3339 timestamp
    pub start_time: Option<DateTime<Utc>>,
}

/// Validated show input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    /// Unix millis
    pub start_time: i64,
}

/// Show line in the shows index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowView {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}
